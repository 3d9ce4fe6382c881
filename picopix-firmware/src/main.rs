//! Pico Pix - Addressable LED Strip Controller Firmware
//!
//! Core 0 runs the effect engine, which fills the pixel buffer and streams
//! it to the strip. Core 1 runs the serial console. The two share one
//! [`SharedState`] handle.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::{Executor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::{PIO0, UART1};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embedded_alloc::LlffHeap as Heap;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use picopix_core::config::{load_or_default, ConsoleConfig, EffectConfig, InertStore};
use picopix_core::shared::SharedState;
use picopix_hal::SerialConfig;
use picopix_hal_rp2040::{uart_config, PinBankPeripherals, UartSink, UartSource, Ws2812};

mod tasks;

/// Strip driver on PIO0, state machine 0
pub type Strip = Ws2812<'static, PIO0, 0>;

/// Device state shared by both cores
pub type Shared = SharedState<Strip>;

// Heap allocator for the pixel buffer
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 32KB
const HEAP_SIZE: usize = 32 * 1024;

/// Transmit ring; one full repaint is several KB of escape sequences
const TX_BUF_SIZE: usize = 1024;
const RX_BUF_SIZE: usize = 64;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

static TX_BUF: StaticCell<[u8; TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; RX_BUF_SIZE]> = StaticCell::new();
static SHARED: StaticCell<Shared> = StaticCell::new();
static CORE1_STACK: StaticCell<Stack<8192>> = StaticCell::new();
static CORE1_EXECUTOR: StaticCell<Executor> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pico Pix firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    let (bank, rest) = PinBankPeripherals::from_peripherals(p);
    info!("Peripherals initialized");

    // Nothing is persisted yet, so this always falls back to defaults
    let settings = load_or_default(&mut InertStore);
    info!(
        "Settings: {} LEDs on GP{}, format {}",
        settings.buffer_len(),
        settings.led_pin(),
        settings.format()
    );

    // Strip output stays idle until started from the console
    let Pio { common, sm0, .. } = Pio::new(rest.pio0, Irqs);
    let strip = Ws2812::new(common, sm0, bank, 0);
    let shared: &'static Shared = SHARED.init(SharedState::new(settings, strip));

    let tx_buf = TX_BUF.init([0u8; TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; RX_BUF_SIZE]);
    let serial = SerialConfig::default();
    let uart = Uart::new_blocking(rest.uart1, rest.uart_tx, rest.uart_rx, uart_config(&serial));
    let (tx, rx) = uart.into_buffered(Irqs, tx_buf, rx_buf).split();
    info!("Console UART on GP8/GP9 at {} baud", serial.baudrate);

    let console_config = ConsoleConfig::default();
    let stack = CORE1_STACK.init_with(Stack::new);
    spawn_core1(rest.core1, stack, move || {
        let executor = CORE1_EXECUTOR.init(Executor::new());
        executor.run(|spawner| {
            spawner
                .spawn(tasks::console_task(
                    shared,
                    UartSink::new(tx),
                    UartSource::new(rx),
                    console_config,
                ))
                .unwrap();
        })
    });

    spawner
        .spawn(tasks::effect_task(shared, EffectConfig::default()))
        .unwrap();

    info!("All tasks spawned");
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    // SAFETY: runs once, before the first allocation
    unsafe { HEAP.init(core::ptr::addr_of_mut!(HEAP_MEM) as usize, HEAP_SIZE) }
}
