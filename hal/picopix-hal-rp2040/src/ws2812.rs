//! PIO-driven WS2812 output
//!
//! One state machine shifts 24-bit GRB words out MSB first at 800 kbit/s.
//! Each bit takes ten PIO cycles, with the side-set pin high for the first
//! two (a zero) or seven (a one).
//!
//! The program is loaded once. The data pin is bound when the output is
//! configured; a pin stays in PIO mode once claimed, so switching back to a
//! previously used GPIO reuses its binding.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, LoadedProgram, ShiftConfig,
    ShiftDirection, StateMachine,
};
use fixed::types::U24F8;
use picopix_core::pixel::PackedGrb;
use picopix_core::traits::{LightingPeripheral, PeripheralError, PeripheralHandle};
use picopix_hal::GPIO_COUNT;

use crate::pins::{PinBankPeripherals, PinError};

/// Line rate in kHz
pub const BIT_RATE_KHZ: u32 = 800;

/// PIO cycles per bit
pub const CYCLES_PER_BIT: u32 = 10;

/// State machine clock divider for the WS2812 bit rate
pub fn clock_divider(sys_hz: u32) -> U24F8 {
    U24F8::from_num(sys_hz / 1000) / U24F8::from_num(BIT_RATE_KHZ * CYCLES_PER_BIT)
}

/// Left-align a color word for the 24-bit autopull
pub const fn fifo_word(color: PackedGrb) -> u32 {
    color.bits() << 8
}

/// WS2812 strip on one PIO state machine
pub struct Ws2812<'d, PIO: Instance, const SM: usize> {
    common: Common<'d, PIO>,
    sm: StateMachine<'d, PIO, SM>,
    program: LoadedProgram<'d, PIO>,
    bank: PinBankPeripherals,
    /// Pins already handed to this PIO block, by GPIO number
    claimed: [Option<embassy_rp::pio::Pin<'d, PIO>>; GPIO_COUNT as usize],
    /// GPIO the state machine is configured for
    bound: Option<u8>,
    pio_index: u8,
    running: bool,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812<'d, PIO, SM> {
    /// Load the program into `common`; nothing is driven until `start`
    ///
    /// `pio_index` is reported in the peripheral handle.
    pub fn new(
        mut common: Common<'d, PIO>,
        sm: StateMachine<'d, PIO, SM>,
        bank: PinBankPeripherals,
        pio_index: u8,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // low tail of the previous bit
            "    jmp !x do_zero side 1 [1]", // every bit starts high
            "    jmp bitloop    side 1 [4]", // a one stays high longer
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap"
        );
        let program = common.load_program(&prg.program);

        Self {
            common,
            sm,
            program,
            bank,
            claimed: core::array::from_fn(|_| None),
            bound: None,
            pio_index,
            running: false,
        }
    }

    /// GPIO currently bound to the state machine
    pub fn bound_pin(&self) -> Option<u8> {
        self.bound
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Point the state machine at `gpio`, claiming the pin if needed
    fn bind(&mut self, gpio: u8) -> Result<(), PinError> {
        let slot = self
            .claimed
            .get_mut(gpio as usize)
            .ok_or(PinError::InvalidPin)?;
        if slot.is_none() {
            *slot = Some(self.bank.take_pio_pin(&mut self.common, gpio)?);
        }
        let Some(pin) = slot.as_ref() else {
            return Err(PinError::AlreadyTaken);
        };

        let mut cfg = Config::default();
        cfg.use_program(&self.program, &[pin]);
        cfg.clock_divider = clock_divider(clk_sys_freq());
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        self.sm.set_config(&cfg);
        self.sm.set_pin_dirs(PioDirection::Out, &[pin]);
        self.bound = Some(gpio);
        Ok(())
    }

    fn handle(&self) -> PeripheralHandle {
        PeripheralHandle {
            pio: self.pio_index,
            state_machine: SM as u8,
        }
    }
}

impl<'d, PIO: Instance, const SM: usize> LightingPeripheral for Ws2812<'d, PIO, SM> {
    fn configure(&mut self, pin: u8) -> PeripheralHandle {
        if self.running {
            self.sm.set_enable(false);
            self.running = false;
        }
        if self.bind(pin).is_err() {
            self.bound = None;
        }
        self.handle()
    }

    fn start(&mut self, _handle: PeripheralHandle) -> Result<(), PeripheralError> {
        if self.bound.is_none() {
            return Err(PeripheralError::StartFailed);
        }
        self.sm.set_enable(true);
        self.running = true;
        Ok(())
    }

    fn stop(&mut self, _handle: PeripheralHandle) {
        self.sm.set_enable(false);
        self.running = false;
    }

    fn emit(&mut self, _handle: PeripheralHandle, color: PackedGrb) {
        if !self.running {
            return;
        }
        // FIFO drains at line rate; a full strip frame is a few ms at most
        while !self.sm.tx().try_push(fifo_word(color)) {}
    }
}
