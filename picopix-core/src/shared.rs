//! Device state shared by the effect loop and the console
//!
//! The two loops run on different cores. Everything they share goes through
//! one [`SharedState`]: the device record behind one critical-section mutex,
//! the lighting peripheral behind another, and the pause flag as an atomic.
//!
//! Locks cover a single short operation (one slot, one emit, one settings
//! change). A reader walking the buffer can therefore see a mix of old and
//! new colors, and a resize can land between two reads; indices wrap so
//! that is harmless.

use core::cell::RefCell;

use critical_section::Mutex;
use portable_atomic::{AtomicBool, Ordering};

use crate::config::{Settings, SettingsError};
use crate::pixel::{PackedGrb, PixelBuffer};
use crate::traits::{LightingPeripheral, PeripheralError};

/// Settings plus the pixel buffer sized from them
#[derive(Debug, Clone)]
pub struct Device {
    pub settings: Settings,
    pub pixels: PixelBuffer,
}

impl Device {
    /// Build a device record with a buffer matching the settings
    pub fn new(settings: Settings) -> Self {
        let pixels = PixelBuffer::new(settings.buffer_len());
        Self { settings, pixels }
    }
}

/// Shared handle to the device
pub struct SharedState<P> {
    device: Mutex<RefCell<Device>>,
    peripheral: Mutex<RefCell<P>>,
    paused: AtomicBool,
}

impl<P: LightingPeripheral> SharedState<P> {
    pub fn new(settings: Settings, peripheral: P) -> Self {
        Self {
            device: Mutex::new(RefCell::new(Device::new(settings))),
            peripheral: Mutex::new(RefCell::new(peripheral)),
            paused: AtomicBool::new(false),
        }
    }

    /// Run a closure with exclusive access to the device record
    pub fn with_device<R>(&self, f: impl FnOnce(&mut Device) -> R) -> R {
        critical_section::with(|cs| f(&mut self.device.borrow_ref_mut(cs)))
    }

    /// Run a closure with exclusive access to the peripheral
    pub fn with_peripheral<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        critical_section::with(|cs| f(&mut self.peripheral.borrow_ref_mut(cs)))
    }

    /// Copy of the current settings
    pub fn settings(&self) -> Settings {
        self.with_device(|d| d.settings.clone())
    }

    pub fn is_running(&self) -> bool {
        self.with_device(|d| d.settings.is_running())
    }

    pub fn buffer_len(&self) -> usize {
        self.with_device(|d| d.pixels.len())
    }

    /// Read one pixel, wrapping the index
    pub fn read_pixel(&self, index: usize) -> PackedGrb {
        self.with_device(|d| d.pixels.get(index))
    }

    /// Write one pixel, wrapping the index
    pub fn write_pixel(&self, index: usize, color: PackedGrb) {
        self.with_device(|d| d.pixels.set(index, color))
    }

    /// Send one pixel to the strip
    pub fn emit_pixel(&self, index: usize) {
        critical_section::with(|cs| {
            let device = self.device.borrow_ref(cs);
            let handle = device.settings.handle;
            let color = device.pixels.get(index);
            self.peripheral.borrow_ref_mut(cs).emit(handle, color);
        })
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    /// Flip the pause flag, returning the new value
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::Relaxed)
    }

    /// Choose the LED data pin
    ///
    /// Takes effect the next time the output is started.
    pub fn select_pin(&self, pin: u8) -> Result<(), SettingsError> {
        self.with_device(|d| d.settings.select_pin(pin))
    }

    /// Change the LED count and reallocate the pixel buffer
    pub fn set_buffer_len(&self, len: usize) -> Result<(), SettingsError> {
        self.with_device(|d| {
            d.settings.set_buffer_len(len)?;
            d.pixels.resize(len);
            Ok(())
        })
    }

    /// Start the output if stopped, stop it if running
    ///
    /// Returns the new run state. A failed start leaves the output stopped
    /// and is reported as the error.
    pub fn toggle_run(&self) -> Result<bool, PeripheralError> {
        critical_section::with(|cs| {
            let mut device = self.device.borrow_ref_mut(cs);
            let mut peripheral = self.peripheral.borrow_ref_mut(cs);
            let settings = &mut device.settings;

            if settings.is_running() {
                peripheral.stop(settings.handle);
                settings.set_running(false);
                return Ok(false);
            }

            let handle = peripheral.configure(settings.led_pin());
            settings.handle = handle;
            peripheral.start(handle)?;
            settings.set_running(true);
            Ok(true)
        })
    }
}
