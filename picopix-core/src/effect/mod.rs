//! Effect engine
//!
//! Runs on its own fixed cadence, independent of the console. Each cycle it
//! refreshes the pixel buffer (unless paused) and then streams every slot to
//! the strip, paused or not.

use crate::config::{EffectConfig, EffectKind};
use crate::pixel::PackedGrb;
use crate::shared::SharedState;
use crate::traits::LightingPeripheral;

/// Xorshift32 pseudo-random generator
///
/// Cheap and deterministic for a given seed, which is all a decorative
/// fill needs.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator; a zero seed is replaced since xorshift would
    /// stay at zero forever
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

/// Summary of one engine cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Whether the buffer was refreshed
    pub filled: bool,
    /// Slots sent to the strip
    pub emitted: usize,
}

/// Fills the pixel buffer and streams it to the strip
#[derive(Debug, Clone)]
pub struct EffectEngine {
    config: EffectConfig,
    rng: Xorshift32,
}

impl EffectEngine {
    pub fn new(config: EffectConfig) -> Self {
        Self {
            rng: Xorshift32::new(config.seed),
            config,
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Random color with every channel limited to the brightness mask
    pub fn random_color(&mut self) -> PackedGrb {
        let bits = self.rng.next_u32();
        let mask = self.config.brightness_mask;
        PackedGrb::from_rgb(
            (bits as u8) & mask,
            ((bits >> 8) as u8) & mask,
            ((bits >> 16) as u8) & mask,
        )
    }

    /// Color for one slot under the active effect
    fn next_color(&mut self, _index: usize) -> PackedGrb {
        match self.config.effect {
            EffectKind::Random => self.random_color(),
        }
    }

    /// Run one cycle against the shared state
    pub fn run_cycle<P: LightingPeripheral>(&mut self, shared: &SharedState<P>) -> CycleReport {
        let filled = !shared.is_paused();
        if filled {
            for index in 0..shared.buffer_len() {
                let color = self.next_color(index);
                shared.write_pixel(index, color);
            }
        }

        let emitted = shared.buffer_len();
        for index in 0..emitted {
            shared.emit_pixel(index);
        }

        CycleReport { filled, emitted }
    }
}
