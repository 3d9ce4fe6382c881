//! Effect loop
//!
//! Refreshes the pixel buffer and streams it to the strip at a fixed rate.

use defmt::*;
use embassy_time::{Duration, Ticker};

use picopix_core::config::EffectConfig;
use picopix_core::effect::EffectEngine;

use crate::Shared;

/// Effect task - runs on core 0
#[embassy_executor::task]
pub async fn effect_task(shared: &'static Shared, config: EffectConfig) {
    info!(
        "Effect task started: {:?}, mask {=u8:#x}, every {} ms",
        config.effect, config.brightness_mask, config.period_ms
    );

    let mut engine = EffectEngine::new(config);
    let mut ticker = Ticker::every(Duration::from_millis(config.period_ms as u64));

    loop {
        let report = engine.run_cycle(shared);
        trace!(
            "Effect cycle: filled={} emitted={}",
            report.filled,
            report.emitted
        );
        ticker.next().await;
    }
}
