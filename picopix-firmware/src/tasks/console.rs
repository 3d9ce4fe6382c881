//! Console loop
//!
//! Repaints the terminal and handles one keystroke per cycle.

use defmt::*;
use embassy_time::{Duration, Ticker};

use picopix_console::{CommandOutcome, Console};
use picopix_core::config::ConsoleConfig;
use picopix_hal_rp2040::{UartSink, UartSource};

use crate::Shared;

/// Console task - runs on core 1
#[embassy_executor::task]
pub async fn console_task(
    shared: &'static Shared,
    mut sink: UartSink,
    mut source: UartSource,
    config: ConsoleConfig,
) {
    info!(
        "Console task started: every {} ms, {:?}",
        config.period_ms, config.sequence_policy
    );

    let mut console = Console::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.period_ms as u64));

    loop {
        let before = *console.nav();
        let outcome = console.cycle(&mut sink, &mut source, shared);

        if let Err(e) = outcome.render {
            warn!("Terminal write failed: {:?}", e);
        }

        if let Some(event) = outcome.event {
            debug!("UI event: {:?}", event);
            let nav = console.nav();
            if nav.selection() != before.selection() {
                debug!("Selected {:?}", nav.selected_item());
            }
            if nav.focus() != before.focus() {
                debug!("Focus moved to {:?}", nav.focus());
            }
        }

        match outcome.command {
            Some(CommandOutcome::Paused(true)) => info!("Effect paused"),
            Some(CommandOutcome::Paused(false)) => info!("Effect resumed"),
            Some(CommandOutcome::Running(true)) => {
                info!("LED output started on GP{}", shared.settings().led_pin())
            }
            Some(CommandOutcome::Running(false)) => info!("LED output stopped"),
            Some(CommandOutcome::StartFailed) => {
                warn!("LED output failed to start on GP{}", shared.settings().led_pin())
            }
            None => {}
        }

        trace!("Console cycle, logo step {}", console.renderer().logo_step());
        ticker.next().await;
    }
}
