//! Console loop body
//!
//! One cycle: repaint, then decode at most one event from the serial input
//! and apply it. Pacing belongs to the caller.

use picopix_core::config::ConsoleConfig;
use picopix_core::shared::SharedState;
use picopix_core::state::{Command, NavState, UiEvent};
use picopix_core::traits::LightingPeripheral;
use picopix_hal::{ByteSink, ByteSource};
use picopix_protocol::InputDecoder;

use crate::backend::{Terminal, TerminalError};
use crate::renderer::Renderer;

/// Result of a device command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandOutcome {
    /// Pause flag after the toggle
    Paused(bool),
    /// Run state after the toggle
    Running(bool),
    /// The peripheral refused to start; output stays off
    StartFailed,
}

/// What happened during one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    /// Repaint result; regions that failed are retried next cycle
    pub render: Result<(), TerminalError>,
    /// Decoded event, if any
    pub event: Option<UiEvent>,
    /// Device command carried out for the event
    pub command: Option<CommandOutcome>,
}

/// Interactive console state
pub struct Console {
    decoder: InputDecoder,
    nav: NavState,
    renderer: Renderer,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            decoder: InputDecoder::new(config.sequence_policy),
            nav: NavState::new(),
            renderer: Renderer::new(config.brightness_level),
        }
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Run one cycle against the terminal and the shared device state
    pub fn cycle<P: LightingPeripheral>(
        &mut self,
        sink: &mut dyn ByteSink,
        source: &mut dyn ByteSource,
        shared: &SharedState<P>,
    ) -> CycleOutcome {
        let settings = shared.settings();
        let render = {
            let mut term = Terminal::new(sink);
            self.renderer.render(&mut term, &self.nav, &settings, shared)
        };

        let event = self.decoder.poll(source).event;
        let command = event
            .and_then(|event| self.nav.handle(event, self.renderer.dirty_mut()))
            .map(|command| apply(command, shared));

        CycleOutcome {
            render,
            event,
            command,
        }
    }
}

fn apply<P: LightingPeripheral>(command: Command, shared: &SharedState<P>) -> CommandOutcome {
    match command {
        Command::TogglePause => CommandOutcome::Paused(shared.toggle_pause()),
        Command::ToggleRun => match shared.toggle_run() {
            Ok(running) => CommandOutcome::Running(running),
            Err(_) => CommandOutcome::StartFailed,
        },
    }
}
