//! Search flow — drives validate → lookup → render against a surface.
//!
//! DESIGN
//! ======
//! The presentation surface is injected, never looked up globally. The flow
//! owns a generation counter: each search bumps it, and a reply only renders
//! if no newer search has started since. Stale replies are dropped and
//! logged at debug. States: Idle → Searching → (Results | Empty | Error),
//! back to Idle when the view is closed.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use crate::client::TicketLookup;
use crate::render::{RenderedView, render_empty_state, render_results};
use crate::validate::validate_cedula;

/// Presentation surface the flow writes into. The host owns the actual
/// widgets; the flow only knows these four operations.
pub trait StatusSurface: Send + Sync {
    /// Replace the surface content with `view` and make it visible.
    fn show(&self, view: &RenderedView);

    /// Hide the surface.
    fn hide(&self);

    /// Present a user-facing warning without opening the surface.
    fn warn(&self, message: &str);
}

/// Observable state of the search flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Searching,
    ShowingResults,
    ShowingEmpty,
    Error,
}

impl FlowState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Searching,
            2 => Self::ShowingResults,
            3 => Self::ShowingEmpty,
            4 => Self::Error,
            _ => Self::Idle,
        }
    }
}

pub struct SearchFlow<L, S> {
    lookup: L,
    surface: S,
    generation: AtomicU64,
    state: AtomicU8,
}

impl<L: TicketLookup, S: StatusSurface> SearchFlow<L, S> {
    pub fn new(lookup: L, surface: S) -> Self {
        Self { lookup, surface, generation: AtomicU64::new(0), state: AtomicU8::new(FlowState::Idle as u8) }
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        FlowState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Run one search for `raw_input`. Validation failure warns and returns
    /// without any lookup call; lookup failure warns and leaves the surface
    /// hidden. Only the newest search's reply is rendered.
    pub async fn search(&self, raw_input: &str, cookie: Option<&str>) {
        let cedula = match validate_cedula(raw_input) {
            Ok(cedula) => cedula,
            Err(e) => {
                self.surface.warn(e.user_message());
                return;
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_state(FlowState::Searching);

        match self.lookup.lookup(&cedula, cookie).await {
            Ok(reply) => {
                if self.generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "stale lookup reply dropped");
                    return;
                }
                if reply.has_results() {
                    self.surface.show(&render_results(&reply.tickets, &cedula));
                    self.set_state(FlowState::ShowingResults);
                } else {
                    self.surface.show(&render_empty_state(&cedula));
                    self.set_state(FlowState::ShowingEmpty);
                }
            }
            Err(e) => {
                tracing::error!(code = e.code(), error = %e, "ticket lookup failed");
                if self.generation.load(Ordering::SeqCst) != generation {
                    return;
                }
                self.surface.warn(e.user_message());
                self.set_state(FlowState::Error);
            }
        }
    }

    /// Close the view and return to idle.
    pub fn close(&self) {
        self.surface.hide();
        self.set_state(FlowState::Idle);
    }

    fn set_state(&self, state: FlowState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "flow_test.rs"]
mod tests;
