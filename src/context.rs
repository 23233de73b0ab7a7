//! Application Context
//!
//! Shared state provided via Leptos Context API. Created once at
//! startup in `App` and handed to every component.

use leptos::prelude::*;

use crate::models::StatusKind;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch both lists from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch both lists from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Status line text and styling - read
    pub status: ReadSignal<(String, StatusKind)>,
    /// Status line text and styling - write
    set_status: WriteSignal<(String, StatusKind)>,
    /// Whether a command is being processed (progress indicator) - read
    pub busy: ReadSignal<bool>,
    /// Whether a command is being processed - write
    set_busy: WriteSignal<bool>,
    /// Whether a speech capture session is open (disables the start control) - read
    pub listening: ReadSignal<bool>,
    /// Whether a speech capture session is open - write
    set_listening: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        status: (ReadSignal<(String, StatusKind)>, WriteSignal<(String, StatusKind)>),
        busy: (ReadSignal<bool>, WriteSignal<bool>),
        listening: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            status: status.0,
            set_status: status.1,
            busy: busy.0,
            set_busy: busy.1,
            listening: listening.0,
            set_listening: listening.1,
        }
    }

    /// Trigger a refetch-and-render of both lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Replace the status line
    pub fn set_status(&self, message: impl Into<String>, kind: StatusKind) {
        self.set_status.set((message.into(), kind));
    }

    /// Show or hide the progress indicator
    pub fn set_busy(&self, busy: bool) {
        self.set_busy.set(busy);
    }

    /// Mark a speech capture session as open or closed
    pub fn set_listening(&self, listening: bool) {
        self.set_listening.set(listening);
    }
}
