// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::loader::LoadState;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The page loader reported a new state.
    LoaderAdvanced(LoadState),
    /// Periodic tick driving the splash animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional demo scenario: `success`, `failure`, or `offline`.
    pub scenario: Option<String>,
    /// Optional start URL shown on the content placeholder.
    pub start_url: Option<String>,
}
