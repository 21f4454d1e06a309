// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Layers
//!
//! - [`entry`] - State router selecting the overlay for the loader state
//! - [`splash`] - Full-bleed loading overlay (logo pulse, label, bar)
//! - [`progress_bar`] - Layered animated progress bar and its geometry
//! - [`content`] - Placeholder surface for the embedded web page
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Stateless indicators (failure and offline banners)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized container styling (scrim, panel, backdrop)

pub mod components;
pub mod content;
pub mod design_tokens;
pub mod entry;
pub mod progress_bar;
pub mod splash;
pub mod styles;
