// SPDX-License-Identifier: MPL-2.0
//! `iced_portal` is the splash chrome of an application hosting an embedded
//! web page, built with the Iced GUI framework.
//!
//! It renders an animated progress overlay, a failure banner, and an offline
//! banner over a dimmed content surface, driven by the page loader's reported
//! state, and demonstrates localization with Fluent and user preference
//! management.

#![doc(html_root_url = "https://docs.rs/iced_portal/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod ui;
