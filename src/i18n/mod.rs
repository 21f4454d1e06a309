// SPDX-License-Identifier: MPL-2.0
//! Localization of the splash chrome strings (labels, banners, window title).

pub mod fluent;
