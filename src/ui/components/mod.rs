// SPDX-License-Identifier: MPL-2.0
//! Stateless indicator components shown over the content surface.

pub mod failure_banner;
pub mod offline_banner;
