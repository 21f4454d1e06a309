// SPDX-License-Identifier: MPL-2.0
//! Tick subscription driving the splash animations.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval of the animation tick.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the periodic animation tick while the overlay is animating.
///
/// The tick only drives cosmetics (pulse, wave, glow, fill easing); loader
/// state transitions arrive independently and are never gated on it.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
