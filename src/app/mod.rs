// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the latest observed loader state and the splash
//! animation state, schedules the scripted loader feed, and routes rendering
//! through the state router. Policy decisions (window shape, scenario
//! selection, configuration fallbacks) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::loader::script::{Scenario, Script};
use crate::loader::LoadState;
use crate::ui::{entry, splash};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;

/// Root Iced application state bridging the loader feed, localization, and
/// the splash chrome.
pub struct App {
    i18n: I18n,
    state: LoadState,
    splash: splash::State,
    script: Script,
    start_url: String,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("start_url", &self.start_url)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            state: LoadState::default(),
            splash: splash::State::new(config::DEFAULT_PARTICLE_COUNT),
            script: Script::default(),
            start_url: config::DEFAULT_START_URL.to_string(),
            last_tick: None,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the scripted loader feed.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let scenario: Scenario = flags
            .scenario
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        let start_url = flags
            .start_url
            .or(config.start_url)
            .unwrap_or_else(|| config::DEFAULT_START_URL.to_string());

        let particle_count = config
            .particle_count
            .unwrap_or(config::DEFAULT_PARTICLE_COUNT);

        let mut app = App {
            i18n,
            splash: splash::State::new(particle_count),
            script: Script::for_scenario(scenario),
            start_url,
            ..Self::default()
        };

        let task = app.schedule_next_step();
        (app, task)
    }

    /// Schedules the next scripted loader transition, if any remain.
    fn schedule_next_step(&mut self) -> Task<Message> {
        match self.script.next_step() {
            Some(step) => Task::perform(
                async move {
                    tokio::time::sleep(step.delay).await;
                    step.state
                },
                Message::LoaderAdvanced,
            ),
            None => Task::none(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.state.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LoaderAdvanced(state) => {
                if let Some(fraction) = state.clamped_fraction() {
                    self.splash.set_progress(fraction);
                }
                self.state = state;
                self.schedule_next_step()
            }
            Message::Tick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| (now - last).as_secs_f32())
                    .unwrap_or(0.0);
                self.last_tick = Some(now);
                self.splash.advance(dt);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        entry::view(&self.state, &self.splash, &self.i18n, &self.start_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_app_starts_idle() {
        let app = App::default();
        assert_eq!(app.state, LoadState::Idle);
        assert!(app.script.clone().next_step().is_none());
    }

    #[test]
    fn loader_event_updates_state_and_bar_target() {
        let mut app = App::default();

        let _ = app.update(Message::LoaderAdvanced(LoadState::Progressing(0.42)));

        assert_eq!(app.state, LoadState::Progressing(0.42));
        assert!((app.splash.bar.target() - 0.42).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_progress_is_clamped_before_display() {
        let mut app = App::default();

        let _ = app.update(Message::LoaderAdvanced(LoadState::Progressing(3.0)));

        assert_eq!(app.splash.bar.target(), 1.0);
    }

    #[test]
    fn failure_state_keeps_the_message() {
        let mut app = App::default();

        let _ = app.update(Message::LoaderAdvanced(LoadState::Failed(
            "timeout".to_string(),
        )));

        assert_eq!(app.state, LoadState::Failed("timeout".to_string()));
        assert!(!app.state.is_animating());
    }

    #[test]
    fn ticks_advance_the_splash_clocks() {
        let mut app = App::default();
        let _ = app.update(Message::LoaderAdvanced(LoadState::Progressing(1.0)));
        assert!(!app.splash.bar.is_settled());

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        for i in 1..=40 {
            let _ = app.update(Message::Tick(start + Duration::from_millis(16 * i)));
        }

        assert!(app.splash.bar.is_settled());
        assert_eq!(app.splash.bar.fill_fraction(), 1.0);
    }

    #[test]
    fn first_tick_does_not_jump() {
        let mut app = App::default();
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.splash.bar.fill_fraction(), 0.0);
    }

    #[test]
    fn title_comes_from_localization() {
        let app = App::default();
        assert_eq!(app.title(), "IcedPortal");
    }

    #[test]
    fn only_progressing_keeps_the_tick_alive() {
        let mut app = App::default();
        assert!(!app.state.is_animating());

        let _ = app.update(Message::LoaderAdvanced(LoadState::Progressing(0.1)));
        assert!(app.state.is_animating());

        let _ = app.update(Message::LoaderAdvanced(LoadState::Finished));
        assert!(!app.state.is_animating());
    }
}
