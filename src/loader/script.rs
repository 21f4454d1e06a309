// SPDX-License-Identifier: MPL-2.0
//! Scripted stand-in for the external page loader.
//!
//! Emits a timed sequence of [`LoadState`] transitions so the splash chrome
//! can be exercised without a real web view behind it. The UI consumes the
//! states exactly as it would from a live loader.

use super::LoadState;
use std::str::FromStr;
use std::time::Duration;

/// Number of progress transitions emitted during a simulated load.
const RAMP_STEPS: u32 = 24;

/// Delay between scripted transitions.
const STEP_DELAY: Duration = Duration::from_millis(250);

/// Fraction at which the failure scenario aborts the load.
const FAILURE_AT: f64 = 0.6;

/// Message reported by the failure scenario, as a loader would supply it.
const FAILURE_MESSAGE: &str = "timeout";

/// Demo scenario selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Progress ramps to 100% and the page finishes.
    #[default]
    Success,
    /// Progress ramps partway, then the load fails.
    Failure,
    /// The loader immediately reports no connection.
    Offline,
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Scenario::Success),
            "failure" => Ok(Scenario::Failure),
            "offline" => Ok(Scenario::Offline),
            other => Err(format!("unknown scenario: {other}")),
        }
    }
}

/// One scripted transition: wait `delay`, then report `state`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub delay: Duration,
    pub state: LoadState,
}

/// A queued sequence of loader transitions.
#[derive(Debug, Clone, Default)]
pub struct Script {
    steps: Vec<Step>,
    cursor: usize,
}

impl Script {
    /// Builds the transition sequence for a scenario.
    #[must_use]
    pub fn for_scenario(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Success => Self::success(),
            Scenario::Failure => Self::failure(FAILURE_MESSAGE),
            Scenario::Offline => Self::offline(),
        }
    }

    /// Full progress ramp ending in [`LoadState::Finished`].
    #[must_use]
    pub fn success() -> Self {
        let mut steps = ramp(1.0);
        steps.push(Step {
            delay: STEP_DELAY,
            state: LoadState::Finished,
        });
        Self { steps, cursor: 0 }
    }

    /// Partial ramp ending in [`LoadState::Failed`] with `message`.
    #[must_use]
    pub fn failure(message: &str) -> Self {
        let mut steps = ramp(FAILURE_AT);
        steps.push(Step {
            delay: STEP_DELAY,
            state: LoadState::Failed(message.to_string()),
        });
        Self { steps, cursor: 0 }
    }

    /// A single immediate [`LoadState::NoConnection`] report.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            steps: vec![Step {
                delay: Duration::ZERO,
                state: LoadState::NoConnection,
            }],
            cursor: 0,
        }
    }

    /// Next transition to schedule, or `None` when the script is exhausted.
    pub fn next_step(&mut self) -> Option<Step> {
        let step = self.steps.get(self.cursor).cloned();
        if step.is_some() {
            self.cursor += 1;
        }
        step
    }
}

/// Progress transitions from 0 up to `until`, inclusive.
fn ramp(until: f64) -> Vec<Step> {
    (0..=RAMP_STEPS)
        .map(|i| {
            let fraction = f64::from(i) / f64::from(RAMP_STEPS) * until;
            Step {
                delay: STEP_DELAY,
                state: LoadState::Progressing(fraction),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut script: Script) -> Vec<LoadState> {
        let mut states = Vec::new();
        while let Some(step) = script.next_step() {
            states.push(step.state);
        }
        states
    }

    #[test]
    fn success_script_ends_finished() {
        let states = drain(Script::success());
        assert_eq!(states.last(), Some(&LoadState::Finished));
        assert_eq!(states[states.len() - 2], LoadState::Progressing(1.0));
    }

    #[test]
    fn success_progress_is_monotone() {
        let states = drain(Script::success());
        let fractions: Vec<f64> = states
            .iter()
            .filter_map(|s| s.clamped_fraction())
            .collect();
        assert!(!fractions.is_empty());
        assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn failure_script_ends_with_message() {
        let states = drain(Script::failure("connection reset"));
        assert_eq!(
            states.last(),
            Some(&LoadState::Failed("connection reset".to_string()))
        );
        // The ramp never reaches completion before the failure.
        let max = states
            .iter()
            .filter_map(|s| s.clamped_fraction())
            .fold(0.0_f64, f64::max);
        assert!(max < 1.0);
    }

    #[test]
    fn offline_script_reports_immediately() {
        let mut script = Script::offline();
        let step = script.next_step().expect("one step");
        assert_eq!(step.delay, Duration::ZERO);
        assert_eq!(step.state, LoadState::NoConnection);
        assert!(script.next_step().is_none());
    }

    #[test]
    fn scenario_parses_from_cli_spelling() {
        assert_eq!("success".parse(), Ok(Scenario::Success));
        assert_eq!("failure".parse(), Ok(Scenario::Failure));
        assert_eq!("offline".parse(), Ok(Scenario::Offline));
        assert!("retry".parse::<Scenario>().is_err());
    }

    #[test]
    fn exhausted_script_stays_exhausted() {
        let mut script = Script::offline();
        let _ = script.next_step();
        assert!(script.next_step().is_none());
        assert!(script.next_step().is_none());
    }
}
