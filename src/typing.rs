//! Typewriter rotation for the hero tagline.
//!
//! The engine is a pure transition function over [`TypingState`]. Scheduling is left
//! to the caller: render `text()`, wait `delay_ms()`, then replace the state with
//! `step(rotation)`. Exactly one step is pending at a time because the next delay is
//! only known once the current step has run.

pub const BASE_INTERVAL_MS: f64 = 150.0;
pub const HOLD_PERIOD_MS: f64 = 2_000.0;
pub const DELETE_ACCELERATION: f64 = 1.1;
pub const MIN_DELETE_INTERVAL_MS: f64 = 30.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Appending one character per tick.
    Typing,
    /// The full target is shown; the next tick starts deleting.
    Holding,
    /// Removing one character per tick, faster each time.
    Deleting,
    /// The text emptied and the loop index moved on; the next tick types the new target.
    Advancing,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TypingState {
    text: String,
    phase: Phase,
    loop_index: u64,
    delay_ms: f64,
}

impl Default for TypingState {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            phase: Phase::Typing,
            loop_index: 0,
            delay_ms: BASE_INTERVAL_MS,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn loop_index(&self) -> u64 {
        self.loop_index
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Holding | Phase::Deleting)
    }

    /// Delay before the next `step`, in milliseconds.
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Index into the rotation of the string currently being typed or deleted.
    ///
    /// `rotation_len` must be non-zero.
    pub fn target_index(&self, rotation_len: usize) -> usize {
        (self.loop_index % rotation_len as u64) as usize
    }

    /// Runs one tick. An empty `rotation` leaves the state untouched.
    pub fn step<S: AsRef<str>>(&self, rotation: &[S]) -> Self {
        if rotation.is_empty() {
            return self.clone();
        }

        let target = rotation[self.target_index(rotation.len())].as_ref();
        let shown = self.text.chars().count();

        if target.is_empty() {
            return self.advanced();
        }

        if self.is_deleting() {
            let next = prefix(target, shown.saturating_sub(1));
            if next.is_empty() {
                return self.advanced();
            }

            Self {
                text: next,
                phase: Phase::Deleting,
                loop_index: self.loop_index,
                delay_ms: (self.delay_ms / DELETE_ACCELERATION).max(MIN_DELETE_INTERVAL_MS),
            }
        } else {
            let next = prefix(target, shown + 1);
            let complete = next.len() == target.len();

            Self {
                text: next,
                phase: if complete { Phase::Holding } else { Phase::Typing },
                loop_index: self.loop_index,
                delay_ms: if complete { HOLD_PERIOD_MS } else { BASE_INTERVAL_MS },
            }
        }
    }

    fn advanced(&self) -> Self {
        Self {
            text: String::new(),
            phase: Phase::Advancing,
            loop_index: self.loop_index.wrapping_add(1),
            delay_ms: BASE_INTERVAL_MS,
        }
    }
}

fn prefix(target: &str, chars: usize) -> String {
    target.chars().take(chars).collect()
}
