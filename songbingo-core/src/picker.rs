//! Countdown-then-reveal picker state machine.
//!
//! A run samples its target once, on entering the countdown; every later
//! tick only advances the display phase. Tick pacing is owned by the
//! caller, so a fast or slow driver cannot change which song is revealed.

use crate::song::Song;
use rand::Rng;

/// Countdown display starts at this value
pub const COUNTDOWN_START: u8 = 3;

/// Display phase of a picker run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    /// Run created but not started
    Idle,
    /// Counting down; the target is already fixed
    Counting(u8),
    /// The target song is being shown
    Revealed,
    /// Started with nothing left to pick; terminal, no result
    Empty,
}

impl PickerPhase {
    /// Whether the run can make no further transitions
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Revealed | Self::Empty)
    }
}

/// A single open-to-close picker cycle.
///
/// Reopening the picker always builds a fresh run; a run is never reused
/// or persisted.
#[derive(Debug, Clone)]
pub struct PickerRun {
    phase: PickerPhase,
    target: Option<Song>,
}

impl PickerRun {
    /// Create an idle run with no target
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: PickerPhase::Idle,
            target: None,
        }
    }

    /// Start the run: sample one song uniformly from `remaining` and enter
    /// the countdown. The sampled song is fixed for the rest of the run.
    ///
    /// An empty `remaining` set resolves to the terminal `Empty` phase;
    /// callers are expected to guard against this before opening the
    /// picker, but the machine must not misbehave if they don't.
    /// Starting a run that already left `Idle` is a no-op.
    pub fn start<R: Rng>(&mut self, remaining: &[&Song], rng: &mut R) {
        if self.phase != PickerPhase::Idle {
            return;
        }
        if remaining.is_empty() {
            self.phase = PickerPhase::Empty;
            return;
        }
        let index = rng.gen_range(0..remaining.len());
        self.target = Some(remaining[index].clone());
        self.phase = PickerPhase::Counting(COUNTDOWN_START);
    }

    /// Advance the countdown by one step. No-op in any other phase.
    pub fn tick(&mut self) {
        if let PickerPhase::Counting(n) = self.phase {
            self.phase = if n > 1 {
                PickerPhase::Counting(n - 1)
            } else {
                PickerPhase::Revealed
            };
        }
    }

    /// Current display phase
    #[must_use]
    pub const fn phase(&self) -> PickerPhase {
        self.phase
    }

    /// The sampled target, available as soon as the countdown starts
    #[must_use]
    pub const fn target(&self) -> Option<&Song> {
        self.target.as_ref()
    }

    /// The target song, but only once the run has reached `Revealed`
    #[must_use]
    pub const fn revealed_song(&self) -> Option<&Song> {
        match self.phase {
            PickerPhase::Revealed => self.target.as_ref(),
            _ => None,
        }
    }
}

impl Default for PickerRun {
    fn default() -> Self {
        Self::new()
    }
}
