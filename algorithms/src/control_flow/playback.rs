//! Replay cursor over a recorded step log.
//!
//! Variables:
//!   index  : usize — frame currently shown, 0 <= index < len
//!   paused : bool
//!   len    : usize — number of recorded steps
//!
//! Transitions:
//!   tick           : !paused ⇒ index' = min(index + 1, len - 1)
//!   step_forward   :  paused ⇒ index' = min(index + 1, len - 1)
//!   step_back      :  paused ⇒ index' = index - 1, floored at 0
//!   restart        : index' = 0, paused' = true
//!   toggle_pause   : paused' = !paused
//!
//! With len == 0 every transition leaves index at 0 and `current` is None.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_structures::probe_recorder::{Phase, Recording, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    TogglePause,
    StepForward,
    StepBack,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    index: usize,
    paused: bool,
    len: usize,
}

impl Player {
    pub fn new(len: usize) -> Self {
        Self { index: 0, paused: false, len }
    }

    pub fn index(&self) -> usize  { self.index }
    pub fn len(&self) -> usize    { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn is_paused(&self) -> bool { self.paused }

    pub fn is_finished(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    pub fn current<'r, K>(&self, recording: &'r Recording<K>) -> Option<&'r Step<K>> {
        recording.steps.get(self.index)
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn tick(&mut self) {
        if !self.paused {
            self.index = (self.index + 1).min(self.last());
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn step_forward(&mut self) {
        if self.paused {
            self.index = (self.index + 1).min(self.last());
        }
    }

    pub fn step_back(&mut self) {
        if self.paused {
            self.index = self.index.saturating_sub(1);
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.paused = true;
    }

    pub fn apply(&mut self, control: Control) {
        match control {
            Control::TogglePause => self.toggle_pause(),
            Control::StepForward => self.step_forward(),
            Control::StepBack => self.step_back(),
            Control::Restart => self.restart(),
        }
    }
}

/// Status of the frame a `Player` points at.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSummary<'r, K> {
    pub frame: usize,
    pub total_frames: usize,
    pub step: &'r Step<K>,
    pub total_keys: usize,
    pub load_factor: f64,
    pub paused: bool,
    pub history: &'r [f64],
}

impl<'r, K> FrameSummary<'r, K> {
    pub fn new(recording: &'r Recording<K>, player: &Player) -> Option<Self> {
        let step = player.current(recording)?;
        Some(Self {
            frame: player.index() + 1,
            total_frames: recording.steps.len(),
            step,
            total_keys: recording.key_count(),
            load_factor: step.load_factor(),
            paused: player.is_paused(),
            history: recording.load_factor_history(step),
        })
    }

    pub fn phase(&self) -> Phase {
        self.step.phase
    }
}

impl<K: fmt::Display> fmt::Display for FrameSummary<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame {}/{} | Step {}/{} | key='{}' | hash%size={} | idx={} | probes={} | load_factor={:.2} | phase={} | {}",
            self.frame,
            self.total_frames,
            self.step.step_number,
            self.total_keys,
            self.step.key,
            self.step.start_index,
            self.step.current_index,
            self.step.probe_count,
            self.load_factor,
            self.step.phase,
            if self.paused { "PAUSED" } else { "PLAY" },
        )
    }
}
