//! Linear-probing insertion recorded as a replayable step log.
//!
//! Variables:
//!   size    : usize  — table capacity C, fixed for the whole recording
//!   start   : usize  — h(k) = hash(k) mod C, fixed per insertion
//!   probes  : usize  — collisions seen so far for the current key
//!   current : usize  — slot under examination
//!
//! Equations:
//!   current          = (start + probes) mod C
//!   load_factor[n-1] = n / C   after the n-th insertion
//!
//! Per insertion the emitted phases follow
//!   start → (collision → probe)* → place → pause
//!
//! Every step carries an owned snapshot of the table, so a log can be
//! replayed in any order after the table itself is gone.
//!
//! Precondition: at most C keys. Probing a full table would never find an
//! empty slot; once `probes` reaches C the recorder stops with
//! `RecordError::CapacityExceeded` instead of spinning.

use std::fmt;
use std::hash::Hash;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::hash_table::{LinearProbeTable, SipSlotHasher, SlotHasher};
use crate::error::{RecordError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Collision,
    Probe,
    Place,
    Pause,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Collision => "collision",
            Phase::Probe => "probe",
            Phase::Place => "place",
            Phase::Pause => "pause",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded micro-event of an insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<K> {
    pub phase: Phase,
    /// 1-based ordinal of the key being inserted.
    pub step_number: usize,
    pub key: K,
    pub start_index: usize,
    pub current_index: usize,
    pub probe_count: usize,
    pub table_snapshot: Vec<Option<K>>,
    pub placed: bool,
}

impl<K> Step<K> {
    pub fn filled_slots(&self) -> usize {
        self.table_snapshot.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn load_factor(&self) -> f64 {
        self.filled_slots() as f64 / self.table_snapshot.len() as f64
    }

    /// Insertions finished at this point of the replay, counting this
    /// step's key once it is placed.
    pub fn completed_inserts(&self) -> usize {
        self.step_number.saturating_sub(1) + usize::from(self.placed)
    }
}

/// Output of one recording pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording<K> {
    pub size: usize,
    pub steps: Vec<Step<K>>,
    pub load_factors: Vec<f64>,
}

impl<K> Recording<K> {
    pub fn key_count(&self) -> usize {
        self.load_factors.len()
    }

    pub fn steps_for(&self, step_number: usize) -> impl Iterator<Item = &Step<K>> {
        self.steps.iter().filter(move |s| s.step_number == step_number)
    }

    pub fn final_table(&self) -> Option<&[Option<K>]> {
        self.steps.last().map(|s| s.table_snapshot.as_slice())
    }

    /// Load factors of every insertion completed at `step`.
    pub fn load_factor_history(&self, step: &Step<K>) -> &[f64] {
        let completed = step.completed_inserts().min(self.load_factors.len());
        &self.load_factors[..completed]
    }
}

/// Per-insertion probe state shared by every step it emits.
struct Cursor<'k, K> {
    step_number: usize,
    key: &'k K,
    start_index: usize,
    current_index: usize,
    probe_count: usize,
}

/// Accumulates steps; the only place a `Step` is built.
struct StepLog<K> {
    steps: Vec<Step<K>>,
}

impl<K: Clone> StepLog<K> {
    fn emit(&mut self, phase: Phase, cursor: &Cursor<'_, K>, table: &LinearProbeTable<K>, placed: bool) {
        self.steps.push(Step {
            phase,
            step_number: cursor.step_number,
            key: cursor.key.clone(),
            start_index: cursor.start_index,
            current_index: cursor.current_index,
            probe_count: cursor.probe_count,
            table_snapshot: table.snapshot(),
            placed,
        });
    }
}

#[derive(Debug, Clone)]
pub struct ProbeRecorder<H = SipSlotHasher> {
    size: usize,
    hasher: H,
}

impl ProbeRecorder<SipSlotHasher> {
    pub fn new(size: usize) -> Result<Self> {
        Self::with_hasher(size, SipSlotHasher)
    }
}

impl<H> ProbeRecorder<H> {
    pub fn with_hasher(size: usize, hasher: H) -> Result<Self> {
        if size == 0 {
            return Err(RecordError::InvalidSize { size });
        }
        Ok(Self { size, hasher })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn record<K, I>(&self, keys: I) -> Result<Recording<K>>
    where
        K: Clone,
        H: SlotHasher<K>,
        I: IntoIterator<Item = K>,
    {
        let mut table = LinearProbeTable::new(self.size)?;
        let mut log = StepLog { steps: Vec::new() };
        let mut load_factors = Vec::new();

        for (i, key) in keys.into_iter().enumerate() {
            let start_index = table.home_slot(self.hasher.hash_key(&key));
            let mut cursor = Cursor {
                step_number: i + 1,
                key: &key,
                start_index,
                current_index: start_index,
                probe_count: 0,
            };

            log.emit(Phase::Start, &cursor, &table, false);

            while table.is_occupied(cursor.current_index) {
                if cursor.probe_count >= self.size {
                    warn!(
                        "table of size {} exhausted while inserting key #{}",
                        self.size, cursor.step_number
                    );
                    return Err(RecordError::CapacityExceeded {
                        step_number: cursor.step_number,
                        size: self.size,
                    });
                }
                log.emit(Phase::Collision, &cursor, &table, false);
                cursor.probe_count += 1;
                cursor.current_index = table.probe(cursor.start_index, cursor.probe_count);
                log.emit(Phase::Probe, &cursor, &table, false);
            }

            let written = table.place(cursor.current_index, key.clone());
            debug_assert!(written, "probe loop stopped on an occupied slot");
            log.emit(Phase::Place, &cursor, &table, true);

            let lf = table.load_factor();
            load_factors.push(lf);
            debug!(
                "key #{} placed at slot {} after {} probes, load factor {:.2}",
                cursor.step_number, cursor.current_index, cursor.probe_count, lf
            );

            log.emit(Phase::Pause, &cursor, &table, true);
        }

        Ok(Recording { size: self.size, steps: log.steps, load_factors })
    }
}

/// Records `keys` into a fresh table of `size` slots with the default hasher.
pub fn record<K, I>(keys: I, size: usize) -> Result<Recording<K>>
where
    K: Hash + Clone,
    I: IntoIterator<Item = K>,
{
    ProbeRecorder::new(size)?.record(keys)
}

pub fn record_with<K, I, H>(keys: I, size: usize, hasher: H) -> Result<Recording<K>>
where
    K: Clone,
    H: SlotHasher<K>,
    I: IntoIterator<Item = K>,
{
    ProbeRecorder::with_hasher(size, hasher)?.record(keys)
}
