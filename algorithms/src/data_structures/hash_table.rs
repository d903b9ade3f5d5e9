//! Fixed-capacity open-addressing slot table with linear probing.
//!
//! Variables:
//!   slots  : Vec<Option<K>>  — slot array, length C (capacity)
//!   filled : usize           — number of occupied slots
//!   C      : usize           — capacity, fixed at construction, C > 0
//!
//! Equations:
//!   h(k)         = hash(k) mod C                      (home slot)
//!   probe(h, i)  = (h + i) mod C                      (linear probe step i)
//!   load_factor  = filled / C
//!
//!   No resizing: once filled == C every probe sequence visits only
//!   occupied slots, so callers bound the probe count by C.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{RecordError, Result};

/// Maps a key to the 64-bit hash its home slot is derived from.
pub trait SlotHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

/// SipHash with the fixed keys of `DefaultHasher::new()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SipSlotHasher;

impl<K: Hash + ?Sized> SlotHasher<K> for SipSlotHasher {
    fn hash_key(&self, key: &K) -> u64 {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        h.finish()
    }
}

impl<K: ?Sized, F> SlotHasher<K> for F
where
    F: Fn(&K) -> u64,
{
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearProbeTable<K> {
    slots: Vec<Option<K>>,
    filled: usize,
}

impl<K: Clone> LinearProbeTable<K> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RecordError::InvalidSize { size: capacity });
        }
        Ok(Self { slots: vec![None; capacity], filled: 0 })
    }

    pub fn capacity(&self) -> usize { self.slots.len() }
    pub fn filled(&self) -> usize   { self.filled }
    pub fn is_full(&self) -> bool   { self.filled == self.slots.len() }

    pub fn load_factor(&self) -> f64 {
        self.filled as f64 / self.slots.len() as f64
    }

    pub fn home_slot(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    pub fn probe(&self, home: usize, step: usize) -> usize {
        (home + step) % self.slots.len()
    }

    /// Out-of-range indices read as empty.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Writes `key` into an empty slot. Returns false and leaves the table
    /// untouched when the slot is occupied or out of range.
    pub fn place(&mut self, index: usize, key: K) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(key);
                self.filled += 1;
                true
            }
            _ => false,
        }
    }

    /// Owned copy of every slot; later writes never reach it.
    pub fn snapshot(&self) -> Vec<Option<K>> {
        self.slots.clone()
    }

    pub fn slots(&self) -> &[Option<K>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = LinearProbeTable::<String>::new(0).unwrap_err();
        assert!(matches!(err, RecordError::InvalidSize { size: 0 }));
    }

    #[test]
    fn probe_wraps_around_the_end() {
        let table = LinearProbeTable::<u32>::new(4).unwrap();
        assert_eq!(table.probe(3, 1), 0);
        assert_eq!(table.probe(2, 5), 3);
        assert_eq!(table.home_slot(10), 2);
    }

    #[test]
    fn place_refuses_occupied_slot() {
        let mut table = LinearProbeTable::new(3).unwrap();
        assert!(table.place(1, "a"));
        assert!(!table.place(1, "b"));
        assert_eq!(table.get(1), Some(&"a"));
        assert_eq!(table.filled(), 1);
        assert!((table.load_factor() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        let mut table = LinearProbeTable::new(2).unwrap();
        assert!(!table.is_occupied(2));
        assert!(!table.place(5, 'z'));
        assert_eq!(table.filled(), 0);
        assert_eq!(table.snapshot(), vec![None, None]);
    }

    #[test]
    fn snapshot_is_detached_from_table() {
        let mut table = LinearProbeTable::new(2).unwrap();
        table.place(0, 7u8);
        let snap = table.snapshot();
        table.place(1, 9u8);
        assert_eq!(snap, vec![Some(7), None]);
        assert!(table.is_full());
    }

    #[test]
    fn closures_act_as_hashers() {
        let fixed = |_: &str| 42u64;
        assert_eq!(fixed.hash_key("anything"), 42);
        assert_eq!(SipSlotHasher.hash_key("k1"), SipSlotHasher.hash_key("k1"));
    }
}
