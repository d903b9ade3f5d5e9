//! # Algorithms Crate
//!
//! Small data-structure and string algorithms, with a linear-probing hash
//! table whose insertions are recorded step by step for later replay.
//!
//! ## Modules
//!
//! - `data_structures` – Fixed-capacity linear-probing table, probe recorder, deduplication
//! - `string_algorithms` – Anagram check, first recurring character
//! - `control_flow` – Replay cursor over a recorded step log
//! - `demo` – Seeded demo key sequences
//! - `config` – Replay session parameters
//! - `logger` – `env_logger` setup
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use algorithms::data_structures::probe_recorder::record;
//!
//! let rec = record(vec!["k0", "k1", "k2"], 8).unwrap();
//! assert_eq!(rec.load_factors, vec![0.125, 0.25, 0.375]);
//! ```

pub mod config;
pub mod control_flow;
pub mod data_structures;
pub mod demo;
pub mod error;
pub mod logger;
pub mod string_algorithms;

pub use error::{RecordError, Result};
