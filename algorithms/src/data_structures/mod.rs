pub mod dedup;
pub mod hash_table;
pub mod probe_recorder;
