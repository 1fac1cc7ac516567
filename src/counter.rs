use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Per-run sequence numbers for photos sharing a capture second.
///
/// Owned by a single processor; anything that processes files in parallel
/// needs its own synchronization around this.
#[derive(Debug, Default)]
pub struct CollisionCounter {
    counts: HashMap<String, u32>,
}

impl CollisionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next suffix for `ts`, starting at 1 for a second not seen before.
    pub fn next_index(&mut self, ts: &NaiveDateTime) -> u32 {
        let key = ts.format("%Y%m%d%H%M%S").to_string();
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }
}
