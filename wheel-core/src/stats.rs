use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Segment;

/// In-memory spin tally, keyed by segment id. Serializable so the host can
/// persist it alongside the wheel; the engine only ever records and reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinStats {
    pub total_spins: u64,
    pub segment_counts: HashMap<String, u64>,
}

impl SpinStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: &Segment) {
        self.total_spins += 1;
        *self.segment_counts.entry(winner.id.clone()).or_insert(0) += 1;
    }

    pub fn count_for(&self, id: &str) -> u64 {
        self.segment_counts.get(id).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate_per_segment() {
        let a = Segment::new("a", "A", "#fff");
        let b = Segment::new("b", "B", "#fff");
        let mut stats = SpinStats::new();
        stats.record(&a);
        stats.record(&a);
        stats.record(&b);
        assert_eq!(stats.total_spins, 3);
        assert_eq!(stats.count_for("a"), 2);
        assert_eq!(stats.count_for("b"), 1);
        assert_eq!(stats.count_for("missing"), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let a = Segment::new("a", "A", "#fff");
        let mut stats = SpinStats::new();
        stats.record(&a);
        stats.reset();
        assert_eq!(stats.total_spins, 0);
        assert_eq!(stats.count_for("a"), 0);
    }
}
