//! Node-count history for the diagnostics chart
//!
//! One entry per AI turn: the nodes visited with pruning and without.

use crate::engine::PruningComparison;

/// Node counts of every AI turn, in play order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeHistory {
    pub with_pruning: Vec<u64>,
    pub without_pruning: Vec<u64>,
}

impl NodeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, comparison: &PruningComparison) {
        self.with_pruning.push(comparison.pruned.nodes);
        self.without_pruning.push(comparison.unpruned.nodes);
    }

    /// Number of recorded AI turns
    pub fn len(&self) -> usize {
        self.with_pruning.len()
    }

    pub fn is_empty(&self) -> bool {
        self.with_pruning.is_empty()
    }

    /// log10 of the pruned counts; zero counts map to -1
    pub fn log_with_pruning(&self) -> Vec<f64> {
        log_scale(&self.with_pruning)
    }

    /// log10 of the unpruned counts; zero counts map to -1
    pub fn log_without_pruning(&self) -> Vec<f64> {
        log_scale(&self.without_pruning)
    }

    /// Largest log10 value in either series, for chart scaling
    pub fn log_max(&self) -> f64 {
        self.log_with_pruning()
            .into_iter()
            .chain(self.log_without_pruning())
            .fold(0.0, f64::max)
    }
}

fn log_scale(counts: &[u64]) -> Vec<f64> {
    counts
        .iter()
        .map(|&count| if count > 0 { (count as f64).log10() } else { -1.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player, Variant};
    use crate::engine::AIEngine;

    #[test]
    fn test_log_scale() {
        let values = log_scale(&[0, 1, 10, 1000]);
        let expected = [-1.0, 0.0, 1.0, 3.0];
        assert_eq!(values.len(), expected.len());
        for (value, want) in values.iter().zip(expected) {
            assert!((value - want).abs() < 1e-9, "{} vs {}", value, want);
        }
    }

    #[test]
    fn test_record_comparison() {
        let engine = AIEngine::new(Variant::Classic);
        let board = Board::from_rows(&["X  ", "   ", "   "]).unwrap();
        let comparison = engine.compare_pruning(&board, Player::O);

        let mut history = NodeHistory::new();
        history.record(&comparison);
        assert_eq!(history.len(), 1);
        assert_eq!(history.with_pruning[0], comparison.pruned.nodes);
        assert_eq!(history.without_pruning[0], comparison.unpruned.nodes);
        assert!(history.with_pruning[0] <= history.without_pruning[0]);
        assert!(history.log_max() > 0.0);
    }
}
