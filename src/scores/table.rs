//! The capped, score-ordered high-score list.

use serde::{Deserialize, Serialize};

use super::entry::HighScoreEntry;

/// Entries kept after each insertion.
pub const MAX_ENTRIES: usize = 10;

/// At most `MAX_ENTRIES` entries, non-increasing by score.
///
/// Ties keep insertion order, so an older entry outranks a newer one with the
/// same score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, sorting and truncating.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        sort_and_cap(&mut entries);
        Self { entries }
    }

    /// Append, re-sort, truncate.
    ///
    /// Returns the 0-based rank of the new entry, or `None` if it did not make
    /// the cut.
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        self.entries.push(entry);
        let inserted = self.entries.len() - 1;

        // Stable sort: the new entry lands after existing equal scores
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].score.cmp(&self.entries[a].score));
        let rank = order.iter().position(|&i| i == inserted);

        sort_and_cap(&mut self.entries);
        rank.filter(|&r| r < MAX_ENTRIES)
    }

    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_and_cap(entries: &mut Vec<HighScoreEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn entry(score: u32, moves: u32) -> HighScoreEntry {
        HighScoreEntry::new(score, moves, 60, DateTime::<Utc>::default())
    }

    #[test]
    fn test_insert_orders_by_score() {
        let mut table = HighScoreTable::new();
        assert_eq!(table.insert(entry(300, 9)), Some(0));
        assert_eq!(table.insert(entry(800, 12)), Some(0));
        assert_eq!(table.insert(entry(500, 10)), Some(1));

        let scores: Vec<u32> = table.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![800, 500, 300]);
        assert_eq!(table.best().unwrap().score, 800);
    }

    #[test]
    fn test_capped_at_ten() {
        let mut table = HighScoreTable::new();
        for score in 1..=10 {
            table.insert(entry(score * 100, 8));
        }
        assert_eq!(table.len(), MAX_ENTRIES);

        // Too low to make the list
        assert_eq!(table.insert(entry(50, 8)), None);
        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(table.entries().last().unwrap().score, 100);

        // Pushes the lowest out
        assert_eq!(table.insert(entry(550, 8)), Some(5));
        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(table.entries().last().unwrap().score, 200);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut table = HighScoreTable::new();
        table.insert(entry(800, 10));
        assert_eq!(table.insert(entry(800, 20)), Some(1));

        assert_eq!(table.entries()[0].moves, 10);
        assert_eq!(table.entries()[1].moves, 20);
    }

    #[test]
    fn test_tie_at_cutoff_is_dropped() {
        let mut table = HighScoreTable::from_entries((0..10).map(|_| entry(800, 8)).collect());
        assert_eq!(table.insert(entry(800, 99)), None);
        assert!(table.entries().iter().all(|e| e.moves == 8));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let entries = (0..15).map(|i| entry(i * 10, 8)).collect();
        let table = HighScoreTable::from_entries(entries);

        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(table.best().unwrap().score, 140);
        assert!(table.entries().windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut table = HighScoreTable::new();
        table.insert(entry(100, 8));

        let json = serde_json::to_string(&table).unwrap();
        assert!(json.starts_with('['));
    }
}
