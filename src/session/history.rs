use chrono::{DateTime, Local};

/// One answered query. Fields are read-only once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    timestamp: DateTime<Local>,
    num1: f64,
    num2: f64,
    predicted_sum: f64,
    confidence: f64,
}

impl HistoryEntry {
    pub fn new(
        timestamp: DateTime<Local>,
        num1: f64,
        num2: f64,
        predicted_sum: f64,
        confidence: f64,
    ) -> HistoryEntry {
        HistoryEntry { timestamp, num1, num2, predicted_sum, confidence }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn num1(&self) -> f64 {
        self.num1
    }

    pub fn num2(&self) -> f64 {
        self.num2
    }

    pub fn predicted_sum(&self) -> f64 {
        self.predicted_sum
    }

    /// Percentage in [0, 100].
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Append-only log of answered queries, oldest first.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Appends `entry` and returns a reference to it.
    pub fn record(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn record_preserves_insertion_order() {
        let start = Local::now();
        let mut history = History::new();
        assert!(history.is_empty());

        for i in 0..3 {
            let at = start + Duration::seconds(i);
            history.record(HistoryEntry::new(at, i as f64, 1.0, i as f64 + 1.0, 100.0));
        }

        assert_eq!(history.len(), 3);
        let firsts: Vec<f64> = history.iter().map(HistoryEntry::num1).collect();
        assert_eq!(firsts, vec![0.0, 1.0, 2.0]);
        assert_eq!(history.last().map(HistoryEntry::num1), Some(2.0));
    }

    #[test]
    fn clock_stepping_back_keeps_insertion_order() {
        let later = Local::now();
        let earlier = later - Duration::seconds(5);
        let mut history = History::new();

        history.record(HistoryEntry::new(later, 1.0, 1.0, 2.0, 100.0));
        history.record(HistoryEntry::new(earlier, 2.0, 2.0, 4.0, 100.0));

        let firsts: Vec<f64> = history.iter().map(HistoryEntry::num1).collect();
        assert_eq!(firsts, vec![1.0, 2.0]);
    }

    #[test]
    fn entry_exposes_recorded_values() {
        let at = Local::now();
        let entry = HistoryEntry::new(at, 3.0, 4.0, 6.9, 98.57);
        assert_eq!(entry.timestamp(), at);
        assert_eq!((entry.num1(), entry.num2()), (3.0, 4.0));
        assert_eq!(entry.predicted_sum(), 6.9);
        assert_eq!(entry.confidence(), 98.57);
    }
}
