// history.rs

/// Append-only log of produced results. Reads hand out copies, never the
/// backing storage.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn get(&self, n: usize) -> Option<&str> {
        self.entries.get(n).map(String::as_str)
    }
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
    /// Last `n` entries paired with their 1-based position.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        self.iter().enumerate().skip(start).map(|(i, e)| (i + 1, e))
    }
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut h = History::new();
        h.push("a".into());
        h.push("b".into());
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(0), Some("a"));
        assert_eq!(h.last(), Some("b"));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut h = History::new();
        h.push("kept".into());
        let mut copy = h.snapshot();
        copy.push("extra".into());
        copy[0].push_str("!");
        assert_eq!(h.snapshot(), vec!["kept".to_string()]);
    }

    #[test]
    fn tail_numbers_from_one() {
        let mut h = History::new();
        for e in ["x", "y", "z"] {
            h.push(e.into());
        }
        let last_two: Vec<_> = h.tail(2).collect();
        assert_eq!(last_two, vec![(2, "y"), (3, "z")]);
        assert_eq!(h.tail(10).count(), 3);
        assert_eq!(h.tail(0).count(), 0);
    }

    #[test]
    fn clear_empties() {
        let mut h = History::new();
        h.push("gone".into());
        h.clear();
        assert!(h.is_empty());
        assert!(h.snapshot().is_empty());
    }
}
