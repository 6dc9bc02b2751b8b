//! Insertion-ordered counter.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
/// Counts occurrences of string keys, remembering first-seen order.
pub struct Tally {
    entries: Vec<TallyEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub key: String,
    pub count: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(TallyEntry {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&i| self.entries[i].count).unwrap_or(0)
    }

    /// Entries by descending count. Equal counts keep first-seen order.
    pub fn most_common(&self) -> Vec<&TallyEntry> {
        let mut out: Vec<&TallyEntry> = self.entries.iter().collect();
        // sort_by is stable, which is what keeps ties in insertion order
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_orders_by_count() {
        let mut t = Tally::new();
        for k in ["a", "b", "b", "c", "c", "c"] {
            t.add(k);
        }
        let keys: Vec<&str> = t.most_common().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
        assert_eq!(t.get("b"), 2);
        assert_eq!(t.get("zzz"), 0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let input = ["z.ts", "m.ts", "a.ts", "m.ts", "z.ts", "a.ts"];
        let run = || {
            let mut t = Tally::new();
            for k in input {
                t.add(k);
            }
            t.most_common()
                .iter()
                .map(|e| e.key.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), vec!["z.ts", "m.ts", "a.ts"]);
        assert_eq!(run(), run());
    }
}
