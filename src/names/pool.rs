use std::collections::BTreeMap;

use compact_str::CompactString;
use rand::seq::SliceRandom;
use rand::Rng;

/// Names bucketed by character count.
///
/// Buckets are never empty: the last name leaving a bucket removes its key.
/// Every name handed out is removed, so a name is used at most once per pool.
#[derive(Debug, Clone, Default)]
pub struct NamePool {
    by_len: BTreeMap<usize, Vec<CompactString>>,
    total: usize,
}

/// Length of a name in characters, which is what the width budget counts.
pub fn char_len(name: &str) -> usize {
    name.chars().count()
}

impl NamePool {
    /// Bucket `names` by length and shuffle each bucket once with `rng`.
    /// Empty names are skipped.
    pub fn new<I, S, R>(names: I, rng: &mut R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
        R: Rng + ?Sized,
    {
        let mut by_len: BTreeMap<usize, Vec<CompactString>> = BTreeMap::new();
        let mut total = 0;
        let mut skipped = 0;
        for name in names {
            let name: CompactString = name.into();
            let len = char_len(&name);
            if len == 0 {
                skipped += 1;
                continue;
            }
            by_len.entry(len).or_default().push(name);
            total += 1;
        }

        for bucket in by_len.values_mut() {
            bucket.shuffle(&mut *rng);
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} empty names", skipped);
        }
        tracing::debug!(
            "Name pool: {} names in {} length buckets",
            total,
            by_len.len()
        );

        Self { by_len, total }
    }

    /// Remaining names.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn min_len(&self) -> Option<usize> {
        self.by_len.keys().next().copied()
    }

    pub fn max_len(&self) -> Option<usize> {
        self.by_len.keys().next_back().copied()
    }

    /// `(length, remaining names)` pairs, shortest first.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_len.iter().map(|(&len, names)| (len, names.len()))
    }

    /// Take the most recently queued name of exactly `len` characters.
    pub fn pop_exact(&mut self, len: usize) -> Option<CompactString> {
        let bucket = self.by_len.get_mut(&len)?;
        let name = bucket.pop();
        if bucket.is_empty() {
            self.by_len.remove(&len);
        }
        if name.is_some() {
            self.total -= 1;
        }
        name
    }

    /// Pick the next name for a budget of `width` characters.
    ///
    /// Longest name when everything fits, otherwise an exact fit, otherwise
    /// the shortest name. `None` when the pool is empty or nothing fits.
    pub fn pop_best_fit(&mut self, width: usize) -> Option<CompactString> {
        let min = self.min_len()?;
        let max = self.max_len()?;

        if width < min {
            return None;
        }
        if width >= max {
            return self.pop_exact(max);
        }
        self.pop_exact(width).or_else(|| self.pop_exact(min))
    }

    /// Greedily take names until the next one would not fit in `width`.
    pub fn fill_row(&mut self, mut width: usize) -> Vec<CompactString> {
        let mut row = Vec::new();
        while let Some(name) = self.pop_best_fit(width) {
            width -= char_len(&name);
            row.push(name);
        }
        row
    }
}
