use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::Color;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStats {
    counts: BTreeMap<Color, u32>,
}

impl ColorStats {
    pub fn tally(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut stats = Self::default();
        for color in colors {
            stats.add(color);
        }
        stats
    }

    pub fn from_counts(counts: impl IntoIterator<Item = (Color, u32)>) -> Self {
        let mut stats = Self::default();
        for (color, count) in counts {
            if count > 0 {
                stats.counts.insert(color, count);
            }
        }
        stats
    }

    pub fn add(&mut self, color: Color) {
        *self.counts.entry(color).or_insert(0) += 1;
    }

    pub fn remove(&mut self, color: Color) {
        if let Entry::Occupied(mut entry) = self.counts.entry(color) {
            let count = entry.get_mut();
            *count -= 1;
            if *count == 0 {
                entry.remove();
            }
        }
    }

    pub fn count(&self, color: Color) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    pub fn contains(&self, color: Color) -> bool {
        self.counts.contains_key(&color)
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.counts.iter().map(|(color, count)| (*color, *count))
    }

    pub fn sorted_usage(&self) -> Vec<(Color, u32)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|left, right| right.1.cmp(&left.1));
        entries
    }
}
