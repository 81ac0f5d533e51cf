use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::record::{BondRecord, DedupKey};

/// Accumulates the shortest distance seen per deduplication key.
///
/// Insertion order never affects the result, and two accumulators built over
/// disjoint partitions of the input can be [merged](BestDistance::merge).
#[derive(Debug, Clone, Default)]
pub struct BestDistance {
    best: BTreeMap<DedupKey, f64>,
}

impl BestDistance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BondRecord) {
        let (key, distance) = record.into_parts();
        self.offer(key, distance);
    }

    pub fn merge(&mut self, other: BestDistance) {
        for (key, distance) in other.best {
            self.offer(key, distance);
        }
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Emits one row per key, ordered by state, center atom, partner atom and distance.
    pub fn finish(self) -> Vec<BondRecord> {
        let mut rows: Vec<BondRecord> = self
            .best
            .into_iter()
            .map(|(key, distance)| BondRecord::from_key(key, distance))
            .collect();
        rows.sort_by(row_order);
        rows
    }

    fn offer(&mut self, key: DedupKey, distance: f64) {
        self.best
            .entry(key)
            .and_modify(|best| *best = best.min(distance))
            .or_insert(distance);
    }
}

impl Extend<BondRecord> for BestDistance {
    fn extend<I: IntoIterator<Item = BondRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<BondRecord> for BestDistance {
    fn from_iter<I: IntoIterator<Item = BondRecord>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Collapses records to one minimum-distance row per key, in export order.
pub fn reduce<I>(records: I) -> Vec<BondRecord>
where
    I: IntoIterator<Item = BondRecord>,
{
    records.into_iter().collect::<BestDistance>().finish()
}

fn row_order(a: &BondRecord, b: &BondRecord) -> Ordering {
    a.state
        .cmp(&b.state)
        .then_with(|| a.center_atom.cmp(&b.center_atom))
        .then_with(|| a.partner_atom.cmp(&b.partner_atom))
        .then_with(|| a.distance.total_cmp(&b.distance))
}
