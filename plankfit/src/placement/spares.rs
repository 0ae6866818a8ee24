use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::Plank;

/// Spare lengths are bucketed at this resolution when counting duplicates.
const LENGTH_BUCKET: f64 = 1e-6;

/// Tracks leftover cut-offs for reuse. Spares are always rectangular, even
/// when cut from an arbitrarily-shaped piece (a deliberate simplification),
/// and are held sorted longest-first so larger pieces are exhausted first.
#[derive(Clone, Debug, Default)]
pub struct SpareLedger {
    spares: Vec<Plank>,
}

impl SpareLedger {
    pub fn new() -> Self {
        SpareLedger { spares: vec![] }
    }

    /// Inserts a leftover, maintaining longest-first order.
    pub fn add(&mut self, spare: Plank) {
        debug_assert!(spare.is_spare && spare.shape.is_none());
        let pos = self
            .spares
            .partition_point(|s| OrderedFloat(s.length) >= OrderedFloat(spare.length));
        self.spares.insert(pos, spare);
    }

    pub fn remove(&mut self, index: usize) -> Plank {
        self.spares.remove(index)
    }

    /// Longest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Plank> + '_ {
        self.spares.iter()
    }

    pub fn len(&self) -> usize {
        self.spares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spares.is_empty()
    }

    /// The most frequent spare length currently held, provided at least two
    /// spares share it. Ties break towards the longer length.
    pub fn most_common_length(&self) -> Option<f64> {
        self.spares
            .iter()
            .map(|s| OrderedFloat((s.length / LENGTH_BUCKET).round() * LENGTH_BUCKET))
            .counts()
            .into_iter()
            .filter(|(_, count)| *count >= 2)
            .max_by_key(|(length, count)| (*count, *length))
            .map(|(length, _)| length.into_inner())
    }

    /// Lateral stagger for the start of a row.
    ///
    /// Rows adjacent to the seed row use the fixed modular stagger
    /// `(row_index × min_offset) mod full_span`. Further rows try to align
    /// the offset to the most frequent spare length held, so future row
    /// starts land on existing cut-off lengths and maximize reuse; the
    /// length (or its smallest multiple ≥ `min_offset`) must still satisfy
    /// the minimum-offset constraint.
    pub fn optimal_row_offset(&self, row_index: i64, min_offset: f64, full_span: f64) -> f64 {
        let modular = (row_index as f64 * min_offset).rem_euclid(full_span);
        if row_index.abs() <= 1 {
            return modular;
        }

        match self.most_common_length() {
            Some(length) if length > 0.0 => {
                let mut aligned = length;
                while aligned < min_offset {
                    aligned += length;
                }
                let aligned = aligned.rem_euclid(full_span);
                if aligned >= min_offset {
                    aligned
                } else {
                    modular
                }
            }
            _ => modular,
        }
    }
}
