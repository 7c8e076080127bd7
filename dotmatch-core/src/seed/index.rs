//! Reference k-mer index
//!
//! An ordered multimap from k-mer value to the list of start positions where
//! that value occurs in the reference. Lookup order equals insertion order,
//! which equals ascending position order; duplicate occurrences are kept.

use std::collections::HashMap;

use crate::sequence::Sequence;
use crate::types::Position;

use super::kmer::Kmers;

/// Immutable lookup table over the reference's k-mers.
///
/// Built once per (reference, k) pair; any change to either requires a full
/// rebuild. Expected O(L) build time, O(1) expected lookup.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    k: usize,
    positions: HashMap<Box<[u8]>, Vec<Position>>,
}

impl KmerIndex {
    /// Index every k-mer of `reference`. Assumes `k >= 1`.
    pub fn build(reference: &Sequence, k: usize) -> Self {
        debug_assert!(k >= 1, "callers reject k == 0 before indexing");
        let mut positions: HashMap<Box<[u8]>, Vec<Position>> = HashMap::new();
        for (window, start) in Kmers::new(reference, k) {
            positions.entry(window.into()).or_default().push(start);
        }
        log::debug!(
            "indexed {} distinct {}-mers from '{}' ({} bp)",
            positions.len(),
            k,
            reference.id(),
            reference.len()
        );
        Self { k, positions }
    }

    /// Start positions of `window` in the reference, ascending; empty when
    /// the value never occurs.
    pub fn positions_of(&self, window: &[u8]) -> &[Position] {
        self.positions
            .get(window)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The window length this index was built for.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn distinct_kmers(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
