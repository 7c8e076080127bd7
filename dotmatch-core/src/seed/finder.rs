//! Forward and reverse-complement match finding
//!
//! Scans the query's k-mers against the reference index twice: once as-is
//! for same-strand matches, once through the reverse complement for
//! opposite-strand matches. Every (reference position, query position)
//! pairing is emitted; nothing is deduplicated, so repetitive input can
//! legitimately produce O(L_ref x L_query) hits.

use serde::{Deserialize, Serialize};

use crate::sequence::{self, Sequence};
use crate::types::{Hit, Strand};

use super::index::KmerIndex;
use super::kmer::Kmers;

/// The hits of one (reference, query, k) comparison, split by strand.
///
/// Derived data with no identity of its own: regenerated whenever the
/// reference, the query, or k changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    pub forward: Vec<Hit>,
    pub reverse: Vec<Hit>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.forward.len() + self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }

    /// All hits, forward pass first, each in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Hit> {
        self.forward.iter().chain(self.reverse.iter())
    }
}

/// Find every exact window match between the indexed reference and `query`.
///
/// Hits are ordered by ascending query position, then by the index's stored
/// (ascending reference position) order. Both passes reuse one cursor; the
/// reverse pass restarts it with `seek(0)`.
pub fn find_hits(index: &KmerIndex, query: &Sequence) -> MatchSet {
    let k = index.k();
    let mut matches = MatchSet::default();

    // Forward pass: same-strand matches, main diagonal.
    let mut cursor = Kmers::new(query, k);
    for (window, query_start) in &mut cursor {
        for &ref_start in index.positions_of(window) {
            matches
                .forward
                .push(Hit::new(ref_start, query_start, Strand::Forward, k));
        }
    }

    // Reverse pass: the query window read on the opposite strand, which
    // lands on the anti-diagonal of the plot.
    cursor.seek(0);
    let mut rc = Vec::with_capacity(k);
    for (window, query_start) in cursor {
        sequence::revcomp_into(window, &mut rc);
        for &ref_start in index.positions_of(&rc) {
            matches
                .reverse
                .push(Hit::new(ref_start, query_start, Strand::Reverse, k));
        }
    }

    log::debug!(
        "{} forward and {} reverse hits for '{}' (k = {})",
        matches.forward.len(),
        matches.reverse.len(),
        query.id(),
        k
    );
    matches
}
