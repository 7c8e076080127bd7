//! Exact-match seeding engine
//!
//! Turns two validated sequences and a window length into the set of exact
//! window matches between them, on both strands. Enumeration, indexing and
//! match finding are one-shot batch computations: no I/O, no shared mutable
//! state, and the same inputs always produce the same hits.

pub mod finder;
pub mod index;
pub mod kmer;

pub use finder::{find_hits, MatchSet};
pub use index::KmerIndex;
pub use kmer::Kmers;

use thiserror::Error;

use crate::sequence::{Sequence, SequenceError};

/// Errors detected before any index or match computation begins.
///
/// All are local to one run; a failed run leaves no partial results behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("window length must be at least 1")]
    InvalidK,

    #[error("sequence '{0}' contains no residues")]
    EmptySequence(String),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Run the full comparison pipeline over validated sequences.
///
/// Validates `k` and non-emptiness, builds the reference index, and scans the
/// query on both strands. A window length larger than either sequence is not
/// an error; the affected pass simply yields no hits.
pub fn compare(reference: &Sequence, query: &Sequence, k: usize) -> Result<MatchSet, SeedError> {
    if k == 0 {
        return Err(SeedError::InvalidK);
    }
    if reference.is_empty() {
        return Err(SeedError::EmptySequence(reference.id().to_string()));
    }
    if query.is_empty() {
        return Err(SeedError::EmptySequence(query.id().to_string()));
    }

    let index = KmerIndex::build(reference, k);
    Ok(find_hits(&index, query))
}

/// Entry point matching the external input contract: two raw text blobs
/// (plain residues or single-record FASTA) and a window length.
pub fn compare_raw(reference_text: &str, query_text: &str, k: usize) -> Result<MatchSet, SeedError> {
    let reference = Sequence::normalize(reference_text, "reference")?;
    let query = Sequence::normalize(query_text, "query")?;
    compare(&reference, &query, k)
}
