//! Sequence normalization and validation
//!
//! Raw input text (plain residues, or a single FASTA record whose header line
//! is discarded) is folded into an immutable, uppercase DNA sequence. The
//! alphabet is validated once at construction, so every downstream component
//! can assume residues are drawn from {A, C, G, T}.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Position;

/// Errors raised while normalizing raw sequence text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid residue '{residue}' at position {position}: only A, C, G and T are accepted")]
    InvalidResidue { residue: char, position: Position },
}

/// A validated DNA sequence with an identifier.
///
/// Immutable once constructed; a new run builds new `Sequence` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    id: String,
    residues: String,
}

impl Sequence {
    /// Normalize raw text into a validated sequence.
    ///
    /// If the text starts with `>`, the first line is treated as a FASTA
    /// header and discarded; the identifier becomes the first
    /// whitespace-delimited token of the header, or `fallback_id` when the
    /// header carries none. All whitespace is stripped from the remaining
    /// text and residues are upper-cased before validation.
    ///
    /// An empty residue string is legal here; callers that require a
    /// non-empty sequence check for it before seeding.
    pub fn normalize(raw: &str, fallback_id: &str) -> Result<Self, SequenceError> {
        let (id, body) = match raw.strip_prefix('>') {
            Some(rest) => {
                let (header, body) = rest.split_once('\n').unwrap_or((rest, ""));
                let id = header
                    .split_whitespace()
                    .next()
                    .unwrap_or(fallback_id)
                    .to_string();
                (id, body)
            }
            None => (fallback_id.to_string(), raw),
        };

        let mut residues = String::with_capacity(body.len());
        for ch in body.chars() {
            if ch.is_whitespace() {
                continue;
            }
            match ch.to_ascii_uppercase() {
                upper @ ('A' | 'C' | 'G' | 'T') => residues.push(upper),
                _ => {
                    return Err(SequenceError::InvalidResidue {
                        residue: ch,
                        position: residues.len(),
                    })
                }
            }
        }

        Ok(Self { id, residues })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.residues.as_bytes()
    }

    /// Reverse complement of this sequence, under the same identifier.
    ///
    /// Total over validated sequences and involutive:
    /// `s.reverse_complement().reverse_complement() == s`.
    pub fn reverse_complement(&self) -> Sequence {
        let residues = self
            .as_bytes()
            .iter()
            .rev()
            .map(|&b| complement(b) as char)
            .collect();
        Sequence {
            id: self.id.clone(),
            residues,
        }
    }
}

/// Validate raw text against the DNA alphabet without building a sequence.
///
/// Whitespace is ignored and case is not significant, matching the
/// normalizer. The reported position counts residues, not raw characters.
pub fn validate(raw: &str) -> Result<(), SequenceError> {
    let mut position = 0;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            continue;
        }
        match ch.to_ascii_uppercase() {
            'A' | 'C' | 'G' | 'T' => position += 1,
            _ => {
                return Err(SequenceError::InvalidResidue {
                    residue: ch,
                    position,
                })
            }
        }
    }
    Ok(())
}

/// Watson-Crick complement of a single residue byte.
///
/// Inputs outside {A, C, G, T} cannot occur for validated sequences and are
/// returned unchanged.
pub(crate) fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Write the reverse complement of `window` into `out`, reusing its storage.
pub(crate) fn revcomp_into(window: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.extend(window.iter().rev().map(|&b| complement(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_upper_cased_and_stripped() {
        let seq = Sequence::normalize("  ac\ngT\t", "query").unwrap();
        assert_eq!(seq.id(), "query");
        assert_eq!(seq.residues(), "ACGT");
    }

    #[test]
    fn test_fasta_header_is_discarded_and_names_the_sequence() {
        let seq = Sequence::normalize("> chr1 Homo sapiens\nACG\nTAC\n", "fallback").unwrap();
        assert_eq!(seq.id(), "chr1");
        assert_eq!(seq.residues(), "ACGTAC");
    }

    #[test]
    fn test_bare_header_falls_back_to_caller_id() {
        let seq = Sequence::normalize(">\nACGT", "reference").unwrap();
        assert_eq!(seq.id(), "reference");
        assert_eq!(seq.residues(), "ACGT");
    }

    #[test]
    fn test_header_without_body_yields_empty_sequence() {
        let seq = Sequence::normalize(">lonely header", "x").unwrap();
        assert_eq!(seq.id(), "lonely");
        assert!(seq.is_empty());
    }

    #[test]
    fn test_ambiguity_codes_are_rejected() {
        let err = Sequence::normalize("ACGNT", "q").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidResidue {
                residue: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn test_second_fasta_record_fails_validation() {
        assert!(Sequence::normalize(">a\nACGT\n>b\nACGT\n", "q").is_err());
    }

    #[test]
    fn test_validate_accepts_mixed_case_dna() {
        assert!(validate("acGT\ntgca").is_ok());
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_rejects_non_dna_text() {
        let err = validate("ACGU").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidResidue {
                residue: 'U',
                position: 3
            }
        );
    }

    #[test]
    fn test_reverse_complement_swaps_and_reverses() {
        let seq = Sequence::normalize("AACG", "s").unwrap();
        assert_eq!(seq.reverse_complement().residues(), "CGTT");
    }

    #[test]
    fn test_reverse_complement_is_involutive() {
        let seq = Sequence::normalize("ATCGGCTAAT", "s").unwrap();
        assert_eq!(seq.reverse_complement().reverse_complement(), seq);
    }

    #[test]
    fn test_empty_sequence_reverse_complement_is_empty() {
        let seq = Sequence::normalize("", "s").unwrap();
        assert!(seq.reverse_complement().is_empty());
    }

    #[test]
    fn test_revcomp_into_reuses_buffer() {
        let mut buf = Vec::new();
        revcomp_into(b"ACGT", &mut buf);
        assert_eq!(buf, b"ACGT");
        revcomp_into(b"AAAC", &mut buf);
        assert_eq!(buf, b"GTTT");
    }
}
