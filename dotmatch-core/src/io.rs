//! Raw sequence file intake
//!
//! Reads plain-text or gzip-compressed sequence files and feeds them to the
//! normalizer. A file holds either bare residues or a single FASTA record;
//! later records are not honored and fail alphabet validation on their `>`
//! header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::sequence::{Sequence, SequenceError};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file is not valid UTF-8 text")]
    NotText(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Read one sequence from `path`, decompressing when the name ends in `.gz`.
///
/// `fallback_id` names the sequence when the file carries no FASTA header.
pub fn read_sequence_file<P: AsRef<Path>>(path: P, fallback_id: &str) -> Result<Sequence, ReadError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut raw = Vec::new();
    if path.to_string_lossy().ends_with(".gz") {
        GzDecoder::new(file).read_to_end(&mut raw)?;
    } else {
        let mut file = file;
        file.read_to_end(&mut raw)?;
    }

    let text = String::from_utf8(raw)?;
    let sequence = Sequence::normalize(&text, fallback_id)?;
    log::debug!(
        "read '{}' ({} bp) from {}",
        sequence.id(),
        sequence.len(),
        path.display()
    );
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn write_temp(name: &str, contents: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reads_plain_residue_file() {
        let (_dir, path) = write_temp("seq.txt", b"acgt\nACGT\n");
        let seq = read_sequence_file(&path, "query").unwrap();
        assert_eq!(seq.id(), "query");
        assert_eq!(seq.residues(), "ACGTACGT");
    }

    #[test]
    fn test_reads_fasta_file_with_header_id() {
        let (_dir, path) = write_temp("seq.fa", b">plasmid circular\nACGT\nTGCA\n");
        let seq = read_sequence_file(&path, "fallback").unwrap();
        assert_eq!(seq.id(), "plasmid");
        assert_eq!(seq.residues(), "ACGTTGCA");
    }

    #[test]
    fn test_reads_gzip_compressed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seq.fa.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">gz test\nACGTACGT\n").unwrap();
        encoder.finish().unwrap();

        let seq = read_sequence_file(&path, "fallback").unwrap();
        assert_eq!(seq.id(), "gz");
        assert_eq!(seq.residues(), "ACGTACGT");
    }

    #[test]
    fn test_invalid_residue_is_surfaced() {
        let (_dir, path) = write_temp("seq.txt", b"ACGNT");
        assert!(matches!(
            read_sequence_file(&path, "q"),
            Err(ReadError::Sequence(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            read_sequence_file("/nonexistent/seq.fa", "q"),
            Err(ReadError::Io(_))
        ));
    }
}
