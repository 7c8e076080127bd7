use serde::{Deserialize, Serialize};

/// 0-based offset into a sequence.
pub type Position = usize;

/// Orientation of a match relative to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl From<Strand> for char {
    fn from(strand: Strand) -> Self {
        match strand {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl From<char> for Strand {
    fn from(c: char) -> Self {
        match c {
            '-' => Strand::Reverse,
            _ => Strand::Forward,
        }
    }
}

/// One exact window match between the reference and the query.
///
/// For a forward hit, the reference window starting at `ref_start` equals the
/// query window starting at `query_start`. For a reverse hit, the reference
/// window equals the reverse complement of the query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    pub ref_start: Position,
    pub query_start: Position,
    pub strand: Strand,
    pub k: usize,
}

impl Hit {
    pub fn new(ref_start: Position, query_start: Position, strand: Strand, k: usize) -> Self {
        Self {
            ref_start,
            query_start,
            strand,
            k,
        }
    }

    /// Exclusive end of the matched reference window.
    pub fn ref_end(&self) -> Position {
        self.ref_start + self.k
    }

    /// Exclusive end of the matched query window.
    pub fn query_end(&self) -> Position {
        self.query_start + self.k
    }

    /// Endpoints of the line segment this hit draws, as
    /// `((x1, y1), (x2, y2))` in (reference, query) coordinates.
    ///
    /// Forward hits run along the main diagonal; reverse hits run along the
    /// anti-diagonal, so their query coordinates are swapped.
    pub fn segment(&self) -> ((Position, Position), (Position, Position)) {
        match self.strand {
            Strand::Forward => (
                (self.ref_start, self.query_start),
                (self.ref_end(), self.query_end()),
            ),
            Strand::Reverse => (
                (self.ref_start, self.query_end()),
                (self.ref_end(), self.query_start),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_char_conversions() {
        assert_eq!(char::from(Strand::Forward), '+');
        assert_eq!(char::from(Strand::Reverse), '-');
        assert_eq!(Strand::from('+'), Strand::Forward);
        assert_eq!(Strand::from('-'), Strand::Reverse);
    }

    #[test]
    fn test_hit_window_bounds() {
        let hit = Hit::new(3, 7, Strand::Forward, 5);
        assert_eq!(hit.ref_end(), 8);
        assert_eq!(hit.query_end(), 12);
    }

    #[test]
    fn test_forward_segment_runs_down_the_main_diagonal() {
        let hit = Hit::new(2, 4, Strand::Forward, 3);
        assert_eq!(hit.segment(), ((2, 4), (5, 7)));
    }

    #[test]
    fn test_reverse_segment_runs_down_the_anti_diagonal() {
        let hit = Hit::new(2, 4, Strand::Reverse, 3);
        assert_eq!(hit.segment(), ((2, 7), (5, 4)));
    }
}
