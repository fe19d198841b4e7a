//! Runtime statistics.

use crate::coding::hamming::Status;

/// Tracks stats for an error correction code.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize))]
pub struct CodeStats {
    /// Total number of received words.
    pub words: usize,
    /// Number of corrected bits.
    pub fixed: usize,
    /// Number of unrecoverable words.
    pub err: usize,
}

impl CodeStats {
    /// Create a new `CodeStats` with empty counters.
    pub fn new() -> Self { CodeStats::default() }

    /// Record that a word was received with the given amount of corrected bits.
    pub fn record_fixes(&mut self, err: usize) {
        self.words += 1;
        self.fixed += err;
    }

    /// Record that a word was received with an unrecoverable error.
    pub fn record_err(&mut self) {
        self.words += 1;
        self.err += 1;
    }

    /// Record the outcome of decoding a word.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Uncorrectable => self.record_err(),
            s => self.record_fixes(s.fixes()),
        }
    }

    /// Merge in the stats from the given object and clear the other stats.
    pub fn merge(&mut self, other: &mut CodeStats) {
        self.words += other.words;
        self.err += other.err;
        self.fixed += other.fixed;

        other.clear();
    }

    /// Clear all stats.
    pub fn clear(&mut self) {
        *self = CodeStats::default();
    }
}

/// Indicates that a type captures statistics.
pub trait HasStats {
    /// Retrieve captured statistics.
    fn stats(&mut self) -> &mut CodeStats;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_code_stats() {
        let mut a = CodeStats::new();
        let mut b = CodeStats::new();

        a.record_fixes(1);
        a.record_err();
        assert_eq!(a.words, 2);
        assert_eq!(a.fixed, 1);
        assert_eq!(a.err, 1);

        b.record_fixes(1);
        b.record_fixes(0);
        b.record_err();
        b.record_err();
        assert_eq!(b.words, 4);
        assert_eq!(b.fixed, 1);
        assert_eq!(b.err, 2);

        a.merge(&mut b);
        assert_eq!(a.words, 6);
        assert_eq!(a.fixed, 2);
        assert_eq!(a.err, 3);
        assert_eq!(b, CodeStats::default());

        a.clear();
        assert_eq!(a, CodeStats::new());
    }

    #[test]
    fn test_record_status() {
        let mut s = CodeStats::new();

        s.record(Status::NoError);
        s.record(Status::ErrorCorrected(3));
        s.record(Status::ErrorCorrected(0));
        s.record(Status::Uncorrectable);

        assert_eq!(s.words, 4);
        assert_eq!(s.fixed, 2);
        assert_eq!(s.err, 1);
    }
}
