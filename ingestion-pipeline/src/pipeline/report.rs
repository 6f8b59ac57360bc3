use std::fmt;

use crate::dump::DumpKind;

/// What happened to a single dump line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Loaded,
    Skipped,
    Blank,
}

/// Counters for one pass over a dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub kind: DumpKind,
    pub lines_read: usize,
    pub loaded: usize,
    pub skipped: usize,
    pub blank: usize,
    /// Set when the dump could not be opened or read to the end.
    pub read_error: Option<String>,
}

impl PassReport {
    pub fn new(kind: DumpKind) -> Self {
        Self {
            kind,
            lines_read: 0,
            loaded: 0,
            skipped: 0,
            blank: 0,
            read_error: None,
        }
    }

    pub fn record(&mut self, outcome: LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Loaded => self.loaded += 1,
            LineOutcome::Skipped => self.skipped += 1,
            LineOutcome::Blank => self.blank += 1,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.read_error.is_none()
    }
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} lines, {} loaded, {} skipped, {} blank",
            self.kind, self.lines_read, self.loaded, self.skipped, self.blank
        )?;
        if let Some(err) = &self.read_error {
            write!(f, " (stopped early: {err})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub authors: PassReport,
    pub works: PassReport,
}

impl LoadReport {
    pub fn total_loaded(&self) -> usize {
        self.authors.loaded + self.works.loaded
    }

    pub fn total_skipped(&self) -> usize {
        self.authors.skipped + self.works.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_add_up() {
        let mut report = PassReport::new(DumpKind::Authors);
        for outcome in [
            LineOutcome::Loaded,
            LineOutcome::Skipped,
            LineOutcome::Loaded,
            LineOutcome::Blank,
        ] {
            report.record(outcome);
        }

        assert_eq!(report.lines_read, 4);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.blank, 1);
        assert_eq!(
            report.to_string(),
            "authors: 4 lines, 2 loaded, 1 skipped, 1 blank"
        );
    }

    #[test]
    fn read_error_marks_pass_incomplete() {
        let mut report = PassReport::new(DumpKind::Works);
        report.read_error = Some("gone".into());

        assert!(!report.is_complete());
        assert!(report.to_string().ends_with("(stopped early: gone)"));
    }
}
