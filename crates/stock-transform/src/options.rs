//! Sheet processing configuration.

use crate::header::FieldCandidates;

/// Default number of leading rows searched for the header marker.
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 12;

/// Header row assumed when no marker is found.
///
/// This matches the layout observed in existing reports and is a heuristic;
/// a sheet with a shifted layout silently parses the wrong rows as headers.
pub const DEFAULT_HEADER_FALLBACK_ROW: usize = 4;

/// Options controlling header detection and column resolution.
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Rows scanned (from the top) for the `型`/`型号` marker.
    pub header_scan_rows: usize,
    /// First header row used when the marker is absent.
    pub header_fallback_row: usize,
    /// Accepted combined-header texts per field.
    pub field_candidates: FieldCandidates,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            header_fallback_row: DEFAULT_HEADER_FALLBACK_ROW,
            field_candidates: FieldCandidates::default(),
        }
    }
}

impl ProcessingOptions {
    #[must_use]
    pub fn with_header_scan_rows(mut self, rows: usize) -> Self {
        self.header_scan_rows = rows;
        self
    }

    #[must_use]
    pub fn with_header_fallback_row(mut self, row: usize) -> Self {
        self.header_fallback_row = row;
        self
    }

    #[must_use]
    pub fn with_field_candidates(mut self, candidates: FieldCandidates) -> Self {
        self.field_candidates = candidates;
        self
    }
}
