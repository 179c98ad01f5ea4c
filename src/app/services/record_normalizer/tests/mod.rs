//! Test utilities and fixtures for record normalizer testing
//!
//! This module provides sheet fixtures and helper functions used across the
//! normalizer test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod schema_tests;

/// Helper to create a complete test inventory sheet (tab-separated)
///
/// The sheet exercises every field classification: an identifier column,
/// plain text, multivalues with each delimiter, boolean answers in mixed
/// case, not-applicable markers, and empty cells.
pub fn create_test_sheet() -> String {
    [
        "ID\tCourse Name\tURL\tKeywords\tProgramming Language\tOpen Dataset\tAssessment\tNotes",
        "Unique id\tCourse title\tLanding page\tTopic list\tLanguages used\tHas open data?\tHas assessment?\tFree text",
        "1\tIntro to MRI\thttps://example.org/mri\tfMRI, BIDS; analysis\tPython\tYes\tNA\tGood starter course",
        "2\tData Wrangling\t\tstats / methods\tR / Python\tno\tmaybe\t",
        "X42\tAdvanced Topics\thttps://example.org/adv\tfMRIPrep\tna\tNO\tyes\tNA",
    ]
    .join("\n")
}

/// Helper to create a sheet with only a header and description row
pub fn create_minimal_sheet() -> String {
    ["ID\tCourse Name", "Unique id\tCourse title"].join("\n")
}

/// Helper to create a temporary sheet file with given content
pub fn create_temp_sheet(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
