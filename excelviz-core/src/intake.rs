//! File intake: the uploaded blob and filename-suffix classification.

use crate::error::VizError;

/// A file handed over by the upload widget. Owned by the current interaction
/// cycle; replaced wholesale when the user uploads a new file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// The two recognized tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Xlsx,
    Csv,
}

/// Classify an uploaded file by its filename suffix alone.
///
/// Matching is case-sensitive on the exact suffixes `.xlsx` and `.csv`;
/// content is never sniffed. Anything else halts the cycle with an
/// unsupported-format error.
pub fn classify(name: &str) -> Result<FileFormat, VizError> {
    if name.ends_with(".xlsx") {
        Ok(FileFormat::Xlsx)
    } else if name.ends_with(".csv") {
        Ok(FileFormat::Csv)
    } else {
        Err(VizError::UnsupportedFormat {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_csv_and_xlsx() {
        assert_eq!(classify("data.csv").unwrap(), FileFormat::Csv);
        assert_eq!(classify("report.xlsx").unwrap(), FileFormat::Xlsx);
    }

    #[test]
    fn rejects_unknown_suffix() {
        let err = classify("notes.txt").unwrap_err();
        assert!(matches!(err, VizError::UnsupportedFormat { .. }));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(classify("DATA.CSV").is_err());
        assert!(classify("report.XLSX").is_err());
    }

    #[test]
    fn suffix_must_terminate_the_name() {
        assert!(classify("data.csv.bak").is_err());
    }
}
