use thiserror::Error;

/// Error taxonomy for one upload-to-export interaction cycle.
///
/// `UnsupportedFormat` and `EmptyTable` carry their exact user-facing wording;
/// everything else is surfaced generically by the UI boundary.
#[derive(Error, Debug)]
pub enum VizError {
    #[error("Unsupported file format. Please upload an XLSX or CSV file.")]
    UnsupportedFormat { name: String },

    #[error("The uploaded file is empty.")]
    EmptyTable,

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("{0}")]
    Load(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("{0}")]
    Chart(String),
}

impl VizError {
    /// Whether this error carries its own complete user-facing message.
    ///
    /// Validation failures are shown verbatim; parser and chart failures get
    /// wrapped in a generic prefix by the UI boundary.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VizError::UnsupportedFormat { .. } | VizError::EmptyTable
        )
    }

    /// Render this error the way the page reports it.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("An error occurred: {self}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_message_is_verbatim() {
        let err = VizError::UnsupportedFormat {
            name: "data.txt".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Unsupported file format. Please upload an XLSX or CSV file."
        );
    }

    #[test]
    fn empty_table_message_is_verbatim() {
        assert_eq!(
            VizError::EmptyTable.user_message(),
            "The uploaded file is empty."
        );
    }

    #[test]
    fn chart_errors_get_generic_prefix() {
        let err = VizError::Chart("bad latitude column".to_string());
        assert_eq!(err.user_message(), "An error occurred: bad latitude column");
    }
}
