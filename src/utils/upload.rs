use serde::Serialize;
use utoipa::ToSchema;

pub const INVALID_FILE_TYPE: &str = "Invalid file type. Please upload .xlsx or .csv";

const SUPPORTED_SUFFIXES: [&str; 2] = [".xlsx", ".csv"];

/// Extension check only; the backend parses and validates the contents.
pub fn is_supported_spreadsheet(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    SUPPORTED_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFormat {
    pub accepted_extensions: Vec<String>,
    /// Each entry lists the accepted spellings of one required header.
    pub required_headers: Vec<Vec<String>>,
    pub optional_headers: Vec<String>,
}

impl UploadFormat {
    pub fn spreadsheet() -> Self {
        let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
        Self {
            accepted_extensions: owned(&SUPPORTED_SUFFIXES),
            required_headers: vec![
                owned(&["name", "Payee Name"]),
                owned(&["salaryAmount"]),
                owned(&["bankDetails", "Beneficiary Details"]),
            ],
            optional_headers: owned(&["paymentRef", "yourRef", "notes"]),
        }
    }
}
