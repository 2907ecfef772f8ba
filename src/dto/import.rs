use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// PDF upload for AI-assisted bulk import.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImportPdfDto {
    /// The PDF file, base64-encoded.
    pub pdf_base64: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SkippedRowDto {
    /// Name or label identifying the rejected row.
    pub name: String,
    pub reason: String,
}

/// Result of a bulk import: what made it in, and what was rejected by the
/// validators with the reason.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImportReportDto {
    pub imported: u32,
    pub skipped: Vec<SkippedRowDto>,
}
