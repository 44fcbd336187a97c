use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedValueDto {
    pub raw: String,
    pub normalized: String,
    pub already_normalized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedInsertDto {
    pub value: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReportDto {
    pub fetched: usize,
    pub seeded: Option<usize>,
    pub seed_error: Option<String>,
    pub deleted: Vec<String>,
    pub delete_error: Option<String>,
    pub inserted: Vec<String>,
    pub skipped: Vec<SkippedInsertDto>,
}
