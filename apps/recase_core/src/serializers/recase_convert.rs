use serde::{Deserialize, Serialize};

use crate::convert::CaseKind;

#[derive(Deserialize)]
pub struct ConvertQuery {
    #[serde(rename = "toCase")]
    pub to_case: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOut {
    pub original_case: CaseKind,
    pub target_case: CaseKind,
    pub original_text: String,
    pub converted_text: String,
}

#[derive(Serialize)]
pub struct ErrorEntry {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorsOut {
    pub errors: Vec<ErrorEntry>,
}
