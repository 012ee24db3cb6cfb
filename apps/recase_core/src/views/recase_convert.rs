use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use tracing::error;

use crate::convert::{self, CaseKind};
use crate::serializers::recase_convert::{ConversionOut, ConvertQuery, ErrorEntry, ErrorsOut};

const MISSING_TEXT: &str =
    r#"Text to convert is required. Correct request is: "/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>"."#;
const MISSING_TOCASE: &str =
    r#""toCase" query param is required. Correct request is: "/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>"."#;
const INVALID_CASE: &str =
    "This case is not supported. Available cases: SNAKE, KEBAB, CAMEL, PASCAL, UPPER.";
const PROCESSING_FAILED: &str = "An error occurred during processing.";

type ConvertReply = Result<(StatusCode, Json<ConversionOut>), (StatusCode, Json<ErrorsOut>)>;

// ---------- handlers ----------

pub async fn convert_text(Path(text): Path<String>, Query(query): Query<ConvertQuery>) -> ConvertReply {
    respond(text, query)
}

/// `GET /` carries no text; it still goes through validation so the
/// missing-text error is reported alongside any query problems.
pub async fn convert_empty(Query(query): Query<ConvertQuery>) -> ConvertReply {
    respond(String::new(), query)
}

fn respond(text: String, query: ConvertQuery) -> ConvertReply {
    let target = validate(&text, query.to_case.as_deref()).map_err(bad)?;

    match convert::convert(&text, target) {
        Ok(result) => Ok((
            StatusCode::OK,
            Json(ConversionOut {
                original_case: result.original_case,
                target_case: target,
                original_text: text,
                converted_text: result.converted_text,
            }),
        )),
        Err(err) => {
            error!(%err, %text, "conversion failed unexpectedly");
            Err(internal())
        }
    }
}

// ---------- validation ----------

// All applicable failures are collected and reported together; conversion
// never runs on invalid input.
fn validate(text: &str, to_case: Option<&str>) -> Result<CaseKind, Vec<&'static str>> {
    let mut errors = Vec::new();
    let mut target = None;

    if text.is_empty() {
        errors.push(MISSING_TEXT);
    }

    match to_case {
        None | Some("") => errors.push(MISSING_TOCASE),
        Some(raw) => match raw.parse::<CaseKind>() {
            Ok(kind) => target = Some(kind),
            Err(_) => errors.push(INVALID_CASE),
        },
    }

    match (errors.is_empty(), target) {
        (true, Some(kind)) => Ok(kind),
        _ => Err(errors),
    }
}

// ---------- small helpers ----------

fn bad(messages: Vec<&'static str>) -> (StatusCode, Json<ErrorsOut>) {
    let errors = messages
        .into_iter()
        .map(|message| ErrorEntry { message })
        .collect();
    (StatusCode::BAD_REQUEST, Json(ErrorsOut { errors }))
}

fn internal() -> (StatusCode, Json<ErrorsOut>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorsOut {
            errors: vec![ErrorEntry { message: PROCESSING_FAILED }],
        }),
    )
}
