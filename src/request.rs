//! JSON contract for a serving layer.
//!
//! The transport itself lives outside this crate. What a front end needs is
//! here: the request body, the three reply shapes, and the mapping from
//! [`MatrixError`] to an error body.
//!
//! ```json
//! {"matrix": [[1, 0], [1, 1]], "evaluationMode": "ONES"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::matrix::Cell;
use crate::mode::EvaluationMode;
use crate::rect::UniformRectangle;
use crate::search::Search;

pub const NOT_FOUND_MESSAGE: &str = "No longest sub-matrix exists";
pub const BAD_REQUEST_MESSAGE: &str = "Encountered error in request body";

/// Incoming request body.
///
/// The mode stays a raw string so an unknown token surfaces as
/// [`MatrixError::InvalidMode`] instead of a deserialisation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub matrix: Vec<Vec<Cell>>,
    pub evaluation_mode: String,
}

impl SearchRequest {
    pub fn new(matrix: Vec<Vec<Cell>>, mode: EvaluationMode) -> Self {
        Self {
            matrix,
            evaluation_mode: mode.as_str().to_owned(),
        }
    }
}

/// Message with optional detail lines; used for "not found" and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
    pub details: Vec<String>,
}

impl MessageBody {
    pub fn not_found() -> Self {
        Self {
            message: NOT_FOUND_MESSAGE.to_owned(),
            details: Vec::new(),
        }
    }
}

impl From<&MatrixError> for MessageBody {
    fn from(err: &MatrixError) -> Self {
        Self {
            message: BAD_REQUEST_MESSAGE.to_owned(),
            details: vec![err.to_string()],
        }
    }
}

impl From<MatrixError> for MessageBody {
    fn from(err: MatrixError) -> Self {
        Self::from(&err)
    }
}

/// Successful reply: either the rectangle or a "not found" message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchReply {
    Found(UniformRectangle),
    NotFound(MessageBody),
}

impl SearchReply {
    pub fn rectangle(&self) -> Option<&UniformRectangle> {
        match self {
            SearchReply::Found(r) => Some(r),
            SearchReply::NotFound(_) => None,
        }
    }
}

/// Answer a request with default settings.
pub fn respond(request: &SearchRequest) -> Result<SearchReply, MessageBody> {
    respond_with(request, None)
}

/// Answer a request, optionally overriding the engine band height.
///
/// The mode token is checked before the matrix, as a request parser would.
pub fn respond_with(
    request: &SearchRequest,
    band_height: Option<usize>,
) -> Result<SearchReply, MessageBody> {
    let mode: EvaluationMode = request.evaluation_mode.parse()?;
    let found = Search::new(mode)
        .with_band_height(band_height)
        .run(&request.matrix)?;
    Ok(match found {
        Some(rect) => SearchReply::Found(rect),
        None => SearchReply::NotFound(MessageBody::not_found()),
    })
}
