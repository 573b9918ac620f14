//! Narrow seam to the external recognition engine.
//!
//! The engine receives the original uploaded bytes together with a small
//! JSON envelope, and answers with per-field text keyed by reading-order
//! position. Transport, timeouts, and retries belong to the implementor.

use serde::Serialize;

/// Reference to one uploaded image inside a recognition request.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRef {
    pub name: String,
    pub format: String,
}

/// Envelope sent alongside the raw image bytes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRequest {
    pub request_id: String,
    pub version: String,
    pub images: Vec<ImageRef>,
    pub timestamp: String,
}

impl RecognitionRequest {
    /// Build the envelope for a single uploaded file.
    ///
    /// `content_type` is the declared MIME type, e.g. `image/png`; the
    /// request id combines its major type with the supplied timestamp.
    pub fn for_upload(file_name: &str, content_type: &str, timestamp: f64) -> Self {
        let name = file_name
            .split('.')
            .next()
            .unwrap_or(file_name)
            .to_string();
        let (kind, format) = content_type
            .split_once('/')
            .unwrap_or(("image", content_type));
        Self {
            request_id: format!("{kind}_{timestamp}"),
            version: "V2".to_string(),
            images: vec![ImageRef {
                name,
                format: format.to_string(),
            }],
            timestamp: timestamp.to_string(),
        }
    }
}

/// One recognized field, keyed by its position in the reading-order
/// bounding-box sequence.
#[derive(Debug, Clone)]
pub struct RecognizedField {
    pub position: usize,
    pub text: String,
}

/// A recognition backend.
pub trait RecognitionEngine {
    fn recognize(
        &self,
        request: &RecognitionRequest,
        image: &[u8],
    ) -> anyhow::Result<Vec<RecognizedField>>;
}
