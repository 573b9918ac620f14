pub mod detection;
pub mod error;
pub mod models;

pub use detection::TableDetector;
pub use detection::recognize::{RecognitionEngine, RecognitionRequest, RecognizedField};
pub use error::DetectError;
pub use models::{BoundingBox, DetectOptions, DetectionResult};
