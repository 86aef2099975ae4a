//! API request, response and error types

pub mod error;
pub mod json;
pub mod predict;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use predict::{DiseaseInfo, DiseasesResponse, PredictRequest, PredictResponse, RawInput};
