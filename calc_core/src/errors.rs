//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Two domain errors come from the earth pressure solver:
//!
//! - [`ValidationError`] - the layer stack is inconsistent (raised by `validate`)
//! - [`SolveError`] - the solve request cannot run (raised by `solve`)
//!
//! Both lift into the crate-wide [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcResult, ValidationError};
//!
//! fn validate_height(total_height_m: f64) -> CalcResult<()> {
//!     if total_height_m <= 0.0 {
//!         return Err(ValidationError::invalid_stack(
//!             "total_height_m",
//!             total_height_m,
//!             "Wall height must be positive",
//!         )
//!         .into());
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_height(-5.0).unwrap_err().error_code(), "VALIDATION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Problems with a [`LayerStack`](crate::calculations::layers::LayerStack).
///
/// Every variant is fatal: a stack that fails validation is never solved.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// The stack has no layers at all
    #[error("The layer stack is empty - at least one soil layer is required")]
    NoLayers,

    /// A layer other than the last one has no thickness
    #[error("Layer {layer} has no thickness - only the last layer's thickness is derived")]
    MissingThickness { layer: usize },

    /// A layer value is out of its physical range
    #[error("Invalid value for '{field}' in layer {layer}: {value} - {reason}")]
    InvalidLayer {
        layer: usize,
        field: String,
        value: String,
        reason: String,
    },

    /// A stack-level value (height, surcharge) is out of range
    #[error("Invalid value for '{field}': {value} - {reason}")]
    InvalidStack {
        field: String,
        value: String,
        reason: String,
    },

    /// Explicit thicknesses add up to more than the wall height
    #[error(
        "Layer thicknesses exceed wall height: the layers above the last one sum to {sum_m:.2} m \
         but the wall is only {total_height_m:.2} m high"
    )]
    HeightExceeded { sum_m: f64, total_height_m: f64 },

    /// The derived thickness of the last layer is zero
    #[error(
        "Last layer has zero thickness: the layers above it sum to {sum_m:.2} m, \
         which equals the wall height {total_height_m:.2} m"
    )]
    DegenerateLastLayer { sum_m: f64, total_height_m: f64 },
}

impl ValidationError {
    /// Create an InvalidLayer error
    pub fn invalid_layer(layer: usize, field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        ValidationError::InvalidLayer {
            layer,
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidStack error
    pub fn invalid_stack(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        ValidationError::InvalidStack {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Reasons a solve request is refused.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolveError {
    /// Water table outside `[0, total_height]`
    #[error(
        "Water table height {height_above_base_m} m is outside the wall \
         (must be between 0 and {total_height_m} m above the base)"
    )]
    InvalidWaterTable {
        height_above_base_m: f64,
        total_height_m: f64,
    },

    /// The layer stack did not validate
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Soil not found in the catalog
    #[error("Soil not found: {soil_name}")]
    SoilNotFound { soil_name: String },

    /// Layer stack validation failed
    #[error("{0}")]
    Validation(ValidationError),

    /// Solve request refused
    #[error("{0}")]
    Solve(SolveError),

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a SoilNotFound error
    pub fn soil_not_found(soil_name: impl Into<String>) -> Self {
        CalcError::SoilNotFound {
            soil_name: soil_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::SoilNotFound { .. } => "SOIL_NOT_FOUND",
            CalcError::Validation(ValidationError::HeightExceeded { .. }) => "HEIGHT_EXCEEDED",
            CalcError::Validation(ValidationError::DegenerateLastLayer { .. }) => "DEGENERATE_LAST_LAYER",
            CalcError::Validation(_) => "VALIDATION_ERROR",
            CalcError::Solve(SolveError::InvalidWaterTable { .. }) => "INVALID_WATER_TABLE",
            CalcError::Solve(SolveError::Validation(inner)) => CalcError::Validation(inner.clone()).error_code(),
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<ValidationError> for CalcError {
    fn from(err: ValidationError) -> Self {
        CalcError::Validation(err)
    }
}

impl From<SolveError> for CalcError {
    fn from(err: SolveError) -> Self {
        CalcError::Solve(err)
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
