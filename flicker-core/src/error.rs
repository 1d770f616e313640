//! Failure taxonomy shared by every stage before and at launch.
//!
//! Every variant terminates the run. None of them is transient, so nothing
//! here is retried.

use thiserror::Error;

pub type Result<T, E = FlickerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum FlickerError {
    /// A required parameter was absent or empty.
    #[error("missing required parameter `{param}`")]
    MissingRequiredParameter {
        /// Parameter name as written on the command line.
        param: String,
    },
    /// A value could not be coerced to the parameter's declared type.
    #[error("invalid value {value:?} for `{param}`: expected {expected}")]
    InvalidParameterType {
        param: String,
        value: String,
        expected: String,
    },
    /// TR or volume count would yield an empty or negative run.
    #[error("invalid duration: tr={tr} and n_volumes={n_volumes} must both be positive")]
    InvalidDuration { tr: f64, n_volumes: i64 },
    /// The renderer executable could not be found or started.
    #[error("failed to launch renderer `{program}`: {source}")]
    LaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl FlickerError {
    pub fn missing(param: impl Into<String>) -> Self {
        FlickerError::MissingRequiredParameter {
            param: param.into(),
        }
    }

    pub fn invalid(
        param: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        FlickerError::InvalidParameterType {
            param: param.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}
