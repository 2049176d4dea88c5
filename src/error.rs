//! The tour's single flat fault category.

use std::any::Any;

use thiserror::Error;

/// A demonstration failed: either it returned an error of its own, or
/// it panicked and the driver caught the unwind. There is no deeper
/// hierarchy; every fault ends the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemoError {
    #[error("example '{demo}' failed: {message}")]
    Failed { demo: String, message: String },

    #[error("example '{demo}' panicked: {message}")]
    Panicked { demo: String, message: String },
}

impl DemoError {
    pub fn failed(demo: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            demo: demo.into(),
            message: message.into(),
        }
    }

    /// Builds the fault for a caught panic, recovering the payload text
    /// when the panic carried one.
    pub fn panicked(demo: impl Into<String>, payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked {
            demo: demo.into(),
            message,
        }
    }
}
