//! Bootstrap errors

use thiserror::Error;

/// Terminal failures raised while bringing up the window and its context.
///
/// Neither variant is retried. The binary reports the message on stderr and
/// exits with [`InitError::exit_code`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The windowing library could not initialize (no display server,
    /// missing platform support, or a subsystem is already live)
    #[error("Failed to init windowing subsystem: {reason}")]
    SubsystemInitFailed {
        /// Backend supplied detail
        reason: String,
    },

    /// The window or its requested context could not be created
    #[error("Failed to create window: {reason}")]
    WindowCreationFailed {
        /// Backend supplied detail
        reason: String,
    },
}

impl InitError {
    /// Process exit code for this failure
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::SubsystemInitFailed { .. } => -1,
            Self::WindowCreationFailed { .. } => -2,
        }
    }

    pub(crate) fn subsystem(reason: impl Into<String>) -> Self {
        Self::SubsystemInitFailed {
            reason: reason.into(),
        }
    }

    pub(crate) fn window(reason: impl Into<String>) -> Self {
        Self::WindowCreationFailed {
            reason: reason.into(),
        }
    }
}
