// src/exit.rs
//! Process exit codes for `solgraph`.
//!
//! Scripts driving dataset builds rely on these staying stable.

use std::process::Termination;

use crate::error::SolgraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SolgraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, config, catalog).
    Error = 1,
    /// Bad input: index, edge list, feature table, scores or top-k.
    InvalidInput = 2,
    /// A batch build finished but some samples failed.
    PartialFailure = 3,
}

impl SolgraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Exit code for an error that reached the top level.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<SolgraphError>() {
            Some(
                SolgraphError::IndexOutOfRange { .. }
                | SolgraphError::MalformedGraph { .. }
                | SolgraphError::MissingFeature { .. }
                | SolgraphError::FeatureDimension { .. }
                | SolgraphError::MalformedFeatures { .. }
                | SolgraphError::NotATree(_)
                | SolgraphError::InvalidOrdinal { .. }
                | SolgraphError::InvalidTopK { .. }
                | SolgraphError::InvalidScore { .. }
                | SolgraphError::UnknownCategory(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for SolgraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
