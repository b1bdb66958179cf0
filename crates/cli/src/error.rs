//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library error types found in an `anyhow` chain to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 0 is success; every failure is non-zero.

use hkube_config::ConfigError;
use hkube_inventory::{InventoryError, WriteError};

/// Structured exit codes for hkube-generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - inventory written.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Config or secrets file unreadable, or config malformed.
    ConfigError = 2,

    /// A node could not be turned into a host entry (missing address,
    /// ssh key or headscale version).
    InventoryError = 3,

    /// The inventory could not be serialized or written.
    OutputError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<InventoryError>().is_some() {
                return ExitCode::InventoryError;
            }
            if cause.downcast_ref::<WriteError>().is_some() {
                return ExitCode::OutputError;
            }
        }

        ExitCode::GeneralError
    }
}
