//! Error types for idemseq operations.
//!
//! This module defines [`IdemseqError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration and selector mistakes (`DuplicateName`, `NotFound`,
//!   `InvalidSelector`) are fatal and surface immediately
//! - `AlreadyCompleted` is a control signal: the runner treats it as a skip,
//!   direct step invocation hands it to the caller
//! - Step bodies return `anyhow::Result`; their failures are wrapped in
//!   `StepFailed` with the original error kept as the source
//! - Status store failures are never swallowed

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for idemseq operations.
#[derive(Debug, Error)]
pub enum IdemseqError {
    /// A step or provider with this name is already registered.
    #[error("A step named '{name}' is already registered")]
    DuplicateName { name: String },

    /// Lookup of an unregistered step.
    #[error("Unknown step: {name}")]
    NotFound { name: String },

    /// `start_at`/`stop_before`/reset selector naming no step.
    #[error("Invalid step selector: {selector}")]
    InvalidSelector { selector: String },

    /// The step (or the whole sequence) has already finished.
    #[error("Step '{step}' has already completed")]
    AlreadyCompleted { step: String },

    /// A step ordered earlier has not finished yet.
    #[error("Cannot run '{step}': previous step '{pending}' has not finished")]
    PreviousStepsNotFinished { step: String, pending: String },

    /// A declared parameter has no value in any active scope.
    #[error("Step '{step}' requires '{param}' but no value was provided")]
    MissingContext { step: String, param: String },

    /// Status text outside `unknown`/`failed`/`finished`.
    #[error("Invalid step status: {value}")]
    InvalidStatus { value: String },

    /// Attempt to pop the baseline execution scope.
    #[error("Cannot pop the baseline execution scope")]
    ScopeUnderflow,

    /// Providers depend on each other in a loop.
    #[error("Provider cycle detected: {chain}")]
    ProviderCycle { chain: String },

    /// A step body returned an error.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: anyhow::Error,
    },

    /// A context provider returned an error.
    #[error("Provider '{provider}' failed: {source}")]
    ProviderFailed {
        provider: String,
        #[source]
        source: anyhow::Error,
    },

    /// Manifest could not be read or parsed.
    #[error("Invalid manifest at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Status store error.
    #[error("Status store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IdemseqError {
    /// Whether this is the benign "already done" signal.
    pub fn is_already_completed(&self) -> bool {
        matches!(self, IdemseqError::AlreadyCompleted { .. })
    }

    /// Whether this error came from a bad step name supplied by the caller.
    pub fn is_selector_error(&self) -> bool {
        matches!(
            self,
            IdemseqError::NotFound { .. } | IdemseqError::InvalidSelector { .. }
        )
    }
}

/// Result type alias for idemseq operations.
pub type Result<T> = std::result::Result<T, IdemseqError>;
