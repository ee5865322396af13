//! Core types and error definitions for the SKU findability registry.
//!
//! This crate provides the types shared by the registry and its front ends,
//! including error handling and the findability record model.
//!
//! # Main types
//!
//! - [`SkuFindError`] — Unified error enum for configuration, parsing and rendering.
//! - [`SkuFindResult`] — Convenience alias for `Result<T, SkuFindError>`.
//! - [`FindabilityStatus`] — Whether a SKU was found, partially found or not found.
//! - [`FindabilityRecord`] — The status record held for a single SKU.
//! - [`FindabilityUpdate`] — The caller-supplied fields of an insert or update.
//! - [`Details`] — Ordered free-form attributes with [`DetailValue`] scalars.

/// Findability record model.
pub mod record;

pub use record::{
    is_valid_confidence, DetailValue, Details, FindabilityRecord, FindabilityStatus,
    FindabilityUpdate,
};

// --- Error types ---

/// Top-level error type for the SKU findability crates.
///
/// Registry lookups and writes never produce this type: absence is an
/// `Option` and write conflicts are a `bool`. These variants cover the
/// surfaces around the registry.
#[derive(Debug, thiserror::Error)]
pub enum SkuFindError {
    /// An error in configuration loading or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// A status name outside the known set.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// A record the registry refused to store.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`SkuFindError`].
pub type SkuFindResult<T> = Result<T, SkuFindError>;
