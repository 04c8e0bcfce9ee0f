//! Error types for catalog lookups.
//!
//! Scoring itself never fails. These errors surface only from the typed
//! lookup helpers and from parsing user-provided names and ids.

use thiserror::Error;

/// Failure to find a (sector, role) pair in the answer key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No sector key matched after key canonicalization.
    #[error("sector not found: {0:?}")]
    UnknownSector(String),

    /// The sector matched but none of its role keys did.
    #[error("role {role:?} not found in sector {sector:?}")]
    UnknownRole { sector: String, role: String },
}

/// Errors from parsing catalog names and ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A category name that matches none of the seven categories.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A sector title or id that is not part of the catalog.
    #[error("unknown sector: {0}")]
    UnknownSector(String),

    /// A role title or id that is not part of the catalog.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}
