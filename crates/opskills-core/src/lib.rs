//! opskills-core: reference data, context resolution and scoring.
//!
//! This crate holds the static answer key for the operator skills quiz and
//! the pure scoring logic that grades a user's selections against it.

pub mod audit;
pub mod error;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod reference;
pub mod report;
pub mod resolver;
pub mod scoring;
