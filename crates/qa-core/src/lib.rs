//! # qa-core
//!
//! Core types and error types for qalog.
//!
//! This crate provides the foundational types shared across all qalog crates:
//! - The question/answer record entity and store outcome enums
//! - The canonical persisted timestamp format
//! - Caller-side input validation
//! - CSV export and import of the record set
//! - CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod export;
pub mod responses;
pub mod timestamp;
pub mod validate;
