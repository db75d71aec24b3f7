//! `movegen` - Generator for the script-element moving-between-documents
//! test suite
//!
//! This library enumerates the matrix of script-moving test cases, renders
//! each one into a self-contained HTML document, and keeps a generated
//! directory in sync with the matrix.

pub mod cli;
pub mod emit;
pub mod error;
pub mod matrix;
pub mod observability;
pub mod template;
