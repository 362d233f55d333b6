//! Error types and error handling for the analyzer.
//!
//! This module defines the error types used throughout the analysis. It
//! includes:
//!
//! - An error structure with source position information
//! - Specific error variants for the lexical, syntactic and semantic phases
//! - Classification of each variant into one of the three fault kinds
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
