//! Core operations.
//!
//! This module contains the conversion logic, separated from CLI argument
//! parsing and output rendering.

pub mod convert;

pub use convert::convert;
