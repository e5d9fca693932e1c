//! Core types shared across excode facilities
//!
//! This crate holds the constants that double as a cross-component contract:
//!
//! - **Metadata keys**: default keys under which error codes and frozen
//!   error-code vectors are stored on an error's metadata
//! - **Schema constants**: canonical field keys and event names for logging

pub mod schema;

pub use schema::{DATA_KEY_FOR_ERROR_CODE, DATA_KEY_FOR_ERROR_CODES_VECTOR};
