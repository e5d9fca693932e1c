//! excode core - error codes on errors, and error-code vectors over error trees
//!
//! This crate provides:
//! - The [`ErrorNode`] capability: a metadata store, a single cause, and the
//!   components of a composite error
//! - [`ExError`], a structured error type implementing it
//! - The code store: tag an error with a short, stable code and read it back
//! - The vector builder: summarize every code in an error tree as one line,
//!   e.g. `"ErrorA -> ErrorB -> [ErrorC -> ErrorD, ErrorE]"`
//! - A structured logging facility built on `tracing`

pub mod codes;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use codes::{
    add_error_code, freeze_error_codes_vector, get_error_code, get_error_codes_vector, DataKeys,
    ErrorCodeExt,
};
pub use errors::{CodeError, ExError, ExErrorKind, Result};
pub use model::{ErrorNode, Metadata};
