//! Error codes attached to errors, and error-code vectors built from them
//!
//! - [`add_error_code`] / [`get_error_code`]: store and read a single code
//! - [`get_error_codes_vector`]: summarize the codes of a whole error tree
//! - [`freeze_error_codes_vector`]: store a tree's summary on its root so
//!   later walks stop there
//!
//! [`ErrorCodeExt`] exposes the same operations as methods on every
//! [`ErrorNode`], using the default [`DataKeys`] unless told otherwise.
//!
//! # Example
//!
//! ```
//! use excode_core::codes::ErrorCodeExt;
//! use excode_core::errors::{ExError, ExErrorKind};
//!
//! let inner = ExError::new(ExErrorKind::Io).with_error_code("DiskFull").unwrap();
//! let outer = ExError::new(ExErrorKind::Internal)
//!     .with_source(inner)
//!     .with_error_code("SaveFailed")
//!     .unwrap();
//!
//! assert_eq!(outer.error_code().as_deref(), Some("SaveFailed"));
//! assert_eq!(outer.error_codes_vector().as_deref(), Some("SaveFailed -> DiskFull"));
//! ```

pub mod keys;
pub mod store;
pub mod vector;

pub use keys::DataKeys;
pub use store::{add_error_code, get_error_code};
pub use vector::{freeze_error_codes_vector, get_error_codes_vector};

use crate::errors::Result;
use crate::model::ErrorNode;
use excode_core_types::schema::DATA_KEY_FOR_ERROR_CODE;

/// Method-call access to the code store and vector builder
pub trait ErrorCodeExt: ErrorNode {
    /// Tag this error under the default keys
    ///
    /// # Errors
    ///
    /// See [`add_error_code`].
    fn add_error_code(&mut self, error_code: &str) -> Result<&mut Self> {
        store::add_error_code(self, error_code, &DataKeys::default())
    }

    /// Tag this error under custom keys
    ///
    /// # Errors
    ///
    /// See [`add_error_code`].
    fn add_error_code_with_keys(&mut self, error_code: &str, keys: &DataKeys) -> Result<&mut Self> {
        store::add_error_code(self, error_code, keys)
    }

    /// This error's own code under the default key
    fn error_code(&self) -> Option<String> {
        get_error_code(self, DATA_KEY_FOR_ERROR_CODE).unwrap_or_default()
    }

    /// This error's own code under `key`
    ///
    /// # Errors
    ///
    /// See [`get_error_code`].
    fn error_code_at(&self, key: &str) -> Result<Option<String>> {
        get_error_code(self, key)
    }

    /// The error-code vector of the tree rooted here, under the default keys
    fn error_codes_vector(&self) -> Option<String> {
        get_error_codes_vector(self, &DataKeys::default()).unwrap_or_default()
    }

    /// The error-code vector of the tree rooted here, under custom keys
    ///
    /// # Errors
    ///
    /// See [`get_error_codes_vector`].
    fn error_codes_vector_with_keys(&self, keys: &DataKeys) -> Result<Option<String>> {
        get_error_codes_vector(self, keys)
    }

    /// Freeze the vector of the tree rooted here under the default keys
    ///
    /// # Errors
    ///
    /// See [`freeze_error_codes_vector`].
    fn freeze_error_codes_vector(&mut self) -> Result<Option<String>> {
        vector::freeze_error_codes_vector(self, &DataKeys::default())
    }
}

impl<T: ErrorNode + ?Sized> ErrorCodeExt for T {}
