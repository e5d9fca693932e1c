//! Metadata keys used by the code store and vector builder

use crate::errors::{CodeError, Result};
use excode_core_types::schema::{DATA_KEY_FOR_ERROR_CODE, DATA_KEY_FOR_ERROR_CODES_VECTOR};
use serde::{Deserialize, Serialize};

// Parameter names reported in validation failures
pub const PARAM_ERROR_CODE: &str = "error_code";
pub const PARAM_ERROR_CODE_KEY: &str = "error_code_key";
pub const PARAM_ERROR_CODES_VECTOR_KEY: &str = "error_codes_vector_key";
pub const PARAM_METADATA: &str = "node.metadata";

/// The pair of metadata keys an error tree is tagged under
///
/// `Default` yields the well-known keys from
/// [`excode_core_types::schema`]. Hosts that load custom keys from their
/// own configuration can deserialize this directly; missing fields fall
/// back to the defaults.
///
/// ```
/// use excode_core::codes::DataKeys;
///
/// let keys: DataKeys = serde_json::from_str(r#"{"error_code": "svc.code"}"#).unwrap();
/// assert_eq!(keys.error_code, "svc.code");
/// assert_eq!(keys.error_codes_vector, DataKeys::default().error_codes_vector);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataKeys {
    /// Key holding a node's own error code
    pub error_code: String,
    /// Key holding a frozen vector that replaces the node's computed one
    pub error_codes_vector: String,
}

impl DataKeys {
    pub fn new(error_code: impl Into<String>, error_codes_vector: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_codes_vector: error_codes_vector.into(),
        }
    }

    /// Default vector key, custom plain-code key
    pub fn with_error_code_key(error_code: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            ..Self::default()
        }
    }

    /// Default plain-code key, custom vector key
    pub fn with_error_codes_vector_key(error_codes_vector: impl Into<String>) -> Self {
        Self {
            error_codes_vector: error_codes_vector.into(),
            ..Self::default()
        }
    }

    /// Check both keys are non-blank and distinct
    ///
    /// # Errors
    ///
    /// [`CodeError::BlankArgument`] naming the blank key, or
    /// [`CodeError::KeysEqual`] when both keys are the same.
    pub fn validate(&self) -> Result<()> {
        require_non_blank(&self.error_code, PARAM_ERROR_CODE_KEY)?;
        require_non_blank(&self.error_codes_vector, PARAM_ERROR_CODES_VECTOR_KEY)?;
        if self.error_code == self.error_codes_vector {
            return Err(CodeError::KeysEqual {
                key: self.error_code.clone(),
            });
        }
        Ok(())
    }
}

impl Default for DataKeys {
    fn default() -> Self {
        Self::new(DATA_KEY_FOR_ERROR_CODE, DATA_KEY_FOR_ERROR_CODES_VECTOR)
    }
}

pub(crate) fn require_non_blank(value: &str, param: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CodeError::BlankArgument { param });
    }
    Ok(())
}
