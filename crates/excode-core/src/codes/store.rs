//! Error-code storage on a node's metadata

use super::keys::{require_non_blank, DataKeys, PARAM_ERROR_CODE, PARAM_ERROR_CODE_KEY, PARAM_METADATA};
use crate::errors::{CodeError, Result};
use crate::logging_facility::elapsed_ms;
use crate::model::ErrorNode;
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const OP_ADD_ERROR_CODE: &str = "add_error_code";
const OP_GET_ERROR_CODE: &str = "get_error_code";

/// Store `error_code` (trimmed) on `node` under `keys.error_code`
///
/// Each key is written at most once per node: tagging a node whose store
/// already holds either the plain-code key or the vector key is refused.
/// Every check runs before the write, so a failed call leaves the node
/// untouched. Returns the node for chaining.
///
/// # Errors
///
/// - [`CodeError::BlankArgument`] if the code or either key is blank
/// - [`CodeError::KeysEqual`] if both keys are the same
/// - [`CodeError::MetadataUnavailable`] if the node has no metadata store
/// - [`CodeError::KeyOccupied`] if either key is already present
pub fn add_error_code<'a, N>(node: &'a mut N, error_code: &str, keys: &DataKeys) -> Result<&'a mut N>
where
    N: ErrorNode + ?Sized,
{
    let started = Instant::now();
    log_op_start!(
        OP_ADD_ERROR_CODE,
        error_code_key = keys.error_code.as_str(),
        error_codes_vector_key = keys.error_codes_vector.as_str()
    );

    match store_code(&mut *node, error_code, keys) {
        Ok(()) => {
            log_op_end!(OP_ADD_ERROR_CODE, duration_ms = elapsed_ms(started));
            Ok(node)
        }
        Err(err) => {
            log_op_error!(OP_ADD_ERROR_CODE, err.clone(), duration_ms = elapsed_ms(started));
            Err(err)
        }
    }
}

fn store_code<N>(node: &mut N, error_code: &str, keys: &DataKeys) -> Result<()>
where
    N: ErrorNode + ?Sized,
{
    require_non_blank(error_code, PARAM_ERROR_CODE)?;
    keys.validate()?;

    let metadata = node.metadata_mut().ok_or(CodeError::MetadataUnavailable {
        param: PARAM_METADATA,
    })?;

    for key in [&keys.error_code, &keys.error_codes_vector] {
        if metadata.contains_key(key) {
            return Err(CodeError::KeyOccupied { key: key.clone() });
        }
    }

    metadata.set(keys.error_code.as_str(), error_code.trim());
    Ok(())
}

/// Read the error code stored on `node` under `key`
///
/// Returns `Ok(None)` when the node has no metadata store or nothing is
/// stored under `key`.
///
/// # Errors
///
/// [`CodeError::BlankArgument`] if `key` is blank.
pub fn get_error_code<N>(node: &N, key: &str) -> Result<Option<String>>
where
    N: ErrorNode + ?Sized,
{
    let started = Instant::now();
    log_op_start!(OP_GET_ERROR_CODE, error_code_key = key);

    if let Err(err) = require_non_blank(key, PARAM_ERROR_CODE_KEY) {
        log_op_error!(OP_GET_ERROR_CODE, err.clone(), duration_ms = elapsed_ms(started));
        return Err(err);
    }

    let code = read_code(node, key);
    log_op_end!(
        OP_GET_ERROR_CODE,
        duration_ms = elapsed_ms(started),
        found = code.is_some()
    );
    Ok(code)
}

/// Unchecked read used once keys are known to be valid
pub(crate) fn read_code<N>(node: &N, key: &str) -> Option<String>
where
    N: ErrorNode + ?Sized,
{
    node.metadata()?.get_text(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ExError, ExErrorKind};

    fn plain() -> ExError {
        ExError::new(ExErrorKind::Internal)
    }

    #[test]
    fn test_add_then_get_returns_trimmed_code() {
        let mut err = plain();
        add_error_code(&mut err, " a good code ", &DataKeys::default()).unwrap();
        assert_eq!(
            get_error_code(&err, &DataKeys::default().error_code).unwrap(),
            Some("a good code".to_string())
        );
    }

    #[test]
    fn test_failed_add_leaves_metadata_untouched() {
        let mut err = plain();
        let keys = DataKeys::new("same", "same");
        assert!(add_error_code(&mut err, "CODE", &keys).is_err());
        assert!(err.metadata().map(|m| m.is_empty()).unwrap_or(false));
    }

    #[test]
    fn test_blank_code_checked_before_keys() {
        let mut err = plain();
        let keys = DataKeys::new("same", "same");
        assert_eq!(
            add_error_code(&mut err, "   ", &keys).unwrap_err(),
            CodeError::BlankArgument {
                param: PARAM_ERROR_CODE
            }
        );
    }

    #[test]
    fn test_read_code_without_store_is_none() {
        let err = plain().without_metadata();
        assert_eq!(read_code(&err, "anything"), None);
    }
}
