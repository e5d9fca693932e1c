//! Error-code vectors: one-line summaries of the codes across an error tree
//!
//! A node contributes its own code followed by the contributions of its
//! children. A chain renders as `A -> B -> C`; a composite whose components
//! contribute more than once renders its branches in brackets,
//! `A -> [B -> C, D]`. Nodes that contribute nothing leave no trace, so a
//! chain `A -> (untagged) -> C` renders as `A -> C`.
//!
//! A value stored under the vector key replaces a node's whole contribution
//! and stops the walk below that node.

use super::keys::{DataKeys, PARAM_METADATA};
use super::store::read_code;
use crate::errors::{CodeError, Result};
use crate::logging_facility::elapsed_ms;
use crate::model::{Children, ErrorNode};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const OP_GET_ERROR_CODES_VECTOR: &str = "get_error_codes_vector";
const OP_FREEZE_ERROR_CODES_VECTOR: &str = "freeze_error_codes_vector";

const CHAIN_SEPARATOR: &str = " -> ";
const BRANCH_SEPARATOR: &str = ", ";

/// Build the error-code vector for the tree rooted at `node`
///
/// Returns `Ok(None)` when no node reachable from `node` carries a code.
///
/// # Errors
///
/// Only malformed keys fail ([`CodeError::BlankArgument`],
/// [`CodeError::KeysEqual`]). Missing codes anywhere in the tree are not
/// errors.
pub fn get_error_codes_vector<N>(node: &N, keys: &DataKeys) -> Result<Option<String>>
where
    N: ErrorNode + ?Sized,
{
    let started = Instant::now();
    log_op_start!(
        OP_GET_ERROR_CODES_VECTOR,
        error_code_key = keys.error_code.as_str(),
        error_codes_vector_key = keys.error_codes_vector.as_str()
    );

    if let Err(err) = keys.validate() {
        log_op_error!(
            OP_GET_ERROR_CODES_VECTOR,
            err.clone(),
            duration_ms = elapsed_ms(started)
        );
        return Err(err);
    }

    let vector = contribution(node, keys);
    log_op_end!(
        OP_GET_ERROR_CODES_VECTOR,
        duration_ms = elapsed_ms(started),
        found = vector.is_some()
    );
    Ok(vector)
}

/// Compute the vector of `node` and store it under the vector key
///
/// Later walks that reach `node` use the stored value verbatim instead of
/// descending into its children. Nothing is written when the tree carries
/// no code. Returns the frozen vector.
///
/// # Errors
///
/// - [`CodeError::BlankArgument`] or [`CodeError::KeysEqual`] for bad keys
/// - [`CodeError::KeyOccupied`] if the vector key is already present
/// - [`CodeError::MetadataUnavailable`] if there is a vector to store but
///   the node has no metadata store
pub fn freeze_error_codes_vector<N>(node: &mut N, keys: &DataKeys) -> Result<Option<String>>
where
    N: ErrorNode + ?Sized,
{
    let started = Instant::now();
    log_op_start!(
        OP_FREEZE_ERROR_CODES_VECTOR,
        error_codes_vector_key = keys.error_codes_vector.as_str()
    );

    match freeze(node, keys) {
        Ok(vector) => {
            log_op_end!(
                OP_FREEZE_ERROR_CODES_VECTOR,
                duration_ms = elapsed_ms(started),
                found = vector.is_some()
            );
            Ok(vector)
        }
        Err(err) => {
            log_op_error!(
                OP_FREEZE_ERROR_CODES_VECTOR,
                err.clone(),
                duration_ms = elapsed_ms(started)
            );
            Err(err)
        }
    }
}

fn freeze<N>(node: &mut N, keys: &DataKeys) -> Result<Option<String>>
where
    N: ErrorNode + ?Sized,
{
    keys.validate()?;

    if let Some(metadata) = node.metadata() {
        if metadata.contains_key(&keys.error_codes_vector) {
            return Err(CodeError::KeyOccupied {
                key: keys.error_codes_vector.clone(),
            });
        }
    }

    let Some(vector) = contribution(&*node, keys) else {
        return Ok(None);
    };

    node.metadata_mut()
        .ok_or(CodeError::MetadataUnavailable {
            param: PARAM_METADATA,
        })?
        .set(keys.error_codes_vector.as_str(), vector.as_str());
    Ok(Some(vector))
}

/// Contribution of a single node, recursing into its children
fn contribution<N>(node: &N, keys: &DataKeys) -> Option<String>
where
    N: ErrorNode + ?Sized,
{
    if let Some(frozen) = read_code(node, &keys.error_codes_vector) {
        return Some(frozen);
    }

    let own = read_code(node, &keys.error_code);

    let branches: Vec<String> = Children::of(node)
        .into_vec()
        .into_iter()
        .filter_map(|child| contribution(child, keys))
        .collect();

    let below = match branches.len() {
        0 => None,
        1 => branches.into_iter().next(),
        _ => Some(format!("[{}]", branches.join(BRANCH_SEPARATOR))),
    };

    match (own, below) {
        (Some(own), Some(below)) => Some(format!("{own}{CHAIN_SEPARATOR}{below}")),
        (own, None) => own,
        (None, below) => below,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ExError, ExErrorKind};

    fn tagged(code: &str) -> ExError {
        ExError::new(ExErrorKind::Internal)
            .with_error_code(code)
            .unwrap()
    }

    #[test]
    fn test_single_tagged_node_is_its_own_vector() {
        let err = tagged("Solo");
        assert_eq!(
            get_error_codes_vector(&err, &DataKeys::default()).unwrap(),
            Some("Solo".to_string())
        );
    }

    #[test]
    fn test_untagged_leaf_has_no_vector() {
        let err = ExError::new(ExErrorKind::Internal);
        assert_eq!(
            get_error_codes_vector(&err, &DataKeys::default()).unwrap(),
            None
        );
    }

    #[test]
    fn test_only_surviving_branch_is_not_bracketed() {
        let composite = ExError::composite(
            ExErrorKind::Aggregate,
            [
                ExError::new(ExErrorKind::Io),
                tagged("Only"),
                ExError::new(ExErrorKind::Timeout),
            ],
        );
        assert_eq!(
            contribution(&composite, &DataKeys::default()),
            Some("Only".to_string())
        );
    }

    #[test]
    fn test_walk_through_unsized_node() {
        let err = tagged("Dyn");
        let node: &dyn ErrorNode = &err;
        assert_eq!(
            get_error_codes_vector(node, &DataKeys::default()).unwrap(),
            Some("Dyn".to_string())
        );
    }
}
