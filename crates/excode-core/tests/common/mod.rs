use excode_core::{ExError, ExErrorKind};

/// A plain error without a code
#[allow(dead_code)]
pub fn plain() -> ExError {
    ExError::new(ExErrorKind::Internal)
}

/// A plain error tagged with `code` under the default keys
#[allow(dead_code)]
pub fn tagged(code: &str) -> ExError {
    plain().with_error_code(code).unwrap()
}

/// A plain error caused by `cause`, optionally tagged
#[allow(dead_code)]
pub fn wrapping(cause: ExError, code: Option<&str>) -> ExError {
    let err = plain().with_source(cause);
    match code {
        Some(code) => err.with_error_code(code).unwrap(),
        None => err,
    }
}

/// A composite of `components`, optionally tagged
#[allow(dead_code)]
pub fn composite(components: Vec<ExError>, code: Option<&str>) -> ExError {
    let err = ExError::composite(ExErrorKind::Aggregate, components);
    match code {
        Some(code) => err.with_error_code(code).unwrap(),
        None => err,
    }
}

/// Build the A -> B -> [C -> D, E -> F, G] tree, tagging only the named nodes
///
/// B and E are composites; A and C wrap a single cause.
#[allow(dead_code)]
pub fn abcdefg_tree(codes: &[&str]) -> ExError {
    let code = |name: &str| -> Option<String> {
        let wanted = format!("Error{name}");
        codes.contains(&wanted.as_str()).then_some(wanted)
    };
    let leaf = |name: &str| match code(name) {
        Some(c) => tagged(&c),
        None => plain(),
    };

    let f = leaf("F");
    let e = composite(vec![f], code("E").as_deref());
    let d = leaf("D");
    let c = wrapping(d, code("C").as_deref());
    let g = leaf("G");
    let b = composite(vec![c, e, g], code("B").as_deref());
    wrapping(b, code("A").as_deref())
}
