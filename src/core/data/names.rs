use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}', expected one of: {expected}")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}

/// Looks `name` up among the identifiers of `all`, case-insensitively.
pub(crate) fn parse_named<T: Copy>(
    all: &[T],
    identifier: fn(T) -> &'static str,
    kind: &'static str,
    name: &str,
) -> Result<T, UnknownNameError> {
    all.iter()
        .copied()
        .find(|&candidate| identifier(candidate).eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| UnknownNameError {
            kind,
            name: name.to_string(),
            expected: all
                .iter()
                .map(|&candidate| identifier(candidate))
                .collect::<Vec<_>>()
                .join(", "),
        })
}
