use thiserror::Error;

/// A malformed generation option. Reported before generation starts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParametersError {
    #[error("Invalid value `{value}` for option `{key}`: expected {expected}")]
    InvalidValue {
        expected: &'static str,
        key: String,
        value: String,
    },

    #[error(
        "Maps of well-known types must be in the format of 'key=value', got \
        `{value}`"
    )]
    MalformedWellKnownTypeMapping {
        value: String,
    },
}
