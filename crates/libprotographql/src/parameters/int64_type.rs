use crate::parameters::ParametersError;
use crate::parameters::Result;

/// The GraphQL scalar used for 64-bit integer fields.
///
/// 64-bit integers do not fit in GraphQL's `Int`, and JavaScript clients lose
/// precision past 2^53 when they are sent as numbers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Int64Type {
    /// `Float`.
    Number,
    /// `String`.
    #[default]
    String,
}
impl Int64Type {
    pub(super) fn from_param_value(key: &str, value: &str) -> Result<Self> {
        match value {
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            other => Err(ParametersError::InvalidValue {
                expected: "one of `string`, `number`",
                key: key.to_string(),
                value: other.to_string(),
            }),
        }
    }
}
