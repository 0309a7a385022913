use crate::parameters::ParametersError;
use crate::parameters::Result;

/// Controls which messages get an input-object representation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputMode {
    /// Every declared message (and everything reachable from it).
    All,
    /// No input types at all. Service methods take no arguments.
    None,
    /// Request messages of service methods and everything reachable from
    /// them.
    #[default]
    Service,
}
impl InputMode {
    pub(super) fn from_param_value(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            "service" => Ok(Self::Service),
            other => Err(ParametersError::InvalidValue {
                expected: "one of `none`, `service`, `all`",
                key: "input_mode".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
