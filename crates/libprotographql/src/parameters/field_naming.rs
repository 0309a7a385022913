/// Casing rule applied to every emitted GraphQL field name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldNaming {
    /// `say_hello` and `SayHello` both become `sayHello`.
    #[default]
    LowerCamelCase,
    /// Field names are emitted exactly as declared in the `.proto` file.
    Preserve,
}
impl FieldNaming {
    /// Any value other than `preserve` selects the default casing.
    pub fn from_param_value(value: &str) -> Self {
        if value == "preserve" {
            Self::Preserve
        } else {
            Self::LowerCamelCase
        }
    }
}
