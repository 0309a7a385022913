use crate::parameters::FieldNaming;
use crate::parameters::InputMode;
use crate::parameters::Int64Type;
use crate::parameters::ParametersError;
use crate::parameters::Result;
use indexmap::IndexMap;

pub(crate) const TIMESTAMP_PROTO_NAME: &str = ".google.protobuf.Timestamp";
pub(crate) const DURATION_PROTO_NAME: &str = ".google.protobuf.Duration";

/// The full set of options for one generation run.
///
/// Built from the comma-separated parameter string protoc passes to the plugin
/// (e.g. `--graphql_opt=input_mode=all,null_wrappers`). Keys may use `_` or `-`
/// as the word separator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    pub(crate) disable_all_prefixes: bool,
    pub(crate) duration_type_name: Option<String>,
    pub(crate) field_naming: FieldNaming,
    pub(crate) input_mode: InputMode,
    pub(crate) int64_type: Int64Type,
    pub(crate) map_wellknown_types: IndexMap<String, String>,
    pub(crate) nullable_list_types: bool,
    pub(crate) root_type_prefix: Option<String>,
    pub(crate) service_types_only: bool,
    pub(crate) timestamp_type_name: Option<String>,
    pub(crate) trim_prefixes: Vec<String>,
    pub(crate) wrappers_as_null: bool,
}
impl Parameters {
    pub fn parse(parameter: &str) -> Result<Self> {
        let mut params = Self::default();

        for part in parameter.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (raw_key, value) =
                match part.split_once('=') {
                    Some((key, value)) => (key, Some(value)),
                    None => (part, None),
                };
            let key = raw_key.replace('-', "_");

            match key.as_str() {
                "disable_all_prefixes" =>
                    params.disable_all_prefixes = parse_flag(raw_key, value)?,
                "duration_type_name" =>
                    params.duration_type_name = non_empty(value),
                "field_name" | "field_naming" =>
                    params.field_naming =
                        FieldNaming::from_param_value(value.unwrap_or_default()),
                "input_mode" =>
                    params.input_mode =
                        InputMode::from_param_value(value.unwrap_or_default())?,
                "js_64bit_type" | "64bit_int_type" =>
                    params.int64_type = Int64Type::from_param_value(
                        raw_key,
                        value.unwrap_or_default(),
                    )?,
                "map_wellknown_type" => {
                    let (proto_name, graphql_name) =
                        parse_wellknown_type_mapping(value.unwrap_or_default())?;
                    params.map_wellknown_types.insert(proto_name, graphql_name);
                },
                "null_wrappers" | "wrappers_as_null" =>
                    params.wrappers_as_null = parse_flag(raw_key, value)?,
                "nullable_list_types" =>
                    params.nullable_list_types = parse_flag(raw_key, value)?,
                "root_type_prefix" =>
                    params.root_type_prefix =
                        Some(value.unwrap_or_default().to_string()),
                "service_types_only" =>
                    params.service_types_only = parse_flag(raw_key, value)?,
                "timestamp_type_name" =>
                    params.timestamp_type_name = non_empty(value),
                "trim_prefix" =>
                    if let Some(prefix) = non_empty(value) {
                        params.trim_prefixes.push(prefix);
                    },
                _ => log::warn!("Ignoring unrecognized option `{raw_key}`."),
            }
        }

        Ok(params)
    }

    /// Suppress package-derived prefixes on every generated type name.
    pub fn disable_all_prefixes(&self) -> bool {
        self.disable_all_prefixes
    }

    pub fn field_naming(&self) -> FieldNaming {
        self.field_naming
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn int64_type(&self) -> Int64Type {
        self.int64_type
    }

    pub fn nullable_list_types(&self) -> bool {
        self.nullable_list_types
    }

    /// Prefix prepended to the generated `<Service>_Query`,
    /// `<Service>_Mutation` and `<Service>_Subscription` type names.
    pub fn root_type_prefix(&self) -> Option<&str> {
        self.root_type_prefix.as_deref()
    }

    /// Only emit types reachable from service methods.
    pub fn service_types_only(&self) -> bool {
        self.service_types_only
    }

    /// Package prefixes stripped before building type names.
    pub fn trim_prefixes(&self) -> &[String] {
        self.trim_prefixes.as_slice()
    }

    /// The merged table of fixed type-name substitutions, keyed by
    /// fully-qualified (leading-dot) protobuf type name.
    ///
    /// `map_wellknown_type` entries take precedence over
    /// `timestamp_type_name` and `duration_type_name`.
    pub fn well_known_type_overrides(&self) -> IndexMap<String, String> {
        let mut overrides = IndexMap::new();
        if let Some(name) = &self.timestamp_type_name {
            overrides.insert(TIMESTAMP_PROTO_NAME.to_string(), name.to_owned());
        }
        if let Some(name) = &self.duration_type_name {
            overrides.insert(DURATION_PROTO_NAME.to_string(), name.to_owned());
        }
        for (proto_name, graphql_name) in &self.map_wellknown_types {
            overrides.insert(proto_name.to_owned(), graphql_name.to_owned());
        }
        overrides
    }

    /// Lower boxed-scalar wrapper types (`google.protobuf.StringValue`, ...)
    /// to their nullable underlying scalar.
    pub fn wrappers_as_null(&self) -> bool {
        self.wrappers_as_null
    }
}
impl std::str::FromStr for Parameters {
    type Err = ParametersError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

fn parse_flag(key: &str, value: Option<&str>) -> Result<bool> {
    match value {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(ParametersError::InvalidValue {
            expected: "`true` or `false`",
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_wellknown_type_mapping(value: &str) -> Result<(String, String)> {
    let pair: Vec<&str> = value.split('=').collect();
    match pair.as_slice() {
        [proto_name, graphql_name]
            if !proto_name.is_empty() && !graphql_name.is_empty() => {
            let proto_name =
                if proto_name.starts_with('.') {
                    proto_name.to_string()
                } else {
                    format!(".{proto_name}")
                };
            Ok((proto_name, graphql_name.to_string()))
        },
        _ => Err(ParametersError::MalformedWellKnownTypeMapping {
            value: value.to_string(),
        }),
    }
}
