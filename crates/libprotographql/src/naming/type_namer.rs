use crate::naming::camel_case;
use crate::naming::lower_camel_case;
use crate::parameters::FieldNaming;
use crate::parameters::Parameters;

const INPUT_SUFFIX: &str = "Input";
const MAP_ENTRY_SUFFIX: &str = "Entry";
const SEPARATOR: char = '_';

/// The pieces a GraphQL type name is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeNameParts<'a> {
    input: bool,
    is_map_entry: bool,
    package: &'a str,
    type_path: Vec<&'a str>,
}
impl<'a> TypeNameParts<'a> {
    pub fn new(
        package: &'a str,
        type_path: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            input: false,
            is_map_entry: false,
            package,
            type_path: type_path.into_iter().collect(),
        }
    }

    /// Name the input-object representation instead of the output one.
    pub fn input(mut self, input: bool) -> Self {
        self.input = input;
        self
    }

    /// The last path segment names a synthetic map-entry type, so its `Entry`
    /// suffix is dropped to reuse the map field's own name.
    pub fn map_entry(mut self, is_map_entry: bool) -> Self {
        self.is_map_entry = is_map_entry;
        self
    }

    /// Appends a trailing path segment (a oneof name, a oneof variant name).
    pub fn segment(mut self, segment: &'a str) -> Self {
        self.type_path.push(segment);
        self
    }
}

/// Builds GraphQL type and field names according to the naming options of a
/// generation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeNamer {
    disable_all_prefixes: bool,
    field_naming: FieldNaming,
    trim_prefixes: Vec<String>,
}
impl TypeNamer {
    pub fn new(params: &Parameters) -> Self {
        Self {
            disable_all_prefixes: params.disable_all_prefixes(),
            field_naming: params.field_naming(),
            trim_prefixes: params.trim_prefixes().to_vec(),
        }
    }

    /// `<Package>_<Outer>_<Inner>[_Input]`, each part camel-cased.
    ///
    /// The package contributes a single camel-cased segment
    /// (`foo.bar_baz` -> `FooBarBaz`). When it is empty, trimmed away, or
    /// prefixes are disabled, the name starts directly with the first path
    /// segment.
    pub fn type_name(&self, parts: &TypeNameParts<'_>) -> String {
        let mut name = self.package_prefix(parts.package);

        let last_index = parts.type_path.len().saturating_sub(1);
        for (index, segment) in parts.type_path.iter().enumerate() {
            let segment =
                if parts.is_map_entry && index == last_index {
                    segment.strip_suffix(MAP_ENTRY_SUFFIX).unwrap_or(segment)
                } else {
                    segment
                };

            if !name.is_empty() {
                name.push(SEPARATOR);
            }
            name.push_str(camel_case(segment).as_str());
        }

        if parts.input {
            name.push(SEPARATOR);
            name.push_str(INPUT_SUFFIX);
        }

        name
    }

    /// Applies the configured [`FieldNaming`] to a protobuf field, oneof, or
    /// method name.
    pub fn field_name(&self, proto_name: &str) -> String {
        match self.field_naming {
            FieldNaming::LowerCamelCase => lower_camel_case(proto_name),
            FieldNaming::Preserve => proto_name.to_string(),
        }
    }

    fn package_prefix(&self, package: &str) -> String {
        if self.disable_all_prefixes {
            return String::new();
        }

        let package = self.trim_prefixes.iter()
            .find_map(|prefix| {
                if package == prefix {
                    Some("")
                } else {
                    package.strip_prefix(prefix.as_str())
                        .and_then(|rest| rest.strip_prefix('.'))
                }
            })
            .unwrap_or(package);

        let segments: Vec<&str> =
            package.split('.')
                .filter(|segment| !segment.is_empty())
                .collect();
        camel_case(segments.join("_").as_str())
    }
}
