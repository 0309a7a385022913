use crate::parameters::FieldNaming;
use crate::parameters::InputMode;
use crate::parameters::Int64Type;
use crate::parameters::Parameters;
use crate::parameters::ParametersError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ParametersError>;

#[test]
fn empty_parameter_gives_defaults() -> Result<()> {
    let params = Parameters::parse("")?;

    assert_eq!(params, Parameters::default());
    assert_eq!(params.input_mode(), InputMode::Service);
    assert_eq!(params.int64_type(), Int64Type::String);
    assert_eq!(params.field_naming(), FieldNaming::LowerCamelCase);
    assert_eq!(params.root_type_prefix(), None);
    assert!(!params.service_types_only());
    assert!(!params.wrappers_as_null());
    assert!(params.well_known_type_overrides().is_empty());

    Ok(())
}

#[test]
fn bare_keys_enable_flags() -> Result<()> {
    let params = Parameters::parse(
        "null_wrappers,nullable_list_types,disable_all_prefixes,service_types_only",
    )?;

    assert!(params.wrappers_as_null());
    assert!(params.nullable_list_types());
    assert!(params.disable_all_prefixes());
    assert!(params.service_types_only());

    Ok(())
}

#[test]
fn dashes_and_whitespace_are_normalized() -> Result<()> {
    let params = Parameters::parse(" input-mode=all , js-64bit-type=number ,wrappers-as-null=true")?;

    assert_eq!(params.input_mode(), InputMode::All);
    assert_eq!(params.int64_type(), Int64Type::Number);
    assert!(params.wrappers_as_null());

    Ok(())
}

#[test]
fn explicit_false_disables_a_flag() -> Result<()> {
    let params = Parameters::parse("nullable_list_types,nullable_list_types=false")?;
    assert!(!params.nullable_list_types());
    Ok(())
}

#[test]
fn malformed_flag_values_are_rejected() {
    assert_eq!(Parameters::parse("null_wrappers=yes"), Err(ParametersError::InvalidValue {
        expected: "`true` or `false`",
        key: "null_wrappers".to_string(),
        value: "yes".to_string(),
    }));
}

#[test]
fn input_mode_values() -> Result<()> {
    assert_eq!(Parameters::parse("input_mode=none")?.input_mode(), InputMode::None);
    assert_eq!(Parameters::parse("input_mode=service")?.input_mode(), InputMode::Service);
    assert_eq!(Parameters::parse("input_mode=all")?.input_mode(), InputMode::All);
    assert!(matches!(
        Parameters::parse("input_mode=some"),
        Err(ParametersError::InvalidValue { value, .. }) if value == "some",
    ));
    Ok(())
}

#[test]
fn invalid_int64_type_reports_the_key_as_written() {
    assert_eq!(Parameters::parse("64bit-int-type=bigint"), Err(ParametersError::InvalidValue {
        expected: "one of `string`, `number`",
        key: "64bit-int-type".to_string(),
        value: "bigint".to_string(),
    }));
}

#[test]
fn field_name_preserve() -> Result<()> {
    assert_eq!(Parameters::parse("field_name=preserve")?.field_naming(), FieldNaming::Preserve);
    assert_eq!(
        Parameters::parse("field_name=lower_camel_case")?.field_naming(),
        FieldNaming::LowerCamelCase,
    );
    Ok(())
}

#[test]
fn trim_prefixes_accumulate_and_ignore_empty_values() -> Result<()> {
    let params = Parameters::parse("trim_prefix=com.example,trim_prefix=,trim_prefix=org")?;
    assert_eq!(params.trim_prefixes(), &["com.example".to_string(), "org".to_string()]);
    Ok(())
}

#[test]
fn root_type_prefix_keeps_its_value() -> Result<()> {
    assert_eq!(Parameters::parse("root_type_prefix=Api")?.root_type_prefix(), Some("Api"));
    assert_eq!(Parameters::parse("root_type_prefix")?.root_type_prefix(), Some(""));
    Ok(())
}

#[test]
fn well_known_type_mappings_get_a_leading_dot() -> Result<()> {
    let params = Parameters::parse(
        "map_wellknown_type=google.protobuf.Struct=JSON,\
        map_wellknown_type=.google.protobuf.Any=Any",
    )?;

    let mut expected = IndexMap::new();
    expected.insert(".google.protobuf.Struct".to_string(), "JSON".to_string());
    expected.insert(".google.protobuf.Any".to_string(), "Any".to_string());
    assert_eq!(params.well_known_type_overrides(), expected);

    Ok(())
}

#[test]
fn well_known_type_mappings_override_timestamp_and_duration_names() -> Result<()> {
    let params = Parameters::parse(
        "timestamp_type_name=Timestamp,duration_type_name=Duration,\
        map_wellknown_type=google.protobuf.Timestamp=DateTime",
    )?;

    let overrides = params.well_known_type_overrides();
    assert_eq!(
        overrides.get(".google.protobuf.Timestamp").map(String::as_str),
        Some("DateTime"),
    );
    assert_eq!(
        overrides.get(".google.protobuf.Duration").map(String::as_str),
        Some("Duration"),
    );

    Ok(())
}

#[test]
fn malformed_well_known_type_mappings_are_rejected() {
    for value in ["google.protobuf.Struct", "=JSON", "a=b=c", ""] {
        let parameter = format!("map_wellknown_type={value}");
        assert_eq!(
            Parameters::parse(parameter.as_str()),
            Err(ParametersError::MalformedWellKnownTypeMapping {
                value: value.to_string(),
            }),
            "parameter: {parameter}",
        );
    }
}

#[test]
fn unknown_keys_are_ignored() -> Result<()> {
    let params: Parameters = "paths=source_relative,input_mode=none".parse()?;
    assert_eq!(params.input_mode(), InputMode::None);
    Ok(())
}
