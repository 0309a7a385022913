/// Field number of the `graphql.operation` extension on
/// `google.protobuf.MethodOptions` (see `proto/graphql/graphql.proto`).
///
/// Must match the tag on [`MethodOperationOptions::operation`].
pub const OPERATION_EXTENSION_FIELD_NUMBER: u32 = 50000;

/// The GraphQL root operation a service method is exposed under.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    /// The method opts out of GraphQL entirely.
    None,
    #[default]
    Query,
    Subscription,
}
impl OperationKind {
    /// Decodes the string value of a `graphql.operation` method option.
    pub fn from_annotation(value: &str) -> Self {
        match value {
            "mutation" => Self::Mutation,
            "none" => Self::None,
            "query" => Self::Query,
            "subscription" => Self::Subscription,
            other => {
                log::warn!(
                    "Unrecognized `graphql.operation` value `{other}`, treating \
                    the method as a query."
                );
                Self::Query
            },
        }
    }

    /// The suffix of the root type name that collects methods of this kind.
    pub fn root_type_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Mutation => Some("Mutation"),
            Self::None => None,
            Self::Query => Some("Query"),
            Self::Subscription => Some("Subscription"),
        }
    }
}

/// A partial view of an encoded `FileDescriptorProto` that keeps only the
/// path down to the `graphql.operation` method option.
///
/// `prost-types` drops extension fields when decoding descriptor options, so
/// the same file bytes are decoded a second time into this tree. Every field
/// not named here is skipped as unknown.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileOperationAnnotations {
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceOperationAnnotations>,
}
impl FileOperationAnnotations {
    /// The decoded operation kind for the `method_index`th method of the
    /// `service_index`th service of the file.
    pub fn operation(&self, service_index: usize, method_index: usize) -> OperationKind {
        self.service.get(service_index)
            .and_then(|service| service.method.get(method_index))
            .and_then(|method| method.options.as_ref())
            .and_then(|options| options.operation.as_deref())
            .map(OperationKind::from_annotation)
            .unwrap_or_default()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceOperationAnnotations {
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodOperationAnnotations>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOperationAnnotations {
    #[prost(message, optional, tag = "4")]
    pub options: Option<MethodOperationOptions>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOperationOptions {
    #[prost(string, optional, tag = "50000")]
    pub operation: Option<String>,
}
