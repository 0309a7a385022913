use crate::descriptor::DescriptorGraph;
use crate::descriptor::EnumDescriptor;
use crate::descriptor::FieldKind;
use crate::descriptor::MessageDescriptor;
use crate::descriptor::ServiceDescriptor;
use crate::generator::GenerateError;
use crate::naming::TypeNameParts;
use crate::naming::TypeNamer;
use crate::parameters::InputMode;
use crate::parameters::Parameters;
use crate::resolver::ResolvedNames;

type Result<T> = std::result::Result<T, GenerateError>;

/// Walks a [`DescriptorGraph`] in dependency order and fills in the
/// [`ResolvedNames`] tables.
///
/// Names are assigned once and never recomputed: a visit that finds its type
/// already named in the relevant table stops there. That single check is both
/// the deduplication and the cycle guard, so self-referential and mutually
/// recursive messages are visited once per table.
#[derive(Debug)]
pub struct NameResolver<'graph> {
    graph: &'graph DescriptorGraph,
    names: ResolvedNames<'graph>,
    namer: TypeNamer,
    params: &'graph Parameters,
}
impl<'graph> NameResolver<'graph> {
    pub fn new(graph: &'graph DescriptorGraph, params: &'graph Parameters) -> Self {
        Self {
            graph,
            names: ResolvedNames::default(),
            namer: TypeNamer::new(params),
            params,
        }
    }

    /// Convenience for `NameResolver::new(graph, params).resolve()`.
    pub fn resolve_graph(
        graph: &'graph DescriptorGraph,
        params: &'graph Parameters,
    ) -> Result<ResolvedNames<'graph>> {
        Self::new(graph, params).resolve()
    }

    pub fn resolve(mut self) -> Result<ResolvedNames<'graph>> {
        let graph = self.graph;
        for file in graph.files() {
            log::trace!("Resolving names for `{}`.", file.name());

            // Index every declared type first, regardless of mode, so later
            // references from this file or any file after it can be resolved.
            for message in file.messages() {
                self.names.messages.insert(message.full_name(), message);
            }
            for enum_ in file.enums() {
                self.names.enums.insert(enum_.full_name(), enum_);
            }

            if !self.params.service_types_only() {
                for message in file.messages() {
                    self.visit_message(message, false)?;
                    if self.params.input_mode() == InputMode::All {
                        self.visit_message(message, true)?;
                    }
                }
                for enum_ in file.enums() {
                    self.visit_enum(enum_);
                }
            }

            for service in file.services() {
                self.visit_service(service)?;
            }
        }

        log::debug!(
            "Resolved {} output names, {} input names and {} erased messages.",
            self.names.output_names.len(),
            self.names.input_names.len(),
            self.names.erased_messages.len(),
        );
        Ok(self.names)
    }

    fn visit_service(&mut self, service: &'graph ServiceDescriptor) -> Result<()> {
        let service_name = self.namer.type_name(&TypeNameParts::new(
            service.package(),
            service.type_path().iter().map(String::as_str),
        ));
        self.names.output_names.insert(service.full_name().to_string(), service_name);

        for method in service.methods() {
            if self.params.service_types_only() {
                let response = self.lookup_message(
                    service.full_name(),
                    method.output_type(),
                )?;
                self.visit_message(response, false)?;
            }
            if self.params.input_mode() != InputMode::None {
                let request = self.lookup_message(
                    service.full_name(),
                    method.input_type(),
                )?;
                self.visit_message(request, true)?;
            }
        }

        Ok(())
    }

    fn visit_message(
        &mut self,
        message: &'graph MessageDescriptor,
        input: bool,
    ) -> Result<()> {
        let names =
            if input {
                &mut self.names.input_names
            } else {
                &mut self.names.output_names
            };

        if names.contains_key(message.full_name()) {
            return Ok(());
        }
        if message.is_empty() {
            self.names.erased_messages.insert(message.full_name().to_string());
            return Ok(());
        }

        let type_name = self.namer.type_name(
            &TypeNameParts::new(
                message.package(),
                message.type_path().iter().map(String::as_str),
            )
            .input(input)
            .map_entry(message.is_map_entry()),
        );
        log::trace!(
            "Assigned {} name `{type_name}` to `{}`.",
            if input { "input" } else { "output" },
            message.full_name(),
        );
        names.insert(message.full_name().to_string(), type_name);

        for field in message.fields() {
            let Some(type_name) = field.type_name() else {
                continue;
            };
            match field.kind() {
                FieldKind::Message => {
                    let referenced = self.lookup_message(message.full_name(), type_name)?;
                    self.visit_message(referenced, input)?;
                },
                FieldKind::Enum => {
                    let referenced = self.lookup_enum(message.full_name(), type_name)?;
                    self.visit_enum(referenced);
                },
                _ => (),
            }
        }

        Ok(())
    }

    /// Enums have no separate input form, so they always land in the output
    /// table.
    fn visit_enum(&mut self, enum_: &'graph EnumDescriptor) {
        if self.names.output_names.contains_key(enum_.full_name()) {
            return;
        }
        let type_name = self.namer.type_name(&TypeNameParts::new(
            enum_.package(),
            enum_.type_path().iter().map(String::as_str),
        ));
        log::trace!("Assigned enum name `{type_name}` to `{}`.", enum_.full_name());
        self.names.output_names.insert(enum_.full_name().to_string(), type_name);
    }

    fn lookup_enum(
        &self,
        referenced_by: &str,
        type_name: &str,
    ) -> Result<&'graph EnumDescriptor> {
        self.names.enum_descriptor(type_name).ok_or_else(
            || GenerateError::UndefinedTypeReference {
                referenced_by: referenced_by.to_string(),
                type_name: type_name.to_string(),
            }
        )
    }

    fn lookup_message(
        &self,
        referenced_by: &str,
        type_name: &str,
    ) -> Result<&'graph MessageDescriptor> {
        self.names.message(type_name).ok_or_else(
            || GenerateError::UndefinedTypeReference {
                referenced_by: referenced_by.to_string(),
                type_name: type_name.to_string(),
            }
        )
    }
}
