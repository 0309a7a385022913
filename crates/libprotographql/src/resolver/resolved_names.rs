use crate::descriptor::EnumDescriptor;
use crate::descriptor::MessageDescriptor;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;

/// The name tables produced by [`NameResolver`](crate::resolver::NameResolver)
/// along with the lookup-by-name index of every message and enum it has seen.
///
/// Owned by a single generation run and read-only once resolution finishes.
#[derive(Clone, Debug, Default)]
pub struct ResolvedNames<'graph> {
    pub(super) enums: HashMap<&'graph str, &'graph EnumDescriptor>,
    pub(super) erased_messages: IndexSet<String>,
    pub(super) input_names: IndexMap<String, String>,
    pub(super) messages: HashMap<&'graph str, &'graph MessageDescriptor>,
    pub(super) output_names: IndexMap<String, String>,
}
impl<'graph> ResolvedNames<'graph> {
    /// Looks up an enum by its fully-qualified (leading-dot) name.
    pub fn enum_descriptor(&self, full_name: &str) -> Option<&'graph EnumDescriptor> {
        self.enums.get(full_name).copied()
    }

    /// Fully-qualified names of the messages with zero fields. These never get
    /// a GraphQL name.
    pub fn erased_messages(&self) -> &IndexSet<String> {
        &self.erased_messages
    }

    /// The input-object type name assigned to a message, if it needs one.
    pub fn input_name(&self, full_name: &str) -> Option<&str> {
        self.input_names.get(full_name).map(String::as_str)
    }

    /// Message full name -> input-object type name, in assignment order.
    pub fn input_names(&self) -> &IndexMap<String, String> {
        &self.input_names
    }

    pub fn is_erased(&self, full_name: &str) -> bool {
        self.erased_messages.contains(full_name)
    }

    /// Looks up a message by its fully-qualified (leading-dot) name.
    pub fn message(&self, full_name: &str) -> Option<&'graph MessageDescriptor> {
        self.messages.get(full_name).copied()
    }

    /// The object, enum, or service type name assigned to a message, enum, or
    /// service.
    pub fn output_name(&self, full_name: &str) -> Option<&str> {
        self.output_names.get(full_name).map(String::as_str)
    }

    /// Full name -> output type name, in assignment order.
    pub fn output_names(&self) -> &IndexMap<String, String> {
        &self.output_names
    }
}
