#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for protots: the protobuf descriptor model.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to `descriptor.proto` messages,
//!   read from the JSON form of a `FileDescriptorSet`
//! - **Scope layer**: the [`TypeScope`] trait, which lets a file and a message
//!   be walked the same way when collecting type names

pub mod colors;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use colors::Colors;

// ============================================================================
// Deserialization Layer
// ============================================================================

/// A batch of file descriptors, as handed to a code generator.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FileDescriptorSet {
    #[serde(default)]
    pub file: Vec<FileDescriptor>,
}

/// One `.proto` compilation unit.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FileDescriptor {
    /// File path relative to the import root, e.g. `pkg/b.proto`.
    #[serde(default)]
    pub name: String,
    /// Package name; empty when the file declares none.
    #[serde(default)]
    pub package: String,
    /// Paths of imported files.
    #[serde(default)]
    pub dependency: Vec<String>,
    #[serde(default, alias = "messageType")]
    pub message_type: Vec<MessageDescriptor>,
    #[serde(default, alias = "enumType")]
    pub enum_type: Vec<EnumDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MessageDescriptor {
    pub name: String,
    #[serde(default)]
    pub field: Vec<FieldDescriptor>,
    #[serde(default, alias = "nestedType")]
    pub nested_type: Vec<MessageDescriptor>,
    #[serde(default, alias = "enumType")]
    pub enum_type: Vec<EnumDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageOptions>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MessageOptions {
    /// Set by protoc on the synthetic key/value message backing a `map<K, V>` field.
    #[serde(default, alias = "mapEntry")]
    pub map_entry: bool,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub number: i32,
    /// `LABEL_OPTIONAL`, `LABEL_REPEATED`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `TYPE_STRING`, `TYPE_MESSAGE`, ...
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Referenced message or enum, in dot-prefixed form (`.pkg.Foo`).
    #[serde(default, alias = "typeName", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumDescriptor {
    pub name: String,
    #[serde(default)]
    pub value: Vec<EnumValueDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDescriptor {
    pub name: String,
    #[serde(default)]
    pub number: i32,
}

/// Parse the JSON form of a `FileDescriptorSet`.
pub fn parse_descriptor_set(json: &str) -> Result<FileDescriptorSet, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Construction helpers
// ============================================================================

impl FileDescriptor {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    /// Add a top-level message.
    pub fn message(mut self, message: MessageDescriptor) -> Self {
        self.message_type.push(message);
        self
    }

    /// Add a top-level enum.
    pub fn enumeration(mut self, name: impl Into<String>) -> Self {
        self.enum_type.push(EnumDescriptor::new(name));
        self
    }

    /// Add an import.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.dependency.push(path.into());
        self
    }
}

impl MessageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build the synthetic entry message protoc generates for `map<K, V>`.
    ///
    /// `key_type` and `value_type` are field type tags such as `TYPE_STRING`;
    /// `value_type_name` is set for message and enum values.
    pub fn map_entry(
        name: impl Into<String>,
        key_type: &str,
        value_type: &str,
        value_type_name: Option<&str>,
    ) -> Self {
        let key = FieldDescriptor {
            name: "key".to_owned(),
            number: 1,
            label: Some("LABEL_OPTIONAL".to_owned()),
            kind: Some(key_type.to_owned()),
            type_name: None,
        };
        let value = FieldDescriptor {
            name: "value".to_owned(),
            number: 2,
            label: Some("LABEL_OPTIONAL".to_owned()),
            kind: Some(value_type.to_owned()),
            type_name: value_type_name.map(str::to_owned),
        };
        Self {
            name: name.into(),
            field: vec![key, value],
            options: Some(MessageOptions { map_entry: true }),
            ..Self::default()
        }
    }

    /// Add a nested message.
    pub fn nested(mut self, message: MessageDescriptor) -> Self {
        self.nested_type.push(message);
        self
    }

    /// Add a nested enum.
    pub fn enumeration(mut self, name: impl Into<String>) -> Self {
        self.enum_type.push(EnumDescriptor::new(name));
        self
    }

    /// Add a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.field.push(field);
        self
    }

    /// Whether protoc marked this message as a map entry.
    pub fn is_map_entry(&self) -> bool {
        self.options.is_some_and(|o| o.map_entry)
    }
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Vec::new(),
        }
    }
}

// ============================================================================
// Scope Layer
// ============================================================================

/// Something that declares message and enum types: a file or a message.
pub trait TypeScope {
    /// The package, if this scope is a file.
    fn package(&self) -> Option<&str>;

    fn enums(&self) -> &[EnumDescriptor];

    /// Top-level messages of a file, nested messages of a message.
    fn messages_mut(&mut self) -> &mut Vec<MessageDescriptor>;
}

impl TypeScope for FileDescriptor {
    fn package(&self) -> Option<&str> {
        Some(&self.package)
    }

    fn enums(&self) -> &[EnumDescriptor] {
        &self.enum_type
    }

    fn messages_mut(&mut self) -> &mut Vec<MessageDescriptor> {
        &mut self.message_type
    }
}

impl TypeScope for MessageDescriptor {
    fn package(&self) -> Option<&str> {
        None
    }

    fn enums(&self) -> &[EnumDescriptor] {
        &self.enum_type
    }

    fn messages_mut(&mut self) -> &mut Vec<MessageDescriptor> {
        &mut self.nested_type
    }
}
