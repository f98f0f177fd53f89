// crates/sdf-rs-lwm2m/src/types.rs

//! Public, ergonomic data structures for representing LwM2M object definitions.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// --- Enumerations ---

/// The `<Operations>` of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operations {
    /// `R`
    Read,
    /// `W`
    Write,
    /// `RW`
    ReadWrite,
    /// `E`
    Execute,
    /// Empty or unrecognized.
    #[default]
    Undefined,
}

impl fmt::Display for Operations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operations::Read => "R",
            Operations::Write => "W",
            Operations::ReadWrite => "RW",
            Operations::Execute => "E",
            Operations::Undefined => "",
        };
        f.write_str(s)
    }
}

/// The `<Type>` of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceType {
    String,
    Integer,
    UnsignedInteger,
    Float,
    Boolean,
    Opaque,
    Time,
    ObjectLink,
    CoreLink,
    /// Empty (executable resources) or unrecognized.
    #[default]
    Undefined,
}

impl ResourceType {
    /// Every variant, in declaration order.
    pub const ALL: [ResourceType; 10] = [
        ResourceType::String,
        ResourceType::Integer,
        ResourceType::UnsignedInteger,
        ResourceType::Float,
        ResourceType::Boolean,
        ResourceType::Opaque,
        ResourceType::Time,
        ResourceType::ObjectLink,
        ResourceType::CoreLink,
        ResourceType::Undefined,
    ];
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::String => "String",
            ResourceType::Integer => "Integer",
            ResourceType::UnsignedInteger => "Unsigned Integer",
            ResourceType::Float => "Float",
            ResourceType::Boolean => "Boolean",
            ResourceType::Opaque => "Opaque",
            ResourceType::Time => "Time",
            ResourceType::ObjectLink => "Objlnk",
            ResourceType::CoreLink => "Corelnk",
            ResourceType::Undefined => "",
        };
        f.write_str(s)
    }
}

// --- Resources and Objects ---

/// A single `<Item>` of an object's `<Resources>`.
///
/// The resource ID is the key under which the resource is stored in
/// [`Object::resources`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub operations: Operations,
    pub multiple_instances: bool,
    pub mandatory: bool,
    pub resource_type: ResourceType,
    pub range_enumeration: String,
    pub units: String,
    pub description: String,
}

/// Represents an LwM2M `<Object>` definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub name: String,
    /// `@ObjectType`, usually `MODefinition`.
    pub object_type: String,
    pub description_1: String,
    pub description_2: String,
    pub object_id: u16,
    pub object_urn: String,
    pub lwm2m_version: f64,
    pub object_version: f64,
    pub multiple_instances: bool,
    pub mandatory: bool,
    /// Resources keyed by resource ID; iteration order is ascending ID.
    pub resources: BTreeMap<u16, Resource>,
}

/// An ordered collection of LwM2M objects, converted together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lwm2mDefinition {
    pub objects: Vec<Object>,
}

impl Lwm2mDefinition {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Object> {
        self.objects.iter()
    }
}

impl From<Vec<Object>> for Lwm2mDefinition {
    fn from(objects: Vec<Object>) -> Self {
        Self { objects }
    }
}

impl FromIterator<Object> for Lwm2mDefinition {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

/// Appends the objects of further definitions, e.g. one per loaded file.
impl Extend<Object> for Lwm2mDefinition {
    fn extend<I: IntoIterator<Item = Object>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Lwm2mDefinition {
    type Item = &'a Object;
    type IntoIter = core::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
