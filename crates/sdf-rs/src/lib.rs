#![cfg_attr(not(feature = "std"), no_std)]
#![doc = "Data model and tooling for the Semantic Definition Format (SDF)."]
#![doc = ""]
#![doc = "This crate holds the ecosystem-neutral side of a conversion:"]
#![doc = "- `types`: the SDF model and mapping documents."]
#![doc = "- `tree`: an arena-backed reference tree used to generate JSON pointers."]
#![doc = "- `serializer`: rendering of models and mappings to JSON."]

// 'alloc' is used for dynamic allocation (e.g., String labels, BTreeMap quality maps)
extern crate alloc;

// --- Foundation Modules ---
pub mod error;
pub mod types;

// --- Pointer Generation ---
pub mod tree;

// --- Output ---
pub mod serializer;

// --- Top-level Exports ---
pub use error::SdfError;
pub use serializer::{save_mapping_to_string, save_model_to_string};
pub use tree::{NodeId, ReferenceTree, ReferenceTreeNode};
pub use types::{
    AttributeValue, InformationBlock, NamespaceBlock, SdfAction, SdfMapping, SdfModel, SdfObject,
    SdfProperty, SdfThing, SdfType,
};
