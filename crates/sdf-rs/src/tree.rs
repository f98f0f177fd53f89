// crates/sdf-rs/src/tree.rs

//! An arena-backed labeled tree used to generate JSON pointers.
//!
//! Every element written into an SDF document gets a node here. The path of
//! names from the (unnamed) root down to a node is that element's pointer,
//! e.g. `sdfObject/Device/Manufacturer`. Nodes may also carry attributes that
//! have no slot in the SDF model; those end up in the mapping document.

use crate::error::SdfError;
use crate::types::AttributeValue;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroU32;
use log::trace;

/// Handle of a node inside one `ReferenceTree`.
///
/// Using `NonZeroU32` keeps `Option<NodeId>` the size of a `NodeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create from a raw index (1-based).
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match NonZeroU32::new(raw) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Get the raw value (1-based).
    pub const fn to_raw(self) -> u32 {
        self.0.get()
    }

    fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index + 1).ok().and_then(Self::from_raw)
    }

    const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// A single node of the reference tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceTreeNode {
    pub name: String,
    pub attributes: BTreeMap<String, AttributeValue>,
    pub children: Vec<NodeId>,
    /// Non-owning back-reference, only used to walk upwards.
    pub parent: Option<NodeId>,
}

impl ReferenceTreeNode {
    fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}

/// Build-only tree of `ReferenceTreeNode`s, owned as a single arena.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceTree {
    nodes: Vec<ReferenceTreeNode>,
}

impl Default for ReferenceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTree {
    /// Creates a tree holding only the synthetic, unnamed root.
    pub fn new() -> Self {
        Self {
            nodes: alloc::vec![ReferenceTreeNode::default()],
        }
    }

    /// The synthetic root node.
    pub fn root(&self) -> NodeId {
        // The root always lives in the first slot.
        NodeId(NonZeroU32::MIN)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&ReferenceTreeNode> {
        self.nodes.get(id.to_index())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut ReferenceTreeNode, SdfError> {
        self.nodes
            .get_mut(id.to_index())
            .ok_or(SdfError::UnknownNode(id))
    }

    /// Allocates a detached node. Attach it with [`ReferenceTree::add_child`].
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.push(ReferenceTreeNode::new(name.into()));
        // An arena that outgrows u32 is not a realistic document.
        NodeId::from_index(self.nodes.len() - 1).unwrap_or(NodeId(NonZeroU32::MAX))
    }

    /// Appends `child` to `parent` and records the back-reference.
    ///
    /// # Errors
    /// `AlreadyParented` if `child` is attached somewhere already,
    /// `CycleDetected` if `child` is the root or an ancestor of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SdfError> {
        if self.node(parent).is_none() {
            return Err(SdfError::UnknownNode(parent));
        }
        let child_node = self.node(child).ok_or(SdfError::UnknownNode(child))?;
        if child_node.parent.is_some() {
            return Err(SdfError::AlreadyParented { node: child });
        }
        if child == self.root() || self.ancestors(parent).any(|a| a == child) {
            return Err(SdfError::CycleDetected { parent, child });
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        trace!(
            "Reference tree: attached node {} below node {}",
            child.to_raw(),
            parent.to_raw()
        );
        Ok(())
    }

    /// Creates a node named `name` and attaches it below `parent`.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, SdfError> {
        if self.node(parent).is_none() {
            return Err(SdfError::UnknownNode(parent));
        }
        let child = self.create_node(name);
        self.add_child(parent, child)?;
        Ok(child)
    }

    /// Sets `key` on `node`, overwriting any previous value.
    pub fn add_attribute(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<(), SdfError> {
        self.node_mut(node)?
            .attributes
            .insert(key.into(), value.into());
        Ok(())
    }

    /// Iterates `id` and all of its ancestors, nearest first.
    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(id), move |current| {
            self.node(*current).and_then(|n| n.parent)
        })
    }

    /// Names from the root (exclusive) down to `node` (inclusive).
    fn path_names(&self, node: NodeId) -> Result<Vec<&str>, SdfError> {
        if self.node(node).is_none() {
            return Err(SdfError::UnknownNode(node));
        }
        let root = self.root();
        let mut names: Vec<&str> = self
            .ancestors(node)
            .filter(|id| *id != root)
            .filter_map(|id| self.node(id).map(|n| n.name.as_str()))
            .collect();
        names.reverse();
        Ok(names)
    }

    /// Returns the `/`-joined names from the root (exclusive) to `node` (inclusive).
    ///
    /// Names are joined verbatim, so a name that itself contains `/` reads
    /// like two segments. Use [`ReferenceTree::generate_json_pointer`] for
    /// keys that must stay unambiguous.
    pub fn generate_pointer(&self, node: NodeId) -> Result<String, SdfError> {
        Ok(self.path_names(node)?.join("/"))
    }

    /// Returns the pointer of `node` as a `#/` URI fragment with every name
    /// escaped per RFC 6901 (`~` as `~0`, `/` as `~1`).
    pub fn generate_json_pointer(&self, node: NodeId) -> Result<String, SdfError> {
        let mut pointer = String::from("#");
        for name in self.path_names(node)? {
            pointer.push('/');
            push_escaped(&mut pointer, name);
        }
        Ok(pointer)
    }

    /// Collects the attributes of every node that has any, keyed by the
    /// node's escaped JSON pointer (`#/...`).
    pub fn attribute_map(
        &self,
    ) -> Result<BTreeMap<String, BTreeMap<String, AttributeValue>>, SdfError> {
        let mut map = BTreeMap::new();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.attributes.is_empty() {
                continue;
            }
            let id = NodeId::from_index(index).ok_or(SdfError::UnknownNode(self.root()))?;
            map.insert(self.generate_json_pointer(id)?, node.attributes.clone());
        }
        Ok(map)
    }
}

fn push_escaped(pointer: &mut String, name: &str) {
    for c in name.chars() {
        match c {
            '~' => pointer.push_str("~0"),
            '/' => pointer.push_str("~1"),
            other => pointer.push(other),
        }
    }
}
