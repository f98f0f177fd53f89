// crates/sdf-rs/src/error.rs

use crate::tree::NodeId;
use core::fmt;

/// Errors raised while building a reference tree or rendering SDF documents.
#[derive(Debug)]
pub enum SdfError {
    /// The `NodeId` does not belong to this tree.
    UnknownNode(NodeId),

    /// The node is already attached to a parent. Trees never re-parent.
    AlreadyParented { node: NodeId },

    /// Attaching `child` below `parent` would close a loop (or move the root).
    CycleDetected { parent: NodeId, child: NodeId },

    /// An error from the underlying `serde_json` serializer.
    JsonSerializing(serde_json::Error),
}

impl From<serde_json::Error> for SdfError {
    fn from(e: serde_json::Error) -> Self {
        SdfError::JsonSerializing(e)
    }
}

impl fmt::Display for SdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdfError::UnknownNode(id) => {
                write!(f, "Reference tree node {} does not exist", id.to_raw())
            }
            SdfError::AlreadyParented { node } => {
                write!(f, "Reference tree node {} already has a parent", node.to_raw())
            }
            SdfError::CycleDetected { parent, child } => write!(
                f,
                "Attaching node {} below node {} would create a cycle",
                child.to_raw(),
                parent.to_raw()
            ),
            SdfError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SdfError {}

#[cfg(test)]
mod tests {
    use super::SdfError;
    use crate::tree::NodeId;
    use alloc::string::ToString;

    #[test]
    fn test_from_json_error() {
        // serde_json refuses maps with non-string keys
        let mut map = alloc::collections::BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        let json_err = serde_json::to_string(&map).unwrap_err();
        let sdf_err: SdfError = json_err.into();
        assert!(matches!(sdf_err, SdfError::JsonSerializing(_)));
    }

    #[test]
    fn test_display_mentions_node() {
        let node = NodeId::from_raw(7).unwrap();
        let msg = SdfError::AlreadyParented { node }.to_string();
        assert!(msg.contains('7'), "unexpected message: {msg}");
    }
}
