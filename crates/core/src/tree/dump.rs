use serde::Serialize;

use crate::sender::SenderKinds;
use crate::tree::node::CommandNode;
use crate::tree::slots::ArgSlot;

/// Static shape of a finalized node, for tooling and inspection.
///
/// Behaviors and composed display strings are runtime concerns and are not
/// part of the shape.
#[derive(Debug, Clone, Serialize)]
pub struct NodeShape {
    /// The node's declared name.
    pub name: String,
    /// Permission required to enter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Sender kinds the node admits.
    pub allowed: SenderKinds,
    /// Declared extra-argument slots, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<ArgSlot>,
    /// Child shapes, in name order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeShape>,
}

impl NodeShape {
    /// Capture the static shape of `node` and its descendants.
    pub fn of(node: &CommandNode) -> Self {
        Self {
            name: node.name().to_string(),
            permission: node.permission().map(str::to_string),
            allowed: node.allowed_kinds(),
            slots: node.slots().to_vec(),
            children: node.children().map(NodeShape::of).collect(),
        }
    }
}

/// Serialize a tree's shape to a pretty-printed JSON string.
pub fn to_pretty_json(node: &CommandNode) -> String {
    serde_json::to_string_pretty(&NodeShape::of(node)).expect("NodeShape serialization cannot fail")
}
