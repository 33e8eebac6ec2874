// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::element::{Edge, Node, Point};
use super::ids::{EdgeId, IdAllocator, NodeId};

/// The authoritative node/edge collection for one named model.
///
/// Invariants, checked on every mutation:
/// - every edge endpoint names a node currently in this model
/// - node names are unique within the model
/// - removing a node removes its incident edges in the same call
///
/// Iteration over [`nodes`](Self::nodes)/[`edges`](Self::edges) is in
/// creation order (ids are allocated monotonically and never reused).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    name: String,
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    ids: IdAllocator,
    rev: u64,
}

impl GraphModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            ids: IdAllocator::default(),
            rev: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bumped on every successful mutation; cheap change detection for UIs.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn add_node(
        &mut self,
        type_tag: impl Into<String>,
        name: impl Into<String>,
        position: Point,
    ) -> Result<NodeId, ModelError> {
        let name = name.into();
        if self.node_by_name(&name).is_some() {
            return Err(ModelError::DuplicateName { name });
        }

        let node_id = self.ids.allocate();
        self.nodes
            .insert(node_id, Node::new(node_id, type_tag, name, position));
        self.bump_rev();
        Ok(node_id)
    }

    /// Self-loops and parallel edges are allowed; only endpoint membership is
    /// checked.
    pub fn add_edge(
        &mut self,
        type_tag: impl Into<String>,
        source: NodeId,
        target: NodeId,
    ) -> Result<EdgeId, ModelError> {
        if !self.nodes.contains_key(&source) {
            return Err(ModelError::UnknownNode { node_id: source });
        }
        if !self.nodes.contains_key(&target) {
            return Err(ModelError::UnknownNode { node_id: target });
        }

        let edge_id = self.ids.allocate();
        self.edges
            .insert(edge_id, Edge::new(edge_id, type_tag, source, target));
        self.bump_rev();
        Ok(edge_id)
    }

    /// Removes the node and every incident edge in one step; callers never
    /// observe a dangling edge.
    pub fn remove_node(&mut self, node_id: NodeId) -> Result<RemovedNode, ModelError> {
        let Some(node) = self.nodes.remove(&node_id) else {
            return Err(ModelError::NodeNotFound { node_id });
        };

        let removed_edges: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|(_, edge)| edge.touches(node_id))
            .map(|(edge_id, _)| *edge_id)
            .collect();
        for edge_id in &removed_edges {
            self.edges.remove(edge_id);
        }

        self.bump_rev();
        Ok(RemovedNode {
            node,
            removed_edges,
        })
    }

    pub fn remove_edge(&mut self, edge_id: EdgeId) -> Result<Edge, ModelError> {
        let Some(edge) = self.edges.remove(&edge_id) else {
            return Err(ModelError::EdgeNotFound { edge_id });
        };
        self.bump_rev();
        Ok(edge)
    }

    pub fn rename_node(
        &mut self,
        node_id: NodeId,
        name: impl Into<String>,
    ) -> Result<(), ModelError> {
        let name = name.into();
        if !self.nodes.contains_key(&node_id) {
            return Err(ModelError::NodeNotFound { node_id });
        }
        let taken = self
            .nodes
            .values()
            .any(|node| node.name() == name && node.node_id() != node_id);
        if taken {
            return Err(ModelError::DuplicateName { name });
        }

        let Some(node) = self.nodes.get_mut(&node_id) else {
            return Err(ModelError::NodeNotFound { node_id });
        };
        if node.name() != name {
            node.set_name(name);
            self.bump_rev();
        }
        Ok(())
    }

    pub fn set_node_position(
        &mut self,
        node_id: NodeId,
        position: Point,
    ) -> Result<(), ModelError> {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return Err(ModelError::NodeNotFound { node_id });
        };
        node.set_position(position);
        self.bump_rev();
        Ok(())
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(&edge_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.values().find(|node| node.name() == name)
    }

    /// Creation-order iteration; take a fresh iterator per event, never hold
    /// one across a mutation.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn incident_edges(&self, node_id: NodeId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |edge| edge.touches(node_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// What a node removal actually took out of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedNode {
    pub node: Node,
    pub removed_edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateName { name: String },
    UnknownNode { node_id: NodeId },
    NodeNotFound { node_id: NodeId },
    EdgeNotFound { edge_id: EdgeId },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "node name '{name}' is already taken in this model")
            }
            Self::UnknownNode { node_id } => {
                write!(f, "edge endpoint {node_id} is not a member of this model")
            }
            Self::NodeNotFound { node_id } => write!(f, "node not found (id={node_id})"),
            Self::EdgeNotFound { edge_id } => write!(f, "edge not found (id={edge_id})"),
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::{GraphModel, ModelError};
    use crate::model::element::Point;

    fn model_with_nodes(names: &[&str]) -> GraphModel {
        let mut model = GraphModel::new("m");
        for name in names {
            model
                .add_node("Class", *name, Point::default())
                .expect("add node");
        }
        model
    }

    #[test]
    fn add_node_rejects_duplicate_names() {
        let mut model = model_with_nodes(&["Class"]);

        let result = model.add_node("Class", "Class", Point::default());
        assert_eq!(
            result,
            Err(ModelError::DuplicateName {
                name: "Class".to_owned()
            })
        );
        assert_eq!(model.node_count(), 1);
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut model = model_with_nodes(&["A"]);
        let a = model.node_by_name("A").expect("node").node_id();
        let ghost = {
            let mut other = model_with_nodes(&["A", "B"]);
            let b = other.node_by_name("B").expect("node").node_id();
            other.remove_node(b).expect("remove");
            b
        };

        let result = model.add_edge("Assoc", a, ghost);
        assert_eq!(result, Err(ModelError::UnknownNode { node_id: ghost }));
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn remove_node_cascades_exactly_its_incident_edges() {
        let mut model = model_with_nodes(&["A", "B", "C"]);
        let a = model.node_by_name("A").expect("node").node_id();
        let b = model.node_by_name("B").expect("node").node_id();
        let c = model.node_by_name("C").expect("node").node_id();

        model.add_edge("Assoc", a, b).expect("a->b");
        model.add_edge("Assoc", b, a).expect("b->a");
        model.add_edge("Assoc", a, a).expect("self loop");
        let bc = model.add_edge("Assoc", b, c).expect("b->c");

        let removed = model.remove_node(a).expect("remove");
        assert_eq!(removed.removed_edges.len(), 3);
        assert_eq!(model.edge_count(), 1);
        assert!(model.edge(bc).is_some());

        // no dangling endpoints survive the cascade
        assert!(model
            .edges()
            .all(|edge| model.contains_node(edge.source()) && model.contains_node(edge.target())));
    }

    #[test]
    fn nodes_iterate_in_creation_order() {
        let mut model = model_with_nodes(&["B", "A", "C"]);
        let a = model.node_by_name("A").expect("node").node_id();
        model.remove_node(a).expect("remove");
        model.add_node("Class", "D", Point::default()).expect("add");

        let names: Vec<&str> = model.nodes().map(|node| node.name()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn rename_node_keeps_names_unique() {
        let mut model = model_with_nodes(&["A", "B"]);
        let a = model.node_by_name("A").expect("node").node_id();

        assert_eq!(
            model.rename_node(a, "B"),
            Err(ModelError::DuplicateName {
                name: "B".to_owned()
            })
        );
        assert_eq!(model.rename_node(a, "A"), Ok(()));
        assert_eq!(model.rename_node(a, "A2"), Ok(()));
        assert_eq!(model.node(a).expect("node").name(), "A2");
    }

    #[test]
    fn mutations_bump_rev_and_failures_do_not() {
        let mut model = GraphModel::new("m");
        assert_eq!(model.rev(), 0);

        let a = model
            .add_node("Class", "A", Point::default())
            .expect("add node");
        assert_eq!(model.rev(), 1);

        let _ = model.add_node("Class", "A", Point::default());
        assert_eq!(model.rev(), 1);

        model.set_node_position(a, Point::new(1.0, 2.0)).expect("move");
        assert_eq!(model.rev(), 2);
        assert_eq!(model.node(a).expect("node").position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn incident_edges_sees_both_directions() {
        let mut model = model_with_nodes(&["A", "B"]);
        let a = model.node_by_name("A").expect("node").node_id();
        let b = model.node_by_name("B").expect("node").node_id();

        model.add_edge("Assoc", a, b).expect("a->b");
        model.add_edge("Gen", b, a).expect("b->a");

        assert_eq!(model.incident_edges(a).count(), 2);
        assert_eq!(model.incident_edges(b).count(), 2);
    }
}
