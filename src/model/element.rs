// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, NodeId};

/// A position on the canvas, in model coordinates.
///
/// Positions are owned by the rendering collaborator; the model stores them
/// verbatim and attaches no invariants to them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether an element (or a palette entry) is node-shaped or edge-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Node,
    Edge,
}

/// A reference to either kind of element, for kind-dispatched operations
/// like delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRef {
    Node(NodeId),
    Edge(EdgeId),
}

impl ElementRef {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Node(_) => ElementKind::Node,
            Self::Edge(_) => ElementKind::Edge,
        }
    }
}

/// A typed node placed on the canvas.
///
/// Identity and type tag are fixed at creation; name and position may change
/// afterwards (renames go through the model so name uniqueness holds).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    type_tag: String,
    name: String,
    position: Point,
}

impl Node {
    pub(crate) fn new(
        node_id: NodeId,
        type_tag: impl Into<String>,
        name: impl Into<String>,
        position: Point,
    ) -> Self {
        Self {
            node_id,
            type_tag: type_tag.into(),
            name: name.into(),
            position,
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// A typed edge between two nodes of the same model.
///
/// Endpoints are non-owning id references; the model guarantees they resolve
/// for as long as the edge exists. Self-loops and parallel edges are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    edge_id: EdgeId,
    type_tag: String,
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub(crate) fn new(
        edge_id: EdgeId,
        type_tag: impl Into<String>,
        source: NodeId,
        target: NodeId,
    ) -> Self {
        Self {
            edge_id,
            type_tag: type_tag.into(),
            source,
            target,
        }
    }

    pub fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn touches(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }
}
