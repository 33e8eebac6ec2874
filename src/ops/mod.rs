// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Intention-level mutations over the graph model.
//!
//! The editor is the single writer of [`GraphModel`] and the boundary where
//! model errors become user-facing outcomes: duplicate placement names are
//! resolved by retrying with a fresh suffix, absent delete targets are a
//! benign no-op, and anything unresolvable surfaces as one generic
//! [`EditError::Failed`] signal (details go to the log, not to the caller).

use std::fmt;

use log::{debug, error};

use crate::model::{
    EdgeId, ElementKind, ElementRef, GraphModel, ModelError, NodeId, Point,
};
use crate::palette::ElementDescriptor;

/// The single writer of a [`GraphModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    model: GraphModel,
}

impl Editor {
    pub fn new(model: GraphModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn into_model(self) -> GraphModel {
        self.model
    }

    /// Places a node of the descriptor's type. The default name is the type
    /// tag; on a name collision the smallest unused numeric suffix is used
    /// instead, so placement never fails visibly over naming.
    pub fn place_node(
        &mut self,
        descriptor: &ElementDescriptor,
        position: Point,
    ) -> Result<NodeId, EditError> {
        if descriptor.kind() != ElementKind::Node {
            return Err(EditError::KindMismatch {
                expected: ElementKind::Node,
                found: descriptor.kind(),
            });
        }

        let type_tag = descriptor.type_tag();
        match self.model.add_node(type_tag, type_tag, position) {
            Ok(node_id) => Ok(node_id),
            Err(ModelError::DuplicateName { .. }) => {
                let name = self.fresh_name(type_tag);
                self.model.add_node(type_tag, name, position).map_err(|err| {
                    error!("node placement failed after renaming: {err}");
                    EditError::Failed
                })
            }
            Err(err) => {
                error!("node placement failed: {err}");
                Err(EditError::Failed)
            }
        }
    }

    /// Smallest unused numeric suffix for `base`; deterministic given the
    /// current set of node names.
    fn fresh_name(&self, base: &str) -> String {
        let mut suffix: u64 = 1;
        loop {
            let candidate = format!("{base}{suffix}");
            if self.model.node_by_name(&candidate).is_none() {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Connects two existing nodes. The caller only offers nodes it has been
    /// handed by the model, so a membership failure here is an internal bug:
    /// it is logged and surfaced as the generic failure signal.
    pub fn connect(
        &mut self,
        descriptor: &ElementDescriptor,
        source: NodeId,
        target: NodeId,
    ) -> Result<EdgeId, EditError> {
        if descriptor.kind() != ElementKind::Edge {
            return Err(EditError::KindMismatch {
                expected: ElementKind::Edge,
                found: descriptor.kind(),
            });
        }

        self.model
            .add_edge(descriptor.type_tag(), source, target)
            .map_err(|err| {
                error!("edge insertion rejected by the model: {err}");
                EditError::Failed
            })
    }

    /// Deletes an element, cascading incident edges for nodes. Deleting an
    /// element that is already gone is a no-op; deletion is idempotent from
    /// the caller's point of view.
    pub fn delete(&mut self, element: ElementRef) -> Result<Removal, EditError> {
        match element {
            ElementRef::Node(node_id) => match self.model.remove_node(node_id) {
                Ok(removed) => Ok(Removal {
                    removed_nodes: vec![node_id],
                    removed_edges: removed.removed_edges,
                }),
                Err(ModelError::NodeNotFound { .. }) => {
                    debug!("delete of absent node {node_id} ignored");
                    Ok(Removal::default())
                }
                Err(err) => {
                    error!("node delete failed: {err}");
                    Err(EditError::Failed)
                }
            },
            ElementRef::Edge(edge_id) => match self.model.remove_edge(edge_id) {
                Ok(_) => Ok(Removal {
                    removed_nodes: Vec::new(),
                    removed_edges: vec![edge_id],
                }),
                Err(ModelError::EdgeNotFound { .. }) => {
                    debug!("delete of absent edge {edge_id} ignored");
                    Ok(Removal::default())
                }
                Err(err) => {
                    error!("edge delete failed: {err}");
                    Err(EditError::Failed)
                }
            },
        }
    }

    /// Renames a node. Unlike placement, a collision is not auto-suffixed:
    /// the UI prompts the user instead, so it gets a dedicated error.
    pub fn rename_node(
        &mut self,
        node_id: NodeId,
        name: impl Into<String>,
    ) -> Result<(), EditError> {
        match self.model.rename_node(node_id, name) {
            Ok(()) => Ok(()),
            Err(ModelError::DuplicateName { name }) => Err(EditError::NameTaken { name }),
            Err(err) => {
                error!("node rename failed: {err}");
                Err(EditError::Failed)
            }
        }
    }

    pub fn move_node(&mut self, node_id: NodeId, position: Point) -> Result<(), EditError> {
        self.model.set_node_position(node_id, position).map_err(|err| {
            error!("node move failed: {err}");
            EditError::Failed
        })
    }
}

/// What a delete actually took out of the model, cascade included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    pub removed_nodes: Vec<NodeId>,
    pub removed_edges: Vec<EdgeId>,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.removed_nodes.is_empty() && self.removed_edges.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    NameTaken {
        name: String,
    },
    /// The single generic signal for anything the editor could not resolve.
    Failed,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(f, "descriptor kind mismatch (expected {expected:?}, found {found:?})")
            }
            Self::NameTaken { name } => write!(f, "name '{name}' is already taken"),
            Self::Failed => f.write_str("operation failed"),
        }
    }
}

impl std::error::Error for EditError {}
