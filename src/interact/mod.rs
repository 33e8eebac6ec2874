// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The pointer-gesture engine.
//!
//! One dispatch point replaces the cross-wired event handlers a scene widget
//! would otherwise accumulate: every pointer/selection event enters through
//! [`Interaction::dispatch`], which consults the palette, drives the editor,
//! and returns the scene events the rendering collaborator needs to apply.
//! The preview edge shown during two-click edge creation is purely visual
//! and never touches the model; only a committed connect does.

use log::error;
use serde::{Deserialize, Serialize};

use crate::model::{EdgeId, ElementKind, ElementRef, NodeId, Point};
use crate::ops::{Editor, Removal};
use crate::palette::Palette;

/// An input event delivered by the rendering collaborator, already
/// translated to model coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneInput {
    NodeClicked(NodeId),
    CanvasClicked(Point),
    PointerMoved(Point),
    EscapePressed,
    DeleteRequested(ElementRef),
}

/// A notification raised back to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    NodeAdded {
        node_id: NodeId,
    },
    EdgeAdded {
        edge_id: EdgeId,
    },
    NodeRemoved {
        node_id: NodeId,
    },
    EdgeRemoved {
        edge_id: EdgeId,
    },
    /// Full-marking contract: `active` is the newly selected node, `recent`
    /// the one selected immediately before it, and every node not named here
    /// is neutral.
    SelectionChanged {
        active: NodeId,
        recent: Option<NodeId>,
    },
    /// The provisional edge shown while an edge gesture is in flight, from
    /// the pending source's position to the current pointer position.
    EdgePreviewUpdated {
        source: Point,
        pointer: Point,
    },
    EdgePreviewCleared,
    /// The generic signal for an operation the editor could not resolve.
    OperationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    AwaitingEdgeTarget { source: NodeId },
}

/// The gesture state machine. Holds only transient state; the model is owned
/// by the editor and the active descriptor by the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    state: GestureState,
    last_highlighted: Option<NodeId>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            last_highlighted: None,
        }
    }

    /// The node an in-flight edge gesture is anchored at, if any.
    pub fn pending_edge_source(&self) -> Option<NodeId> {
        match self.state {
            GestureState::AwaitingEdgeTarget { source } => Some(source),
            GestureState::Idle => None,
        }
    }

    pub fn is_drawing_edge(&self) -> bool {
        self.pending_edge_source().is_some()
    }

    /// Feeds one input event through the machine. Events are delivered
    /// sequentially on one thread; the returned scene events are what the
    /// renderer must apply, in order.
    pub fn dispatch(
        &mut self,
        editor: &mut Editor,
        palette: &Palette,
        input: SceneInput,
    ) -> Vec<SceneEvent> {
        match input {
            SceneInput::NodeClicked(node_id) => self.on_node_clicked(editor, palette, node_id),
            SceneInput::CanvasClicked(position) => {
                self.on_canvas_clicked(editor, palette, position)
            }
            SceneInput::PointerMoved(position) => self.on_pointer_moved(editor, position),
            SceneInput::EscapePressed => self.cancel_gesture(),
            SceneInput::DeleteRequested(element) => self.on_delete_requested(editor, element),
        }
    }

    fn on_node_clicked(
        &mut self,
        editor: &mut Editor,
        palette: &Palette,
        node_id: NodeId,
    ) -> Vec<SceneEvent> {
        if let GestureState::AwaitingEdgeTarget { source } = self.state {
            return self.finish_edge(editor, palette, source, node_id);
        }

        match palette.current() {
            Some(descriptor) if descriptor.kind() == ElementKind::Edge => {
                self.start_edge(editor, node_id)
            }
            _ => self.select_node(node_id),
        }
    }

    /// First click of the two-click edge gesture: anchor the preview at the
    /// clicked node.
    fn start_edge(&mut self, editor: &Editor, node_id: NodeId) -> Vec<SceneEvent> {
        let Some(node) = editor.model().node(node_id) else {
            error!("edge gesture started on node {node_id} that is not in the model");
            return vec![SceneEvent::OperationFailed];
        };

        let anchor = node.position();
        self.state = GestureState::AwaitingEdgeTarget { source: node_id };
        vec![SceneEvent::EdgePreviewUpdated {
            source: anchor,
            pointer: anchor,
        }]
    }

    /// Second click commits, whatever the target: a click on the source node
    /// itself makes a self-loop.
    fn finish_edge(
        &mut self,
        editor: &mut Editor,
        palette: &Palette,
        source: NodeId,
        target: NodeId,
    ) -> Vec<SceneEvent> {
        self.state = GestureState::Idle;

        let Some(descriptor) = palette.current().cloned() else {
            error!("edge gesture finished with no active palette descriptor");
            return vec![SceneEvent::EdgePreviewCleared, SceneEvent::OperationFailed];
        };

        match editor.connect(&descriptor, source, target) {
            Ok(edge_id) => vec![
                SceneEvent::EdgeAdded { edge_id },
                SceneEvent::EdgePreviewCleared,
            ],
            Err(err) => {
                // the target received a click, so it existed; this is an
                // internal consistency bug, not a user mistake
                error!("edge gesture aborted: {err}");
                vec![SceneEvent::EdgePreviewCleared, SceneEvent::OperationFailed]
            }
        }
    }

    /// Plain selection: the clicked node becomes active, the previously
    /// selected one becomes recent, everything else is neutral.
    fn select_node(&mut self, node_id: NodeId) -> Vec<SceneEvent> {
        let recent = self.last_highlighted.filter(|previous| *previous != node_id);
        self.last_highlighted = Some(node_id);
        vec![SceneEvent::SelectionChanged {
            active: node_id,
            recent,
        }]
    }

    fn on_canvas_clicked(
        &mut self,
        editor: &mut Editor,
        palette: &Palette,
        position: Point,
    ) -> Vec<SceneEvent> {
        if self.is_drawing_edge() {
            // a stray canvas click discards the gesture, no model mutation
            return self.cancel_gesture();
        }

        match palette.current() {
            Some(descriptor) if descriptor.kind() == ElementKind::Node => {
                match editor.place_node(descriptor, position) {
                    Ok(node_id) => vec![SceneEvent::NodeAdded { node_id }],
                    Err(err) => {
                        error!("node placement rejected: {err}");
                        vec![SceneEvent::OperationFailed]
                    }
                }
            }
            _ => Vec::new(),
        }
    }

    fn on_pointer_moved(&mut self, editor: &Editor, pointer: Point) -> Vec<SceneEvent> {
        let GestureState::AwaitingEdgeTarget { source } = self.state else {
            return Vec::new();
        };

        let Some(node) = editor.model().node(source) else {
            // the anchor vanished under us; drop the gesture
            error!("preview source {source} disappeared mid-gesture");
            return self.cancel_gesture();
        };

        vec![SceneEvent::EdgePreviewUpdated {
            source: node.position(),
            pointer,
        }]
    }

    fn cancel_gesture(&mut self) -> Vec<SceneEvent> {
        if !self.is_drawing_edge() {
            return Vec::new();
        }
        self.state = GestureState::Idle;
        vec![SceneEvent::EdgePreviewCleared]
    }

    fn on_delete_requested(&mut self, editor: &mut Editor, element: ElementRef) -> Vec<SceneEvent> {
        let removal = match editor.delete(element) {
            Ok(removal) => removal,
            Err(err) => {
                error!("delete rejected: {err}");
                return vec![SceneEvent::OperationFailed];
            }
        };

        let mut events = removal_events(&removal);

        if let Some(previous) = self.last_highlighted {
            if removal.removed_nodes.contains(&previous) {
                self.last_highlighted = None;
            }
        }

        if let GestureState::AwaitingEdgeTarget { source } = self.state {
            if removal.removed_nodes.contains(&source) {
                self.state = GestureState::Idle;
                events.push(SceneEvent::EdgePreviewCleared);
            }
        }

        events
    }
}

fn removal_events(removal: &Removal) -> Vec<SceneEvent> {
    let mut events = Vec::with_capacity(removal.removed_nodes.len() + removal.removed_edges.len());
    for edge_id in &removal.removed_edges {
        events.push(SceneEvent::EdgeRemoved { edge_id: *edge_id });
    }
    for node_id in &removal.removed_nodes {
        events.push(SceneEvent::NodeRemoved { node_id: *node_id });
    }
    events
}
