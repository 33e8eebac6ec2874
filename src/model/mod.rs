// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: the graph a diagram is made of.
//!
//! One [`GraphModel`] holds the typed nodes and edges of a single named
//! model; everything else in the crate reads it, and only `ops` writes it.

pub mod element;
pub mod graph;
pub mod ids;

pub use element::{Edge, ElementKind, ElementRef, Node, Point};
pub use graph::{GraphModel, ModelError, RemovedNode};
pub use ids::{EdgeId, Id, IdAllocator, NodeId};
