// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ElementKind, GraphModel};

/// The synthetic filter entry that matches every type.
pub const ALL_TYPES: &str = "All";

/// The ordered list of distinct type tags observed in a model, for one
/// element kind: [`ALL_TYPES`] first, then each tag exactly once in
/// first-seen (creation) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    entries: Vec<String>,
}

impl TypeCatalog {
    pub fn of(model: &GraphModel, kind: ElementKind) -> Self {
        let mut entries = vec![ALL_TYPES.to_owned()];
        let tags: Vec<&str> = match kind {
            ElementKind::Node => model.nodes().map(|node| node.type_tag()).collect(),
            ElementKind::Edge => model.edges().map(|edge| edge.type_tag()).collect(),
        };
        for tag in tags {
            if !entries.iter().any(|entry| entry == tag) {
                entries.push(tag.to_owned());
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry == tag)
    }
}
