// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Palette selection state.
//!
//! The palette UI owns this state; the gesture engine only reads it. At most
//! one element descriptor is active at a time.

use serde::{Deserialize, Serialize};

use crate::model::ElementKind;

/// What the user intends to place next: a type tag plus its structural
/// category. A tagged value rather than a hierarchy — the only behavioral
/// difference between node-kinds and edge-kinds is the category switch in
/// the gesture engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementDescriptor {
    kind: ElementKind,
    type_tag: String,
}

impl ElementDescriptor {
    pub fn new(kind: ElementKind, type_tag: impl Into<String>) -> Self {
        Self {
            kind,
            type_tag: type_tag.into(),
        }
    }

    pub fn node(type_tag: impl Into<String>) -> Self {
        Self::new(ElementKind::Node, type_tag)
    }

    pub fn edge(type_tag: impl Into<String>) -> Self {
        Self::new(ElementKind::Edge, type_tag)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }
}

/// Holds the currently active descriptor, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    current: Option<ElementDescriptor>,
    rev: u64,
}

impl Palette {
    pub fn current(&self) -> Option<&ElementDescriptor> {
        self.current.as_ref()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set(&mut self, descriptor: Option<ElementDescriptor>) {
        if self.current == descriptor {
            return;
        }
        self.current = descriptor;
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementDescriptor, Palette};
    use crate::model::ElementKind;

    #[test]
    fn set_is_a_no_op_for_the_same_descriptor() {
        let mut palette = Palette::default();
        assert_eq!(palette.current(), None);

        palette.set(Some(ElementDescriptor::node("Class")));
        let rev = palette.rev();
        palette.set(Some(ElementDescriptor::node("Class")));
        assert_eq!(palette.rev(), rev);

        palette.set(Some(ElementDescriptor::edge("Assoc")));
        assert_eq!(palette.rev(), rev + 1);
        assert_eq!(
            palette.current().map(ElementDescriptor::kind),
            Some(ElementKind::Edge)
        );

        palette.clear();
        assert_eq!(palette.current(), None);
    }
}
