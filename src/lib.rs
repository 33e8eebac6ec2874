// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — editor core for graph-structured diagrams.
//!
//! The crate is the model-and-gesture heart of a visual diagram editor:
//! [`model`] holds the typed node/edge graph, [`palette`] the active element
//! descriptor, [`ops`] the intention-level edit layer (the model's only
//! writer), and [`interact`] the pointer-gesture state machine that turns
//! clicks into edits and scene events. Rendering, layout, and persistence
//! are external collaborators; they feed [`interact::SceneInput`] in and
//! apply [`interact::SceneEvent`]s coming back out.

pub mod interact;
pub mod model;
pub mod ops;
pub mod palette;
pub mod query;

#[cfg(test)]
mod tests {
    use crate::interact::{Interaction, SceneInput};
    use crate::model::{ElementKind, GraphModel, Point};
    use crate::ops::Editor;
    use crate::palette::{ElementDescriptor, Palette};
    use crate::query::TypeCatalog;

    // Smoke test over the whole surface: place, connect, query.
    #[test]
    fn place_connect_and_list() {
        let mut editor = Editor::new(GraphModel::new("demo"));
        let mut palette = Palette::default();
        let mut interaction = Interaction::new();

        palette.set(Some(ElementDescriptor::node("Class")));
        interaction.dispatch(
            &mut editor,
            &palette,
            SceneInput::CanvasClicked(Point::new(0.0, 0.0)),
        );
        interaction.dispatch(
            &mut editor,
            &palette,
            SceneInput::CanvasClicked(Point::new(10.0, 0.0)),
        );

        let a = editor.model().node_by_name("Class").expect("a").node_id();
        let b = editor.model().node_by_name("Class1").expect("b").node_id();

        palette.set(Some(ElementDescriptor::edge("Assoc")));
        interaction.dispatch(&mut editor, &palette, SceneInput::NodeClicked(a));
        interaction.dispatch(&mut editor, &palette, SceneInput::NodeClicked(b));

        assert_eq!(editor.model().edge_count(), 1);
        let catalog = TypeCatalog::of(editor.model(), ElementKind::Edge);
        assert_eq!(catalog.entries(), ["All", "Assoc"]);
    }
}
