// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the model.
//!
//! Queries provide derived views (e.g. the palette's type filter list) and
//! never mutate the graph.

pub mod catalog;

pub use catalog::{TypeCatalog, ALL_TYPES};
