// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over label batches and source snapshots.
//!
//! Classification derives per-label severity from one render pass; resolution
//! maps a canonical name to its definition in host-supplied files.

pub mod definition;
pub mod frequency;

pub use definition::DefinitionResolver;
pub use frequency::{classify_render_pass, CallTally, LabelHighlight, RenderPass};
