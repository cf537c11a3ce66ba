// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Decoration planning for rendered diagrams.
//!
//! Classification results become structured per-label decorations; the
//! rendering layer is a thin consumer that turns them into visual styling
//! and click wiring.

use crate::model::SeverityTier;
use crate::query::RenderPass;

/// CSS class attached to labels that receive a click handler.
pub const CLICKABLE_CLASS: &str = "clickable";

const WARNING_FILL: &str = "orange";
const CRITICAL_FILL: &str = "red";

/// Fill-color override for a tier. Normal keeps the renderer's default
/// styling.
pub fn severity_fill(tier: SeverityTier) -> Option<&'static str> {
    match tier {
        SeverityTier::Normal => None,
        SeverityTier::Warning => Some(WARNING_FILL),
        SeverityTier::Critical => Some(CRITICAL_FILL),
    }
}

/// Per-label visual decoration derived from one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDecoration {
    tier: SeverityTier,
    clickable: bool,
}

impl LabelDecoration {
    pub fn tier(&self) -> SeverityTier {
        self.tier
    }

    /// Whether the label has a resolvable name and should be wired for clicks.
    pub fn clickable(&self) -> bool {
        self.clickable
    }

    pub fn fill(&self) -> Option<&'static str> {
        severity_fill(self.tier)
    }
}

/// Index-aligned decorations for every label in the pass. Labels without a
/// resolvable name stay Normal and receive no click wiring.
pub fn decorate_render_pass(pass: &RenderPass) -> Vec<LabelDecoration> {
    pass.labels()
        .iter()
        .map(|highlight| match highlight {
            Some(highlight) => LabelDecoration { tier: highlight.tier(), clickable: true },
            None => LabelDecoration { tier: SeverityTier::Normal, clickable: false },
        })
        .collect()
}
