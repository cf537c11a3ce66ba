// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::format::parse_label;
use crate::model::{CanonicalName, DefinitionKeyword, SeverityTier, Thresholds};

/// Occurrence counts per canonical name, scoped to one render pass.
///
/// Rebuilt from scratch on every pass; there is no cross-render memory.
pub type CallTally = BTreeMap<CanonicalName, usize>;

/// Classification outcome for one label with a resolvable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelHighlight {
    canonical: CanonicalName,
    count: usize,
    tier: SeverityTier,
}

impl LabelHighlight {
    pub fn canonical(&self) -> &CanonicalName {
        &self.canonical
    }

    /// Total occurrences of this label's canonical name across the batch.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn tier(&self) -> SeverityTier {
        self.tier
    }
}

/// One render pass worth of classified labels.
///
/// Results are index-aligned with the input batch so the renderer can map
/// them back onto its label elements. Labels without a resolvable name carry
/// `None`: no tally entry, no tier, no click wiring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPass {
    labels: Vec<Option<LabelHighlight>>,
    tally: CallTally,
}

impl RenderPass {
    pub fn labels(&self) -> &[Option<LabelHighlight>] {
        &self.labels
    }

    pub fn tally(&self) -> &CallTally {
        &self.tally
    }

    pub fn highlight(&self, index: usize) -> Option<&LabelHighlight> {
        self.labels.get(index).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Classifies one batch of raw labels.
///
/// Counts every canonical name across the entire batch first (two textually
/// distinct labels with a coinciding extraction both count), then assigns
/// each label its name's tier. Every label sharing a name receives the
/// identical tier.
pub fn classify_render_pass<I, S>(
    labels: I,
    keyword: &DefinitionKeyword,
    thresholds: &Thresholds,
) -> RenderPass
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = labels
        .into_iter()
        .map(|raw| parse_label(raw.as_ref(), keyword))
        .collect::<Vec<_>>();

    let mut tally = CallTally::new();
    for name in parsed.iter().flatten() {
        *tally.entry(name.clone()).or_insert(0) += 1;
    }

    let labels = parsed
        .into_iter()
        .map(|name| {
            name.map(|canonical| {
                let count = tally[&canonical];
                LabelHighlight {
                    canonical,
                    count,
                    tier: SeverityTier::for_count(count, thresholds),
                }
            })
        })
        .collect();

    RenderPass { labels, tally }
}
