// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::Regex;

use crate::model::{CanonicalName, DefinitionKeyword, DefinitionLocation, SourceFile};

/// Resolves canonical function names to definition locations in a
/// host-supplied source snapshot.
///
/// Matching is whole-token: the definition keyword, at least one whitespace
/// character, the exact name, optional whitespace, and an opening
/// parenthesis. Files are scanned in supplied order and the first match in
/// the first matching file wins; later files and later matches are never
/// considered. The resolver holds no mutable state and may be invoked
/// repeatedly and concurrently over the same immutable snapshot.
#[derive(Debug, Clone)]
pub struct DefinitionResolver {
    keyword: DefinitionKeyword,
}

impl DefinitionResolver {
    pub fn new(keyword: DefinitionKeyword) -> Self {
        Self { keyword }
    }

    pub fn keyword(&self) -> &DefinitionKeyword {
        &self.keyword
    }

    /// Finds the first definition of `name`, or `None` when no file matches.
    /// An empty snapshot reports `None` without scanning.
    pub fn resolve(
        &self,
        name: &CanonicalName,
        files: &[SourceFile],
    ) -> Option<DefinitionLocation> {
        if files.is_empty() {
            return None;
        }

        let pattern = self.definition_pattern(name);
        for file in files {
            if let Some(found) = pattern.find(file.text()) {
                let offset = char_offset(file.text(), found.start());
                return Some(DefinitionLocation::new(file.path(), offset));
            }
        }
        None
    }

    /// Both tokens are escaped before interpolation; names are
    /// user-influenced text and must never reach the pattern language raw.
    /// With escaped tokens the pattern is valid by construction.
    fn definition_pattern(&self, name: &CanonicalName) -> Regex {
        let pattern = format!(
            r"\b{}\s+{}\s*\(",
            regex::escape(self.keyword.as_str()),
            regex::escape(name.as_str())
        );
        Regex::new(&pattern).expect("definition pattern from escaped tokens")
    }
}

impl Default for DefinitionResolver {
    fn default() -> Self {
        Self::new(DefinitionKeyword::default())
    }
}

/// Character offset for a byte offset; the host editor addresses cursor
/// positions by character, not byte.
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
