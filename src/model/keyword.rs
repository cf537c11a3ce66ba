// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// The function-declaration keyword convention of the source tree being
/// searched (`def` by default, matching Python-style sources).
///
/// The label parser strips one leading occurrence of it, and the resolver
/// requires it in front of every definition match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefinitionKeyword {
    value: SmolStr,
}

impl DefinitionKeyword {
    pub fn new(value: impl AsRef<str>) -> Result<Self, DefinitionKeywordError> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(DefinitionKeywordError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DefinitionKeywordError::ContainsWhitespace);
        }
        Ok(Self { value: SmolStr::new(value) })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Default for DefinitionKeyword {
    fn default() -> Self {
        Self { value: SmolStr::new_static("def") }
    }
}

impl fmt::Display for DefinitionKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKeywordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for DefinitionKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("keyword must not be empty"),
            Self::ContainsWhitespace => f.write_str("keyword must not contain whitespace"),
        }
    }
}

impl std::error::Error for DefinitionKeywordError {}
