// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// The bare function identifier extracted from a rendered call label.
///
/// Construction enforces the canonical invariant: non-empty, no colon, no
/// parenthesis, no surrounding whitespace. A label whose extraction cannot
/// satisfy this names no function and is skipped by callers (no tally entry,
/// no click wiring, no highlighting).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName {
    value: SmolStr,
}

impl CanonicalName {
    pub fn new(value: impl AsRef<str>) -> Result<Self, CanonicalNameError> {
        let value = value.as_ref();
        validate_canonical_name(value)?;
        Ok(Self { value: SmolStr::new(value) })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for CanonicalName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CanonicalName {
    type Err = CanonicalNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CanonicalName {
    type Error = CanonicalNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalNameError {
    Empty,
    ContainsColon,
    ContainsParen,
    UntrimmedWhitespace,
}

impl fmt::Display for CanonicalNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("name must not be empty"),
            Self::ContainsColon => f.write_str("name must not contain ':'"),
            Self::ContainsParen => f.write_str("name must not contain '(' or ')'"),
            Self::UntrimmedWhitespace => {
                f.write_str("name must not have leading or trailing whitespace")
            }
        }
    }
}

impl std::error::Error for CanonicalNameError {}

fn validate_canonical_name(value: &str) -> Result<(), CanonicalNameError> {
    if value.is_empty() {
        return Err(CanonicalNameError::Empty);
    }
    if value.contains(':') {
        return Err(CanonicalNameError::ContainsColon);
    }
    if value.contains(['(', ')']) {
        return Err(CanonicalNameError::ContainsParen);
    }
    if value != value.trim() {
        return Err(CanonicalNameError::UntrimmedWhitespace);
    }
    Ok(())
}
