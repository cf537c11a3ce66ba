// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

/// A read-only source file supplied by the host's file collection provider.
///
/// The host hands over an already-filtered, ordered snapshot; the engine
/// never mutates it and never touches the filesystem itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self { path: path.into(), text: text.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Location of a matched definition: the owning file and the character
/// offset of the definition keyword's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionLocation {
    path: PathBuf,
    offset: usize,
}

impl DefinitionLocation {
    pub fn new(path: impl Into<PathBuf>, offset: usize) -> Self {
        Self { path: path.into(), offset }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}
