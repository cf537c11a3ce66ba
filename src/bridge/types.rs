// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A request posted by the rendered panel.
///
/// The wire shape is the renderer's `{ "command": ..., ...payload }` object;
/// the serde tag keeps untyped panel scripts interoperable unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelRequest {
    /// The user clicked a call label; `function_name` is the canonical name
    /// computed during classification.
    #[serde(rename_all = "camelCase")]
    JumpToFunction { function_name: String },
}

/// Outcome of one click resolution, delivered to the navigation sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum NavigationOutcome {
    /// Open the file and place the cursor at `offset` (in characters).
    #[serde(rename_all = "camelCase")]
    Open { path: PathBuf, offset: usize },
    /// The host supplied no source files to search.
    NoSourceFiles,
    /// No supplied file contains a definition for the requested name.
    #[serde(rename_all = "camelCase")]
    NotFound { function_name: String },
}

impl NavigationOutcome {
    /// The user-visible message for this outcome, if one should be shown.
    /// Rendering the message is owned by the navigation sink.
    pub fn notice(&self) -> Option<(NoticeLevel, String)> {
        match self {
            Self::Open { .. } => None,
            Self::NoSourceFiles => {
                Some((NoticeLevel::Error, "no source files to search".to_owned()))
            }
            Self::NotFound { function_name } => Some((
                NoticeLevel::Warning,
                format!("function \"{function_name}\" not found"),
            )),
        }
    }
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}
