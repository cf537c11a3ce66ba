// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Typed panel-message boundary.
//!
//! The panel boundary exchanges explicit message types over channels instead
//! of string-keyed payloads. The dispatcher runs one independent resolve per
//! click and reports every outcome to the navigation sink.

mod dispatcher;
mod types;

pub use dispatcher::{ClickDispatcher, SourceProvider};
pub use types::{NavigationOutcome, NoticeLevel, PanelRequest};
