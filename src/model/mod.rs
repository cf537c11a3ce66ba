// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core domain value types.
//!
//! Names and keywords are validated at construction; tiers and thresholds cross the
//! bridge boundary and carry serde derives.

pub mod keyword;
pub mod label;
pub mod severity;
pub mod source;

pub use keyword::{DefinitionKeyword, DefinitionKeywordError};
pub use label::{CanonicalName, CanonicalNameError};
pub use severity::{SeverityTier, Thresholds, ThresholdsError};
pub use source::{DefinitionLocation, SourceFile};
