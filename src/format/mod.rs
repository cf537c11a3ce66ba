// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Label-text conventions.
//!
//! Pure conversion from raw rendered call labels to canonical function names.

pub mod label;

pub use label::parse_label;
