// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memchr;

use crate::model::{CanonicalName, DefinitionKeyword};

/// Extracts the canonical function name from a rendered call label.
///
/// Labels look like `3: def handle(x, y)` or `2.1: foo(a)`: a sequence-number
/// prefix up to the first `:`, then the call text. Everything from the first
/// `(` on is call-site decoration and is discarded, as is one leading
/// occurrence of the definition keyword.
///
/// Returns `None` when the label names no function: no colon at all, nothing
/// left after stripping, or an extraction that cannot satisfy the canonical
/// invariant. Malformed labels degrade to `None`, never to an error.
pub fn parse_label(raw: &str, keyword: &DefinitionKeyword) -> Option<CanonicalName> {
    // `:` and `(` are ASCII, so byte offsets from memchr are char-boundary safe.
    let colon = memchr(b':', raw.as_bytes())?;
    let rest = &raw[colon + 1..];
    let rest = match memchr(b'(', rest.as_bytes()) {
        Some(paren) => &rest[..paren],
        None => rest,
    };
    let name = strip_keyword(rest.trim(), keyword);
    CanonicalName::new(name).ok()
}

/// Strips exactly one leading `<keyword><whitespace>` occurrence. A keyword
/// not followed by whitespace is part of the name (`define` stays `define`).
fn strip_keyword<'a>(name: &'a str, keyword: &DefinitionKeyword) -> &'a str {
    let Some(rest) = name.strip_prefix(keyword.as_str()) else {
        return name;
    };
    if rest.chars().next().is_some_and(char::is_whitespace) {
        rest.trim_start()
    } else {
        name
    }
}
