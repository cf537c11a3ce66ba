// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end flow: a rendered label batch is classified and decorated, a
//! click comes back over the panel wire shape, and resolution produces a
//! navigation outcome.

use std::future::Future;
use std::path::PathBuf;

use seqjump::bridge::{ClickDispatcher, NavigationOutcome, PanelRequest, SourceProvider};
use seqjump::model::{DefinitionKeyword, SeverityTier, SourceFile, Thresholds};
use seqjump::query::{classify_render_pass, DefinitionResolver};
use seqjump::render::decorate_render_pass;

#[derive(Debug, Clone, Default)]
struct SnapshotProvider {
    files: Vec<SourceFile>,
}

impl SourceProvider for SnapshotProvider {
    fn source_files(&self) -> impl Future<Output = Vec<SourceFile>> + Send {
        let files = self.files.clone();
        async move { files }
    }
}

fn workspace_files() -> Vec<SourceFile> {
    vec![
        SourceFile::new(
            "pkg/util.py",
            "import os\n\ndef helper(value):\n    return value * 2\n",
        ),
        SourceFile::new(
            "pkg/api.py",
            "def handle(x, y):\n    return helper(x) + helper(y)\n\ndef fetch(url):\n    pass\n",
        ),
    ]
}

#[test]
fn render_pass_classifies_and_decorates_the_threshold_scenario() {
    let labels = ["1: a()", "2: a()", "3: a()", "4: b()"];
    let pass = classify_render_pass(
        labels,
        &DefinitionKeyword::default(),
        &Thresholds::new(3, 10),
    );

    let a = pass.highlight(0).expect("classified label");
    assert_eq!(a.canonical().as_str(), "a");
    assert_eq!(a.count(), 3);
    assert_eq!(a.tier(), SeverityTier::Warning);

    let b = pass.highlight(3).expect("classified label");
    assert_eq!(b.canonical().as_str(), "b");
    assert_eq!(b.count(), 1);
    assert_eq!(b.tier(), SeverityTier::Normal);

    let decorations = decorate_render_pass(&pass);
    assert_eq!(decorations.len(), labels.len());
    assert_eq!(decorations[0].fill(), Some("orange"));
    assert!(decorations[0].clickable());
    assert_eq!(decorations[3].fill(), None);
    assert!(decorations[3].clickable());
}

#[tokio::test]
async fn clicking_a_classified_label_opens_its_definition() {
    let labels = ["1: def handle(x, y)", "2: helper(x)", "3: helper(y)"];
    let pass = classify_render_pass(
        labels,
        &DefinitionKeyword::default(),
        &Thresholds::default(),
    );
    let clicked = pass.highlight(0).expect("classified label");

    // The panel echoes the canonical name over the string-keyed wire shape.
    let wire = format!(
        r#"{{"command":"jumpToFunction","functionName":"{}"}}"#,
        clicked.canonical()
    );
    let request: PanelRequest = serde_json::from_str(&wire).expect("panel request");

    let dispatcher = ClickDispatcher::new(
        DefinitionResolver::default(),
        SnapshotProvider { files: workspace_files() },
    );
    let outcome = dispatcher.handle(request).await;

    assert_eq!(
        outcome,
        NavigationOutcome::Open { path: PathBuf::from("pkg/api.py"), offset: 0 }
    );
}

#[tokio::test]
async fn earlier_files_shadow_later_definitions() {
    let mut files = workspace_files();
    files.push(SourceFile::new("pkg/other.py", "def helper(v):\n    return v\n"));

    let dispatcher =
        ClickDispatcher::new(DefinitionResolver::default(), SnapshotProvider { files });
    let outcome = dispatcher
        .handle(PanelRequest::JumpToFunction { function_name: "helper".to_owned() })
        .await;

    match outcome {
        NavigationOutcome::Open { path, offset } => {
            assert_eq!(path, PathBuf::from("pkg/util.py"));
            assert_eq!(offset, 11);
        }
        other => panic!("expected an open outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_function_reports_not_found_with_a_warning_notice() {
    let dispatcher = ClickDispatcher::new(
        DefinitionResolver::default(),
        SnapshotProvider { files: workspace_files() },
    );
    let outcome = dispatcher
        .handle(PanelRequest::JumpToFunction { function_name: "missing".to_owned() })
        .await;

    assert_eq!(
        outcome,
        NavigationOutcome::NotFound { function_name: "missing".to_owned() }
    );
    let (_, text) = outcome.notice().expect("notice");
    assert!(text.contains("missing"));
}

#[tokio::test]
async fn empty_workspace_reports_no_source_files() {
    let dispatcher =
        ClickDispatcher::new(DefinitionResolver::default(), SnapshotProvider::default());
    let outcome = dispatcher
        .handle(PanelRequest::JumpToFunction { function_name: "handle".to_owned() })
        .await;
    assert_eq!(outcome, NavigationOutcome::NoSourceFiles);
}
