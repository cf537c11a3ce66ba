// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqjump-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqjump and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::future::Future;

use tokio::sync::mpsc;

use crate::model::{CanonicalName, SourceFile};
use crate::query::DefinitionResolver;

use super::types::{NavigationOutcome, PanelRequest};

/// Supplies the source-file snapshot for one resolve invocation.
///
/// This is the engine's only suspension point; loading file contents is I/O
/// owned by the host. The returned snapshot is immutable for the duration of
/// the resolve.
pub trait SourceProvider {
    fn source_files(&self) -> impl Future<Output = Vec<SourceFile>> + Send;
}

/// Routes panel clicks to definition resolution.
///
/// Each request runs to completion over its own snapshot; nothing supersedes
/// or cancels an in-flight resolve, and nothing is retried.
#[derive(Debug)]
pub struct ClickDispatcher<P> {
    resolver: DefinitionResolver,
    provider: P,
}

impl<P: SourceProvider> ClickDispatcher<P> {
    pub fn new(resolver: DefinitionResolver, provider: P) -> Self {
        Self { resolver, provider }
    }

    /// Handles one panel request and produces the outcome for the
    /// navigation sink.
    pub async fn handle(&self, request: PanelRequest) -> NavigationOutcome {
        match request {
            PanelRequest::JumpToFunction { function_name } => {
                self.jump_to_function(function_name).await
            }
        }
    }

    async fn jump_to_function(&self, function_name: String) -> NavigationOutcome {
        // The panel sends the canonical name back verbatim; anything else is
        // unresolvable, not an error.
        let Ok(name) = CanonicalName::new(function_name.trim()) else {
            return NavigationOutcome::NotFound { function_name };
        };

        let files = self.provider.source_files().await;
        if files.is_empty() {
            return NavigationOutcome::NoSourceFiles;
        }

        match self.resolver.resolve(&name, &files) {
            Some(location) => NavigationOutcome::Open {
                path: location.path().to_path_buf(),
                offset: location.offset(),
            },
            None => NavigationOutcome::NotFound { function_name },
        }
    }

    /// Drains panel requests and forwards outcomes until either side closes.
    pub async fn run(
        self,
        mut requests: mpsc::Receiver<PanelRequest>,
        outcomes: mpsc::Sender<NavigationOutcome>,
    ) {
        while let Some(request) = requests.recv().await {
            let outcome = self.handle(request).await;
            if outcomes.send(outcome).await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::path::PathBuf;

    use tokio::sync::mpsc;

    use super::{ClickDispatcher, SourceProvider};
    use crate::bridge::types::{NavigationOutcome, PanelRequest};
    use crate::model::SourceFile;
    use crate::query::DefinitionResolver;

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

    fn dispatcher(files: Vec<SourceFile>) -> ClickDispatcher<SnapshotProvider> {
        ClickDispatcher::new(DefinitionResolver::default(), SnapshotProvider { files })
    }

    fn jump(function_name: &str) -> PanelRequest {
        PanelRequest::JumpToFunction { function_name: function_name.to_owned() }
    }

    #[tokio::test]
    async fn click_resolves_to_open_outcome() {
        let dispatcher = dispatcher(vec![
            SourceFile::new("a.py", "x = 1\n"),
            SourceFile::new("b.py", "def handle(x, y):\n    pass\n"),
        ]);

        let outcome = dispatcher.handle(jump("handle")).await;
        assert_eq!(
            outcome,
            NavigationOutcome::Open { path: PathBuf::from("b.py"), offset: 0 }
        );
    }

    #[tokio::test]
    async fn empty_snapshot_reports_no_source_files() {
        let dispatcher = dispatcher(Vec::new());
        let outcome = dispatcher.handle(jump("handle")).await;
        assert_eq!(outcome, NavigationOutcome::NoSourceFiles);
    }

    #[tokio::test]
    async fn unresolvable_name_reports_not_found() {
        let dispatcher = dispatcher(vec![SourceFile::new("a.py", "def other(): pass\n")]);
        let outcome = dispatcher.handle(jump("handle")).await;
        assert_eq!(
            outcome,
            NavigationOutcome::NotFound { function_name: "handle".to_owned() }
        );
    }

    #[tokio::test]
    async fn invalid_inbound_name_degrades_to_not_found() {
        let dispatcher = dispatcher(vec![SourceFile::new("a.py", "def handle(): pass\n")]);
        let outcome = dispatcher.handle(jump("def handle(")).await;
        assert_eq!(
            outcome,
            NavigationOutcome::NotFound { function_name: "def handle(".to_owned() }
        );
    }

    #[tokio::test]
    async fn inbound_name_is_trimmed_before_resolution() {
        let dispatcher = dispatcher(vec![SourceFile::new("a.py", "def handle(): pass\n")]);
        let outcome = dispatcher.handle(jump("  handle  ")).await;
        assert_eq!(
            outcome,
            NavigationOutcome::Open { path: PathBuf::from("a.py"), offset: 0 }
        );
    }

    #[tokio::test]
    async fn run_loop_forwards_outcomes_until_requests_close() {
        let dispatcher = dispatcher(vec![SourceFile::new("a.py", "def handle(): pass\n")]);
        let (request_tx, request_rx) = mpsc::channel(4);
        let (outcome_tx, mut outcome_rx) = mpsc::channel(4);

        let worker = tokio::spawn(dispatcher.run(request_rx, outcome_tx));

        request_tx.send(jump("handle")).await.expect("send request");
        request_tx.send(jump("missing")).await.expect("send request");
        drop(request_tx);

        assert_eq!(
            outcome_rx.recv().await,
            Some(NavigationOutcome::Open { path: PathBuf::from("a.py"), offset: 0 })
        );
        assert_eq!(
            outcome_rx.recv().await,
            Some(NavigationOutcome::NotFound { function_name: "missing".to_owned() })
        );
        assert_eq!(outcome_rx.recv().await, None);

        worker.await.expect("dispatcher loop");
    }
}
