//! Batch driver: extract -> rewrite -> publish, one page at a time.

use crate::extract::extract_main;
use crate::registry::PageMapping;
use crate::rewrite::Rewriter;
use crate::store::{ContentStore, StoreError};
use std::path::Path;

/// Outcome counters for one migration run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub published: usize,
    pub skipped: usize,
}

/// Run the migration over every mapped page, exactly once each.
///
/// Failures are per-page: a page that cannot be extracted or published is
/// logged and skipped, never aborting the batch. With no `store` (dry-run)
/// pages are extracted and rewritten but nothing is persisted.
pub fn run(
    pages: &[PageMapping],
    source_dir: &Path,
    rewriter: &Rewriter<'_>,
    store: Option<&dyn ContentStore>,
) -> MigrationReport {
    let mut report = MigrationReport::default();

    for page in pages {
        let source_path = source_dir.join(page.source_file);

        let fragment = match extract_main(&source_path) {
            Ok(fragment) => fragment,
            Err(err) => {
                crate::log!("ERRO"; "{err}");
                report.skipped += 1;
                continue;
            }
        };

        let content = rewriter.rewrite(&fragment);
        crate::debug!("migra"; "{}: {} bytes apos reescrita", page.slug, content.len());

        let Some(store) = store else {
            crate::log!("OK"; "{} pronto para publicar ({} bytes)", page.slug, content.len());
            report.published += 1;
            continue;
        };

        let published = store
            .find_page(page.slug)
            .and_then(|id| store.update_content(page.slug, id, &content).map(|()| id));

        match published {
            Ok(id) => {
                crate::log!("OK"; "{} atualizado (ID {id})", page.slug);
                report.published += 1;
            }
            Err(err @ StoreError::PageNotFound(_)) => {
                crate::log!("AVISO"; "{err}");
                report.skipped += 1;
            }
            Err(err) => {
                crate::log!("ERRO"; "{err}");
                report.skipped += 1;
            }
        }
    }

    report
}
