//! Destination content store boundary.
//!
//! The migration treats the CMS as an external collaborator: resolve a
//! page by slug, overwrite its body content, nothing else. The concrete
//! store talks to the WordPress SQLite database (`wp_posts`), which is how
//! the destination site is actually persisted in production.

use anyhow::{Context, Result};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{fmt, path::Path};
use thiserror::Error;

/// Identifier of a destination page inside the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageId(pub i64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-page store failures. Like extraction failures, these skip the
/// current page only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Pagina nao encontrada para slug: {0}")]
    PageNotFound(String),

    #[error("Falha ao atualizar {slug}: {message}")]
    UpdateFailed { slug: String, message: String },
}

/// Lookup and persistence contract consumed by the batch driver.
pub trait ContentStore {
    /// Resolve a slug to its destination page identifier.
    fn find_page(&self, slug: &str) -> Result<PageId, StoreError>;

    /// Overwrite the body content of a resolved page.
    fn update_content(&self, slug: &str, id: PageId, content: &str) -> Result<(), StoreError>;
}

// ============================================================================
// WordPress SQLite store
// ============================================================================

/// Content store backed by the WordPress SQLite database.
///
/// The batch is strictly sequential, so the async sqlx driver is run on a
/// current-thread runtime behind a synchronous facade.
pub struct WpSqliteStore {
    pool: SqlitePool,
    rt: tokio::runtime::Runtime,
}

impl WpSqliteStore {
    /// Open the WordPress database. The file must already exist; the
    /// migration never creates a store.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("banco de dados nao encontrado: {}", path.display());
        }

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let options = SqliteConnectOptions::new().filename(path);
        let pool = rt
            .block_on(SqlitePool::connect_with(options))
            .with_context(|| format!("falha ao abrir {}", path.display()))?;

        Ok(Self { pool, rt })
    }
}

impl ContentStore for WpSqliteStore {
    fn find_page(&self, slug: &str) -> Result<PageId, StoreError> {
        let row: Option<(i64,)> = self
            .rt
            .block_on(
                sqlx::query_as(
                    "SELECT ID FROM wp_posts WHERE post_name = ? AND post_type = 'page' LIMIT 1",
                )
                .bind(slug)
                .fetch_optional(&self.pool),
            )
            .map_err(|e| StoreError::UpdateFailed {
                slug: slug.to_string(),
                message: e.to_string(),
            })?;

        row.map(|(id,)| PageId(id))
            .ok_or_else(|| StoreError::PageNotFound(slug.to_string()))
    }

    fn update_content(&self, slug: &str, id: PageId, content: &str) -> Result<(), StoreError> {
        let result = self
            .rt
            .block_on(
                sqlx::query("UPDATE wp_posts SET post_content = ? WHERE ID = ?")
                    .bind(content)
                    .bind(id.0)
                    .execute(&self.pool),
            )
            .map_err(|e| StoreError::UpdateFailed {
                slug: slug.to_string(),
                message: e.to_string(),
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UpdateFailed {
                slug: slug.to_string(),
                message: format!("nenhuma linha com ID {id}"),
            });
        }
        Ok(())
    }
}

// ============================================================================
// In-memory store (test double)
// ============================================================================

#[cfg(test)]
pub mod memory {
    use super::{ContentStore, PageId, StoreError};
    use std::{cell::RefCell, collections::HashMap};

    /// In-memory content store used by driver tests.
    pub struct MemoryStore {
        pages: RefCell<HashMap<String, (i64, String)>>,
        /// Force every update to fail (publish-failure path).
        pub fail_updates: bool,
    }

    impl MemoryStore {
        pub fn new(slugs: &[(&str, i64)]) -> Self {
            let pages = slugs
                .iter()
                .map(|(slug, id)| (slug.to_string(), (*id, String::new())))
                .collect();
            Self {
                pages: RefCell::new(pages),
                fail_updates: false,
            }
        }

        /// Current body content of a page, if any was published.
        pub fn content(&self, slug: &str) -> Option<String> {
            self.pages.borrow().get(slug).map(|(_, body)| body.clone())
        }
    }

    impl ContentStore for MemoryStore {
        fn find_page(&self, slug: &str) -> Result<PageId, StoreError> {
            self.pages
                .borrow()
                .get(slug)
                .map(|(id, _)| PageId(*id))
                .ok_or_else(|| StoreError::PageNotFound(slug.to_string()))
        }

        fn update_content(&self, slug: &str, id: PageId, content: &str) -> Result<(), StoreError> {
            if self.fail_updates {
                return Err(StoreError::UpdateFailed {
                    slug: slug.to_string(),
                    message: "armazenamento somente leitura".to_string(),
                });
            }
            let mut pages = self.pages.borrow_mut();
            let entry = pages
                .values_mut()
                .find(|(page_id, _)| *page_id == id.0)
                .ok_or_else(|| StoreError::UpdateFailed {
                    slug: slug.to_string(),
                    message: format!("nenhuma linha com ID {id}"),
                })?;
            entry.1 = content.to_string();
            Ok(())
        }
    }
}
