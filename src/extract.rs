//! Fragment extraction from legacy HTML pages.

use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use thiserror::Error;

/// The legacy main container. Inner content is captured non-greedily up to
/// the nearest closing tag, case-insensitive, newlines included.
static RE_MAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<main id="page" class="container" role="main">(.*?)</main>"#).unwrap()
});

/// Why a legacy page yielded no fragment. Each variant aborts the current
/// page only, never the batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Arquivo nao encontrado: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Falha ao ler: {}", .0.display())]
    ReadError(PathBuf, #[source] std::io::Error),

    #[error("Nao encontrou <main> em {0}")]
    PatternNotMatched(String),
}

/// Read a legacy page and return the trimmed inner HTML of its main container.
pub fn extract_main(path: &Path) -> Result<String, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }

    let html =
        fs::read_to_string(path).map_err(|e| ExtractError::ReadError(path.to_path_buf(), e))?;

    let captures = RE_MAIN
        .captures(&html)
        .ok_or_else(|| ExtractError::PatternNotMatched(source_name(path)))?;

    Ok(captures[1].trim().to_string())
}

/// File name for diagnostics (the full path is noise in the error line).
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_page(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{body}").unwrap();
        path
    }

    #[test]
    fn test_extracts_trimmed_fragment() {
        let dir = tempdir().unwrap();
        let path = write_page(
            dir.path(),
            "index.html",
            "<html><body><main id=\"page\" class=\"container\" role=\"main\">\n  <h1>Home</h1>\n</main></body></html>",
        );

        let fragment = extract_main(&path).unwrap();
        assert_eq!(fragment, "<h1>Home</h1>");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = write_page(
            dir.path(),
            "cart.html",
            "<MAIN ID=\"page\" CLASS=\"container\" ROLE=\"main\">cart</MAIN>",
        );

        assert_eq!(extract_main(&path).unwrap(), "cart");
    }

    #[test]
    fn test_nested_main_stops_at_nearest_close() {
        let dir = tempdir().unwrap();
        let path = write_page(
            dir.path(),
            "nested.html",
            "<main id=\"page\" class=\"container\" role=\"main\">a<main>b</main>c</main>",
        );

        // Non-greedy: capture ends at the first </main>, not the last.
        assert_eq!(extract_main(&path).unwrap(), "a<main>b");
    }

    #[test]
    fn test_missing_file_reports_file_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.html");

        let err = extract_main(&path).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound(_)));
        assert!(format!("{err}").contains("Arquivo nao encontrado"));
    }

    #[test]
    fn test_containerless_page_reports_pattern_not_matched() {
        let dir = tempdir().unwrap();
        let path = write_page(dir.path(), "plain.html", "<html><body>no main</body></html>");

        let err = extract_main(&path).unwrap_err();
        assert!(matches!(err, ExtractError::PatternNotMatched(_)));
        assert_eq!(format!("{err}"), "Nao encontrou <main> em plain.html");
    }

    #[test]
    fn test_container_with_other_attributes_does_not_match() {
        let dir = tempdir().unwrap();
        let path = write_page(
            dir.path(),
            "other.html",
            "<main id=\"page\" role=\"main\">wrong shape</main>",
        );

        assert!(matches!(
            extract_main(&path).unwrap_err(),
            ExtractError::PatternNotMatched(_)
        ));
    }
}
