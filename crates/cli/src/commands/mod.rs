//! CLI command implementations.

pub mod publish;
pub mod render;
pub mod seed;

use pagesmith_builder::model::Page;

/// Read and parse a page file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid page.
pub async fn read_page(path: &str) -> Result<Page, Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Cannot read {path}: {e}"))?;
    let page: Page = serde_json::from_str(&content)?;
    Ok(page)
}

/// Write a page file, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_page(path: &str, page: &Page) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(page)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
