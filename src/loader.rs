// SPDX-License-Identifier: MPL-2.0
//! Resolves image locator strings to raw bytes.
//!
//! The gallery only knows locator strings; whether a locator is an HTTP
//! URL (the hosted listing photos) or a local path is decided here. The
//! bytes are decoded into pixels by the image widget, not by this module.

use crate::error::{Error, Result};

/// Fetches the raw bytes behind a locator string.
///
/// `http(s)` locators are fetched over the network; anything else is read
/// from the filesystem.
pub async fn fetch(source: &str) -> Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source).await
    } else {
        Ok(tokio::fs::read(source).await?)
    }
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|err| Error::Io(err.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|err| Error::Io(err.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[tokio::test]
    async fn fetch_reads_local_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("photo.jpg");
        let mut file = std::fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");

        let bytes = fetch(path.to_str().expect("utf-8 path"))
            .await
            .expect("local read succeeds");
        assert_eq!(bytes, b"fake image data");
    }

    #[tokio::test]
    async fn fetch_reports_missing_local_files() {
        let result = fetch("/nonexistent/photo.jpg").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
