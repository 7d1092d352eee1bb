//! Integration tests for the CV download.

use portfolio::core::{CvDownload, download::CV_FILE_NAME};

#[tokio::test]
async fn test_deliver_copies_asset() -> anyhow::Result<()> {
    let assets = tempfile::TempDir::new()?;
    let downloads = tempfile::TempDir::new()?;
    tokio::fs::write(assets.path().join(CV_FILE_NAME), b"%PDF-1.4 test").await?;

    let request = CvDownload::from_assets(assets.path());
    assert_eq!(request.file_name, CV_FILE_NAME);

    let destination = downloads.path().join("nested").join(&request.file_name);
    let bytes = request.deliver(&destination).await?;

    assert_eq!(bytes, 13);
    assert_eq!(tokio::fs::read(&destination).await?, b"%PDF-1.4 test");
    Ok(())
}

#[tokio::test]
async fn test_missing_asset_is_an_error_not_a_panic() -> anyhow::Result<()> {
    let assets = tempfile::TempDir::new()?;
    let downloads = tempfile::TempDir::new()?;

    let request = CvDownload::from_assets(assets.path());
    let result = request.deliver(downloads.path().join(CV_FILE_NAME)).await;

    assert!(result.is_err());
    assert!(!downloads.path().join(CV_FILE_NAME).exists());
    Ok(())
}
