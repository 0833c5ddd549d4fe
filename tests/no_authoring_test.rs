//! Behavior when the `pptx` feature is compiled out.
//!
//! Run with `cargo test --no-default-features`.

#![cfg(not(feature = "pptx"))]

use pptx_fixture::BuildError;
use pptx_fixture::fixture;

#[test]
fn test_build_and_save_reports_missing_capability() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(fixture::OUTPUT_FILENAME);

    let err = fixture::build_and_save(&path).unwrap_err();
    assert!(matches!(err, BuildError::AuthoringUnavailable));
    assert!(err.to_string().contains("--features pptx"));
    assert!(!path.exists());
}
