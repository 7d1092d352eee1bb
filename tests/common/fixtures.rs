use portfolio::core::{FilePreferenceStore, PreferenceStore, StoreError, TagPalette};

/// Creates a FilePreferenceStore inside a fresh temp directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (FilePreferenceStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let store = FilePreferenceStore::new(dir.path().join("state").join("preferences.json"));
    (store, dir)
}

/// A palette of the first `n` built-in entries.
pub fn palette_of(n: usize) -> TagPalette {
    TagPalette::new(portfolio::core::tag_color::TAG_COLORS[..n].to_vec())
        .expect("Failed to build test palette")
}

/// Storage that fails every call, standing in for a host without persistence.
#[derive(Debug, Default)]
pub struct BrokenStore {
    pub writes_attempted: usize,
}

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        self.writes_attempted += 1;
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Labels shown on the page plus a few awkward ones.
pub const SAMPLE_LABELS: &[&str] = &[
    "",
    "AWS",
    "Docker",
    "Kubernetes",
    "GitHub Actions",
    "Jenkins (CI/CD)",
    "naïve",
    "日本語",
    "🦀",
];
