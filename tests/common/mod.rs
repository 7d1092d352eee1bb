#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::core::{
    AmbientScheme, Appearance, FilePreferenceStore, FixedScheme, MemoryPreferenceStore, NavState,
    PageLayout, PaletteError, PreferenceStore, Section, StoreError, THEME_KEY, TagPalette,
    ThemeController,
};
