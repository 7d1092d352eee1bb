pub mod config;
pub mod core;
pub mod logger;

pub use config::PortfolioConfig;
pub use core::{
    Appearance, CvDownload, NavState, PageLayout, PreferenceStore, Section, TagPalette,
    ThemeController,
};

#[cfg(feature = "gui")]
pub mod gui;
