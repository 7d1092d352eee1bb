pub mod ambient;
pub mod content;
pub mod download;
pub mod links;
mod model;
pub mod motion;
pub mod navigation;
pub mod store;
pub mod tag_color;
pub mod theme;

pub use ambient::{AmbientScheme, ColorScheme, FixedScheme, SystemScheme};
pub use download::CvDownload;
pub use model::Color;
pub use navigation::{NavState, PageLayout, ScrollTarget, Section};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};
pub use tag_color::{PaletteError, TagColor, TagPalette, tag_checksum};
pub use theme::{Appearance, THEME_KEY, ThemeController};
