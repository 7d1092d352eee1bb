use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use iced::widget::text_editor;

use crate::{
    config::PortfolioConfig,
    core::{
        FilePreferenceStore, NavState, PageLayout, PreferenceStore, TagPalette, ThemeController,
        content,
        motion::{Frame, Motion, Stagger},
    },
};

/// Below this width the navigation collapses into a menu.
pub const COMPACT_WIDTH: f32 = 768.0;

/// Last known size of the scrolling page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
}

/// Decorative form; nothing is ever sent.
#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: text_editor::Content,
}

pub struct AppState {
    pub theme: ThemeController,
    pub nav: NavState,
    pub store: Box<dyn PreferenceStore>,
    pub palette: TagPalette,
    pub layout: PageLayout,
    pub page_metrics: Option<PageMetrics>,
    pub assets_dir: PathBuf,
    pub contact: ContactForm,
    pub width: f32,
    pub year: i32,
    started: Instant,
    now: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("theme", &self.theme)
            .field("nav", &self.nav)
            .field("palette_len", &self.palette.len())
            .field("assets_dir", &self.assets_dir)
            .field("width", &self.width)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &PortfolioConfig, palette: TagPalette) -> Self {
        let store = FilePreferenceStore::new(config.state_file());
        let ambient = config.ambient();
        let theme = ThemeController::initialize(&store, ambient.as_ref());
        tracing::info!(
            dark = theme.is_dark(),
            palette = palette.len(),
            state_file = ?store.path(),
            "portfolio state initialised"
        );
        let now = Instant::now();
        Self {
            theme,
            nav: NavState::default(),
            store: Box::new(store),
            palette,
            layout: content::page_layout(),
            page_metrics: None,
            assets_dir: config.assets_dir.clone(),
            contact: ContactForm::default(),
            width: config.window.width,
            year: current_year(),
            started: now,
            now,
        }
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.theme.toggle(self.store.as_mut())
    }

    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }

    pub fn frame(&self, motion: Motion) -> Frame {
        motion.sample(self.elapsed())
    }

    /// Frame of the `index`-th staggered item.
    pub fn item_frame(&self, index: usize) -> Frame {
        self.frame(Stagger::CONTAINER.child(Motion::item(), index))
    }

    pub fn animating(&self) -> bool {
        let elapsed = self.elapsed();
        entrance_motions()
            .iter()
            .any(|motion| !motion.is_finished(elapsed))
    }

    pub fn asset(&self, name: &str) -> PathBuf {
        self.assets_dir.join(name)
    }
}

/// Every entrance motion on the page; the last staggered item ends last.
fn entrance_motions() -> [Motion; 6] {
    [
        Motion::nav_drop(),
        Motion::slide_in_from_left(),
        Motion::slide_in_from_right(),
        Motion::scale_up(),
        Motion::fade_in(),
        Stagger::CONTAINER.child(Motion::item(), content::PROJECTS.len()),
    ]
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .year()
}
