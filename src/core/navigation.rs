//! Section anchors and scroll targets.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Exact, case-sensitive match against [`Section::anchor`].
    pub fn from_anchor(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == id)
    }
}

/// Where a named block starts inside the page, as a fraction of the
/// scrollable height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTarget {
    pub anchor: &'static str,
    /// Start of the block as a fraction of the whole page height.
    pub relative_y: f32,
}

impl ScrollTarget {
    /// Scroll offset in pixels that puts the block's top edge at the top of
    /// the viewport, clamped to the scrollable range.
    pub fn absolute_y(&self, content_height: f32, viewport_height: f32) -> f32 {
        let max = (content_height - viewport_height).max(0.0);
        (self.relative_y * content_height).clamp(0.0, max)
    }
}

/// Vertical layout of the page: blocks in render order with their
/// estimated extents. Blocks without an anchor (hero, footer) still take
/// up space.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    blocks: Vec<(Option<&'static str>, f32)>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(mut self, extent: f32) -> Self {
        self.blocks.push((None, extent.max(0.0)));
        self
    }

    pub fn anchored(mut self, anchor: &'static str, extent: f32) -> Self {
        self.blocks.push((Some(anchor), extent.max(0.0)));
        self
    }

    fn total(&self) -> f32 {
        self.blocks.iter().map(|(_, extent)| extent).sum()
    }

    /// Relative start of `anchor`, or `None` when no block carries it.
    pub fn target(&self, anchor: &str) -> Option<ScrollTarget> {
        let total = self.total();
        let mut offset = 0.0;
        for (name, extent) in &self.blocks {
            if let Some(name) = name
                && *name == anchor
            {
                let relative_y = if total > 0.0 {
                    (offset / total).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                return Some(ScrollTarget { anchor: name, relative_y });
            }
            offset += extent;
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub mobile_menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Looks up `id` in `layout`. The menu is closed whether or not the
    /// anchor exists.
    pub fn scroll_to_section(&mut self, id: &str, layout: &PageLayout) -> Option<ScrollTarget> {
        let target = layout.target(id);
        if target.is_none() {
            tracing::debug!(section = id, "scroll target not found");
        }
        self.mobile_menu_open = false;
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercased_labels() {
        for section in Section::ALL {
            assert_eq!(section.anchor(), section.label().to_lowercase());
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("About"), None);
    }

    #[test]
    fn targets_are_cumulative() {
        let layout = PageLayout::new()
            .block(2.0)
            .anchored("about", 1.0)
            .anchored("contact", 1.0);
        assert_eq!(layout.target("about").unwrap().relative_y, 0.5);
        assert_eq!(layout.target("contact").unwrap().relative_y, 0.75);
        assert!(layout.target("missing").is_none());
    }

    #[test]
    fn absolute_offset_puts_block_at_top() {
        let target = ScrollTarget {
            anchor: "contact",
            relative_y: 0.8,
        };
        // 5000px of content behind an 820px viewport: contact starts at 4000px.
        assert_eq!(target.absolute_y(5000.0, 820.0), 4000.0);
        // Near the end the offset stops at the last full screen.
        assert_eq!(target.absolute_y(1000.0, 820.0), 180.0);
        // Content shorter than the viewport cannot scroll.
        assert_eq!(target.absolute_y(500.0, 820.0), 0.0);
    }

    #[test]
    fn empty_layout_targets_top() {
        let layout = PageLayout::new().anchored("about", 0.0);
        assert_eq!(layout.target("about").unwrap().relative_y, 0.0);
    }
}
