//! Deterministic tag colouring.
//!
//! A label is mapped onto a palette entry by summing the code points of its
//! characters and reducing the sum modulo the palette length. The same label
//! always lands on the same entry for a given palette, no matter which string
//! instance carries it.

use thiserror::Error;

use super::model::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("tag palette must contain at least one entry")]
    Empty,
    #[error("unknown tag palette entry {0:?}")]
    UnknownEntry(String),
}

/// Light and dark variants of a tag pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagColor {
    pub name: &'static str,
    pub background_light: Color,
    pub text_light: Color,
    /// Rendered at half opacity over the card surface.
    pub background_dark: Color,
    pub text_dark: Color,
}

impl TagColor {
    const fn new(
        name: &'static str,
        background_light: u32,
        text_light: u32,
        background_dark: u32,
        text_dark: u32,
    ) -> Self {
        TagColor {
            name,
            background_light: Color::from_hex(background_light),
            text_light: Color::from_hex(text_light),
            background_dark: Color::from_hex(background_dark),
            text_dark: Color::from_hex(text_dark),
        }
    }

    pub fn background(&self, dark: bool) -> Color {
        if dark { self.background_dark } else { self.background_light }
    }

    pub fn text(&self, dark: bool) -> Color {
        if dark { self.text_dark } else { self.text_light }
    }
}

pub const DARK_BACKGROUND_ALPHA: f32 = 0.5;

/// Every entry a palette can be built from, in default order.
pub const TAG_COLORS: [TagColor; 8] = [
    TagColor::new("blue", 0xdbeafe, 0x1e40af, 0x1e3a8a, 0x60a5fa),
    TagColor::new("green", 0xdcfce7, 0x166534, 0x14532d, 0x4ade80),
    TagColor::new("purple", 0xf3e8ff, 0x6b21a8, 0x581c87, 0xc084fc),
    TagColor::new("yellow", 0xfef9c3, 0x854d0e, 0x713f12, 0xfacc15),
    TagColor::new("red", 0xfee2e2, 0x991b1b, 0x7f1d1d, 0xf87171),
    TagColor::new("indigo", 0xe0e7ff, 0x3730a3, 0x312e81, 0x818cf8),
    TagColor::new("pink", 0xfce7f3, 0x9d174d, 0x831843, 0xf472b6),
    TagColor::new("teal", 0xccfbf1, 0x115e59, 0x134e4a, 0x2dd4bf),
];

pub fn lookup_tag_color(name: &str) -> Option<TagColor> {
    TAG_COLORS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Sum of the Unicode scalar values of every character in `label`.
pub fn tag_checksum(label: &str) -> u64 {
    label.chars().map(|c| u64::from(u32::from(c))).sum()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPalette {
    entries: Vec<TagColor>,
}

impl TagPalette {
    pub fn new(entries: Vec<TagColor>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { entries })
    }

    /// Builds a palette from entry names such as `["green", "teal"]`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, PaletteError> {
        let entries = names
            .iter()
            .map(|name| {
                lookup_tag_color(name.as_ref())
                    .ok_or_else(|| PaletteError::UnknownEntry(name.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TagColor] {
        &self.entries
    }

    pub fn index_for(&self, label: &str) -> usize {
        (tag_checksum(label) % self.entries.len() as u64) as usize
    }

    pub fn color_for(&self, label: &str) -> &TagColor {
        &self.entries[self.index_for(label)]
    }
}

impl Default for TagPalette {
    fn default() -> Self {
        Self {
            entries: TAG_COLORS.to_vec(),
        }
    }
}
