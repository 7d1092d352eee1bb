//! Colours for the two appearances. Every view reads from [`Tokens`]
//! instead of the toolkit theme, so the marker alone decides the look.

use iced::Color;

use crate::core::{self, Appearance};

pub fn to_iced(color: core::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

const fn rgb(hex: u32) -> Color {
    Color::from_rgb(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tokens {
    pub dark: bool,
    /// Entrance fade applied to text and tag pills.
    pub opacity: f32,
    pub page: Color,
    pub surface: Color,
    pub border: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub on_accent: Color,
    pub hero_overlay: Color,
    pub hero_text: Color,
    pub hero_subtle: Color,
    pub footer: Color,
    pub footer_text: Color,
    pub footer_muted: Color,
}

impl Tokens {
    const LIGHT: Tokens = Tokens {
        dark: false,
        opacity: 1.0,
        page: rgb(0xeef2ff),
        surface: rgb(0xffffff),
        border: rgb(0xd1d5db),
        heading: rgb(0x1f2937),
        body: rgb(0x374151),
        muted: rgb(0x6b7280),
        accent: rgb(0x2563eb),
        accent_soft: rgb(0xdbeafe),
        on_accent: rgb(0xffffff),
        hero_overlay: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        hero_text: rgb(0xffffff),
        hero_subtle: rgb(0xdbeafe),
        footer: rgb(0x111827),
        footer_text: rgb(0xffffff),
        footer_muted: rgb(0x9ca3af),
    };

    const DARK: Tokens = Tokens {
        dark: true,
        opacity: 1.0,
        page: rgb(0x111827),
        surface: rgb(0x1f2937),
        border: rgb(0x374151),
        heading: rgb(0xffffff),
        body: rgb(0xd1d5db),
        muted: rgb(0x9ca3af),
        accent: rgb(0x60a5fa),
        accent_soft: Color::from_rgba(0.118, 0.227, 0.541, 0.5),
        on_accent: rgb(0xffffff),
        hero_overlay: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
        hero_text: rgb(0xffffff),
        hero_subtle: rgb(0xdbeafe),
        footer: rgb(0x030712),
        footer_text: rgb(0xffffff),
        footer_muted: rgb(0x9ca3af),
    };

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark => Self::DARK,
        }
    }

    /// Copy with every text colour scaled by `opacity`, for entrance fades.
    pub fn faded(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity >= 1.0 {
            return *self;
        }
        let fade = |c: Color| Color {
            a: c.a * opacity,
            ..c
        };
        Self {
            opacity: self.opacity * opacity,
            heading: fade(self.heading),
            body: fade(self.body),
            muted: fade(self.muted),
            accent: fade(self.accent),
            hero_text: fade(self.hero_text),
            hero_subtle: fade(self.hero_subtle),
            footer_text: fade(self.footer_text),
            footer_muted: fade(self.footer_muted),
            ..*self
        }
    }

    pub fn theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
