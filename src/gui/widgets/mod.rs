use iced::{
    Background, Border, Element, Font, Length, Padding, Theme, border, font,
    widget::{Row, button, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::{TagPalette, motion::Frame, tag_color::DARK_BACKGROUND_ALPHA},
    gui::style::{Tokens, to_iced},
};

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub const SEMIBOLD: Font = Font {
    weight: font::Weight::Semibold,
    ..Font::DEFAULT
};

/// Rounded surface used for every content block.
pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tokens: Tokens,
) -> container::Container<'a, Message> {
    container(content)
        .padding(28)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            bordered_box(theme)
                .background(tokens.surface)
                .border(border::rounded(12.0).color(tokens.border).width(1.0))
        })
}

pub fn section_header<'a, Message: 'a>(
    glyph: &'a str,
    title: &'a str,
    tokens: Tokens,
) -> Element<'a, Message> {
    let badge = container(text(glyph).size(20).color(tokens.accent))
        .padding(10)
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(tokens.accent_soft)),
            border: border::rounded(8.0),
            ..container::Style::default()
        });
    row![badge, text(title).size(30).font(BOLD).color(tokens.heading)]
        .spacing(16)
        .align_y(iced::Alignment::Center)
        .into()
}

pub fn tag_pill<'a, Message: 'a>(
    label: &'a str,
    palette: &TagPalette,
    tokens: Tokens,
) -> Element<'a, Message> {
    let color = palette.color_for(label);
    let background = if tokens.dark {
        iced::Color {
            a: DARK_BACKGROUND_ALPHA * tokens.opacity,
            ..to_iced(color.background_dark)
        }
    } else {
        iced::Color {
            a: tokens.opacity,
            ..to_iced(color.background_light)
        }
    };
    let foreground = iced::Color {
        a: tokens.opacity,
        ..to_iced(color.text(tokens.dark))
    };
    container(text(label).size(13).color(foreground))
        .padding([4, 12])
        .style(move |_: &Theme| container::Style {
            background: Some(Background::Color(background)),
            border: border::rounded(999.0),
            ..container::Style::default()
        })
        .into()
}

pub fn tag_row<'a, Message: 'a>(
    labels: &'a [&'a str],
    palette: &TagPalette,
    tokens: Tokens,
) -> Element<'a, Message> {
    Row::with_children(
        labels
            .iter()
            .map(|label| tag_pill(label, palette, tokens)),
    )
    .spacing(8)
    .wrap()
    .into()
}

/// Flat text button used in the navigation bar and footer.
pub fn link_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Message,
    color: iced::Color,
    hover: iced::Color,
) -> button::Button<'a, Message> {
    button(text(label).size(15))
        .on_press(on_press)
        .padding([4, 8])
        .style(move |_: &Theme, status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => color,
            },
            border: Border::default(),
            ..button::Style::default()
        })
}

/// Solid call-to-action button.
pub fn solid_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
    background: iced::Color,
    foreground: iced::Color,
) -> button::Button<'a, Message> {
    button(text(label).size(16).font(SEMIBOLD))
        .on_press_maybe(on_press)
        .padding([12, 24])
        .style(move |_: &Theme, status| {
            let background = match status {
                button::Status::Hovered => iced::Color {
                    a: background.a * 0.85,
                    ..background
                },
                _ => background,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color: foreground,
                border: border::rounded(8.0),
                ..button::Style::default()
            }
        })
}

/// Shift `content` by the frame's offsets. Opacity is applied by the caller
/// through [`Tokens::faded`].
pub fn animated<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    frame: Frame,
) -> Element<'a, Message> {
    let padding = Padding {
        top: frame.offset_y.max(0.0),
        bottom: (-frame.offset_y).max(0.0),
        left: frame.offset_x.max(0.0),
        right: (-frame.offset_x).max(0.0),
    };
    container(content).padding(padding).into()
}
