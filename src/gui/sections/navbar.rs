use iced::{
    Element, Length, Theme,
    widget::{Column, Row, button, column, container, row, space, text},
};

use crate::{
    core::{Section, motion::Motion},
    gui::{
        Message,
        state::AppState,
        style::Tokens,
        widgets::{BOLD, link_button},
    },
};

const BAR_HEIGHT: f32 = 64.0;

fn nav_links<'a>(tokens: Tokens) -> impl Iterator<Item = Element<'a, Message>> {
    Section::ALL.into_iter().map(move |section| {
        link_button(
            section.label(),
            Message::ScrollTo(section.anchor()),
            tokens.body,
            tokens.accent,
        )
        .into()
    })
}

pub fn navbar(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let theme_toggle = button(text(if state.theme.is_dark() { "☀" } else { "☾" }).size(18))
        .on_press(Message::ToggleTheme)
        .padding(8)
        .style(move |_: &Theme, _| button::Style {
            text_color: if tokens.dark {
                iced::Color::from_rgb8(0xfd, 0xe0, 0x47)
            } else {
                tokens.body
            },
            ..button::Style::default()
        });
    let theme_toggle = iced::widget::tooltip(
        theme_toggle,
        text(state.theme.toggle_label()).size(12),
        iced::widget::tooltip::Position::Bottom,
    );

    let mut bar = row![
        text(crate::core::content::PROFILE.initials)
            .size(20)
            .font(BOLD)
            .color(tokens.accent),
        space::horizontal(),
        theme_toggle,
    ]
    .spacing(24)
    .align_y(iced::Alignment::Center)
    .height(Length::Fixed(BAR_HEIGHT));

    if state.is_compact() {
        bar = bar.push(link_button("☰", Message::ToggleMenu, tokens.body, tokens.accent));
    } else {
        bar = bar.push(Row::with_children(nav_links(tokens)).spacing(12));
    }

    // Drops in from above by revealing the bar top-down.
    let reveal = 1.0 + state.frame(Motion::nav_drop()).offset_y / 100.0;
    let bar = container(bar)
        .padding([0, 24])
        .height(Length::Fixed((BAR_HEIGHT * reveal).max(0.0)))
        .clip(true);

    let mut content = column![bar];
    if state.is_compact() && state.nav.mobile_menu_open {
        content = content.push(
            container(Column::with_children(nav_links(tokens)).spacing(4))
                .padding([8, 24])
                .width(Length::Fill),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(move |_: &Theme| container::Style {
            background: Some(
                iced::Color {
                    a: 0.9,
                    ..tokens.surface
                }
                .into(),
            ),
            border: iced::Border {
                color: tokens.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}
