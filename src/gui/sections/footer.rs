use iced::{
    Element, Length, Theme,
    widget::{Column, Row, column, container, row, rule, text},
};

use crate::{
    core::{
        Section,
        content::{PROFILE, copyright_line},
        links::SOCIAL_LINKS,
        motion::Motion,
    },
    gui::{
        Message,
        state::AppState,
        style::Tokens,
        widgets::{BOLD, SEMIBOLD, link_button},
    },
};

use super::page_width;

pub fn footer(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let faded = tokens.faded(state.frame(Motion::fade_in()).opacity);

    let about = column![
        text(PROFILE.name).size(24).font(BOLD).color(faded.footer_text),
        text(PROFILE.footer_blurb).size(15).color(faded.footer_muted),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let quick_links = column![
        text("Quick Links")
            .size(18)
            .font(SEMIBOLD)
            .color(faded.footer_text),
        Column::with_children(Section::ALL.into_iter().map(|section| {
            link_button(
                section.label(),
                Message::ScrollTo(section.anchor()),
                faded.footer_muted,
                faded.footer_text,
            )
            .into()
        }))
        .spacing(4),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let connected = column![
        text("Get Connected")
            .size(18)
            .font(SEMIBOLD)
            .color(faded.footer_text),
        Row::with_children(SOCIAL_LINKS.into_iter().map(|link| {
            link_button(
                link.label,
                Message::OpenLink(link),
                faded.footer_muted,
                faded.footer_text,
            )
            .into()
        }))
        .spacing(12),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let columns: Element<'_, Message> = if state.is_compact() {
        column![about, quick_links, connected].spacing(32).into()
    } else {
        row![about, quick_links, connected].spacing(32).into()
    };

    let content = page_width(
        column![
            columns,
            rule::horizontal(1),
            container(
                text(copyright_line(state.year))
                    .size(14)
                    .color(faded.footer_muted)
            )
            .center_x(Length::Fill),
        ]
        .spacing(32)
        .padding([48, 0]),
    );

    container(content)
        .width(Length::Fill)
        .style(move |_: &Theme| container::Style {
            background: Some(tokens.footer.into()),
            ..container::Style::default()
        })
        .into()
}
