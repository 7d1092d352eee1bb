use iced::{
    Element, Length, Theme, border,
    widget::{Column, Row, column, container, row, text},
};

use crate::{
    core::{
        Section,
        content::{ABOUT, EDUCATION, EXPERIENCE, PROJECTS, Project, SKILL_GROUPS},
    },
    gui::{
        Message,
        state::AppState,
        style::Tokens,
        widgets::{SEMIBOLD, animated, card, section_header, tag_row},
    },
};

/// Section heading, faded and lifted as the first staggered item.
fn heading<'a>(
    state: &AppState,
    glyph: &'a str,
    section: Section,
    tokens: Tokens,
) -> Element<'a, Message> {
    let frame = state.item_frame(0);
    animated(
        section_header(glyph, section.label(), tokens.faded(frame.opacity)),
        frame,
    )
}

pub fn about(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let frame = state.item_frame(1);
    let faded = tokens.faded(frame.opacity);
    let paragraphs = Column::with_children(
        ABOUT
            .iter()
            .map(|p| text(*p).size(16).color(faded.body).into()),
    )
    .spacing(16);

    column![
        heading(state, "★", Section::About, tokens),
        animated(card(paragraphs, tokens), frame),
    ]
    .spacing(32)
    .into()
}

pub fn experience(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let frame = state.item_frame(1);
    let faded = tokens.faded(frame.opacity);

    let title = container(
        column![
            text(EXPERIENCE.role).size(20).font(SEMIBOLD).color(faded.heading),
            text(EXPERIENCE.context).size(15).color(faded.muted),
            text(EXPERIENCE.period).size(13).color(faded.muted),
        ]
        .spacing(4),
    )
    .padding([4, 16]);
    let accent_bar = container(iced::widget::space::vertical())
        .width(4)
        .height(72)
        .style(move |_: &Theme| container::Style {
            background: Some(tokens.accent.into()),
            ..container::Style::default()
        });

    let highlights = Column::with_children(EXPERIENCE.highlights.iter().map(|h| {
        row![
            text("•").color(faded.accent),
            text(*h).size(15).color(faded.body),
        ]
        .spacing(8)
        .into()
    }))
    .spacing(8);

    let body = column![
        row![accent_bar, title],
        text(EXPERIENCE.summary).size(16).color(faded.body),
        highlights,
    ]
    .spacing(20);

    column![
        heading(state, "▣", Section::Experience, tokens),
        animated(card(body, tokens), frame),
    ]
    .spacing(32)
    .into()
}

fn project_card<'a>(
    project: &'a Project,
    state: &'a AppState,
    index: usize,
    tokens: Tokens,
) -> Element<'a, Message> {
    let frame = state.item_frame(index + 1);
    let faded = tokens.faded(frame.opacity);
    let body = column![
        text(project.title).size(20).font(SEMIBOLD).color(faded.heading),
        text(project.description).size(15).color(faded.body),
        tag_row(project.tags, &state.palette, faded),
    ]
    .spacing(14);
    animated(card(body, tokens).height(Length::Fill), frame)
}

pub fn projects(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let per_row = if state.is_compact() { 1 } else { 2 };
    let rows = PROJECTS
        .chunks(per_row)
        .enumerate()
        .map(|(row_index, chunk)| {
            let cards = chunk.iter().enumerate().map(|(offset, project)| {
                container(project_card(project, state, row_index * per_row + offset, tokens))
                    .width(Length::FillPortion(1))
                    .into()
            });
            let mut cards: Vec<Element<'_, Message>> = cards.collect();
            // Keep the last odd card at half width.
            while cards.len() < per_row {
                cards.push(container(text("")).width(Length::FillPortion(1)).into());
            }
            Row::with_children(cards).spacing(24).into()
        });

    column![
        heading(state, "</>", Section::Projects, tokens),
        Column::with_children(rows).spacing(24),
    ]
    .spacing(32)
    .into()
}

pub fn skills(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let groups = SKILL_GROUPS.iter().enumerate().map(|(index, group)| {
        let frame = state.item_frame(index + 1);
        let faded = tokens.faded(frame.opacity);
        let body = column![
            text(group.title).size(19).font(SEMIBOLD).color(faded.heading),
            tag_row(group.skills, &state.palette, faded),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center);
        container(animated(card(body, tokens), frame))
            .width(Length::FillPortion(1))
            .into()
    });
    let groups: Element<'_, Message> = if state.is_compact() {
        Column::with_children(groups).spacing(24).into()
    } else {
        Row::with_children(groups).spacing(24).into()
    };

    column![heading(state, "✦", Section::Skills, tokens), groups]
        .spacing(32)
        .into()
}

pub fn education(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let frame = state.item_frame(1);
    let faded = tokens.faded(frame.opacity);
    let period = container(text(EDUCATION.period).size(13).color(faded.accent))
        .padding([4, 12])
        .style(move |_: &Theme| container::Style {
            background: Some(tokens.accent_soft.into()),
            border: border::rounded(999.0),
            ..container::Style::default()
        });

    let body = column![
        row![
            column![
                text(EDUCATION.degree).size(20).font(SEMIBOLD).color(faded.heading),
                text(EDUCATION.institution).size(15).color(faded.muted),
            ]
            .spacing(4)
            .width(Length::Fill),
            period,
        ]
        .align_y(iced::Alignment::Center),
        text(EDUCATION.summary).size(16).color(faded.body),
        row![
            text("Location:").font(SEMIBOLD).color(faded.body),
            text(EDUCATION.location).color(faded.body),
        ]
        .spacing(6),
    ]
    .spacing(20);

    column![
        heading(state, "⌂", Section::Education, tokens),
        animated(card(body, tokens), frame),
    ]
    .spacing(32)
    .into()
}
