use iced::{
    ContentFit, Element, Length, Theme, border,
    widget::{Row, column, container, image, row, stack, text},
};

use crate::{
    core::{
        Section,
        content::{BACKGROUND_IMAGE, PROFILE, PROFILE_IMAGE},
        links::SOCIAL_LINKS,
        motion::Motion,
    },
    gui::{
        Message,
        state::AppState,
        style::Tokens,
        widgets::{BOLD, animated, link_button, solid_button},
    },
};

use super::page_width;

const HERO_HEIGHT: f32 = 480.0;

pub fn hero(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let left_frame = state.frame(Motion::slide_in_from_left());
    let left_tokens = tokens.faded(left_frame.opacity);
    let intro = column![
        text(PROFILE.name)
            .size(46)
            .font(BOLD)
            .color(left_tokens.hero_text),
        text(PROFILE.title).size(22).color(left_tokens.hero_subtle),
        text(PROFILE.tagline).size(16).color(left_tokens.hero_subtle),
        row![
            solid_button(
                "Download CV",
                Some(Message::DownloadCv),
                tokens.surface,
                tokens.accent,
            ),
            solid_button(
                "Hire Me",
                Some(Message::ScrollTo(Section::Contact.anchor())),
                tokens.accent,
                tokens.on_accent,
            ),
        ]
        .spacing(16),
    ]
    .spacing(18)
    .max_width(520);

    let right_frame = state.frame(Motion::slide_in_from_right());
    let photo = container(
        image(image::Handle::from_path(state.asset(PROFILE_IMAGE)))
            .width(256)
            .height(256)
            .content_fit(ContentFit::Cover)
            .opacity(right_frame.opacity),
    )
    .padding(4)
    .style(move |_: &Theme| container::Style {
        border: border::rounded(128.0).color(tokens.hero_text).width(4.0),
        ..container::Style::default()
    });

    let content = page_width(
        row![
            animated(intro, left_frame),
            iced::widget::space::horizontal(),
            animated(photo, right_frame),
        ]
        .align_y(iced::Alignment::Center)
        .padding([64, 0]),
    );

    let background = image(image::Handle::from_path(state.asset(BACKGROUND_IMAGE)))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);
    let overlay = container(iced::widget::space::horizontal())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_: &Theme| container::Style {
            background: Some(tokens.hero_overlay.into()),
            ..container::Style::default()
        });

    let content = container(content).center_y(Length::Fill);

    container(stack![background, overlay, content])
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .into()
}

pub fn social_bar(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let frame = state.frame(Motion::scale_up());
    let faded = tokens.faded(frame.opacity * frame.scale);
    let links = Row::with_children(SOCIAL_LINKS.into_iter().map(|link| {
        link_button(link.label, Message::OpenLink(link), faded.body, faded.accent).into()
    }))
    .spacing(32);

    container(container(links).center_x(Length::Fill))
        .padding([20, 0])
        .width(Length::Fill)
        .style(move |_: &Theme| container::Style {
            background: Some(tokens.surface.into()),
            ..container::Style::default()
        })
        .into()
}
