use iced::{
    Element, Length,
    widget::{Column, column, row, text, text_editor, text_input},
};

use crate::{
    core::{Section, content::CONTACT_DETAILS},
    gui::{
        Message,
        state::AppState,
        style::Tokens,
        widgets::{SEMIBOLD, animated, card, section_header, solid_button},
    },
};

pub fn contact(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    let header_frame = state.item_frame(0);
    let details_frame = state.item_frame(1);
    let form_frame = state.item_frame(2);
    let details_tokens = tokens.faded(details_frame.opacity);
    let form_tokens = tokens.faded(form_frame.opacity);

    let details = Column::with_children(CONTACT_DETAILS.iter().map(|detail| {
        column![
            text(detail.label).size(13).color(details_tokens.muted),
            text(detail.value).size(16).color(details_tokens.heading),
        ]
        .spacing(2)
        .into()
    }))
    .spacing(16);
    let details = card(
        column![
            text("Get In Touch")
                .size(20)
                .font(SEMIBOLD)
                .color(details_tokens.heading),
            details,
        ]
        .spacing(16),
        tokens,
    );

    let form = &state.contact;
    let fields = column![
        text("Send Message")
            .size(20)
            .font(SEMIBOLD)
            .color(form_tokens.heading),
        text_input("Your Name", &form.name)
            .on_input(Message::ContactName)
            .padding(10),
        text_input("Your Email", &form.email)
            .on_input(Message::ContactEmail)
            .padding(10),
        text_editor(&form.message)
            .placeholder("Your Message")
            .on_action(Message::ContactMessage)
            .height(120),
        // The form is decorative: the button has no handler.
        solid_button("Send Message", None, tokens.accent, tokens.on_accent).width(Length::Fill),
    ]
    .spacing(16);

    let panels: Element<'_, Message> = if state.is_compact() {
        column![
            animated(details, details_frame),
            animated(card(fields, tokens), form_frame),
        ]
        .spacing(24)
        .into()
    } else {
        row![
            animated(details.width(Length::FillPortion(1)), details_frame),
            animated(card(fields, tokens).width(Length::FillPortion(1)), form_frame),
        ]
        .spacing(24)
        .into()
    };

    column![
        animated(
            section_header(
                "✉",
                Section::Contact.label(),
                tokens.faded(header_frame.opacity)
            ),
            header_frame,
        ),
        panels,
    ]
    .spacing(32)
    .into()
}
