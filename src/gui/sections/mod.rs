//! Page blocks, top to bottom. Each function reads the shared state and the
//! colour tokens for the current appearance.

mod body;
mod contact;
mod footer;
mod hero;
mod navbar;

use iced::{
    Element, Length,
    widget::{column, container},
};

pub use footer::footer;
pub use hero::{hero, social_bar};
pub use navbar::navbar;

use super::{Message, state::AppState, style::Tokens};

/// Centre `content` and cap its width like the rest of the page.
fn page_width<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(content).max_width(1100).padding([0, 24]))
        .center_x(Length::Fill)
        .into()
}

pub fn main_content(state: &AppState, tokens: Tokens) -> Element<'_, Message> {
    page_width(
        column![
            body::about(state, tokens),
            body::experience(state, tokens),
            body::projects(state, tokens),
            body::skills(state, tokens),
            body::education(state, tokens),
            contact::contact(state, tokens),
        ]
        .spacing(96)
        .padding([64, 0]),
    )
}
