use std::time::Instant;

use iced::{
    Size,
    widget::{scrollable, text_editor},
};

use crate::core::links::ExternalLink;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    ToggleMenu,
    /// Scroll to the block whose anchor matches, then close the menu.
    ScrollTo(&'static str),
    PageScrolled(scrollable::Viewport),
    DownloadCv,
    DownloadFinished(Result<Option<u64>, String>),
    OpenLink(ExternalLink),
    ContactName(String),
    ContactEmail(String),
    ContactMessage(text_editor::Action),
    Frame(Instant),
    Resized(Size),
}
