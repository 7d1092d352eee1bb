use iced::{
    Element, Length, Size, Subscription, Task, Theme,
    widget::{
        Id, column, container, operation, scrollable,
        scrollable::{AbsoluteOffset, RelativeOffset},
    },
    window,
};
use rfd::AsyncFileDialog;

use super::{
    Message, sections,
    state::{AppState, PageMetrics},
    style::Tokens,
};
use crate::{config::PortfolioConfig, core::CvDownload};

const PAGE_SCROLL: &str = "portfolio-page";

fn page_id() -> Id {
    Id::new(PAGE_SCROLL)
}

pub struct PortfolioApp {
    state: AppState,
}

impl PortfolioApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Open the window and block until it is closed.
    pub fn run(config: PortfolioConfig) -> anyhow::Result<()> {
        let size = Size::new(config.window.width, config.window.height);
        let palette = config.palette()?;
        iced::application(
            move || {
                let state = AppState::new(&config, palette.clone());
                (PortfolioApp::new(state), Task::none())
            },
            PortfolioApp::update,
            PortfolioApp::view,
        )
        .title(PortfolioApp::title)
        .theme(PortfolioApp::theme)
        .subscription(PortfolioApp::subscription)
        .window_size(size)
        .run()
        .map_err(|e| anyhow::anyhow!("Portfolio window failed: {}", e))
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            crate::core::content::PROFILE.name,
            crate::core::content::PROFILE.title
        )
    }

    fn theme(&self) -> Theme {
        Tokens::for_appearance(self.state.theme.appearance()).theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::Resized(size));
        if self.state.animating() {
            Subscription::batch([resize, window::frames().map(Message::Frame)])
        } else {
            resize
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleTheme => {
                self.state.toggle_theme();
                Task::none()
            }
            Message::ToggleMenu => {
                self.state.nav.toggle_menu();
                Task::none()
            }
            Message::ScrollTo(anchor) => {
                let Some(target) = self.state.nav.scroll_to_section(anchor, &self.state.layout)
                else {
                    return Task::none();
                };
                match self.state.page_metrics {
                    Some(metrics) => operation::scroll_to(
                        page_id(),
                        AbsoluteOffset {
                            x: 0.0,
                            y: target.absolute_y(metrics.content_height, metrics.viewport_height),
                        },
                    ),
                    // Before the page has reported its size.
                    None => operation::snap_to(
                        page_id(),
                        RelativeOffset {
                            x: 0.0,
                            y: target.relative_y,
                        },
                    ),
                }
            }
            Message::PageScrolled(viewport) => {
                self.state.page_metrics = Some(PageMetrics {
                    content_height: viewport.content_bounds().height,
                    viewport_height: viewport.bounds().height,
                });
                Task::none()
            }
            Message::DownloadCv => {
                let request = CvDownload::from_assets(&self.state.assets_dir);
                tracing::debug!(source = ?request.source, "CV download requested");
                Task::perform(
                    async move {
                        let handle = AsyncFileDialog::new()
                            .set_title("Save CV")
                            .set_file_name(request.file_name.as_str())
                            .add_filter("PDF", &["pdf"])
                            .save_file()
                            .await;
                        match handle {
                            Some(handle) => request
                                .deliver(handle.path())
                                .await
                                .map(Some)
                                .map_err(|e| format!("{:#}", e)),
                            None => Ok(None),
                        }
                    },
                    Message::DownloadFinished,
                )
            }
            Message::DownloadFinished(result) => {
                match result {
                    Ok(Some(bytes)) => tracing::info!(bytes, "CV saved"),
                    Ok(None) => tracing::debug!("CV download cancelled"),
                    Err(e) => tracing::warn!(error = %e, "CV download failed"),
                }
                Task::none()
            }
            Message::OpenLink(link) => {
                if let Err(e) = link.open() {
                    tracing::warn!(error = %e, target = link.target, "failed to open link");
                }
                Task::none()
            }
            Message::ContactName(value) => {
                self.state.contact.name = value;
                Task::none()
            }
            Message::ContactEmail(value) => {
                self.state.contact.email = value;
                Task::none()
            }
            Message::ContactMessage(action) => {
                self.state.contact.message.perform(action);
                Task::none()
            }
            Message::Frame(now) => {
                self.state.tick(now);
                Task::none()
            }
            Message::Resized(size) => {
                self.state.width = size.width;
                if !self.state.is_compact() {
                    self.state.nav.mobile_menu_open = false;
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;
        let tokens = Tokens::for_appearance(state.theme.appearance());

        let page = column![
            sections::hero(state, tokens),
            sections::social_bar(state, tokens),
            sections::main_content(state, tokens),
            sections::footer(state, tokens),
        ];

        let body = scrollable(page)
            .id(page_id())
            .on_scroll(Message::PageScrolled)
            .height(Length::Fill);

        container(column![sections::navbar(state, tokens), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_: &Theme| container::Style {
                background: Some(tokens.page.into()),
                ..container::Style::default()
            })
            .into()
    }
}
