mod app;
mod message;
mod sections;
mod state;
mod style;
mod widgets;

pub use app::PortfolioApp;
pub use message::Message;
pub use state::AppState;
