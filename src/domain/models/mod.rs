mod action;
mod author;
mod backend;
mod connection;
mod event;
mod loading;
mod message;
mod session;
mod slash_commands;
mod status;
mod textarea;
mod video;

pub use action::*;
pub use author::*;
pub use backend::*;
pub use connection::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use session::*;
pub use slash_commands::*;
pub use status::*;
pub use textarea::*;
pub use video::*;
