pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod events;
mod lifecycle;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use lifecycle::*;
pub use scroll::*;
