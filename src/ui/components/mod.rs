//! UI components for the FloatChat shell.

mod input_bar;
mod message_list;
mod sidebar;

pub use input_bar::InputBar;
pub use message_list::MessageList;
pub use sidebar::{Sidebar, EXAMPLE_QUERIES};
