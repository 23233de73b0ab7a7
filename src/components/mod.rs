//! UI Components
//!
//! Reusable Leptos components.

mod clear_list_button;
mod item_row;
mod recommendations;
mod shopping_list;
mod voice_control;

pub use clear_list_button::ClearListButton;
pub use item_row::ItemRow;
pub use recommendations::Recommendations;
pub use shopping_list::ShoppingList;
pub use voice_control::VoiceControl;
