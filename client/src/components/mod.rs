//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the marketing chrome and the shared pieces of every tool
//! view. Toast state is read from the context provided by `app::App`.

pub mod choice_select;
pub mod feature_cards;
pub mod footer;
pub mod generate_button;
pub mod header;
pub mod hero;
pub mod toaster;
pub mod tool_frame;
