pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_modal_dismiss;
pub use pointer::{wire_input_handlers, InputWiring};
