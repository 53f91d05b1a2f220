// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod picker;

pub use http::AtbClient;
pub use picker::{ScriptedPicker, TerminalPicker};
