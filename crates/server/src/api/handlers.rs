mod bot;
mod message;
mod updates;
mod webhook;

pub use bot::*;
pub use message::*;
pub use updates::*;
pub use webhook::*;
