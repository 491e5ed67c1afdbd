mod common;
mod message;
mod updates;
mod webhook;

pub use common::*;
pub use message::*;
pub use updates::*;
pub use webhook::*;
