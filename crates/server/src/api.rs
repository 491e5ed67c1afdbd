mod extract;
pub mod handlers;
mod router;

pub use extract::JsonBody;
pub use router::create_router;
