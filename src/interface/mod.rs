mod client;
mod request_options;

pub use client::*;
pub use request_options::*;
