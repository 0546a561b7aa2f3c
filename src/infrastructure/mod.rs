mod client_http;
mod request_options_pat;

pub use client_http::*;
pub use request_options_pat::*;
