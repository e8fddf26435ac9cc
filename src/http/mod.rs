//! HTTP transport for release-asset downloads.

mod client;
mod redirect;

pub use client::HttpClient;
pub use redirect::{MAX_REDIRECT_HOPS, RedirectStep, next_step};
