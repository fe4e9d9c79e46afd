//! Link-forum announcer.

mod client;
mod selection;

pub use client::RedditClient;
pub use selection::{COMMUNITY_POOL, select_targets};
