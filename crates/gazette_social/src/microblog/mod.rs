//! Microblog announcer.

mod client;
mod oauth;

pub use client::TwitterClient;
pub use oauth::OAuth1Credentials;
