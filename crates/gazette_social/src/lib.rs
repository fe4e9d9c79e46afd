//! Social platform announcers for the Gazette pipeline.
//!
//! Two independent units: the microblog announcer posts a single status
//! update with OAuth 1.0a request signing, and the forum announcer submits
//! the post link to a home community plus three randomly drawn communities,
//! recording per-target outcomes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod forum;
pub mod microblog;

pub use forum::{COMMUNITY_POOL, RedditClient, select_targets};
pub use microblog::{OAuth1Credentials, TwitterClient};
