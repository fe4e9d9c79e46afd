//! Cover image search and download for the Gazette pipeline.
//!
//! Searches an Unsplash-style API for the draft's keyword, picks one
//! candidate at random (index clamped to the actual result count), and
//! downloads its bytes in full.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod pick;

pub use client::{ImageSearchResult, ImageUrls, SearchResponse, UnsplashClient};
pub use pick::pick_index;
