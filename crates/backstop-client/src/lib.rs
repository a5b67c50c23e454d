//! Client for the provider's backup API: authenticated JSON requests,
//! archive downloads, and the trigger-poll-download orchestration used by
//! on-demand backups.

pub mod client;
pub mod download;
pub mod error;
pub mod orchestrate;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
