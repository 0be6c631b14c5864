//! Remote member list client.
//!
//! The dashboard has exactly one remote dependency: a fixed HTTPS endpoint
//! that returns the member list as a JSON array. This crate fetches and
//! decodes it.
//!
//! # Architecture
//!
//! - [`RecordClient::fetch_records`] is a one-shot async operation meant for
//!   `Task::perform()` in the GUI. It applies a per-request timeout and
//!   retries transient failures with exponential backoff.
//! - [`decode_records`] is the synchronous body decoder; it rejects
//!   malformed JSON and duplicate ids.
//!
//! Cancellation is by drop: the fetch holds no background task, so dropping
//! (or aborting) the future stops it.
//!
//! # Example
//!
//! ```no_run
//! use roster_fetch::{FetchSettings, fetch_records};
//!
//! async fn load() -> roster_fetch::Result<()> {
//!     let records = fetch_records(&FetchSettings::default()).await?;
//!     println!("loaded {} members", records.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod decode;
pub mod error;

pub use client::RecordClient;
pub use config::{DEFAULT_ENDPOINT, FetchSettings};
pub use decode::decode_records;
pub use error::{FetchError, Result};

use roster_model::Record;

/// Fetch the member list with a one-off client.
pub async fn fetch_records(settings: &FetchSettings) -> Result<Vec<Record>> {
    RecordClient::new(settings.clone())?.fetch_records().await
}
