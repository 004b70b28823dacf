//! # archive-browser
//!
//! Backend library for browsing a newspaper's monthly article archive.
//!
//! ## Design Philosophy
//!
//! archive-browser is designed to be:
//! - **Library-first** - No UI or CLI, purely a Rust crate for embedding
//! - **Single outcome channel** - Every fetch collapses into one
//!   success-with-documents or failure-with-message value; no exception ever
//!   escapes the pipeline boundary
//! - **Presentation-agnostic** - Consumers get typed documents and
//!   day-grouped sections; rendering belongs to them
//! - **Explicit configuration** - One config struct built at startup, no
//!   ambient global state
//!
//! ## Quick Start
//!
//! ```no_run
//! use archive_browser::{ArchiveFetcher, Config, ListState, MonthInfo};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("my-api-key");
//!     let range = config.month_range();
//!     let fetcher = ArchiveFetcher::new(config)?;
//!
//!     let month = range.clamp(MonthInfo::new(2017, 10));
//!     let outcome = fetcher.fetch_month(month).await;
//!
//!     match ListState::from_outcome(outcome) {
//!         ListState::Data(sections) => {
//!             for section in sections {
//!                 println!("{}: {} articles", section.label, section.documents.len());
//!             }
//!         }
//!         ListState::Empty => println!("no articles for {month}"),
//!         ListState::Error(message) => eprintln!("{message}"),
//!         ListState::Loading => {}
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Archive fetch orchestration
pub mod fetcher;
/// Day-based grouping of documents
pub mod grouper;
/// Month-interval selection logic
pub mod month_range;
/// Response decoding
pub mod parser;
/// Request URL construction
pub mod query;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::{ArchiveFetcher, ArchiveSource};
pub use grouper::group;
pub use month_range::MonthRange;
pub use parser::parse;
pub use query::build_request;
pub use types::{
    ArchiveOutcome, Byline, DaySection, Document, Headline, ListState, MonthInfo, month_name,
};
