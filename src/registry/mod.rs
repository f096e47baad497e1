//! Registry clients for listing packages.
//!
//! # Example
//!
//! ```ignore
//! use crate::registry::{CratesIoClient, RegistryClient};
//! use crate::types::PageQuery;
//!
//! let client = CratesIoClient::new()?;
//! let entries = client.list_page(&PageQuery::recent_downloads()).await?;
//! ```

mod client;
mod crates_io;
mod error;

pub use client::{CrateEntry, RegistryClient};
pub use crates_io::CratesIoClient;
