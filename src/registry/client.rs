//! Registry client trait and common types.

use std::future::Future;

use super::error::RegistryError;
use crate::types::PageQuery;

/// One listed crate, projected to the fields we report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateEntry {
    pub id: String,
    /// None when the registry sends `null`.
    pub recent_downloads: Option<u64>,
    /// None when the registry sends `null` or omits the field.
    pub repository: Option<String>,
}

/// Trait for registry clients.
///
/// A client fetches one page of the registry's package listing and
/// returns the entries in the order the registry sent them.
pub trait RegistryClient: Send + Sync {
    fn list_page(
        &self,
        query: &PageQuery,
    ) -> impl Future<Output = Result<Vec<CrateEntry>, RegistryError>> + Send;
}
