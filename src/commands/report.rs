//! Report command - print the most downloaded crates of recent days.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::registry::{CratesIoClient, RegistryClient};
use crate::report;
use crate::types::PageQuery;

#[derive(Args, Debug)]
pub struct ReportCmd;

impl ReportCmd {
    pub async fn run(&self) -> Result<()> {
        let client = CratesIoClient::new().context("Failed to build HTTP client")?;
        let stdout = std::io::stdout();
        self.run_with(&client, &mut stdout.lock()).await
    }

    /// Fetch one page from `client` and write the rendering to `out`.
    ///
    /// Nothing is written unless the whole page was fetched and decoded.
    pub async fn run_with<C, W>(&self, client: &C, out: &mut W) -> Result<()>
    where
        C: RegistryClient,
        W: Write,
    {
        let query = PageQuery::recent_downloads();
        debug!(page = query.page, per_page = query.per_page, sort = query.sort, "listing crates");

        let entries = client
            .list_page(&query)
            .await
            .context("Failed to fetch crate listing from registry")?;

        info!(count = entries.len(), "fetched crate listing");

        out.write_all(report::render(&entries).as_bytes())
            .context("Failed to write report")?;
        out.flush().context("Failed to write report")
    }
}
