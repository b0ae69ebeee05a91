//! Read-only reports and the reset command.

use color_eyre::eyre::bail;
use color_eyre::Result;

use super::{print_json, App};

impl App {
    pub async fn run_stats(&self) -> Result<()> {
        let graph = self.open().await?;
        let stats = graph.delay_statistics().await;
        graph.close();
        print_json(&stats?)
    }

    pub async fn run_info(&self) -> Result<()> {
        let graph = self.open().await?;
        let info = graph.info().await;
        graph.close();
        print_json(&info?)
    }

    /// Wipe the database; refuses unless `--yes` was given.
    pub async fn run_clear(&self, confirmed: bool) -> Result<()> {
        if !confirmed {
            bail!("refusing to delete every node and relationship without --yes");
        }

        let graph = self.open().await?;
        let result = graph.clear().await;
        graph.close();
        Ok(result?)
    }
}
