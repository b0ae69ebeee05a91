//! Setup command handler.

use color_eyre::Result;

use super::{print_json, App};

impl App {
    /// Ensure schema; report each statement's outcome.
    pub async fn run_setup(&self) -> Result<()> {
        let graph = self.open().await?;
        let report = graph.setup().await;
        graph.close();
        let report = report?;

        if report.is_clean() {
            tracing::info!("Schema ready, created: {:?}", report.created());
        } else {
            tracing::warn!("Schema setup finished with failures");
        }
        print_json(&report)
    }
}
