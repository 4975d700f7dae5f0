//! `liveboard watch`: keep the page file in step with the poll loop.

use std::path::Path;

use tracing::{info, warn};

use liveboard_core::Dashboard;

use super::{snapshot, write_page};
use crate::error::CliError;

pub async fn handle(dashboard: &Dashboard, output: &Path) -> Result<(), CliError> {
    if dashboard.config().poll_interval.is_zero() {
        // Nothing to schedule: one poll, one page, same failures as snapshot.
        return snapshot::handle(dashboard, Some(output)).await;
    }

    let mut updates = dashboard.subscribe();
    dashboard.start().await;

    eprintln!(
        "Watching {} -> {} (Ctrl-C to stop)",
        dashboard.config().api_url,
        output.display()
    );

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let result = loop {
        tokio::select! {
            signal = &mut shutdown => {
                if let Err(e) = signal {
                    warn!(error = %e, "failed to listen for Ctrl-C");
                }
                break Ok(());
            }
            next = updates.changed() => {
                let Some(snapshot) = next else { break Ok(()) };
                if let Err(e) = write_page(output, &dashboard.page_html().await).await {
                    break Err(e);
                }
                info!(total = snapshot.total(), live = snapshot.live(), "page updated");
            }
        }
    };

    dashboard.shutdown().await;
    result
}
