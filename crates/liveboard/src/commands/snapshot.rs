//! `liveboard snapshot`: one poll, one page.

use std::path::Path;

use liveboard_core::{Dashboard, PollOutcome};

use super::{poll_error, write_page};
use crate::error::CliError;

pub async fn handle(dashboard: &Dashboard, target: Option<&Path>) -> Result<(), CliError> {
    let (total, live) = match dashboard.refresh().await {
        PollOutcome::Updated { total, live } => (total, live),
        PollOutcome::Skipped { error } => return Err(poll_error(error)),
        PollOutcome::Superseded => {
            return Err(CliError::PollFailed {
                reason: "a newer poll was applied first".into(),
            });
        }
    };

    let page = dashboard.page_html().await;
    match target {
        Some(path) => {
            write_page(path, &page).await?;
            eprintln!(
                "Wrote {} ({total} streamers, {live} live)",
                path.display()
            );
        }
        None => print!("{page}"),
    }
    Ok(())
}
