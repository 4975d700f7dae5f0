//! `liveboard detail`: open the statistics overlay for one streamer and
//! print what it shows.

use tracing::debug;

use liveboard_core::{Dashboard, OverlayState, PollOutcome};

use crate::cli::DetailArgs;
use crate::error::CliError;

pub async fn handle(dashboard: &Dashboard, args: DetailArgs) -> Result<(), CliError> {
    let name = match args.name {
        Some(name) => name,
        None => lookup_name(dashboard, &args.id).await,
    };

    let applied = dashboard.open_detail(&args.id, &name).await;
    let state = dashboard.overlay_state().await;
    if !applied || matches!(state, OverlayState::Failed { .. }) {
        return Err(CliError::DetailFailed { id: args.id });
    }

    let binding = &dashboard.config().binding;
    let doc = dashboard.document().await;
    println!("{}", doc.text_content(&binding.modal_title).unwrap_or_default());
    println!("{}", doc.inner_html(&binding.modal_body).unwrap_or_default());
    Ok(())
}

/// Display name for `id` from a fresh poll, or the id itself.
async fn lookup_name(dashboard: &Dashboard, id: &str) -> String {
    if let PollOutcome::Skipped { error } = dashboard.refresh().await {
        debug!(%error, "could not poll for a display name");
    }
    dashboard
        .snapshot()
        .streamers
        .iter()
        .find(|s| s.id == id)
        .map_or_else(|| id.to_owned(), |s| s.name.clone())
}
