//! Statistics reporting.

use console::style;

use crate::download::HarvestState;

/// Print statistics for a run.
pub fn print_harvest_stats(state: &HarvestState) {
    let handle = state.handle.as_deref().unwrap_or("unknown");

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style(format!("Statistics for {}:", handle)).bold());
    println!("  Pages fetched:  {}", state.pages_fetched);
    println!(
        "  Posts:          {} seen, {} qualified",
        state.posts_seen, state.posts_qualified
    );
    println!("  Media resolved: {}", state.media_resolved);
    if state.missing_media_keys > 0 {
        println!(
            "  Missing media:  {}",
            style(state.missing_media_keys).yellow()
        );
    }
    println!("  Queued:         {}", style(state.jobs_queued).green());
    if state.jobs_failed > 0 {
        println!("  Failed:         {}", style(state.jobs_failed).red());
    }
    if state.jobs_skipped > 0 {
        println!("  Skipped:        {} (no URL)", state.jobs_skipped);
    }
    println!("{}", style("═".repeat(50)).dim());
}
