use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::{engine, files, stats::RunSummary, Args};

/// Run the full detection stage: read the candidate list, filter it, write
/// the three output lists and report the reduction.
///
/// The candidate file is overwritten in place with the remaining orphan
/// candidates; excluded URLs and identified prefixes go to their own files
/// as an audit trail.
pub fn run_dynamic_url_detection(args: &Args) -> Result<RunSummary> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "dude_run",
        domain = args.domain.as_str(),
        "Starting dynamic URL detection"
    );

    configure_thread_pool(args.workers);

    let candidates = files::read_lines(&args.candidates)?;
    let input_count = candidates.len();
    info!(
        action = "load",
        component = "dude_run",
        candidate_count = input_count,
        file_path = ?args.candidates,
        "Loaded candidate URLs"
    );

    let outcome = engine::dude_main(&candidates, &args.domain, &args.dude_params())?;

    files::write_lines(&args.candidates, &outcome.orphans)?;
    files::write_lines(&args.excluded_path(), &outcome.excluded)?;
    files::write_lines(&args.prefixes_path(), &outcome.prefixes)?;

    let summary = RunSummary {
        input_count,
        remaining_count: outcome.orphans.len(),
        excluded_count: outcome.excluded.len(),
        prefix_count: outcome.prefixes.len(),
        duration: total_start_time.elapsed(),
    };

    info!(
        action = "complete",
        component = "dude_run",
        remaining_count = summary.remaining_count,
        excluded_count = summary.excluded_count,
        prefix_count = summary.prefix_count,
        duration_ms = summary.duration.as_millis(),
        "Dynamic URL detection run completed"
    );

    Ok(summary)
}

/// An explicit worker count is honored as-is; the default is the CPU count
/// capped at 8.
fn configure_thread_pool(workers: Option<usize>) -> usize {
    let worker_count = workers.unwrap_or_else(default_worker_count);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .build_global()
    {
        warn!(action = "configure", component = "dude_run", error = %e, "Worker thread pool already configured");
    }
    info!(
        action = "configure",
        component = "dude_run",
        worker_count,
        "Using workers for processing"
    );
    worker_count
}

fn default_worker_count() -> usize {
    std::cmp::min(num_cpus::get(), 8)
}

pub fn print_run_summary(summary: &RunSummary, args: &Args) {
    println!("\n--- {} Dynamic URL Detection ---", args.domain);
    println!(
        "Candidates before filtering: {}",
        crate::utils::format_number(summary.input_count as u32)
    );
    println!(
        "Remaining orphan candidates: {}",
        crate::utils::format_number(summary.remaining_count as u32)
    );
    println!(
        "Excluded URLs: {}",
        crate::utils::format_number(summary.excluded_count as u32)
    );
    println!(
        "Identified prefixes: {}",
        crate::utils::format_number(summary.prefix_count as u32)
    );
    println!("Reduction: {:.2}%", summary.reduction_percent());
    println!("Elapsed: {:.2}s", summary.duration.as_secs_f64());
}
