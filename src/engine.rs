use std::collections::HashSet;

use anyhow::Result;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::params::DudeParameters;
use crate::scheme;
use crate::stats::DudeOutcome;
use crate::step;
use crate::subdomain;

/// Hard stop for pathological inputs; realistic URL sets never get close
/// since every level strictly shrinks its candidate set.
const MAX_RECURSION_DEPTH: usize = 64;

/// Run dynamic URL detection over a full candidate list.
///
/// Strips schemes, partitions by subdomain, runs the recursive driver on
/// each group in parallel, then restores schemes and sorts all three output
/// lists for deterministic output.
pub fn dude_main(
    urls: &[String],
    domain: &str,
    params: &DudeParameters,
) -> Result<DudeOutcome> {
    let (stripped, backmap) = scheme::strip_schemes(urls);
    let groups = subdomain::partition(&stripped, domain)?;

    info!(
        action = "partition",
        component = "dude_engine",
        url_count = stripped.len(),
        subdomain_count = groups.len(),
        "Partitioned candidate URLs by subdomain"
    );

    // Subdomain groups never interact; process them in parallel and fan the
    // per-group results back into one accumulator. The final sort makes the
    // merge order irrelevant.
    let group_results: Vec<(Vec<String>, Vec<String>, Vec<String>)> = groups
        .into_par_iter()
        .map(|(subdomain_key, population)| {
            if population.is_empty() {
                return (Vec::new(), Vec::new(), Vec::new());
            }
            if population.len() < params.subdomain_threshold {
                // too small a sample to safely cluster; trust it wholesale
                let orphans: Vec<String> = population.into_iter().collect();
                return (orphans, Vec::new(), Vec::new());
            }

            let cutoff_value = population.len() as f64 * params.popularity_cutoff;
            debug!(
                action = "start",
                component = "dude_engine",
                subdomain = subdomain_key.as_str(),
                population = population.len(),
                cutoff_value,
                "Running detection on subdomain"
            );
            dude_subdomain(population, &subdomain_key, params, cutoff_value, "", 0)
        })
        .collect();

    let mut orphans = Vec::new();
    let mut excluded = Vec::new();
    let mut prefixes = Vec::new();
    for (orphans_part, excluded_part, prefixes_part) in group_results {
        orphans.extend(orphans_part);
        excluded.extend(excluded_part);
        prefixes.extend(prefixes_part);
    }

    let mut orphans = scheme::restore_schemes(&orphans, &backmap)?;
    let mut excluded = scheme::restore_schemes(&excluded, &backmap)?;
    orphans.sort();
    excluded.sort();
    prefixes.sort();

    info!(
        action = "complete",
        component = "dude_engine",
        orphan_count = orphans.len(),
        excluded_count = excluded.len(),
        prefix_count = prefixes.len(),
        "Dynamic URL detection completed"
    );

    Ok(DudeOutcome {
        orphans,
        excluded,
        prefixes,
    })
}

/// Recursive partition driver for one subdomain.
///
/// Repeatedly asks the step executor for a prefix over the remaining
/// candidates. A missing or stagnant prefix ends the exploration with the
/// remainder as orphans. A short prefix is distrusted: the matched subset is
/// re-explored recursively with the same cutoff. A long prefix is strong
/// evidence of a generated family and excludes its matches wholesale.
///
/// `cutoff_value` is sized from the subdomain's original population and held
/// fixed through the whole recursion tree, so deep branches compare a
/// shrinking set against the original cutoff.
pub fn dude_subdomain(
    population: HashSet<String>,
    subdomain: &str,
    params: &DudeParameters,
    cutoff_value: f64,
    prev_prefix: &str,
    depth: usize,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut orphans = Vec::new();
    let mut excluded = Vec::new();
    let mut identified_prefixes = Vec::new();
    let mut candidates = population;

    let subdomain_len = subdomain.chars().count();

    if depth >= MAX_RECURSION_DEPTH {
        warn!(
            action = "abort",
            component = "dude_driver",
            subdomain,
            depth,
            candidate_count = candidates.len(),
            "Recursion depth limit reached, keeping branch as orphans"
        );
        orphans.extend(candidates);
        return (orphans, excluded, identified_prefixes);
    }

    loop {
        if (candidates.len() as f64) < cutoff_value {
            // too few candidates left to ever satisfy the popularity cutoff
            orphans.extend(candidates);
            break;
        }

        let step_result = step::execute_step(
            &candidates,
            subdomain_len,
            cutoff_value,
            params.large_link_len_threshold,
            params.large_link_count,
        );

        let prefix = match step_result.prefix {
            Some(prefix) if prefix != prev_prefix => prefix,
            // no signal, or the sub-call rediscovered the prefix it was
            // called with; give up cleanly
            _ => {
                orphans.extend(candidates);
                break;
            }
        };

        debug!(
            action = "step",
            component = "dude_driver",
            subdomain,
            depth,
            prefix = prefix.as_str(),
            matched = step_result.matched.len(),
            unmatched = step_result.unmatched.len(),
            "Prefix step completed"
        );

        if prefix.chars().count() < subdomain_len + params.short_prefix_cutoff {
            // short prefix: likely coincidental overlap, narrow the search
            // within the matched subset instead of excluding it
            let (orphans_part, excluded_part, prefixes_part) = dude_subdomain(
                step_result.matched,
                subdomain,
                params,
                cutoff_value,
                &prefix,
                depth + 1,
            );
            orphans.extend(orphans_part);
            excluded.extend(excluded_part);
            identified_prefixes.extend(prefixes_part);
        } else {
            // long prefix: trusted template marker, exclude its family
            identified_prefixes.push(prefix);
            excluded.extend(step_result.matched);
        }
        candidates = step_result.unmatched;
    }

    (orphans, excluded, identified_prefixes)
}
