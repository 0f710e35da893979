use std::collections::{HashMap, HashSet};

use tracing::debug;

/// Outcome of a single prefix search over one candidate set.
///
/// `matched` and `unmatched` are always a disjoint partition of the input.
/// `prefix` is `None` when too few large URLs exist to hint at a generated
/// pattern; the caller treats that as a terminal signal.
#[derive(Debug)]
pub struct PrefixStep {
    pub prefix: Option<String>,
    pub matched: HashSet<String>,
    pub unmatched: HashSet<String>,
}

/// Run one prefix detection step: collect large URLs, build a candidate
/// prefix from positional character frequencies, then shrink it until it
/// matches a big enough share of the population.
///
/// All lengths and positions are character counts, not bytes.
pub fn execute_step(
    urls: &HashSet<String>,
    domain_len: usize,
    cutoff_value: f64,
    large_link_len_threshold: usize,
    large_link_count: usize,
) -> PrefixStep {
    let large_urls: Vec<&String> = urls
        .iter()
        .filter(|url| char_len(url) > large_link_len_threshold + domain_len)
        .collect();

    if large_urls.len() <= large_link_count {
        return PrefixStep {
            prefix: None,
            matched: urls.clone(),
            unmatched: HashSet::new(),
        };
    }

    let (avg_len, max_len) = average_and_max_len(urls);
    let counters = count_characters_per_position(&large_urls, max_len);
    let prefix = generate_prefix(&counters, avg_len);
    debug!(
        action = "generate",
        component = "prefix_step",
        prefix = prefix.as_str(),
        large_url_count = large_urls.len(),
        avg_len,
        max_len,
        "Generated candidate prefix"
    );
    shorten_prefix(prefix, urls, cutoff_value)
}

/// Floored average and maximum character length over the full candidate set.
/// Callers guarantee a non-empty set.
fn average_and_max_len(urls: &HashSet<String>) -> (usize, usize) {
    let mut total = 0;
    let mut max_len = 0;
    for url in urls {
        let len = char_len(url);
        total += len;
        max_len = max_len.max(len);
    }
    (total / urls.len(), max_len)
}

/// Character frequency per position, counted over large URLs only. Shorter
/// URLs simply contribute to fewer positions.
fn count_characters_per_position(
    urls: &[&String],
    max_len: usize,
) -> Vec<HashMap<char, usize>> {
    let mut counters = vec![HashMap::new(); max_len];
    for url in urls {
        for (position, character) in url.chars().enumerate() {
            *counters[position].entry(character).or_insert(0) += 1;
        }
    }
    counters
}

/// Build the candidate prefix from the most frequent character at each of the
/// first `avg_len` positions. Ties go to the smallest character so the result
/// is reproducible.
fn generate_prefix(counters: &[HashMap<char, usize>], avg_len: usize) -> String {
    let mut prefix = String::new();
    for counter in counters.iter().take(avg_len) {
        let best = counter
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)));
        match best {
            Some((character, _)) => prefix.push(*character),
            None => break,
        }
    }
    prefix
}

/// Truncate the prefix one character at a time until it matches at least
/// `cutoff_value` URLs or the whole population. The empty prefix matches
/// everything, so the loop always terminates.
fn shorten_prefix(mut prefix: String, urls: &HashSet<String>, cutoff_value: f64) -> PrefixStep {
    loop {
        let matched: HashSet<String> = urls
            .iter()
            .filter(|url| url.contains(prefix.as_str()))
            .cloned()
            .collect();

        if matched.len() as f64 >= cutoff_value || matched.len() == urls.len() {
            let unmatched = urls.difference(&matched).cloned().collect();
            return PrefixStep {
                prefix: Some(prefix),
                matched,
                unmatched,
            };
        }
        prefix.pop();
    }
}

/// Character count, matching the position indexing used by the counters.
fn char_len(s: &str) -> usize {
    s.chars().count()
}
