use std::time::Duration;

/// Three result lists of one detection run, lexicographically sorted.
/// `orphans` and `excluded` carry restored schemes; `prefixes` are the
/// scheme-free template markers that were trusted.
#[derive(Debug)]
pub struct DudeOutcome {
    pub orphans: Vec<String>,
    pub excluded: Vec<String>,
    pub prefixes: Vec<String>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub input_count: usize,
    pub remaining_count: usize,
    pub excluded_count: usize,
    pub prefix_count: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn reduction_percent(&self) -> f64 {
        if self.input_count == 0 {
            return 0.0;
        }
        (self.input_count as f64 - self.remaining_count as f64) * 100.0 / self.input_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_zero_for_empty_input() {
        let summary = RunSummary {
            input_count: 0,
            remaining_count: 0,
            excluded_count: 0,
            prefix_count: 0,
            duration: Duration::ZERO,
        };
        assert_eq!(summary.reduction_percent(), 0.0);
    }

    #[test]
    fn reduction_reflects_filtered_share() {
        let summary = RunSummary {
            input_count: 200,
            remaining_count: 50,
            excluded_count: 150,
            prefix_count: 3,
            duration: Duration::from_millis(120),
        };
        assert!((summary.reduction_percent() - 75.0).abs() < f64::EPSILON);
    }
}
