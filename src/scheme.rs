use std::collections::{HashMap, HashSet};

use crate::error::DudeError;

pub const HTTP_SCHEME: &str = "http://";
pub const HTTPS_SCHEME: &str = "https://";

/// Strip the leading scheme from every URL and record it for back
/// transformation.
///
/// The returned set collapses duplicates, but the backmap keeps one scheme
/// entry per original occurrence: the same page seen under both schemes maps
/// to two entries and is restored as two URLs.
pub fn strip_schemes(urls: &[String]) -> (HashSet<String>, HashMap<String, Vec<String>>) {
    let mut stripped = HashSet::new();
    let mut backmap: HashMap<String, Vec<String>> = HashMap::new();

    for url in urls {
        let (scheme, short_url) = if let Some(rest) = url.strip_prefix(HTTPS_SCHEME) {
            (HTTPS_SCHEME, rest)
        } else if let Some(rest) = url.strip_prefix(HTTP_SCHEME) {
            (HTTP_SCHEME, rest)
        } else {
            ("", url.as_str())
        };

        stripped.insert(short_url.to_string());
        backmap
            .entry(short_url.to_string())
            .or_default()
            .push(scheme.to_string());
    }

    (stripped, backmap)
}

/// Re-attach recorded schemes to scheme-stripped URLs.
///
/// Expansion, not 1:1: a stripped URL with two recorded schemes appears twice
/// in the output. A URL without a backmap entry is a structural error.
pub fn restore_schemes(
    urls: &[String],
    backmap: &HashMap<String, Vec<String>>,
) -> Result<Vec<String>, DudeError> {
    let mut restored = Vec::with_capacity(urls.len());
    for short_url in urls {
        let schemes = backmap
            .get(short_url)
            .ok_or_else(|| DudeError::MissingSchemeMapping {
                url: short_url.clone(),
            })?;
        for scheme in schemes {
            restored.push(format!("{}{}", scheme, short_url));
        }
    }
    Ok(restored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn strips_both_schemes_and_bare_urls() {
        let input = owned(&["https://a.com/x", "http://a.com/y", "a.com/z"]);
        let (stripped, backmap) = strip_schemes(&input);

        assert_eq!(stripped.len(), 3);
        assert!(stripped.contains("a.com/x"));
        assert_eq!(backmap["a.com/x"], vec![HTTPS_SCHEME.to_string()]);
        assert_eq!(backmap["a.com/y"], vec![HTTP_SCHEME.to_string()]);
        assert_eq!(backmap["a.com/z"], vec!["".to_string()]);
    }

    #[test]
    fn duplicate_stripped_url_keeps_both_schemes() {
        let input = owned(&["https://a.com/x", "http://a.com/x"]);
        let (stripped, backmap) = strip_schemes(&input);

        assert_eq!(stripped.len(), 1);
        assert_eq!(backmap["a.com/x"].len(), 2);

        let restored = restore_schemes(&owned(&["a.com/x"]), &backmap).unwrap();
        assert_eq!(restored.len(), 2);
        assert!(restored.contains(&"https://a.com/x".to_string()));
        assert!(restored.contains(&"http://a.com/x".to_string()));
    }

    #[test]
    fn round_trip_preserves_multiset() {
        let input = owned(&[
            "https://a.com/x",
            "http://a.com/x",
            "a.com/y",
            "https://b.a.com/z",
        ]);
        let (stripped, backmap) = strip_schemes(&input);

        let stripped_vec: Vec<String> = stripped.into_iter().collect();
        let mut restored = restore_schemes(&stripped_vec, &backmap).unwrap();
        restored.sort();

        let mut expected = input;
        expected.sort();
        assert_eq!(restored, expected);
    }

    #[test]
    fn restore_fails_on_unknown_url() {
        let (_, backmap) = strip_schemes(&owned(&["https://a.com/x"]));
        let err = restore_schemes(&owned(&["a.com/unknown"]), &backmap).unwrap_err();
        assert_eq!(
            err,
            DudeError::MissingSchemeMapping {
                url: "a.com/unknown".to_string()
            }
        );
    }
}
