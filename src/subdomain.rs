use std::collections::{HashMap, HashSet};

use crate::error::DudeError;

/// Group scheme-stripped URLs by subdomain.
///
/// The group key is the URL prefix ending at the first occurrence of the
/// domain string, so `sub.a.com/page` and `a.com/page` land in different
/// groups. Every URL belongs to exactly one group and the key is a prefix of
/// every URL in its group.
///
/// A URL that does not contain the domain at all is a data-integrity error;
/// partitioning fails fast rather than inventing a group key.
pub fn partition(
    urls: &HashSet<String>,
    domain: &str,
) -> Result<HashMap<String, HashSet<String>>, DudeError> {
    let mut groups: HashMap<String, HashSet<String>> = HashMap::new();

    for url in urls {
        let index = url
            .find(domain)
            .ok_or_else(|| DudeError::DomainNotFoundInUrl {
                domain: domain.to_string(),
                url: url.clone(),
            })?;
        let key = &url[..index + domain.len()];
        groups.entry(key.to_string()).or_default().insert(url.clone());
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_set(urls: &[&str]) -> HashSet<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn groups_by_first_domain_occurrence() {
        let urls = url_set(&[
            "a.com/x",
            "a.com/y",
            "sub.a.com/z",
            "www.a.com/a.com/nested",
        ]);
        let groups = partition(&urls, "a.com").unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups["a.com"].len(), 2);
        assert_eq!(groups["sub.a.com"].len(), 1);
        // first occurrence wins, not the later repeat in the path
        assert!(groups["www.a.com"].contains("www.a.com/a.com/nested"));
    }

    #[test]
    fn key_is_prefix_of_every_member() {
        let urls = url_set(&["a.com/x", "blog.a.com/posts/1", "blog.a.com/posts/2"]);
        let groups = partition(&urls, "a.com").unwrap();

        for (key, members) in &groups {
            for url in members {
                assert!(url.starts_with(key.as_str()));
            }
        }
        let total: usize = groups.values().map(|g| g.len()).sum();
        assert_eq!(total, urls.len());
    }

    #[test]
    fn fails_fast_when_domain_missing() {
        let urls = url_set(&["a.com/x", "other.org/page"]);
        let err = partition(&urls, "a.com").unwrap_err();
        assert_eq!(
            err,
            DudeError::DomainNotFoundInUrl {
                domain: "a.com".to_string(),
                url: "other.org/page".to_string()
            }
        );
    }
}
