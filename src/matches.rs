use crate::{search::SearchResults, AuditError};

/// A member repository URL that showed up in a keyword's search results.
#[derive(Debug, PartialEq, Eq)]
pub struct Match {
    pub keyword: String,
    pub repo_url: String,
}

/// Intersect the member repository URLs with the per-keyword search hits,
/// by exact string equality only.
///
/// Each URL is reported at most once, under the first keyword whose result
/// list contains it. Disjoint inputs are a valid empty outcome; an empty
/// input on either side is an error because there is nothing to compare.
pub fn find_matches(
    search_results: &SearchResults,
    member_repo_urls: &[String],
) -> Result<Vec<Match>, AuditError> {
    if search_results.is_empty() {
        return Err(AuditError::EmptyInput(
            "the search index returned nothing".to_string(),
        ));
    }
    if member_repo_urls.is_empty() {
        return Err(AuditError::EmptyInput(
            "no member repository URLs were collected".to_string(),
        ));
    }

    let mut matches = Vec::new();
    for repo_url in member_repo_urls {
        for (keyword, repos) in search_results {
            if repos.iter().any(|repo| repo == repo_url) {
                matches.push(Match {
                    keyword: keyword.clone(),
                    repo_url: repo_url.clone(),
                });
                break;
            }
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn reports_a_url_present_in_a_keyword_list() {
        let search_results: SearchResults = vec![(
            "api_token".to_string(),
            urls(&["git://github.com/acme/secretrepo.git"]),
        )];
        let member_repos = urls(&[
            "https://github.com/acme/other.git",
            "git://github.com/acme/secretrepo.git",
        ]);

        let matches = find_matches(&search_results, &member_repos).unwrap();
        assert_eq!(
            matches,
            vec![Match {
                keyword: "api_token".to_string(),
                repo_url: "git://github.com/acme/secretrepo.git".to_string(),
            }]
        );
    }

    #[test]
    fn disjoint_inputs_yield_no_matches_and_no_error() {
        let search_results: SearchResults = vec![(
            "api_token".to_string(),
            urls(&["git://github.com/elsewhere/repo.git"]),
        )];
        let member_repos = urls(&["git://github.com/acme/mine.git"]);

        let matches = find_matches(&search_results, &member_repos).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_search_results_are_an_error() {
        let member_repos = urls(&["git://github.com/acme/mine.git"]);
        let result = find_matches(&SearchResults::new(), &member_repos);
        assert!(matches!(result, Err(AuditError::EmptyInput(_))));
    }

    #[test]
    fn empty_member_repos_are_an_error() {
        let search_results: SearchResults =
            vec![("api_token".to_string(), urls(&["git://somewhere.git"]))];
        let result = find_matches(&search_results, &[]);
        assert!(matches!(result, Err(AuditError::EmptyInput(_))));
    }

    #[test]
    fn first_matching_keyword_wins() {
        let url = "git://github.com/acme/secretrepo.git";
        let search_results: SearchResults = vec![
            ("api_token".to_string(), urls(&[url])),
            ("secret_key".to_string(), urls(&[url])),
        ];
        let member_repos = urls(&[url]);

        let matches = find_matches(&search_results, &member_repos).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].keyword, "api_token");
    }

    #[test]
    fn exact_string_equality_only() {
        let search_results: SearchResults = vec![(
            "api_token".to_string(),
            urls(&["git://github.com/acme/secretrepo.git"]),
        )];
        // Same repository under a different addressing scheme is not a match
        let member_repos = urls(&["https://github.com/acme/secretrepo.git"]);

        let matches = find_matches(&search_results, &member_repos).unwrap();
        assert!(matches.is_empty());
    }
}
