use colored::Colorize;

use crate::{fetch_json, AuditError, Bootstrap};

/// The credential-like terms we ask the code search index about.
pub const KEYWORDS: &[&str] = &["api_token"];

const MAX_PAGES: usize = 50;
const PAGE_SIZE: usize = 100;

/// Per-keyword repository identifiers, in keyword order. Kept as a sequence
/// rather than a map so the match stage iterates keywords deterministically.
pub type SearchResults = Vec<(String, Vec<String>)>;

#[derive(Debug, serde::Deserialize)]
struct SearchPage {
    results: Vec<SearchHit>,
}

#[derive(Debug, serde::Deserialize)]
struct SearchHit {
    repo: String,
}

/// Query the search index for every keyword. A keyword whose pages can't be
/// fetched or parsed is reported and dropped from the result set; the
/// remaining keywords are still collected.
pub fn search(bootstrap: &Bootstrap, keywords: &[&str]) -> SearchResults {
    let mut all_results = SearchResults::new();
    for keyword in keywords {
        match collect_keyword(bootstrap, keyword) {
            Ok(repos) => {
                println!(
                    "{} {} {} {}",
                    "The index knows".green(),
                    repos.len(),
                    "repositories for keyword".green(),
                    keyword.white()
                );
                all_results.push((keyword.to_string(), repos));
            }
            Err(e) => {
                println!("{} {}: {e}", "I'm dropping keyword".red(), keyword.white());
            }
        }
    }
    all_results
}

/// Walk the result pages for one keyword in increasing index order, stopping
/// at the first empty page or at the page bound, whichever comes first.
fn collect_keyword(bootstrap: &Bootstrap, keyword: &str) -> Result<Vec<String>, AuditError> {
    let query = urlencoding::encode(keyword).to_string();

    let mut repos = Vec::new();
    for page in 0..MAX_PAGES {
        let url = format!(
            "{}/api/codesearch_I/?q={query}&p={page}&src=2&per_page={PAGE_SIZE}",
            bootstrap.search_base
        );
        let response: SearchPage = fetch_json(&url, None)?;

        // Past the last page
        if response.results.is_empty() {
            break;
        }

        repos.extend(response.results.into_iter().map(|hit| hit.repo));
    }

    Ok(repos)
}
