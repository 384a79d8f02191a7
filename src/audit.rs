use colored::Colorize;

use crate::{
    matches::{self, Match},
    members, search, AuditError, Bootstrap,
};

/// Run the whole pipeline: enumerate members, collect their repository URLs,
/// query the search index for each keyword, and report the intersection.
///
/// Members are processed in directory order, keywords in the given order and
/// pages in increasing index order. Errors propagate to the caller; the
/// binary decides what to do with its process.
pub fn run_audit(bootstrap: &Bootstrap, keywords: &[&str]) -> Result<Vec<Match>, AuditError> {
    println!("{}", "GitHub Member Repository Leak Audit".white().bold());

    println!(
        "{} {}",
        "I'm going to fetch all members of".yellow(),
        bootstrap.org.white()
    );
    let member_list = members::fetch_members(bootstrap)?;
    if member_list.is_empty() {
        return Err(AuditError::EmptyInput(format!(
            "{} returned no members",
            bootstrap.org
        )));
    }
    println!("{} {}", "Success! I found:".green(), member_list.len());

    let mut member_repo_urls = Vec::new();
    for member in &member_list {
        println!(
            "{} {}",
            "Collecting the repositories of".yellow(),
            member.login.white()
        );
        member_repo_urls.extend(members::fetch_repositories(bootstrap, member));
    }
    println!(
        "{} {} {}",
        "I've collected".green(),
        member_repo_urls.len(),
        "repository URLs".green()
    );

    println!(
        "{} {:?}",
        "Now I'm going to ask the search index about".yellow(),
        keywords
    );
    let search_results = search::search(bootstrap, keywords);

    let found = matches::find_matches(&search_results, &member_repo_urls)?;
    for m in &found {
        println!(
            "{}",
            format!(
                "[woot] Found this repo {} which has a keyword of '{}'",
                m.repo_url, m.keyword
            )
            .green()
        );
    }
    if found.is_empty() {
        println!(
            "{}",
            "None of the member repositories showed up in the search results.".green()
        );
    }

    Ok(found)
}
