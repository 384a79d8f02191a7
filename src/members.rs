use colored::Colorize;

use crate::{fetch_json, AuditError, Bootstrap};

/// One organization member as returned by the directory service.
#[derive(Debug, serde::Deserialize)]
pub struct Member {
    pub login: String,
    pub repos_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct MemberRepository {
    clone_url: String,
    git_url: String,
    ssh_url: String,
    svn_url: String,
}

/// Fetch the organization's member list. A failure here is fatal to the
/// whole audit: without the directory there is nothing to cross-reference.
pub fn fetch_members(bootstrap: &Bootstrap) -> Result<Vec<Member>, AuditError> {
    fetch_json(
        &format!(
            "{}/orgs/{}/members",
            bootstrap.directory_base, bootstrap.org
        ),
        bootstrap.auth.as_ref(),
    )
}

/// Collect every URL variant (clone, git, ssh, svn) of every repository the
/// member lists. A member whose listing can't be fetched is reported and
/// contributes nothing; the audit moves on to the next member.
pub fn fetch_repositories(bootstrap: &Bootstrap, member: &Member) -> Vec<String> {
    let repositories: Vec<MemberRepository> =
        match fetch_json(&member.repos_url, bootstrap.auth.as_ref()) {
            Ok(repositories) => repositories,
            Err(e) => {
                println!(
                    "{} {}: {e}",
                    "I couldn't fetch the repositories of".red(),
                    member.login.white(),
                );
                return Vec::new();
            }
        };

    let mut urls = Vec::with_capacity(repositories.len() * 4);
    for repository in repositories {
        urls.push(repository.clone_url);
        urls.push(repository.git_url);
        urls.push(repository.ssh_url);
        urls.push(repository.svn_url);
    }
    urls
}
