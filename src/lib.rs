use std::time::Duration;

use colored::Colorize;

pub mod audit;
pub mod matches;
pub mod members;
pub mod search;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("receiving a 403 so it is likely API restrictions, gonna need creds (see help): {0}")]
    Authorization(String),

    #[error("receiving a 404 so.....does that exist? (double check the name): {0}")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("no results...thats strange: {0}")]
    EmptyInput(String),
}

/// Username/password pair for basic authentication against the
/// member directory service.
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

pub struct Bootstrap {
    org: String,
    auth: Option<BasicAuth>,
    directory_base: String,
    search_base: String,
}

impl Bootstrap {
    pub fn new(org: String, auth: Option<BasicAuth>) -> Self {
        Self::with_bases(
            org,
            auth,
            "https://api.github.com".to_string(),
            "https://searchcode.com".to_string(),
        )
    }

    /// Point the audit at alternative directory and search services.
    pub fn with_bases(
        org: String,
        auth: Option<BasicAuth>,
        directory_base: String,
        search_base: String,
    ) -> Self {
        println!("{} {}", "I have organization:".green(), org.white());
        match &auth {
            Some(auth) => println!(
                "{} {}",
                "I have basic auth credentials for:".green(),
                auth.username.white()
            ),
            None => println!(
                "{}",
                "I have no credentials so the directory may restrict me".yellow()
            ),
        }

        Self {
            org,
            auth,
            directory_base,
            search_base,
        }
    }
}

/// Single-attempt GET that parses the body as JSON. The status code is
/// mapped onto the error taxonomy before the body is touched.
fn fetch_json<T>(url: &str, auth: Option<&BasicAuth>) -> Result<T, AuditError>
where
    T: serde::de::DeserializeOwned,
{
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AuditError::Upstream(e.to_string()))?;

    let mut request = client
        .get(url)
        .header("User-Agent", "GitHub Leak Audit")
        .header("Accept", "application/json");
    if let Some(auth) = auth {
        request = request.basic_auth(&auth.username, Some(&auth.password));
    }

    let response = request
        .send()
        .map_err(|e| AuditError::Upstream(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(AuditError::Authorization(url.to_string()));
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(AuditError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(AuditError::Upstream(format!("{url} returned {status}")));
    }

    let content = response
        .text()
        .map_err(|e| AuditError::Upstream(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| {
        AuditError::Upstream(format!("could not deserialize the response from {url}: {e}"))
    })
}
