use clap::{command, Parser};
use colored::Colorize;
use gh_leak_audit::{audit, search, BasicAuth, Bootstrap};

/// Flag member repositories that show up in code search results for
/// credential-like keywords
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Organization name as seen on GitHub
    #[arg(long)]
    org: String,

    /// Username for basic authentication against the member directory
    #[arg(long, requires = "password")]
    username: Option<String>,

    /// Password for basic authentication against the member directory
    #[arg(long, requires = "username")]
    password: Option<String>,
}

fn main() {
    let args = Args::parse();

    let auth = args
        .username
        .zip(args.password)
        .map(|(username, password)| BasicAuth { username, password });
    let bootstrap = Bootstrap::new(args.org, auth);

    if let Err(e) = audit::run_audit(&bootstrap, search::KEYWORDS) {
        println!("{}", e.to_string().bold().red());
        std::process::exit(1);
    }
}
