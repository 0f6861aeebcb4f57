use git_version::git_version;
use std::env;

fn main() {
    let version = git_version!(fallback = "unknown");
    let git_version = match version {
        "unknown" => env::var("GIT_VERSION").unwrap_or("unknown".to_string()),
        _ => version.to_string(),
    };
    println!("cargo:rustc-env=GIT_VERSION={}", git_version);
}
