use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());
    let git_status = match command_output("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let rustc = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown-target".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".to_string());

    for (key, value) in [
        ("TRANSACT_BUILD_HASH", git_hash.as_str()),
        ("TRANSACT_BUILD_STATUS", git_status),
        ("TRANSACT_BUILD_TIMESTAMP", timestamp.as_str()),
        ("TRANSACT_BUILD_TARGET", target.as_str()),
        ("TRANSACT_BUILD_PROFILE", profile.as_str()),
        ("TRANSACT_BUILD_RUSTC", rustc.as_str()),
    ] {
        println!("cargo:rustc-env={key}={value}");
    }
}

/// Trimmed stdout of a successful command; `None` when it cannot run or fails.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
