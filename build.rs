//! Stamps `PAGEBAKE_VERSION` for `pagebake --version`: the crate version on a
//! release tag, `dev@<short hash>` elsewhere, `dev@unknown` outside git.

use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = if git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        match git(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) if !hash.is_empty() => format!("dev@{hash}"),
            _ => "dev@unknown".to_string(),
        }
    };
    println!("cargo:rustc-env=PAGEBAKE_VERSION={version}");
}
