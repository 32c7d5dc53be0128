//! Stamps the demo binary with `GIT_VERSION`: the package version, plus
//! `+<short commit>` when built from a git checkout.

use std::process::Command;

fn short_commit() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}

fn main() {
    let package = env!("CARGO_PKG_VERSION");
    let version = match short_commit() {
        Some(hash) => format!("{package}+{hash}"),
        None => package.to_owned(),
    };

    println!("cargo:rustc-env=GIT_VERSION={version}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
