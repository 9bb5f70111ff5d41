use std::process::Command;

/// Trimmed stdout of a git invocation, or `None` outside a checkout.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

/// `0.3.2` for a clean tagged checkout, `0.3.2@abc1234 2024-01-15` otherwise.
fn version_string(version: &str) -> String {
    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]).filter(|h| !h.is_empty()) else {
        return version.to_string();
    };

    let tagged = git(&["tag", "--points-at", "HEAD"]).is_some_and(|tags| {
        tags.lines()
            .any(|tag| tag.strip_prefix('v').unwrap_or(tag) == version)
    });
    let dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    if tagged && !dirty {
        return version.to_string();
    }

    match git(&["log", "-1", "--format=%cs"]) {
        Some(date) if !date.is_empty() => format!("{}@{} {}", version, hash, date),
        _ => format!("{}@{}", version, hash),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    println!("cargo:rustc-env=MODESWAP_VERSION={}", version_string(&version));
}
