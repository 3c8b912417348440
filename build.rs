use std::process::Command;

// Embed a `git describe` version string for clap's --version, falling back to
// the crate version when building outside a git checkout.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let version = git_version().unwrap_or_else(|| {
        let v = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
        if v.is_empty() {
            "unknown".to_string()
        } else {
            v
        }
    });

    println!("cargo:rustc-env=GIT_VERSION={version}");
}

fn git_version() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--tags", "--match", "v[0-9]*"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8(output.stdout).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(tagged) = raw.strip_prefix('v') {
        return Some(tagged.to_string());
    }
    // No tags yet: just a commit hash (possibly with -dirty).
    Some(format!("0.0.0-g{raw}"))
}
