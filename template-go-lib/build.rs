//! Stamps VCS and toolchain metadata into the library at compile time.
//!
//! Every stamp is optional: when a command fails (no git, not a checkout,
//! unknown compiler) the matching variable is simply not emitted and the
//! runtime lookup reports what is missing.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

#[path = "src/stamps.rs"]
mod stamps;

use stamps::{is_modified, watched_paths, GitDirs};

fn main() {
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());

    if let Some(revision) = git(&manifest_dir, &["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=TEMPLATE_GO_VCS_REVISION={revision}");

        if let Some(time) = git(&manifest_dir, &["log", "-1", "--format=%cI"]) {
            println!("cargo:rustc-env=TEMPLATE_GO_VCS_TIME={time}");
        }

        // A failed call leaves the flag unknown rather than clean.
        if let Some(status) = git_raw(&manifest_dir, &["status", "--porcelain"]) {
            let modified = is_modified(&status);
            println!("cargo:rustc-env=TEMPLATE_GO_VCS_MODIFIED={modified}");
        }
    }

    if let Some(rustc) = rustc_version() {
        println!("cargo:rustc-env=TEMPLATE_GO_RUSTC_VERSION={rustc}");
    }

    let git_dirs = git_dirs(&manifest_dir);
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    for path in watched_paths(workspace_root, git_dirs.as_ref()) {
        // Cargo reruns on every build when a watched path does not exist.
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}

fn git_dirs(dir: &Path) -> Option<GitDirs> {
    let git_dir = PathBuf::from(git(dir, &["rev-parse", "--absolute-git-dir"])?);
    let common_dir = git(dir, &["rev-parse", "--git-common-dir"])
        .map(PathBuf::from)
        .map(|common| if common.is_relative() { dir.join(common) } else { common })
        .unwrap_or_else(|| git_dir.clone());
    Some(GitDirs {
        git_dir,
        common_dir,
        head_ref: git(dir, &["rev-parse", "--symbolic-full-name", "HEAD"]),
    })
}

fn git(dir: &Path, args: &[&str]) -> Option<String> {
    git_raw(dir, args)
        .map(|out| out.trim().to_string())
        .filter(|out| !out.is_empty())
}

fn git_raw(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok()
}

fn rustc_version() -> Option<String> {
    let rustc = env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8(output.stdout).ok()?;
    let version = version.trim();
    (!version.is_empty()).then(|| version.to_string())
}
