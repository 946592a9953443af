//! Rules shared by `build.rs` for deciding what the VCS stamps depend on.
//!
//! The build script includes this file with `#[path]`; the library only
//! compiles it for its tests.

use std::path::{Path, PathBuf};

/// Workspace members whose sources end up in the `template-go` binary.
pub const MEMBERS: &[&str] = &["template-go", "template-go-lib"];

/// Location of a git repository as reported by `git rev-parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitDirs {
    /// `--absolute-git-dir`: holds `HEAD` and `index` (per worktree).
    pub git_dir: PathBuf,
    /// `--git-common-dir`: holds `refs/` and `packed-refs` (shared by worktrees).
    pub common_dir: PathBuf,
    /// `--symbolic-full-name HEAD`, e.g. `refs/heads/main`; `HEAD` when detached.
    pub head_ref: Option<String>,
}

/// Paths whose changes can make the recorded revision or modified flag stale.
///
/// Any edit to a member's manifest or sources may dirty the tree, and a new
/// commit either rewrites `HEAD`, the branch ref or `packed-refs`.
pub fn watched_paths(workspace_root: &Path, git: Option<&GitDirs>) -> Vec<PathBuf> {
    let mut paths = vec![workspace_root.join("Cargo.toml")];
    for member in MEMBERS {
        let member = workspace_root.join(member);
        paths.push(member.join("Cargo.toml"));
        paths.push(member.join("src"));
    }

    if let Some(git) = git {
        paths.push(git.git_dir.join("HEAD"));
        paths.push(git.git_dir.join("index"));
        paths.push(git.common_dir.join("packed-refs"));
        if let Some(head_ref) = git.head_ref.as_deref().filter(|r| r.starts_with("refs/")) {
            paths.push(git.common_dir.join(head_ref));
        }
    }
    paths
}

/// Whether `git status --porcelain` output lists any change, untracked files included.
pub fn is_modified(porcelain: &str) -> bool {
    !porcelain.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn git_dirs(head_ref: Option<&str>) -> GitDirs {
        GitDirs {
            git_dir: PathBuf::from("/repo/.git/worktrees/feature"),
            common_dir: PathBuf::from("/repo/.git"),
            head_ref: head_ref.map(str::to_string),
        }
    }

    #[test]
    fn watches_every_member_manifest_and_source_tree() {
        let paths = watched_paths(Path::new("/repo"), None);

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/repo/Cargo.toml"),
                PathBuf::from("/repo/template-go/Cargo.toml"),
                PathBuf::from("/repo/template-go/src"),
                PathBuf::from("/repo/template-go-lib/Cargo.toml"),
                PathBuf::from("/repo/template-go-lib/src"),
            ]
        );
    }

    #[test]
    fn watches_the_branch_head_points_at() {
        let git = git_dirs(Some("refs/heads/main"));
        let paths = watched_paths(Path::new("/repo"), Some(&git));

        assert!(paths.contains(&PathBuf::from("/repo/.git/worktrees/feature/HEAD")));
        assert!(paths.contains(&PathBuf::from("/repo/.git/worktrees/feature/index")));
        assert!(paths.contains(&PathBuf::from("/repo/.git/packed-refs")));
        assert!(paths.contains(&PathBuf::from("/repo/.git/refs/heads/main")));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("HEAD"))]
    #[case(Some(""))]
    fn detached_or_unknown_head_adds_no_ref_file(#[case] head_ref: Option<&str>) {
        let git = git_dirs(head_ref);
        let paths = watched_paths(Path::new("/repo"), Some(&git));

        assert!(!paths.iter().any(|path| path.starts_with("/repo/.git/refs")));
        assert!(paths.contains(&PathBuf::from("/repo/.git/packed-refs")));
    }

    #[rstest]
    #[case("", false)]
    #[case("\n", false)]
    #[case(" M template-go/src/app.rs\n", true)]
    #[case("?? notes.txt\n", true)]
    fn porcelain_status_decides_modified(#[case] porcelain: &str, #[case] expected: bool) {
        assert_eq!(is_modified(porcelain), expected);
    }
}
