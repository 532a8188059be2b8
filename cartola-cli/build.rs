//! Stamps `--version` with the commit the binary was built from.
//!
//! `CARTOLA_BUILD_SHA` is the short SHA, suffixed `-dirty` when tracked
//! files had uncommitted changes, or `unknown` outside a git checkout.

use std::path::{Path, PathBuf};
use std::process::Command;

fn git(repo: &Path, args: &[&str]) -> Option<String> {
    let out = Command::new("git").arg("-C").arg(repo).args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let repo = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();

    // Re-stamp on checkout, commit and staging, not just on source edits.
    let git_dir = repo.join(".git");
    let head_ref = git(&repo, &["symbolic-ref", "-q", "HEAD"]);
    let watched = ["HEAD", "index"].into_iter().map(String::from).chain(head_ref);
    for f in watched {
        let p = git_dir.join(f);
        if p.exists() {
            println!("cargo:rerun-if-changed={}", p.display());
        }
    }

    let stamp = match git(&repo, &["rev-parse", "--short", "HEAD"]).filter(|s| !s.is_empty()) {
        Some(sha) => {
            let dirty = git(&repo, &["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|s| !s.is_empty());
            if dirty { format!("{sha}-dirty") } else { sha }
        }
        None => "unknown".to_string(),
    };

    println!("cargo:rustc-env=CARTOLA_BUILD_SHA={}", stamp);
}
