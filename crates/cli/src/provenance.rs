//! Provenance sidecars for rectflip artifacts.
//!
//! Every file the CLI writes (a flip-graph JSON document, its DOT rendering,
//! or a batch of walks) gets a `<stem>.provenance.json` next to it recording
//! which build produced it, with which parameters, and a short summary of the
//! contents so a directory of outputs can be audited without reparsing them.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a sidecar describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    FlipGraph,
    FlipGraphDot,
    Walks,
}

/// Caller-supplied part of a sidecar: run parameters and a content summary
/// (state and edge counts for graphs, sample count for walks).
pub struct Payload {
    pub kind: ArtifactKind,
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(kind: ArtifactKind, params: Value, summary: Value) -> Self {
        Self {
            kind,
            params,
            summary,
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    artifact: String,
    kind: ArtifactKind,
    code_rev: String,
    rectflip_version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    summary: &'a Value,
}

/// Writes the sidecar for `artifact` and returns its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    create_parent(&path)?;

    let caller = Location::caller();
    let doc = Sidecar {
        artifact: artifact.to_string_lossy().into_owned(),
        kind: payload.kind,
        code_rev: current_git_rev(),
        rectflip_version: rectflip::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        summary: &payload.summary,
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), kind = ?payload.kind, "provenance");
    Ok(path)
}

/// Creates the parent directory of an output path, if it names one.
pub fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display())),
        _ => Ok(()),
    }
}

/// `out/graph4.json` -> `out/graph4.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the build: `GIT_COMMIT` at compile time, then at run time, then
/// `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(head_from_git)
        .unwrap_or_else(|| "unknown".to_string())
}

fn head_from_git() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
