//! Provenance sidecars: `<artifact>.provenance.json` next to every output.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command recorded about its run.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub summary: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            summary: Value::Null,
            tag: None,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// JSON document for `artifact`, without touching the filesystem.
    #[track_caller]
    pub fn document(&self, artifact: &Path) -> Value {
        let callsite = Location::caller();
        json!({
            "code_rev": current_git_rev(),
            "concave_version": concave::VERSION,
            "callsite": {
                "file": callsite.file(),
                "line": callsite.line()
            },
            "command": self.command,
            "tag": self.tag,
            "params": self.params,
            "summary": self.summary,
            "outputs": [artifact.to_string_lossy()]
        })
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = payload.document(artifact);
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::debug!(path = %sidecar.display(), "provenance written");
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit id from the build env, the run env, or `git`; `"unknown"` otherwise.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let derived = sidecar_path(Path::new("/tmp/output/hull.geojson"));
        assert_eq!(derived, Path::new("/tmp/output/hull.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.geojson");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("hull", json!({"threshold": 1.0}))
            .with_summary(json!({"parts": 2}))
            .with_tag(Some("field-7".into()));
        let path = write_sidecar(&artifact, &payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "hull");
        assert_eq!(parsed["tag"], "field-7");
        assert_eq!(parsed["summary"]["parts"], 2);
        assert_eq!(parsed["concave_version"], concave::VERSION);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
    }
}
