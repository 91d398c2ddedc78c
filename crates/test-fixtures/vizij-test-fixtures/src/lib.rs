use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "camera-paths")]
    camera_paths: HashMap<String, CameraPathEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CameraPathEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        frames: Option<usize>,
    },
}

impl CameraPathEntry {
    fn as_path(&self) -> &str {
        match self {
            CameraPathEntry::Path(path) => path,
            CameraPathEntry::Detailed { path, .. } => path,
        }
    }

    fn frames(&self) -> Option<usize> {
        match self {
            CameraPathEntry::Path(_) => None,
            CameraPathEntry::Detailed { frames, .. } => *frames,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod camera_paths {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.camera_paths.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.camera_paths, "camera path", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.camera_paths, "camera path", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.camera_paths, "camera path", name)?;
        Ok(resolve_path(entry.as_path()))
    }

    /// Expected frame count recorded in the manifest, if any.
    pub fn frames(name: &str) -> Result<Option<usize>> {
        let entry = lookup(&MANIFEST.camera_paths, "camera path", name)?;
        Ok(entry.frames())
    }
}
