use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// One sidecar document describing a candidate clip.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CaseRecord {
    pub sound_filename: String,
    pub detected: bool,
    pub username: Option<String>,
    pub relative_timestamp: f32,
}

/// A parsed sidecar plus the path it was read from, so a classified case
/// can take its sidecar along.
#[derive(Clone, Debug)]
pub struct CaseItem {
    pub sidecar: PathBuf,
    pub record: CaseRecord,
}

pub enum ScanMessage {
    Complete(Vec<CaseItem>),
    Failed(String),
}

/// Enumerate `.json` sidecars at the top level of the triage directory.
/// Malformed documents are skipped, not fatal; a missing directory is a
/// reported error. Results are sorted by sound filename so navigation
/// order is stable across runs.
pub fn scan_cases(dir: &Path) -> Result<Vec<CaseItem>> {
    if !dir.is_dir() {
        anyhow::bail!("triage directory not found: {}", dir.display());
    }
    let mut cases: Vec<CaseItem> = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).follow_links(false) {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_file() {
            continue;
        }
        let is_json = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !is_json {
            continue;
        }
        let Ok(bytes) = std::fs::read(entry.path()) else {
            continue;
        };
        match serde_json::from_slice::<CaseRecord>(&bytes) {
            Ok(record) => cases.push(CaseItem {
                sidecar: entry.into_path(),
                record,
            }),
            Err(_) => continue,
        }
    }
    cases.sort_by(|a, b| a.record.sound_filename.cmp(&b.record.sound_filename));
    Ok(cases)
}

pub fn spawn_scan_worker(dir: PathBuf) -> mpsc::Receiver<ScanMessage> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let msg = match scan_cases(&dir) {
            Ok(cases) => ScanMessage::Complete(cases),
            Err(e) => ScanMessage::Failed(format!("{e:#}")),
        };
        let _ = tx.send(msg);
    });
    rx
}

/// Move a classified case (sound file plus sidecar) into `dest_dir`.
/// If the sidecar cannot follow, the sound file is moved back so both
/// halves of the case stay on the same side.
pub fn move_case(case: &CaseItem, triage_dir: &Path, dest_dir: &Path) -> Result<()> {
    let sound_src = triage_dir.join(&case.record.sound_filename);
    let sound_name = sound_src
        .file_name()
        .map(|s| s.to_owned())
        .with_context(|| format!("bad sound filename: {}", case.record.sound_filename))?;
    let sound_dst = dest_dir.join(sound_name);
    move_file(&sound_src, &sound_dst)?;
    if let Some(name) = case.sidecar.file_name() {
        if let Err(err) = move_file(&case.sidecar, &dest_dir.join(name)) {
            let _ = move_file(&sound_dst, &sound_src);
            return Err(err);
        }
    }
    Ok(())
}

fn move_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    if std::fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    // rename fails across filesystems; fall back to copy + remove
    std::fs::copy(src, dst)
        .with_context(|| format!("copy {} -> {}", src.display(), dst.display()))?;
    std::fs::remove_file(src).with_context(|| format!("remove {}", src.display()))?;
    Ok(())
}
