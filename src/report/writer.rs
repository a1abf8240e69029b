//! Persisting the tree text and the diagnostic record

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::ReportError;

use super::types::DiagnosticReport;

pub const TREE_FILE_NAME: &str = "file_tree.txt";
pub const REPORT_FILE_NAME: &str = "sys_info.json";

/// Locations of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub dir: PathBuf,
    pub tree: PathBuf,
    pub report: Option<PathBuf>,
}

/// Serialize with four-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Directory name for one run, sortable and safe on every platform.
pub fn run_dir_name(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S%.6f").to_string()
}

/// Write `file_tree.txt` (and `sys_info.json` when a report is given) into
/// a fresh timestamped directory under `output_dir`.
pub fn save_artifacts(
    output_dir: &Path,
    now: &DateTime<Local>,
    tree_text: &str,
    report: Option<&DiagnosticReport>,
) -> Result<ArtifactPaths, ReportError> {
    let dir = output_dir.join(run_dir_name(now));
    fs::create_dir_all(&dir)?;

    let tree = dir.join(TREE_FILE_NAME);
    fs::write(&tree, tree_text)?;

    let report = match report {
        Some(report) => {
            let path = dir.join(REPORT_FILE_NAME);
            fs::write(&path, to_pretty_json(report)?)?;
            Some(path)
        }
        None => None,
    };

    Ok(ArtifactPaths { dir, tree, report })
}
