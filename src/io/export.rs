use crate::batch::manifest::BatchManifest;
use crate::batch::output::format_batch;
use crate::batch::types::{Group, OutputDelimiter, OutputTemplate};
use crate::constants::{ARCHIVE_PREFIX, MANIFEST_FILENAME};
use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(())
}

/// Writes one rendered batch to `path`, creating parent directories.
pub fn write_batch_file(
    path: &Path,
    content: &str,
) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Resolves the `--export` target: a directory gets a timestamped
/// `splitbox-batches-<ts>.tar.gz` inside it, anything else is the archive path.
pub fn archive_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        target.join(format!("{ARCHIVE_PREFIX}-{stamp}.tar.gz"))
    } else {
        target.to_path_buf()
    }
}

fn append_entry<W: Write>(
    tar: &mut tar::Builder<W>,
    name: &str,
    data: &[u8],
    mtime: u64,
) -> Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(mtime);
    tar.append_data(&mut header, name, data)
        .with_context(|| format!("adding {name} to archive"))
}

/// Packs every batch as `batch-N.<ext>` plus `manifest.json` into one
/// gzipped tar archive at `path`.
pub fn export_archive(
    path: &Path,
    groups: &[Group],
    template: OutputTemplate,
    delimiter: OutputDelimiter,
) -> Result<BatchManifest> {
    let manifest = BatchManifest::build(groups, template, delimiter);
    let mtime = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();

    let mut bytes = Vec::new();
    {
        let gz = GzEncoder::new(&mut bytes, Compression::default());
        let mut tar = tar::Builder::new(gz);
        for (group, entry) in groups.iter().zip(&manifest.entries) {
            let content = format_batch(&group.items, template, delimiter);
            append_entry(&mut tar, &entry.filename, content.as_bytes(), mtime)?;
        }
        append_entry(&mut tar, MANIFEST_FILENAME, manifest.to_json()?.as_bytes(), mtime)?;
        tar.into_inner()
            .and_then(GzEncoder::finish)
            .context("finishing archive")?;
    }

    ensure_parent(path)?;
    fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        batches = manifest.batch_count,
        "exported archive"
    );
    Ok(manifest)
}
