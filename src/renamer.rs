use crate::error::{RenameError, RenameFailureCause};
use crate::patterns::{normalized_file_name, normalized_folder_name};
use crate::types::EntryKind;
use chrono::Local;
use colored::Colorize;
use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Renamed {
    pub kind: EntryKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub cause: RenameFailureCause,
}

/// Outcome of one pass over a tree, in the order things happened.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<Renamed>,
    pub failures: Vec<RenameFailure>,
}

impl RenameReport {
    #[must_use]
    pub fn files_renamed(&self) -> usize {
        self.count(EntryKind::File)
    }

    #[must_use]
    pub fn folders_renamed(&self) -> usize {
        self.count(EntryKind::Folder)
    }

    fn count(&self, kind: EntryKind) -> usize {
        self.renamed.iter().filter(|r| r.kind == kind).count()
    }
}

/// Normalizes question file and step folder names under `root`, in place.
///
/// Entries are visited depth-first with a directory's contents handled
/// before the directory itself, so a folder is only renamed once nothing
/// below it will be touched again. `root` itself is never renamed.
///
/// A failed rename is printed and recorded, and the walk carries on. The
/// only error returned is a missing `root`.
pub fn rename_tree(root: &Path) -> Result<RenameReport, RenameError> {
    if !root.exists() {
        return Err(RenameError::RootNotFound(root.to_path_buf()));
    }

    println!(
        "{}\n",
        format!(
            "📂 Scanning directory: {} ({})",
            root.display(),
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );

    let mut report = RenameReport::default();

    // With a sorter, walkdir buffers each listing in full before yielding from it.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .sort_by_file_name();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                record_failure(&mut report, path, e.into());
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 name: {}", entry.path().display());
            continue;
        };

        let kind = EntryKind::of_walk_entry(&entry);
        let new_name = match kind {
            EntryKind::File => normalized_file_name(name),
            EntryKind::Folder => normalized_folder_name(name),
        };
        let Some(new_name) = new_name else {
            trace!("Leaving {} as is", entry.path().display());
            continue;
        };

        match rename_entry(entry.path(), &new_name) {
            Ok(target) => {
                match kind {
                    EntryKind::File => println!("📄 Renamed File: {name} -> {new_name}"),
                    EntryKind::Folder => println!("📁 Renamed Folder: {name} -> {new_name}"),
                }
                report.renamed.push(Renamed {
                    kind,
                    from: entry.path().to_path_buf(),
                    to: target,
                });
            }
            Err(cause) => record_failure(&mut report, entry.path().to_path_buf(), cause),
        }
    }

    println!(
        "\n{} ({} files, {} folders renamed, {} errors)",
        "✅ Renaming complete.".green(),
        report.files_renamed(),
        report.folders_renamed(),
        report.failures.len()
    );

    Ok(report)
}

fn record_failure(report: &mut RenameReport, path: PathBuf, cause: RenameFailureCause) {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
    println!("{} Error renaming {}: {}", "❌".red(), name, cause);
    report.failures.push(RenameFailure { path, cause });
}

fn rename_entry(path: &Path, new_name: &str) -> Result<PathBuf, RenameFailureCause> {
    let target = path.with_file_name(new_name);

    // fs::rename replaces an existing file on unix. Refuse instead, unless
    // the "existing" target is this very entry on a case-insensitive volume.
    if let Ok(target_meta) = fs::symlink_metadata(&target)
        && !is_same_entry(path, &target, &target_meta)?
    {
        return Err(RenameFailureCause::TargetExists(target));
    }

    fs::rename(path, &target)?;
    Ok(target)
}

#[cfg(unix)]
fn is_same_entry(path: &Path, _target: &Path, target_meta: &fs::Metadata) -> std::io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let source_meta = fs::symlink_metadata(path)?;
    Ok(source_meta.dev() == target_meta.dev() && source_meta.ino() == target_meta.ino())
}

#[cfg(not(unix))]
fn is_same_entry(path: &Path, target: &Path, _target_meta: &fs::Metadata) -> std::io::Result<bool> {
    Ok(fs::canonicalize(path)? == fs::canonicalize(target)?)
}
