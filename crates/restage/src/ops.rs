//! The two staging operations: [`replace`] and [`remove`].

use std::fs::{self, FileTimes};
use std::path::Path;
use walkdir::WalkDir;

use crate::entry::Entry;
use crate::error::{StageError, StageResult};

/// Makes `destination` a copy of `source`, deleting whatever was at
/// `destination` first.
///
/// The source is probed before anything is deleted, so a missing source
/// leaves the destination untouched. A failure during the copy itself can
/// still leave the destination partially written.
pub fn replace(source: &Path, destination: &Path) -> StageResult {
    let kind = Entry::resolved(source).map_err(StageError::io("query", source))?;
    if !kind.exists() {
        return Err(StageError::MissingSource(source.to_path_buf()));
    }

    debug!("replacing {:?} with a copy of {:?}", destination, source);
    remove(destination)?;

    match kind {
        Entry::Dir => copy_tree(source, destination),
        _ => copy_file(source, destination),
    }
}

/// Ensures nothing exists at `destination`. A no-op when the path is already
/// absent; directories are deleted recursively, anything else directly.
/// Symlinks are unlinked, never traversed.
pub fn remove(destination: &Path) -> StageResult {
    match Entry::at(destination).map_err(StageError::io("query", destination))? {
        Entry::Absent => {
            trace!("nothing at {:?}, nothing to remove", destination);
            Ok(())
        }
        Entry::Dir => {
            debug!("deleting directory tree {:?}", destination);
            fs::remove_dir_all(destination)
                .map_err(StageError::io("delete directory", destination))
        }
        Entry::File => {
            debug!("deleting {:?}", destination);
            fs::remove_file(destination).map_err(StageError::io("delete", destination))
        }
    }
}

fn copy_file(source: &Path, destination: &Path) -> StageResult {
    fs::copy(source, destination).map_err(StageError::io("copy to", destination))?;
    let md = fs::metadata(source).map_err(StageError::io("query", source))?;
    preserve_times(&md, destination);
    Ok(())
}

/// Recursive copy. Symlinks are followed, so the destination tree contains
/// materialized copies of link targets.
fn copy_tree(source: &Path, destination: &Path) -> StageResult {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root");
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            let md = entry.metadata()?;
            fs::create_dir_all(&target).map_err(StageError::io("create directory", &target))?;
            dirs.push((md, target));
        } else {
            fs::copy(entry.path(), &target).map_err(StageError::io("copy to", &target))?;
            preserve_times(&entry.metadata()?, &target);
        }
    }

    // directory metadata last: a read-only mode must not land before the
    // children do, and writing children would clobber the mtime
    for (md, target) in dirs {
        fs::set_permissions(&target, md.permissions())
            .map_err(StageError::io("set permissions on", &target))?;
        preserve_times(&md, &target);
    }
    Ok(())
}

/// Carries modification and access times over to an already-copied entry.
/// Best effort; some filesystems don't allow it.
fn preserve_times(metadata: &fs::Metadata, target: &Path) {
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Err(e) = fs::File::open(target).and_then(|file| file.set_times(times)) {
        debug!("couldn't preserve timestamps on {:?}: {}", target, e);
    }
}
