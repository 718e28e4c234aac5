//! Classifies what a path currently denotes

use std::fs;
use std::io;
use std::path::Path;

/// The kind of entry a path denotes. Everything that isn't a directory is
/// [`File`](Entry::File); staging only ever branches on "tree or not".
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Entry {
    /// Nothing exists at the path
    Absent,
    /// A non-directory entry: regular file, symlink, fifo, ...
    File,
    /// A directory
    Dir,
}

assert_impl_all!(Entry: Send, Sync);

impl Entry {
    /// The kind of the entry at `path` itself. Symlinks are classified as
    /// [`File`](Entry::File) without following them.
    pub fn at(path: &Path) -> io::Result<Entry> {
        Self::classify(fs::symlink_metadata(path))
    }

    /// The kind of the entry `path` resolves to, following symlinks.
    pub fn resolved(path: &Path) -> io::Result<Entry> {
        Self::classify(fs::metadata(path))
    }

    fn classify(queried: io::Result<fs::Metadata>) -> io::Result<Entry> {
        match queried {
            Ok(md) if md.is_dir() => Ok(Entry::Dir),
            Ok(_) => Ok(Entry::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entry::Absent),
            Err(e) => Err(e),
        }
    }

    /// Whether anything exists at all
    pub fn exists(self) -> bool {
        self != Entry::Absent
    }
}
