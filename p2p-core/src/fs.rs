//! Filesystem helpers shared by the conversion steps.
//!
//! Every helper attaches the failing path to its error so a failed run
//! can tell which file it stopped on.

use std::{
    fs,
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use crate::{Error, Result, file::write_file};

/// List regular files directly inside `dir` with the given extension, sorted by name.
///
/// A missing directory yields an empty list. Extensions match case-sensitively.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io("read directory", dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io("read directory", dir, e))?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Copy a single file, creating the destination's parent directories.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| Error::io("copy", source, e))?;
    tracing::trace!(from = %source.display(), to = %dest.display(), "copied file");
    Ok(())
}

/// Copy `source` to `dest`, writing `prefix` before the original bytes.
pub fn copy_with_prefix(source: &Path, dest: &Path, prefix: &[u8]) -> Result<()> {
    let original = fs::read(source).map_err(|e| Error::io("read", source, e))?;
    let mut content = Vec::with_capacity(prefix.len() + original.len());
    content.extend_from_slice(prefix);
    content.extend_from_slice(&original);
    write_file(dest, &content)
}

/// Recursively copy a directory, returning every file copied.
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    copy_dir_into(source, dest, &mut copied)?;
    Ok(copied)
}

fn copy_dir_into(source: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| Error::io("create directory", dest, e))?;

    let mut entries = Vec::new();
    for entry in fs::read_dir(source).map_err(|e| Error::io("read directory", source, e))? {
        entries.push(entry.map_err(|e| Error::io("read directory", source, e))?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if path.is_dir() {
            copy_dir_into(&path, &dest_path, copied)?;
        } else {
            copy_file(&path, &dest_path)?;
            copied.push(dest_path);
        }
    }

    Ok(())
}

/// List every file under `dir`, relative to it, in the order
/// [`copy_dir_recursive`] copies them.
pub fn list_tree(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    list_tree_into(dir, Path::new(""), &mut files)?;
    Ok(files)
}

fn list_tree_into(dir: &Path, relative: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io("read directory", dir, e))? {
        entries.push(entry.map_err(|e| Error::io("read directory", dir, e))?);
    }
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let relative = relative.join(entry.file_name());
        if path.is_dir() {
            list_tree_into(&path, &relative, files)?;
        } else {
            files.push(relative);
        }
    }

    Ok(())
}

/// Remove a directory tree; a directory that does not exist is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io("remove directory", path, e)),
    }
}

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// the preceding component.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Display `path` relative to `root` with `/` separators.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
