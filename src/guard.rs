//! Path guard — the trust boundary every filesystem command goes through.
//!
//! Validation order is fixed: argument shape, then containment, then
//! existence, then file-vs-directory type. Containment compares whole
//! path segments, so `/root2` is never treated as inside `/root`.

use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// What the calling command expects the path to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathKind {
    File,
    Directory,
}

/// Lexically normalize a path: drop `.` segments, apply `..` segments.
/// Symlinks are not chased; `..` at the root stays at the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Validate `path` on behalf of `command` and return its normalized form.
pub(crate) async fn resolve(
    command: &'static str,
    root: &Path,
    path: &str,
    kind: PathKind,
) -> Result<PathBuf, Error> {
    if !Path::new(path).is_absolute() {
        return Err(Error::RelativePath { command });
    }

    let resolved = normalize(Path::new(path));

    if !resolved.starts_with(root) {
        return Err(Error::OutsideRoot {
            command,
            path: path.to_string(),
        });
    }

    let meta = match tokio::fs::metadata(&resolved).await {
        Ok(meta) => meta,
        Err(_) => {
            return Err(Error::NoSuchPath {
                command,
                path: path.to_string(),
            })
        }
    };

    match kind {
        PathKind::File if !meta.is_file() => Err(Error::IsADirectory {
            command,
            path: path.to_string(),
        }),
        PathKind::Directory if !meta.is_dir() => Err(Error::NotADirectory {
            command,
            path: path.to_string(),
        }),
        _ => Ok(resolved),
    }
}
