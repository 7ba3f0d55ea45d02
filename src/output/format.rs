//! Shortest-spelling path rendering

use std::path::{Component, Path, PathBuf};

/// Render `path` as the shorter of its absolute form and its form relative to
/// `base`, measured in bytes. Ties go to the absolute form.
///
/// The result keeps the original bytes of every component, so non-UTF-8 names
/// still name the file on disk.
pub fn display_path(path: &Path, base: &Path) -> PathBuf {
    let abs = normalize(&absolute(path));

    match relative_to(&abs, &normalize(&absolute(base))) {
        Some(rel) if rel.as_os_str().len() < abs.as_os_str().len() => rel,
        _ => abs,
    }
}

fn absolute(path: &Path) -> PathBuf {
    // Only fails for empty paths, which name the current directory.
    std::path::absolute(path)
        .or_else(|_| std::path::absolute("."))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Lexically remove `.` components and fold `..` into the preceding name.
///
/// Symlinks are not consulted. A `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Express `path` relative to `base` using `..` segments.
///
/// Both paths should be absolute and normalized. Returns `None` when they do
/// not share a root, and `.` when they are equal.
fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let path: Vec<Component> = path.components().collect();
    let base: Vec<Component> = base.components().collect();

    match (path.first(), base.first()) {
        (Some(Component::Prefix(a)), Some(Component::Prefix(b))) if a != b => return None,
        (Some(a), Some(b)) if is_rooted(a) != is_rooted(b) => return None,
        _ => {}
    }

    let common = path.iter().zip(&base).take_while(|(a, b)| a == b).count();

    let mut rel = PathBuf::new();
    for _ in common..base.len() {
        rel.push("..");
    }
    for component in &path[common..] {
        rel.push(component);
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

fn is_rooted(component: &Component) -> bool {
    matches!(component, Component::Prefix(_) | Component::RootDir)
}
