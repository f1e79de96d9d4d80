use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied path to the absolute, symlink-free form a handle
/// binds to.
///
/// Behaviour:
/// - A leading `~` or `~/` expands to the home directory (`HOME`).
/// - Relative paths are resolved against the current working directory.
/// - Existing paths are canonicalized.
/// - For paths that do not exist yet, the longest existing ancestor is
///   canonicalized and the remaining components are appended lexically
///   (`..` drops one component, `.` is ignored).
///
/// This never fails; when nothing can be canonicalized the absolute form is
/// returned as-is.
pub fn resolve_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let expanded = expand_tilde(input).unwrap_or_else(|| input.to_path_buf());

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    };

    if let Ok(real) = fs::canonicalize(&absolute) {
        return real;
    }

    let components: Vec<Component<'_>> = absolute.components().collect();
    for split in (1..components.len()).rev() {
        let head: PathBuf = components[..split].iter().collect();
        if let Ok(mut resolved) = fs::canonicalize(&head) {
            for component in &components[split..] {
                match component {
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    Component::Normal(name) => resolved.push(name),
                    _ => {}
                }
            }
            return resolved;
        }
    }
    absolute
}

// Expand `~` and `~/rest` to the home directory. `~user` forms are left
// untouched.
fn expand_tilde(input: &Path) -> Option<PathBuf> {
    let text = input.to_str()?;
    let rest = if text == "~" {
        ""
    } else {
        text.strip_prefix("~/")?
    };
    let home = env::var_os("HOME")?;
    let mut p = PathBuf::from(home);
    if !rest.is_empty() {
        p.push(rest.trim_start_matches('/'));
    }
    Some(p)
}
