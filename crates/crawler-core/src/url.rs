//! Deep links to a line in a web repository viewer.

use std::path::{Component, Path};

/// Build `{remote_url}/blob/{branch_name}/{relative_file_path}#L{line_number}`.
///
/// The path is joined with `/` on every platform. Neither argument is
/// validated: `remote_url` must not end with a slash and the path must
/// already be relative to the repository root.
pub fn build_line_url(
    remote_url: &str,
    branch_name: &str,
    relative_file_path: &Path,
    line_number: usize,
) -> String {
    format!(
        "{}/blob/{}/{}#L{}",
        remote_url,
        branch_name,
        to_slash_path(relative_file_path),
        line_number
    )
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
