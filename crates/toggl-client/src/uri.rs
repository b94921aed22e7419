//! Request path compilation.
//!
//! A compiled path is `[parent_path] base_path [/id | /id1,id2,...] [child_path]`.

use crate::error::{Error, Result};

/// Compile a request path.
///
/// * `base_path` - the resource path, e.g. `/clients`
/// * `id` - a single instance id, appended as `/<id>`
/// * `ids` - several instance ids, appended as `/<id1>,<id2>,...` in the
///   given order. An empty slice counts as absent.
/// * `parent_path` - a scope prefix such as `/workspaces/777`
/// * `child_path` - a sub-path appended after the id segment, e.g. `/stop`
///
/// Supplying both `id` and `ids` is an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).
///
/// # Example
///
/// ```rust
/// use togglwrapper_client::uri::compile;
///
/// let path = compile("/time_entries", Some(436694100), None, Some("/workspaces/777"), Some("/stop")).unwrap();
/// assert_eq!(path, "/workspaces/777/time_entries/436694100/stop");
///
/// let path = compile("/projects", None, Some(&[3, 1, 2]), None, None).unwrap();
/// assert_eq!(path, "/projects/3,1,2");
/// ```
pub fn compile(
    base_path: &str,
    id: Option<u64>,
    ids: Option<&[u64]>,
    parent_path: Option<&str>,
    child_path: Option<&str>,
) -> Result<String> {
    let ids = ids.filter(|ids| !ids.is_empty());
    if id.is_some() && ids.is_some() {
        return Err(Error::invalid_argument(
            "cannot use both an id and a list of ids",
        ));
    }

    let mut path = String::with_capacity(base_path.len() + 32);
    if let Some(parent) = parent_path {
        path.push_str(parent);
    }
    path.push_str(base_path);

    if let Some(id) = id {
        path.push('/');
        path.push_str(&id.to_string());
    }

    if let Some(ids) = ids {
        let joined = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        path.push('/');
        path.push_str(&joined);
    }

    if let Some(child) = child_path {
        path.push_str(child);
    }

    Ok(path)
}
