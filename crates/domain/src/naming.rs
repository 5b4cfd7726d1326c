// crates/domain/src/naming.rs
//! Naming rules of the size report: which files are dropped and how the
//! identifier is cut out of a name.
//!
//! Offsets count characters, not bytes.

use batch_filesize_shared_kernel::{FilePath, Uid};

/// Files whose marker slice equals this are left out of the report.
pub const EXCLUDED_MARKER: &str = "TF";

// The marker sits at [-6:-4] of the discovered path: two characters before a
// four-character extension such as ".mp4". The offsets do not follow the
// configured extension, and for names shorter than six characters the window
// reaches back into the parent directory.
const MARKER_FROM_END: usize = 6;
const EXTENSION_FROM_END: usize = 4;

/// Trailing `n` characters of `s`, or all of `s` when it is shorter.
fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return &s[s.len()..];
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Characters `[-6:-4]` of `path`, clamped at the start like a slice on a short string.
///
/// ```
/// use batch_filesize_domain::marker_slice;
///
/// assert_eq!(marker_slice("clip_0001TF.mp4"), "TF");
/// assert_eq!(marker_slice("F.mp4"), "F");
/// assert_eq!(marker_slice(".mp4"), "");
/// ```
pub fn marker_slice(path: &str) -> &str {
    let start = path.len() - tail(path, MARKER_FROM_END).len();
    let end = path.len() - tail(path, EXTENSION_FROM_END).len();
    &path[start..end]
}

/// Whether a discovered path carries the excluded marker.
pub fn is_excluded(path: &str) -> bool {
    marker_slice(path) == EXCLUDED_MARKER
}

/// Last [`Uid::LEN`] characters of the file stem (the whole stem when shorter).
pub fn derive_uid(path: &FilePath) -> Uid {
    Uid::new(tail(&path.stem_lossy(), Uid::LEN))
}
