//! File naming shared by split and merge.
//!
//! Endpoint files are named `endpoint_<position>_<remote>.yaml`, with the
//! 1-based position in plain decimal and every `:` and `.` of the remote
//! replaced by `_`. The position makes each name unique; the remote part is
//! only there to make the directory readable.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{SectionOrder, ENDPOINT_PREFIX, LOG_SECTION, SECTION_EXTENSION};

/// Position prefix of an endpoint file name.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENDPOINT_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^endpoint_(\d+)(?:_|\.)").expect("valid regex"));

/// Make a remote address usable inside a file name.
///
/// # Examples
/// ```
/// use realm_config::naming::sanitize_remote;
///
/// assert_eq!(sanitize_remote("example.com:5678"), "example_com_5678");
/// ```
#[must_use]
pub fn sanitize_remote(remote: &str) -> String {
    remote.replace([':', '.'], "_")
}

/// File name of the log section.
#[must_use]
pub fn log_file_name() -> String {
    format!("{LOG_SECTION}.{SECTION_EXTENSION}")
}

/// File name of the endpoint at 1-based `position`.
#[must_use]
pub fn endpoint_file_name(position: usize, remote: &str) -> String {
    format!(
        "{ENDPOINT_PREFIX}{position}_{}.{SECTION_EXTENSION}",
        sanitize_remote(remote)
    )
}

/// Whether `file_name` matches `endpoint_*.yaml`.
#[must_use]
pub fn is_endpoint_file(file_name: &str) -> bool {
    file_name.len() >= ENDPOINT_PREFIX.len() + SECTION_EXTENSION.len() + 1
        && file_name.starts_with(ENDPOINT_PREFIX)
        && file_name
            .strip_suffix(SECTION_EXTENSION)
            .is_some_and(|stem| stem.ends_with('.'))
}

/// Position embedded in an endpoint file name, if it has one.
#[must_use]
pub fn endpoint_position(file_name: &str) -> Option<u64> {
    ENDPOINT_POSITION
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Sort endpoint file names into merge order.
///
/// `Position` puts names without a readable position last and breaks ties
/// by name.
pub fn sort_section_files(names: &mut [String], order: SectionOrder) {
    match order {
        SectionOrder::Lexicographic => names.sort(),
        SectionOrder::Position => names.sort_by(|a, b| compare_by_position(a, b)),
    }
}

fn compare_by_position(a: &str, b: &str) -> Ordering {
    match (endpoint_position(a), endpoint_position(b)) {
        (Some(pa), Some(pb)) => pa.cmp(&pb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
