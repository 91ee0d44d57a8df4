use super::consts::{DEFAULT_FILENAME, EXTENSION, MIN_WAYPOINTS};
use super::decode::placeholder_ident;
use crate::Waypoint;

/// Derives the conventional `SSS-EEE0.RTE` file name of a route from its
/// first and last identifiers.
///
/// Four letter identifiers starting with `K` lose the prefix (`KJFK` becomes
/// `JFK`), everything else is cut to three characters. Routes with fewer than
/// two waypoints get [DEFAULT_FILENAME]. A blank identifier is replaced by
/// the same `WP<n>` placeholder the encoder writes for it.
pub fn route_filename(waypoints: &[Waypoint]) -> String {
    let (Some(first), Some(last)) = (waypoints.first(), waypoints.last()) else {
        return DEFAULT_FILENAME.to_string();
    };
    if waypoints.len() < MIN_WAYPOINTS {
        return DEFAULT_FILENAME.to_string();
    }

    let start = short_ident(&first.ident, 0);
    let end = short_ident(&last.ident, waypoints.len() - 1);
    format!("{start}-{end}0.{EXTENSION}")
}

fn short_ident(ident: &str, index: usize) -> String {
    let mut clean = ident.trim().to_uppercase();
    if clean.is_empty() {
        clean = placeholder_ident(index);
    }
    let mut chars = clean.chars();
    if clean.chars().count() == 4 && chars.next() == Some('K') {
        chars.collect()
    } else {
        clean.chars().take(3).collect()
    }
}
