use crate::UserWaypoint;
use std::cmp::Ordering;

/// Sorts waypoints the way the IDU expects them: ascending by identifier,
/// ignoring case. Waypoints with equal identifiers keep their order.
pub fn sort_waypoints(waypoints: &mut [UserWaypoint]) {
    waypoints.sort_by(|a, b| compare_idents(&a.ident, &b.ident));
}

pub fn is_sorted(waypoints: &[UserWaypoint]) -> bool {
    waypoints
        .windows(2)
        .all(|pair| compare_idents(&pair[0].ident, &pair[1].ident) != Ordering::Greater)
}

fn compare_idents(a: &str, b: &str) -> Ordering {
    let a = a.trim().chars().flat_map(char::to_lowercase);
    let b = b.trim().chars().flat_map(char::to_lowercase);
    a.cmp(b)
}
