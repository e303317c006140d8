//! Fuzzy mapping from free text to a known waypoint

use crate::model::Waypoint;

/// Find the first waypoint whose key relates to `fragment` by substring
///
/// The fragment is trimmed and lowercased; a waypoint matches when its key is
/// contained in the fragment or the fragment is contained in its key.
/// Waypoints are scanned in the order given and the first match wins.
/// A blank fragment matches nothing.
pub fn find_nearest_waypoint<'a>(waypoints: &'a [Waypoint], fragment: &str) -> Option<&'a Waypoint> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    waypoints.iter().find(|w| {
        let key = w.key.to_lowercase();
        needle.contains(&key) || key.contains(&needle)
    })
}
