//! Path reconstruction from parent pointers

use crate::network::StationId;

/// Walk parent pointers back from `to` until `from`, then reverse.
///
/// Returns `None` if the chain breaks before reaching `from`. The walk is
/// bounded by the number of stations, so a corrupt parent table cannot loop.
pub fn reconstruct_path(
    from: StationId,
    to: StationId,
    parents: &[Option<StationId>],
) -> Option<Vec<StationId>> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        if path.len() > parents.len() {
            return None;
        }
        current = parents.get(current.index()).copied().flatten()?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}
