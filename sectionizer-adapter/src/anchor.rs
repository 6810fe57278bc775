use core::fmt;

use sectionizer::{RowSource, SectionedSequence, Slot};

/// Remembers which record the cursor was on, so it can be found again after a rebuild.
///
/// Typical use cases:
/// - a row is inserted above the cursor and the list must not jump
/// - the source is re-sorted or filtered and the selection should follow the record
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowAnchor<K> {
    pub key: K,
    /// The cursor was on the section header rather than the row itself.
    pub on_header: bool,
}

impl<K: fmt::Debug> fmt::Debug for RowAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAnchor")
            .field("key", &self.key)
            .field("on_header", &self.on_header)
            .finish()
    }
}

/// Captures an anchor for the record under the cursor.
///
/// At a header, the anchor targets the section's first row and remembers that the header was
/// selected. Returns `None` at the sentinels.
pub fn capture_anchor<S: RowSource, K>(
    seq: &SectionedSequence<S>,
    key_of: impl FnOnce(&S, usize) -> K,
) -> Option<RowAnchor<K>> {
    let (real, on_header) = match seq.slot() {
        Slot::Header { real, .. } => (real, true),
        Slot::Row { real } => (real, false),
        Slot::BeforeFirst | Slot::AfterLast => return None,
    };
    Some(RowAnchor {
        key: key_of(seq.source(), real),
        on_header,
    })
}

/// Moves the cursor back onto an anchored record.
///
/// The caller provides a `key_to_real` mapping for the *current* (rebuilt) source. If the
/// anchor was on a header, the cursor lands on the header of the section now holding the record.
///
/// Returns `true` when the anchor was found and applied.
pub fn apply_anchor<S: RowSource, K>(
    seq: &mut SectionedSequence<S>,
    anchor: &RowAnchor<K>,
    mut key_to_real: impl FnMut(&S, &K) -> Option<usize>,
) -> bool {
    let Some(real) = key_to_real(seq.source(), &anchor.key) else {
        return false;
    };
    let target = if anchor.on_header {
        seq.index()
            .section_of_real(real)
            .and_then(|section| seq.header_position(section))
    } else {
        seq.virtual_position_of(real)
    };
    let Some(target) = target else {
        return false;
    };
    seq.move_to(target as isize)
}
