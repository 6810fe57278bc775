use sectionizer::{RowSource, SectionedSequence};

/// Virtual position of the header that should stay pinned while `first_visible` is the top row.
///
/// Returns `None` for an empty sequence or an out-of-range position.
pub fn sticky_header_for<S: RowSource>(
    seq: &SectionedSequence<S>,
    first_visible: usize,
) -> Option<usize> {
    let section = seq.section_for_position(first_visible)?;
    seq.header_position(section)
}

/// Emits `start..end` (clamped to `count()`), preceded by the pinned header of `start` when
/// that header is scrolled out of view.
///
/// Indexes are emitted in ascending order without duplicates, so the output can feed a
/// virtualized list's range extractor directly.
pub fn for_each_index_with_sticky_header<S: RowSource>(
    seq: &SectionedSequence<S>,
    start: usize,
    end: usize,
    mut f: impl FnMut(usize),
) {
    let end = end.min(seq.count());
    if start >= end {
        return;
    }
    if let Some(header) = sticky_header_for(seq, start) {
        if header < start {
            f(header);
        }
    }
    for i in start..end {
        f(i);
    }
}

/// Emits the virtual positions of every header inside `start..end`.
pub fn for_each_header_in_range<S: RowSource>(
    seq: &SectionedSequence<S>,
    start: usize,
    end: usize,
    mut f: impl FnMut(usize),
) {
    let sections = seq.index().sections();
    let from = sections.partition_point(|s| s.header_position < start);
    for s in &sections[from..] {
        if s.header_position >= end {
            break;
        }
        f(s.header_position);
    }
}
