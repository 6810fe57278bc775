use sectionizer::{RowSource, SectionedSequence, SectionizerOptions};

use crate::{ListItem, RowAnchor, apply_anchor, capture_anchor};

/// A framework-neutral controller that wraps a [`SectionedSequence`] and answers the questions a
/// list widget asks per position (what to render, which view type, is it selectable).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `source_changed()` after the row source changes shape
/// - `item(position)` / `item_view_type(..)` / `is_enabled(..)` while binding rows
/// - `jump_to_label(..)` for fast-scroll / index bars
///
/// Headers are reported as an extra view type and are never enabled (selectable).
pub struct Controller<S: RowSource> {
    seq: SectionedSequence<S>,
}

impl<S: RowSource> Controller<S> {
    pub fn new(source: S, options: SectionizerOptions<S::Column>) -> Self {
        Self {
            seq: SectionedSequence::new(source, options),
        }
    }

    pub fn from_sequence(seq: SectionedSequence<S>) -> Self {
        Self { seq }
    }

    pub fn sequence(&self) -> &SectionedSequence<S> {
        &self.seq
    }

    pub fn sequence_mut(&mut self) -> &mut SectionedSequence<S> {
        &mut self.seq
    }

    pub fn into_sequence(self) -> SectionedSequence<S> {
        self.seq
    }

    pub fn count(&self) -> usize {
        self.seq.count()
    }

    /// Call this when the row source reports a change (insert/remove/re-sort).
    ///
    /// Rebuilds the sections and re-resolves the cursor at its current virtual position.
    /// Returns whether the cursor still addresses a header or row.
    pub fn source_changed(&mut self) -> bool {
        self.seq.rebuild();
        adebug!(
            count = self.seq.count(),
            position = self.seq.position(),
            "source_changed"
        );
        let position = self.seq.position();
        self.seq.move_to(position)
    }

    /// Like [`Self::source_changed`], but keeps the cursor on the same record.
    ///
    /// `key_of` extracts a stable key from a row before the rebuild, `key_to_real` finds that
    /// key in the rebuilt source. Falls back to the plain re-resolve when the record is gone.
    pub fn source_changed_anchored<K>(
        &mut self,
        anchor: Option<RowAnchor<K>>,
        key_to_real: impl FnMut(&S, &K) -> Option<usize>,
    ) -> bool {
        let moved = self.source_changed();
        match anchor {
            Some(anchor) if apply_anchor(&mut self.seq, &anchor, key_to_real) => true,
            _ => moved,
        }
    }

    pub fn capture_anchor<K>(&self, key_of: impl FnOnce(&S, usize) -> K) -> Option<RowAnchor<K>> {
        capture_anchor(&self.seq, key_of)
    }

    /// Moves to the header of the section labelled `label` (case-insensitive).
    ///
    /// Returns the header's virtual position.
    pub fn jump_to_label(&mut self, label: char) -> Option<usize> {
        let section = self.seq.index().section_of_label(label)?;
        self.jump_to_section(section)
    }

    /// Moves to the header of `section`. Returns the header's virtual position.
    pub fn jump_to_section(&mut self, section: usize) -> Option<usize> {
        let position = self.seq.header_position(section)?;
        self.seq.move_to_section(section);
        Some(position)
    }

    /// Resolves `position` without moving the cursor.
    pub fn item(&self, position: usize) -> Option<ListItem> {
        ListItem::at(&self.seq, position)
    }

    /// Moves the cursor to `position` and returns what is there, so the caller can read fields
    /// through `sequence().field_value(..)`.
    pub fn bind(&mut self, position: usize) -> Option<ListItem> {
        let item = self.item(position)?;
        self.seq.move_to(position as isize);
        Some(item)
    }

    /// Whether headers are shown at all (there is at least one section).
    pub fn uses_headers(&self) -> bool {
        self.seq.section_count() > 0
    }

    /// Number of view types given `row_types` distinct row layouts. Headers add one.
    pub fn view_type_count(&self, row_types: usize) -> usize {
        if self.uses_headers() {
            row_types + 1
        } else {
            row_types
        }
    }

    /// View type at `position`. Headers use the last type (`row_types`); rows ask `row_type`.
    pub fn item_view_type(
        &self,
        position: usize,
        row_types: usize,
        row_type: impl FnOnce(usize) -> usize,
    ) -> Option<usize> {
        match self.item(position)? {
            ListItem::Header { .. } => Some(row_types),
            ListItem::Row { real } => Some(row_type(real)),
        }
    }

    pub fn are_all_items_enabled(&self) -> bool {
        !self.uses_headers()
    }

    /// Rows are selectable, headers are not.
    pub fn is_enabled(&self, position: usize) -> bool {
        matches!(self.item(position), Some(ListItem::Row { .. }))
    }
}

impl<S> core::fmt::Debug for Controller<S>
where
    S: RowSource + core::fmt::Debug,
    S::Column: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller").field("seq", &self.seq).finish()
    }
}
