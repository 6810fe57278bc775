use alloc::borrow::Cow;
use alloc::string::ToString;

use crate::{BucketIndex, RowSource, SectionizerOptions, Slot};

/// A sorted row source presented with one synthetic header row per non-empty bucket.
///
/// The sequence exposes a flat virtual position space `[0, count())` where each present bucket
/// contributes a header immediately before its first row. Consumers navigate it like a cursor;
/// the underlying source is repositioned to the matching real row on every move.
///
/// This type holds the source by value. Pass `&mut source` to keep ownership on your side
/// (`&mut S` implements [`RowSource`]).
///
/// After changing the shape of the source (insert/remove/re-sort), call [`Self::rebuild`]. Until
/// then, headers and row mapping are stale (but navigation never panics).
pub struct SectionedSequence<S: RowSource> {
    source: S,
    options: SectionizerOptions<S::Column>,
    index: BucketIndex,
    position: isize,
    slot: Slot,
}

impl<S: RowSource> SectionedSequence<S> {
    /// Indexes `source` and places the cursor before the first position.
    pub fn new(source: S, options: SectionizerOptions<S::Column>) -> Self {
        let index = BucketIndex::build(&source, options.sort_column, &*options.classifier);
        sdebug!(
            count = index.virtual_count(),
            sections = index.section_count(),
            "SectionedSequence::new"
        );
        Self {
            source,
            options,
            index,
            position: -1,
            slot: Slot::BeforeFirst,
        }
    }

    pub fn options(&self) -> &SectionizerOptions<S::Column> {
        &self.options
    }

    /// Replaces the options and rebuilds the index.
    pub fn set_options(&mut self, options: SectionizerOptions<S::Column>) {
        self.options = options;
        self.rebuild();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source. Call [`Self::rebuild`] after changing its shape.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn index(&self) -> &BucketIndex {
        &self.index
    }

    /// Re-derives sections from the (possibly mutated) source.
    ///
    /// The cursor keeps its virtual position; it is re-resolved by the next navigation call.
    pub fn rebuild(&mut self) {
        self.index = BucketIndex::build(
            &self.source,
            self.options.sort_column,
            &*self.options.classifier,
        );
        sdebug!(
            count = self.index.virtual_count(),
            sections = self.index.section_count(),
            position = self.position,
            "SectionedSequence::rebuild"
        );
    }

    /// Rows plus headers.
    pub fn count(&self) -> usize {
        self.index.virtual_count()
    }

    pub fn real_count(&self) -> usize {
        self.index.real_count()
    }

    pub fn section_count(&self) -> usize {
        self.index.section_count()
    }

    /// Current virtual position, including the `-1` and `count()` sentinels.
    pub fn position(&self) -> isize {
        self.position
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn is_header(&self) -> bool {
        self.slot.is_header()
    }

    pub fn is_before_first(&self) -> bool {
        self.slot == Slot::BeforeFirst
    }

    pub fn is_after_last(&self) -> bool {
        self.slot == Slot::AfterLast
    }

    /// Section owning the current slot (header or row).
    pub fn section(&self) -> Option<usize> {
        match self.slot {
            Slot::Header { section, .. } => Some(section),
            Slot::Row { real } => self.index.section_of_real(real),
            Slot::BeforeFirst | Slot::AfterLast => None,
        }
    }

    /// Label of the current header, or `None` when not on a header.
    pub fn header_label(&self) -> Option<char> {
        match self.slot {
            Slot::Header { section, .. } => self.index.section(section).map(|s| s.label),
            _ => None,
        }
    }

    /// Reads a field at the current position.
    ///
    /// At a header, the sort column yields the section label; every other read is delegated to
    /// the source, which is parked on the section's first row.
    pub fn field_value(&self, column: S::Column) -> Option<Cow<'_, str>> {
        if column == self.options.sort_column {
            if let Some(label) = self.header_label() {
                return Some(Cow::Owned(label.to_string()));
            }
        }
        self.source.field_value(column).map(Cow::Borrowed)
    }

    /// Moves to virtual position `position`, clamped to `[-1, count()]`.
    ///
    /// Returns `true` when the new position is a header or a row.
    pub fn move_to(&mut self, position: isize) -> bool {
        let count = self.count() as isize;
        self.position = if count == 0 {
            -1
        } else {
            position.clamp(-1, count)
        };
        self.slot = self.resolve(self.position);
        strace!(position = self.position, slot = ?self.slot, "move_to");

        let real = self.slot.real_position(self.index.real_count());
        let moved = self.source.move_to_position(real);
        moved && self.slot.is_item()
    }

    /// Moves by `offset` virtual positions (saturating, then clamped).
    pub fn move_by(&mut self, offset: isize) -> bool {
        self.move_to(self.position.saturating_add(offset))
    }

    pub fn move_first(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn move_last(&mut self) -> bool {
        self.move_to(self.count() as isize - 1)
    }

    pub fn move_next(&mut self) -> bool {
        self.move_by(1)
    }

    pub fn move_previous(&mut self) -> bool {
        self.move_by(-1)
    }

    /// Moves to the header of `section`.
    pub fn move_to_section(&mut self, section: usize) -> bool {
        match self.index.section(section) {
            Some(s) => self.move_to(s.header_position as isize),
            None => false,
        }
    }

    /// Resolves a virtual position without moving the cursor.
    ///
    /// Out-of-range positions resolve to the sentinels, so this is total.
    pub fn resolve(&self, position: isize) -> Slot {
        let count = self.count() as isize;
        let real_count = self.index.real_count();
        if count == 0 || position < 0 {
            return Slot::BeforeFirst;
        }
        if position >= count {
            return Slot::AfterLast;
        }
        // Only when no row sorts before the first bucket; otherwise position 0 is row 0.
        let leads_with_header = self
            .index
            .sections()
            .first()
            .is_some_and(|s| s.first_position == 0);
        if position == 0 && leads_with_header {
            return Slot::Header {
                section: 0,
                real: 0,
            };
        }
        if position == count - 1 && real_count > 0 {
            return Slot::Row {
                real: real_count - 1,
            };
        }
        self.locate(position as usize)
    }

    /// General position search, without the first/last shortcuts of [`Self::resolve`].
    pub(crate) fn locate(&self, position: usize) -> Slot {
        let sections = self.index.sections();
        // Sections whose header sits at or before `position`; the last one owns it.
        let consumed = sections.partition_point(|s| s.header_position <= position);
        let Some(section) = consumed.checked_sub(1) else {
            swarn!(position, "position precedes the first section header");
            return Slot::Row { real: position };
        };

        let real = position - section;
        if real == sections[section].first_position {
            Slot::Header { section, real }
        } else {
            Slot::Row { real: real - 1 }
        }
    }

    /// Virtual position of the header of `section`.
    pub fn header_position(&self, section: usize) -> Option<usize> {
        self.index.section(section).map(|s| s.header_position)
    }

    /// Section covering virtual position `position`.
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        self.index.section_for_position(position)
    }

    /// Virtual position of real row `real`.
    pub fn virtual_position_of(&self, real: usize) -> Option<usize> {
        self.index.virtual_position_of(real)
    }
}

impl<S> core::fmt::Debug for SectionedSequence<S>
where
    S: RowSource + core::fmt::Debug,
    S::Column: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionedSequence")
            .field("source", &self.source)
            .field("options", &self.options)
            .field("index", &self.index)
            .field("position", &self.position)
            .field("slot", &self.slot)
            .finish()
    }
}
