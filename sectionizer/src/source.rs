use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// An ordered, randomly-addressable collection of rows with a movable cursor.
///
/// This is the only thing the sectioning core needs from your data layer. Implementations own
/// the row content; [`crate::SectionedSequence`] only moves the cursor and reads fields.
///
/// Positions follow the usual cursor convention: `-1` is "before first" and `count()` is
/// "past last". Both are valid cursor states, neither addresses a row.
pub trait RowSource {
    /// Column identifier (e.g. a column index or a field enum).
    type Column: Copy + Eq;

    fn count(&self) -> usize;

    /// Current cursor position in `[-1, count()]`.
    fn position(&self) -> isize;

    /// Moves the cursor. Returns `true` when the new position addresses a row.
    fn move_to_position(&mut self, position: isize) -> bool;

    /// Reads a field of the row at `position` without moving the cursor.
    fn field_value_at(&self, position: usize, column: Self::Column) -> Option<&str>;

    /// Reads a field of the row under the cursor.
    fn field_value(&self, column: Self::Column) -> Option<&str> {
        let position = self.position();
        if position < 0 {
            return None;
        }
        self.field_value_at(position as usize, column)
    }
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Column = S::Column;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn position(&self) -> isize {
        (**self).position()
    }

    fn move_to_position(&mut self, position: isize) -> bool {
        (**self).move_to_position(position)
    }

    fn field_value_at(&self, position: usize, column: Self::Column) -> Option<&str> {
        (**self).field_value_at(position, column)
    }

    fn field_value(&self, column: Self::Column) -> Option<&str> {
        (**self).field_value(column)
    }
}

/// A simple in-memory table of string rows, addressed by column index.
///
/// Useful for tests, demos and small datasets. Shape-changing methods (`push`, `insert`,
/// `remove`, `retain`, `sort_by_column`) do not touch any sequence built on top of this source;
/// call [`crate::SectionedSequence::rebuild`] afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySource {
    rows: Vec<Vec<String>>,
    position: isize,
}

impl MemorySource {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, position: -1 }
    }

    /// Builds a source from anything that yields rows of string-like fields.
    pub fn from_rows<R, F>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::new(rows)
    }

    /// Builds a single-column source (column `0`) from sort keys.
    pub fn from_keys<F: Into<String>>(keys: impl IntoIterator<Item = F>) -> Self {
        Self::new(keys.into_iter().map(|k| alloc::vec![k.into()]).collect())
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> Option<&[String]> {
        self.rows.get(position).map(Vec::as_slice)
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Inserts a row at `position` (clamped to the current length).
    pub fn insert(&mut self, position: usize, row: Vec<String>) {
        let position = position.min(self.rows.len());
        self.rows.insert(position, row);
    }

    pub fn remove(&mut self, position: usize) -> Option<Vec<String>> {
        if position >= self.rows.len() {
            return None;
        }
        Some(self.rows.remove(position))
    }

    pub fn retain(&mut self, f: impl FnMut(&Vec<String>) -> bool) {
        self.rows.retain(f);
    }

    /// Stable, case-insensitive sort by one column. Rows missing the column sort first.
    pub fn sort_by_column(&mut self, column: usize) {
        self.rows.sort_by(|a, b| match (a.get(column), b.get(column)) {
            (Some(a), Some(b)) => cmp_case_insensitive(a, b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }
}

impl RowSource for MemorySource {
    type Column = usize;

    fn count(&self) -> usize {
        self.rows.len()
    }

    fn position(&self) -> isize {
        self.position
    }

    fn move_to_position(&mut self, position: isize) -> bool {
        let count = self.rows.len() as isize;
        self.position = position.clamp(-1, count);
        self.position >= 0 && self.position < count
    }

    fn field_value_at(&self, position: usize, column: usize) -> Option<&str> {
        self.rows.get(position)?.get(column).map(String::as_str)
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}
