/// What a virtual position resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// The `-1` sentinel (also every position of an empty sequence).
    BeforeFirst,
    /// A synthetic section header. `real` is the row the source is parked on: the first row of
    /// the section.
    Header { section: usize, real: usize },
    Row { real: usize },
    /// The `count()` sentinel.
    AfterLast,
}

impl Slot {
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    pub fn is_row(&self) -> bool {
        matches!(self, Self::Row { .. })
    }

    /// `true` for headers and rows, `false` for the two sentinels.
    pub fn is_item(&self) -> bool {
        self.is_header() || self.is_row()
    }

    /// The underlying cursor position this slot maps to.
    pub fn real_position(&self, real_count: usize) -> isize {
        match *self {
            Self::BeforeFirst => -1,
            Self::Header { real, .. } | Self::Row { real } => real as isize,
            Self::AfterLast => real_count as isize,
        }
    }
}
