use sectionizer::{RowSource, SectionedSequence, Slot};

/// What a list widget should render at a virtual position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListItem {
    Header { section: usize, label: char },
    Row { real: usize },
}

impl ListItem {
    /// Resolves `position` without moving the sequence's cursor.
    ///
    /// Returns `None` for positions outside `[0, count())`.
    pub fn at<S: RowSource>(seq: &SectionedSequence<S>, position: usize) -> Option<Self> {
        let position = isize::try_from(position).ok()?;
        match seq.resolve(position) {
            Slot::Header { section, .. } => {
                let label = seq.index().section(section)?.label;
                Some(Self::Header { section, label })
            }
            Slot::Row { real } => Some(Self::Row { real }),
            Slot::BeforeFirst | Slot::AfterLast => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}
