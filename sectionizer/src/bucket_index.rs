use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{BucketClassifier, RowSource};

/// A non-empty bucket, i.e. one rendered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentBucket {
    /// Index into the classifier's candidate buckets.
    pub bucket: usize,
    pub label: char,
    /// First real row belonging to this bucket.
    pub first_position: usize,
    /// Virtual position of this section's header (`first_position` + section ordinal).
    pub header_position: usize,
}

/// A read-only snapshot of where each bucket starts in a sorted row source.
///
/// Built with a binary search per candidate bucket (`O(B log n)`), so rebuilding after a data
/// change is cheap compared to reading the rows themselves. There is no incremental
/// maintenance: any structural change to the source needs a fresh [`BucketIndex::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BucketIndex {
    real_count: usize,
    first_positions: Vec<usize>, // one per candidate bucket, non-decreasing
    sections: Vec<PresentBucket>,
}

impl BucketIndex {
    /// Indexes `source` by the sort field in `column`.
    ///
    /// `source` must be sorted ascending by `column` in the order `classifier` assumes. Unsorted
    /// input produces undefined section boundaries but never panics. Rows whose field is
    /// missing are treated as empty keys, which sort before every bucket.
    pub fn build<S>(source: &S, column: S::Column, classifier: &dyn BucketClassifier) -> Self
    where
        S: RowSource + ?Sized,
    {
        let real_count = source.count();
        let labels = classifier.labels();

        let mut first_positions = Vec::with_capacity(labels.len());
        let mut lo = 0usize;
        for bucket in 0..labels.len() {
            // Start at the previous boundary: first positions never decrease.
            let first = lower_bound(lo, real_count, |i| {
                let key = source.field_value_at(i, column).unwrap_or("");
                classifier.compare(key, bucket) == Ordering::Less
            });
            first_positions.push(first);
            lo = first;
        }

        let mut sections = Vec::new();
        for (bucket, &first) in first_positions.iter().enumerate() {
            let next = first_positions
                .get(bucket + 1)
                .copied()
                .unwrap_or(real_count);
            if first < next {
                let ordinal = sections.len();
                sections.push(PresentBucket {
                    bucket,
                    label: labels[bucket],
                    first_position: first,
                    header_position: first + ordinal,
                });
            }
        }

        if let Some(first) = sections.first() {
            if first.first_position > 0 {
                swarn!(
                    rows = first.first_position,
                    "BucketIndex: rows sort before the first bucket"
                );
            }
        }

        sdebug!(
            real_count,
            candidates = labels.len(),
            sections = sections.len(),
            "BucketIndex::build"
        );

        Self {
            real_count,
            first_positions,
            sections,
        }
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn candidate_count(&self) -> usize {
        self.first_positions.len()
    }

    /// Number of rows plus one header per present bucket.
    pub fn virtual_count(&self) -> usize {
        self.real_count + self.sections.len()
    }

    /// First row whose key is at or after candidate bucket `bucket`.
    ///
    /// Returns `real_count()` when the bucket and every later one are empty, and `None` for an
    /// out-of-range bucket.
    pub fn first_position_of(&self, bucket: usize) -> Option<usize> {
        self.first_positions.get(bucket).copied()
    }

    pub fn first_positions(&self) -> &[usize] {
        &self.first_positions
    }

    /// Present buckets in ascending order.
    pub fn sections(&self) -> &[PresentBucket] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, section: usize) -> Option<&PresentBucket> {
        self.sections.get(section)
    }

    /// Section ordinal for a label (case-insensitive).
    pub fn section_of_label(&self, label: char) -> Option<usize> {
        let mut upper = label.to_uppercase();
        let label = upper.next().unwrap_or(label);
        self.sections.iter().position(|s| s.label == label)
    }

    /// Section ordinal owning real row `real`.
    ///
    /// Returns `None` for out-of-range rows and for rows sorted before the first bucket.
    pub fn section_of_real(&self, real: usize) -> Option<usize> {
        if real >= self.real_count {
            return None;
        }
        self.sections
            .partition_point(|s| s.first_position <= real)
            .checked_sub(1)
    }

    /// Section ordinal whose header or rows cover virtual position `position`.
    pub fn section_for_position(&self, position: usize) -> Option<usize> {
        if position >= self.virtual_count() {
            return None;
        }
        self.sections
            .partition_point(|s| s.header_position <= position)
            .checked_sub(1)
    }

    /// The unique virtual position of real row `real`.
    pub fn virtual_position_of(&self, real: usize) -> Option<usize> {
        if real >= self.real_count {
            return None;
        }
        let headers = self.sections.partition_point(|s| s.first_position <= real);
        Some(real + headers)
    }
}

/// Returns the first index in `lo..hi` for which `is_before` is false.
fn lower_bound(mut lo: usize, mut hi: usize, is_before: impl Fn(usize) -> bool) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_before(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
