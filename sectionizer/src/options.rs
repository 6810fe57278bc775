use alloc::sync::Arc;

use crate::{AlphaNumeric, Alphabetic, BucketClassifier};

/// Shared classifier handle stored in [`SectionizerOptions`].
pub type SharedClassifier = Arc<dyn BucketClassifier + Send + Sync>;

/// Configuration for [`crate::SectionedSequence`].
///
/// Cheap to clone: the classifier lives behind an `Arc`, so adapters can tweak the sort column
/// and call `SectionedSequence::set_options` without rebuilding the classifier.
pub struct SectionizerOptions<C> {
    /// Column holding the sort key. At header slots, reading this column yields the label.
    pub sort_column: C,
    pub classifier: SharedClassifier,
}

impl<C: Copy> Clone for SectionizerOptions<C> {
    fn clone(&self) -> Self {
        Self {
            sort_column: self.sort_column,
            classifier: Arc::clone(&self.classifier),
        }
    }
}

impl<C> SectionizerOptions<C> {
    pub fn new(
        sort_column: C,
        classifier: impl BucketClassifier + Send + Sync + 'static,
    ) -> Self {
        Self {
            sort_column,
            classifier: Arc::new(classifier),
        }
    }

    /// A–Z sections.
    pub fn alphabetic(sort_column: C) -> Self {
        Self::new(sort_column, Alphabetic::new())
    }

    /// `#` plus A–Z sections.
    pub fn alphanumeric(sort_column: C) -> Self {
        Self::new(sort_column, AlphaNumeric::new())
    }

    pub fn with_classifier(mut self, classifier: SharedClassifier) -> Self {
        self.classifier = classifier;
        self
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for SectionizerOptions<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionizerOptions")
            .field("sort_column", &self.sort_column)
            .field("buckets", &self.classifier.labels())
            .finish()
    }
}
