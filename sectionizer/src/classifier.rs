use alloc::vec::Vec;
use core::cmp::Ordering;

/// The 26 uppercase Latin letters, in order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Label of the numeric catch-all bucket used by [`AlphaNumeric`].
pub const NUMERIC_BUCKET: char = '#';

/// Partitions sort keys into an ordered, fixed set of candidate buckets.
///
/// A classifier is a strategy plugged into [`crate::BucketIndex`]: it decides how many buckets
/// there are, in which order, and how a sort key compares against each one. Swapping the
/// classifier changes the sections, never the position translation.
///
/// Contract:
/// - `compare(key, b)` must be monotone in `b` for a fixed key: once a key compares `Less`
///   than bucket `b`, it compares `Less` than every later bucket too.
/// - Rows must be sorted so that, for every bucket, all keys comparing `Less` come first.
///   Violating this yields wrong section boundaries, not a panic.
pub trait BucketClassifier {
    /// Candidate bucket labels, in bucket order.
    fn labels(&self) -> &[char];

    /// Orders `key` against candidate bucket `bucket`: `Less` if the key sorts before the
    /// bucket, `Equal` if it belongs to it, `Greater` if it sorts after.
    fn compare(&self, key: &str, bucket: usize) -> Ordering;

    /// Returns the bucket label of a single sort key, or `None` for an empty key.
    fn classify(&self, key: &str) -> Option<char>;

    fn bucket_count(&self) -> usize {
        self.labels().len()
    }

    /// Finds the candidate bucket with the given label (case-insensitive).
    fn bucket_of_label(&self, label: char) -> Option<usize> {
        let label = fold(label);
        self.labels().iter().position(|&l| fold(l) == label)
    }
}

/// One bucket per letter, compared case-insensitively on the first character of the key.
///
/// Keys starting with something that sorts before the first letter (digits, punctuation) fall
/// outside every bucket; use [`AlphaNumeric`] when such keys are expected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alphabetic {
    labels: Vec<char>,
}

impl Alphabetic {
    /// The A–Z classifier.
    pub fn new() -> Self {
        Self::with_alphabet(ALPHABET)
    }

    /// Uses a custom ordered alphabet. Labels are stored uppercased.
    ///
    /// The alphabet must be sorted in the same order as the row source.
    pub fn with_alphabet(alphabet: &str) -> Self {
        Self {
            labels: alphabet.chars().map(fold).collect(),
        }
    }
}

impl Default for Alphabetic {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketClassifier for Alphabetic {
    fn labels(&self) -> &[char] {
        &self.labels
    }

    fn compare(&self, key: &str, bucket: usize) -> Ordering {
        let Some(&label) = self.labels.get(bucket) else {
            return Ordering::Less;
        };
        match key.chars().next() {
            Some(first) => fold(first).cmp(&label),
            None => Ordering::Less,
        }
    }

    fn classify(&self, key: &str) -> Option<char> {
        key.chars().next().map(fold)
    }
}

/// A numeric catch-all bucket (`#`) ordered before the letters.
///
/// Any key starting with an ASCII digit (`0`-`9`) belongs to `#`; everything else is classified
/// like [`Alphabetic`]. Other Unicode digits sort after the Latin letters by code point, so they
/// are not treated as numeric.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaNumeric {
    letters: Alphabetic,
    labels: Vec<char>,
}

impl AlphaNumeric {
    pub fn new() -> Self {
        Self::from_letters(Alphabetic::new())
    }

    pub fn with_alphabet(alphabet: &str) -> Self {
        Self::from_letters(Alphabetic::with_alphabet(alphabet))
    }

    fn from_letters(letters: Alphabetic) -> Self {
        let mut labels = Vec::with_capacity(letters.labels.len() + 1);
        labels.push(NUMERIC_BUCKET);
        labels.extend_from_slice(&letters.labels);
        Self { letters, labels }
    }
}

impl Default for AlphaNumeric {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketClassifier for AlphaNumeric {
    fn labels(&self) -> &[char] {
        &self.labels
    }

    fn compare(&self, key: &str, bucket: usize) -> Ordering {
        if bucket == 0 {
            // Non-digit keys sort after the numeric bucket.
            return match key.chars().next() {
                Some(c) if c.is_ascii_digit() => Ordering::Equal,
                Some(_) => Ordering::Greater,
                None => Ordering::Less,
            };
        }
        self.letters.compare(key, bucket - 1)
    }

    fn classify(&self, key: &str) -> Option<char> {
        let first = key.chars().next()?;
        if first.is_ascii_digit() {
            return Some(NUMERIC_BUCKET);
        }
        Some(fold(first))
    }
}

/// Case folding used for bucket comparisons. Only the first uppercase mapping is kept, so
/// multi-char expansions (e.g. `ß`) compare by their leading letter.
fn fold(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
