//! Endless cycling iterator.

use folio_core::error::DomainError;

/// Hands out the elements of a non-empty sequence in order, looping back to
/// the start after the last one. The k-th call returns element `k mod N`.
#[derive(Debug, Clone)]
pub struct CycleIterator<T> {
    sequence: Vec<T>,
    index: usize,
}

impl<T> CycleIterator<T> {
    /// Creates an iterator over `sequence`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `sequence` is empty.
    pub fn new(sequence: Vec<T>) -> Result<Self, DomainError> {
        if sequence.is_empty() {
            return Err(DomainError::Validation(
                "cycle sequence must not be empty".to_owned(),
            ));
        }
        Ok(Self { sequence, index: 0 })
    }

    /// Creates an iterator from a first element and the rest; cannot fail.
    pub fn from_first(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut sequence = vec![first];
        sequence.extend(rest);
        Self { sequence, index: 0 }
    }

    /// Returns the element at the current position and moves forward.
    pub fn advance(&mut self) -> &T {
        let current = self.index;
        self.index = (self.index + 1) % self.sequence.len();
        &self.sequence[current]
    }

    /// Returns the element the next `advance` will hand out.
    #[must_use]
    pub fn peek(&self) -> &T {
        &self.sequence[self.index]
    }

    /// Number of elements in one full cycle.
    #[must_use]
    pub fn period(&self) -> usize {
        self.sequence.len()
    }
}

impl<T: Clone> Iterator for CycleIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.advance().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
