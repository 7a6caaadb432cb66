//! Accumulated validation.
//!
//! [`ValidationCollector`] gathers every problem found in an input file
//! into a single [`IoError::Validation`].

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise every message joined
    /// with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks that every station id in `ids` equals the first one.
pub(crate) fn validate_single_station(ids: impl IntoIterator<Item = u32>) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    let mut ids = ids.into_iter();
    if let Some(first) = ids.next() {
        let mut others: Vec<u32> = ids.filter(|&id| id != first).collect();
        others.sort_unstable();
        others.dedup();
        if !others.is_empty() {
            c.push(format!(
                "file holds stations {first} and {others:?}; select one with station_id"
            ));
        }
    }
    c
}
