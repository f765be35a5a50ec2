//! One-way value latch.

/// A value that is unset until the first [`Latch::set`], and afterwards only
/// changes when set again. Nothing clears it.
///
/// Held credentials use this: once a field has validated, blanking or
/// corrupting the input leaves the previously latched value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latch<T>(Option<T>);

impl<T> Latch<T> {
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::unset()
    }
}
