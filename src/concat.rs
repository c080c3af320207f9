use core::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

/// A concatenation of multiple borrowed strings with fixed size storage.
#[derive(Clone, Default)]
pub struct Concat<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Construct an empty concatenation.
    pub const fn empty() -> Self {
        Self {
            storage: ArrayVec::new_const(),
        }
    }

    /// Push the given string onto storage. Empty strings are skipped.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            assert!(!self.storage.is_full(), "Capacity overflow");
            self.storage.push(string);
        }
    }

    /// Iterate over characters in the composite word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().flat_map(|s| s.chars())
    }

    /// Write the concatenation into the given string.
    pub(crate) fn write_to(&self, out: &mut String) {
        for string in &self.storage {
            out.push_str(string);
        }
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> Hash for Concat<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
