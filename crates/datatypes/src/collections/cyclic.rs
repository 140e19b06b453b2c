//! `CyclicList`: a `Vec` whose indices wrap around modulo its length.
//!
//! Semantics
//! - Every signed index `i` resolves to `i.rem_euclid(len)`, so `-1` is the
//!   last element and `len` is the first again.
//! - Indexed access into an empty list is `CyclicError::EmptySequence`.
//! - Everything that is not indexing (push, pop, iteration) behaves like `Vec`.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Errors surfaced by cyclic indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclicError {
    /// Indexed access into a list with no elements.
    EmptySequence,
    /// `slice_step` called with a step of zero.
    ZeroStep,
}

impl fmt::Display for CyclicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclicError::EmptySequence => write!(f, "cyclic index into an empty list"),
            CyclicError::ZeroStep => write!(f, "slice step must be positive"),
        }
    }
}

impl std::error::Error for CyclicError {}

/// Ordered sequence with wrap-around indexing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CyclicList<T> {
    data: Vec<T>,
}

impl<T> CyclicList<T> {
    #[inline]
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Position in the backing `Vec` that the cyclic index `i` refers to,
    /// i.e. `((i % n) + n) % n`.
    pub fn resolve(&self, i: isize) -> Result<usize, CyclicError> {
        let n = self.data.len();
        if n == 0 {
            return Err(CyclicError::EmptySequence);
        }
        // A Vec never holds more than isize::MAX elements.
        Ok(i.rem_euclid(n as isize) as usize)
    }

    pub fn get(&self, i: isize) -> Result<&T, CyclicError> {
        let k = self.resolve(i)?;
        Ok(&self.data[k])
    }

    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, CyclicError> {
        let k = self.resolve(i)?;
        Ok(&mut self.data[k])
    }

    /// Overwrites the element at cyclic index `i`, returning the old value.
    pub fn set(&mut self, i: isize, value: T) -> Result<T, CyclicError> {
        let slot = self.get_mut(i)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes the element at cyclic index `i`, shifting later elements left.
    pub fn remove(&mut self, i: isize) -> Result<T, CyclicError> {
        let k = self.resolve(i)?;
        Ok(self.data.remove(k))
    }

    /// Inserts `value` before the element at cyclic index `i`. On an empty
    /// list the value simply becomes the only element.
    pub fn insert(&mut self, i: isize, value: T) {
        let k = self.resolve(i).unwrap_or(0);
        self.data.insert(k, value);
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// One full cycle starting at cyclic index `start`. Empty for an empty list.
    pub fn iter_from(&self, start: isize) -> impl Iterator<Item = &T> + '_ {
        let k = self.resolve(start).unwrap_or(0);
        self.data[k..].iter().chain(self.data[..k].iter())
    }

    /// Consecutive pairs including the closing pair `(last, first)`.
    /// A single element pairs with itself.
    pub fn circular_pairs(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        let n = self.data.len();
        (0..n).map(move |k| (&self.data[k], &self.data[(k + 1) % n]))
    }

    /// Elements at cyclic indices `start..stop`, borrowed. May wrap several
    /// times; empty when `start >= stop`.
    pub fn window(&self, start: isize, stop: isize) -> Result<Window<'_, T>, CyclicError> {
        if start >= stop {
            return Ok(Window {
                data: &self.data,
                next: 0,
                remaining: 0,
            });
        }
        let next = self.resolve(start)?;
        Ok(Window {
            data: &self.data,
            next,
            remaining: stop.abs_diff(start),
        })
    }
}

impl<T: Clone> CyclicList<T> {
    /// Owned copy of `window(start, stop)`; can be longer than `self`.
    pub fn slice(&self, start: isize, stop: isize) -> Result<CyclicList<T>, CyclicError> {
        Ok(self.window(start, stop)?.cloned().collect())
    }

    /// Every `step`-th element of `window(start, stop)`, beginning with `start`.
    pub fn slice_step(
        &self,
        start: isize,
        stop: isize,
        step: usize,
    ) -> Result<CyclicList<T>, CyclicError> {
        if step == 0 {
            return Err(CyclicError::ZeroStep);
        }
        Ok(self.window(start, stop)?.step_by(step).cloned().collect())
    }
}

/// Borrowing iterator over a cyclic index range; see `CyclicList::window`.
#[derive(Clone, Debug)]
pub struct Window<'a, T> {
    data: &'a [T],
    next: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Window<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = &self.data[self.next];
        self.next = (self.next + 1) % self.data.len();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Window<'_, T> {}

/// Cyclic indexing.
///
/// # Panics
/// On an empty list, like out-of-bounds `Vec` indexing. Use `get` to handle it.
impl<T> Index<isize> for CyclicList<T> {
    type Output = T;

    fn index(&self, i: isize) -> &T {
        match self.resolve(i) {
            Ok(k) => &self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<isize> for CyclicList<T> {
    fn index_mut(&mut self, i: isize) -> &mut T {
        match self.resolve(i) {
            Ok(k) => &mut self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> From<Vec<T>> for CyclicList<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<CyclicList<T>> for Vec<T> {
    #[inline]
    fn from(list: CyclicList<T>) -> Self {
        list.data
    }
}

impl<T> FromIterator<T> for CyclicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for CyclicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for CyclicList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a CyclicList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CyclicList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
