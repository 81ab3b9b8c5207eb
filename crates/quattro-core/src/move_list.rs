//! Fixed-capacity list of playable columns.

use crate::board::COLUMNS;

/// Stack-allocated list of column indices, at most one entry per column.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MoveList {
    moves: [usize; COLUMNS],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [0; COLUMNS],
            len: 0,
        }
    }

    /// Push a column onto the list.
    #[inline]
    pub fn push(&mut self, col: usize) {
        debug_assert!((self.len as usize) < COLUMNS);
        self.moves[self.len as usize] = col;
        self.len += 1;
    }

    /// Return the number of columns in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `col` is in the list.
    #[inline]
    pub fn contains(&self, col: usize) -> bool {
        self.as_slice().contains(&col)
    }

    /// Return a slice of the columns.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the columns in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.as_slice().iter()
    }

    /// Return a mutable slice of the columns, for in-place reordering.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = usize;
    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
