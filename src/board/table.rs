/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Index, IndexMut};

use super::Square;

/// A generic container of one element per [`Square`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table<T>([T; Square::COUNT]);

impl<T> Table<T> {
    /// Create a new [`Table`] by applying `f` to each [`Square`].
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Square) -> T,
    {
        Self(std::array::from_fn(|i| f(Square(i as u8))))
    }

    /// Create a new [`Table`] with every value set to `value`.
    #[inline(always)]
    pub const fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; Square::COUNT])
    }

    /// Get the value of this [`Table`] at the index of `square`.
    #[inline(always)]
    pub const fn get(&self, square: Square) -> &T {
        &self.0[square.index()]
    }

    /// Set the value of this [`Table`] at the index of `square`.
    #[inline(always)]
    pub fn set(&mut self, square: Square, value: T) {
        self.0[square.index()] = value;
    }

    /// Iterate over every [`Square`] and its value, in square order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Square, &T)> {
        Square::iter().zip(self.0.iter())
    }
}

impl<T> Default for Table<T>
where
    T: Default,
{
    #[inline(always)]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Square> for Table<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl<T> IndexMut<Square> for Table<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.0[index.index()]
    }
}
