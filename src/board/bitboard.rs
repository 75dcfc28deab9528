/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, Not},
};

use super::{Player, Square};

/// A [`Bitboard`] represents a set of squares on the game board as a set of bits.
///
/// The internal representation is a 128-bit binary number, of which the low 96 bits are used.
/// Bit `i` is set when the square with index `i` is part of the set, so each home section
/// occupies a contiguous block of 32 bits: Red in bits `[0, 31]`, White in `[32, 63]`, Black in `[64, 95]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) u128);

impl Bitboard {
    pub const EMPTY_BOARD: Self = Self(0);
    pub const FULL_BOARD: Self = Self((1 << Square::COUNT) - 1);

    /// Bits of a single home section.
    const SECTION: u128 = 0xFFFF_FFFF;

    /// Constructs a new [`Bitboard`] from the provided bits.
    ///
    /// Bits above the 96th are discarded.
    #[inline(always)]
    pub const fn new(bits: u128) -> Self {
        Self(bits & Self::FULL_BOARD.0)
    }

    /// Constructs a new [`Bitboard`] from the provided [`Square`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Bitboard, Square};
    /// let board = Bitboard::from_square(Square::E9);
    /// assert!(board.contains(Square::E9));
    /// assert_eq!(board.population(), 1);
    /// ```
    #[inline(always)]
    pub const fn from_square(square: Square) -> Self {
        Self(1 << square.0)
    }

    /// All squares of the home section that belongs to `player`.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Bitboard, Player, Square};
    /// let white = Bitboard::section(Player::White);
    /// assert_eq!(white.population(), 32);
    /// assert!(white.contains(Square::L8));
    /// assert!(!white.contains(Square::E4));
    /// ```
    #[inline(always)]
    pub const fn section(player: Player) -> Self {
        Self(Self::SECTION << (player.index() * 32))
    }

    #[inline(always)]
    pub const fn inner(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no squares in this [`Bitboard`].
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if there is at least one square in this [`Bitboard`].
    #[inline(always)]
    pub const fn is_nonempty(&self) -> bool {
        self.0 != 0
    }

    /// Returns `true` if `square` is part of this [`Bitboard`].
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & Self::from_square(square).0 != 0
    }

    /// Returns `true` if `self` has any squares in common with `other`.
    #[inline(always)]
    pub fn intersects(&self, other: impl Into<Self>) -> bool {
        self.0 & other.into().0 != 0
    }

    /// Adds the squares of `other` to `self`.
    #[inline(always)]
    pub fn set(&mut self, other: impl Into<Self>) {
        self.0 |= other.into().0;
    }

    /// Removes the squares of `other` from `self`.
    #[inline(always)]
    pub fn clear(&mut self, other: impl Into<Self>) {
        self.0 &= !other.into().0;
    }

    /// Returns the lowest-index [`Square`] of this [`Bitboard`], if there is one.
    #[inline(always)]
    pub fn lsb(&self) -> Option<Square> {
        self.is_nonempty()
            .then(|| Square(self.0.trailing_zeros() as u8))
    }

    /// Pops and returns the lowest-index [`Square`] of this [`Bitboard`].
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let lsb = self.lsb();
        self.0 &= self.0.wrapping_sub(1);
        lsb
    }

    /// Returns a [`BitboardIter`] to iterate over all of the set bits as [`Square`]s.
    #[inline(always)]
    pub const fn iter(&self) -> BitboardIter {
        BitboardIter { bitboard: *self }
    }

    /// Yields the number of squares in this [`Bitboard`].
    #[inline(always)]
    pub const fn population(&self) -> u8 {
        self.0.count_ones() as u8
    }

    #[inline(always)]
    pub const fn and(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline(always)]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY_BOARD, |bb, square| bb.or(square.into()))
    }
}

impl<'a> FromIterator<&'a Square> for Bitboard {
    fn from_iter<T: IntoIterator<Item = &'a Square>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

macro_rules! impl_bitwise_op {
    ($op:tt, $op_assign:tt, $func:ident, $func_assign:ident) => {
        impl<T> std::ops::$op<T> for Bitboard
        where
            Self: From<T>,
        {
            type Output = Self;
            #[inline(always)]
            fn $func(self, rhs: T) -> Self::Output {
                Self(self.0.$func(Self::from(rhs).0))
            }
        }

        impl<T> std::ops::$op_assign<T> for Bitboard
        where
            Self: From<T>,
        {
            #[inline(always)]
            fn $func_assign(&mut self, rhs: T) {
                self.0.$func_assign(Self::from(rhs).0);
            }
        }
    };
}

impl_bitwise_op!(BitAnd, BitAndAssign, bitand, bitand_assign);
impl_bitwise_op!(BitOr, BitOrAssign, bitor, bitor_assign);
impl_bitwise_op!(BitXor, BitXorAssign, bitxor, bitxor_assign);

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Self(!self.0 & Self::FULL_BOARD.0)
    }
}

impl Index<Square> for Bitboard {
    type Output = bool;

    /// Wrapper over [`Bitboard::contains`].
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        if self.contains(index) {
            &true
        } else {
            &false
        }
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(value: Square) -> Self {
        Self::from_square(value)
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let squares = self
            .iter()
            .map(|square| square.to_string())
            .collect::<Vec<_>>();

        write!(f, "{{{}}}", squares.join(", "))
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard(0x{:024X}) {self}", self.0)
    }
}

/// An iterator over all set bits in a [`Bitboard`], in ascending square order.
///
/// See [`Bitboard::iter`].
pub struct BitboardIter {
    bitboard: Bitboard,
}

impl Iterator for BitboardIter {
    type Item = Square;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.bitboard.pop_lsb()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bitboard.population() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for BitboardIter {
    #[inline(always)]
    fn len(&self) -> usize {
        self.bitboard.population() as usize
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter { bitboard: self }
    }
}

impl IntoIterator for &Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter { bitboard: *self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_partition_board() {
        let all = Player::all()
            .into_iter()
            .fold(Bitboard::EMPTY_BOARD, |bb, player| {
                assert!(!bb.intersects(Bitboard::section(player)));
                bb | Bitboard::section(player)
            });
        assert_eq!(all, Bitboard::FULL_BOARD);
        assert_eq!(all.population() as usize, Square::COUNT);
    }

    #[test]
    fn test_iteration_order() {
        let bb: Bitboard = [Square::L12, Square::A1, Square::E9].into_iter().collect();
        let squares = bb.iter().collect::<Vec<_>>();
        assert_eq!(squares, [Square::A1, Square::E9, Square::L12]);
        assert_eq!(bb.to_string(), "{A1, E9, L12}");
    }

    #[test]
    fn test_not_stays_on_board() {
        let bb = !Bitboard::EMPTY_BOARD;
        assert_eq!(bb, Bitboard::FULL_BOARD);
        assert!((!Bitboard::FULL_BOARD).is_empty());
    }
}
