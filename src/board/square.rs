/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Player;

/// Number of squares in a single home section.
const SECTION_SIZE: u8 = 32;

/// Number of squares along one rank line of a home section.
const SLOTS: u8 = 8;

/// Number of ranks belonging to a single home section.
const SECTION_RANKS: u8 = 4;

/// Represents a single square on the three-player board.
///
/// The board is a `12x12` grid of which only 96 cells are real squares,
/// split into three home sections of `4x8` squares each.
/// Squares are stored as a dense index in `[0, 95]`:
/// ```text
///     index = section * 32 + row * 8 + slot
/// ```
/// where `section` is the owning [`Player`] (Red, White, Black), `row` is the rank
/// within the section, and `slot` is the position of the square along its rank line:
/// ```text
/// 12| H G F E I J K L      (Black, ranks 9-12)
///  9|
///  8| A B C D I J K L      (White, ranks 5-8)
///  5|
///  4| A B C D E F G H      (Red, ranks 1-4)
///  1|
/// ```
/// Neighbouring slots on the same row are always rank neighbours.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const A1: Self = Self::new_unchecked(File::A, Rank::ONE);
    pub const A2: Self = Self::new_unchecked(File::A, Rank::TWO);
    pub const A3: Self = Self::new_unchecked(File::A, Rank::THREE);
    pub const A4: Self = Self::new_unchecked(File::A, Rank::FOUR);
    pub const A5: Self = Self::new_unchecked(File::A, Rank::FIVE);
    pub const A6: Self = Self::new_unchecked(File::A, Rank::SIX);
    pub const A7: Self = Self::new_unchecked(File::A, Rank::SEVEN);
    pub const A8: Self = Self::new_unchecked(File::A, Rank::EIGHT);

    pub const B1: Self = Self::new_unchecked(File::B, Rank::ONE);
    pub const B2: Self = Self::new_unchecked(File::B, Rank::TWO);
    pub const B3: Self = Self::new_unchecked(File::B, Rank::THREE);
    pub const B4: Self = Self::new_unchecked(File::B, Rank::FOUR);
    pub const B5: Self = Self::new_unchecked(File::B, Rank::FIVE);
    pub const B6: Self = Self::new_unchecked(File::B, Rank::SIX);
    pub const B7: Self = Self::new_unchecked(File::B, Rank::SEVEN);
    pub const B8: Self = Self::new_unchecked(File::B, Rank::EIGHT);

    pub const C1: Self = Self::new_unchecked(File::C, Rank::ONE);
    pub const C2: Self = Self::new_unchecked(File::C, Rank::TWO);
    pub const C3: Self = Self::new_unchecked(File::C, Rank::THREE);
    pub const C4: Self = Self::new_unchecked(File::C, Rank::FOUR);
    pub const C5: Self = Self::new_unchecked(File::C, Rank::FIVE);
    pub const C6: Self = Self::new_unchecked(File::C, Rank::SIX);
    pub const C7: Self = Self::new_unchecked(File::C, Rank::SEVEN);
    pub const C8: Self = Self::new_unchecked(File::C, Rank::EIGHT);

    pub const D1: Self = Self::new_unchecked(File::D, Rank::ONE);
    pub const D2: Self = Self::new_unchecked(File::D, Rank::TWO);
    pub const D3: Self = Self::new_unchecked(File::D, Rank::THREE);
    pub const D4: Self = Self::new_unchecked(File::D, Rank::FOUR);
    pub const D5: Self = Self::new_unchecked(File::D, Rank::FIVE);
    pub const D6: Self = Self::new_unchecked(File::D, Rank::SIX);
    pub const D7: Self = Self::new_unchecked(File::D, Rank::SEVEN);
    pub const D8: Self = Self::new_unchecked(File::D, Rank::EIGHT);

    pub const E1: Self = Self::new_unchecked(File::E, Rank::ONE);
    pub const E2: Self = Self::new_unchecked(File::E, Rank::TWO);
    pub const E3: Self = Self::new_unchecked(File::E, Rank::THREE);
    pub const E4: Self = Self::new_unchecked(File::E, Rank::FOUR);
    pub const E9: Self = Self::new_unchecked(File::E, Rank::NINE);
    pub const E10: Self = Self::new_unchecked(File::E, Rank::TEN);
    pub const E11: Self = Self::new_unchecked(File::E, Rank::ELEVEN);
    pub const E12: Self = Self::new_unchecked(File::E, Rank::TWELVE);

    pub const F1: Self = Self::new_unchecked(File::F, Rank::ONE);
    pub const F2: Self = Self::new_unchecked(File::F, Rank::TWO);
    pub const F3: Self = Self::new_unchecked(File::F, Rank::THREE);
    pub const F4: Self = Self::new_unchecked(File::F, Rank::FOUR);
    pub const F9: Self = Self::new_unchecked(File::F, Rank::NINE);
    pub const F10: Self = Self::new_unchecked(File::F, Rank::TEN);
    pub const F11: Self = Self::new_unchecked(File::F, Rank::ELEVEN);
    pub const F12: Self = Self::new_unchecked(File::F, Rank::TWELVE);

    pub const G1: Self = Self::new_unchecked(File::G, Rank::ONE);
    pub const G2: Self = Self::new_unchecked(File::G, Rank::TWO);
    pub const G3: Self = Self::new_unchecked(File::G, Rank::THREE);
    pub const G4: Self = Self::new_unchecked(File::G, Rank::FOUR);
    pub const G9: Self = Self::new_unchecked(File::G, Rank::NINE);
    pub const G10: Self = Self::new_unchecked(File::G, Rank::TEN);
    pub const G11: Self = Self::new_unchecked(File::G, Rank::ELEVEN);
    pub const G12: Self = Self::new_unchecked(File::G, Rank::TWELVE);

    pub const H1: Self = Self::new_unchecked(File::H, Rank::ONE);
    pub const H2: Self = Self::new_unchecked(File::H, Rank::TWO);
    pub const H3: Self = Self::new_unchecked(File::H, Rank::THREE);
    pub const H4: Self = Self::new_unchecked(File::H, Rank::FOUR);
    pub const H9: Self = Self::new_unchecked(File::H, Rank::NINE);
    pub const H10: Self = Self::new_unchecked(File::H, Rank::TEN);
    pub const H11: Self = Self::new_unchecked(File::H, Rank::ELEVEN);
    pub const H12: Self = Self::new_unchecked(File::H, Rank::TWELVE);

    pub const I5: Self = Self::new_unchecked(File::I, Rank::FIVE);
    pub const I6: Self = Self::new_unchecked(File::I, Rank::SIX);
    pub const I7: Self = Self::new_unchecked(File::I, Rank::SEVEN);
    pub const I8: Self = Self::new_unchecked(File::I, Rank::EIGHT);
    pub const I9: Self = Self::new_unchecked(File::I, Rank::NINE);
    pub const I10: Self = Self::new_unchecked(File::I, Rank::TEN);
    pub const I11: Self = Self::new_unchecked(File::I, Rank::ELEVEN);
    pub const I12: Self = Self::new_unchecked(File::I, Rank::TWELVE);

    pub const J5: Self = Self::new_unchecked(File::J, Rank::FIVE);
    pub const J6: Self = Self::new_unchecked(File::J, Rank::SIX);
    pub const J7: Self = Self::new_unchecked(File::J, Rank::SEVEN);
    pub const J8: Self = Self::new_unchecked(File::J, Rank::EIGHT);
    pub const J9: Self = Self::new_unchecked(File::J, Rank::NINE);
    pub const J10: Self = Self::new_unchecked(File::J, Rank::TEN);
    pub const J11: Self = Self::new_unchecked(File::J, Rank::ELEVEN);
    pub const J12: Self = Self::new_unchecked(File::J, Rank::TWELVE);

    pub const K5: Self = Self::new_unchecked(File::K, Rank::FIVE);
    pub const K6: Self = Self::new_unchecked(File::K, Rank::SIX);
    pub const K7: Self = Self::new_unchecked(File::K, Rank::SEVEN);
    pub const K8: Self = Self::new_unchecked(File::K, Rank::EIGHT);
    pub const K9: Self = Self::new_unchecked(File::K, Rank::NINE);
    pub const K10: Self = Self::new_unchecked(File::K, Rank::TEN);
    pub const K11: Self = Self::new_unchecked(File::K, Rank::ELEVEN);
    pub const K12: Self = Self::new_unchecked(File::K, Rank::TWELVE);

    pub const L5: Self = Self::new_unchecked(File::L, Rank::FIVE);
    pub const L6: Self = Self::new_unchecked(File::L, Rank::SIX);
    pub const L7: Self = Self::new_unchecked(File::L, Rank::SEVEN);
    pub const L8: Self = Self::new_unchecked(File::L, Rank::EIGHT);
    pub const L9: Self = Self::new_unchecked(File::L, Rank::NINE);
    pub const L10: Self = Self::new_unchecked(File::L, Rank::TEN);
    pub const L11: Self = Self::new_unchecked(File::L, Rank::ELEVEN);
    pub const L12: Self = Self::new_unchecked(File::L, Rank::TWELVE);
    /// Number of squares on the board.
    pub const COUNT: usize = 96;

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 95;

    /// Returns an iterator over all squares, in index order.
    ///
    /// # Example
    /// ```
    /// # use yalta::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 96);
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::L12);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Returns the slot of `file` on the rank line of `rank`, if that grid cell is a real square.
    const fn slot_of(file: File, rank: Rank) -> Option<u8> {
        let f = file.0;
        match rank.0 / SECTION_RANKS {
            // A-H
            0 if f < 8 => Some(f),
            // A-D, I-L
            1 if f < 4 => Some(f),
            1 if f >= 8 && f < 12 => Some(f - 4),
            // H-E, I-L
            2 if f >= 4 && f < 8 => Some(7 - f),
            2 if f >= 8 && f < 12 => Some(f - 4),
            _ => None,
        }
    }

    /// Returns `true` if the grid cell at `file` and `rank` is one of the 96 squares of the board.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Square, File, Rank};
    /// assert!(Square::exists(File::D, Rank::FIVE));
    /// assert!(!Square::exists(File::E, Rank::FIVE));
    /// assert!(!Square::exists(File::I, Rank::ONE));
    /// ```
    #[inline(always)]
    pub const fn exists(file: File, rank: Rank) -> bool {
        Self::slot_of(file, rank).is_some()
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// Returns an error if the grid cell is not part of the board.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Square, File, Rank};
    /// let i5 = Square::new(File::I, Rank::FIVE);
    /// assert_eq!(i5.unwrap(), Square::I5);
    ///
    /// assert!(Square::new(File::I, Rank::FOUR).is_err());
    /// ```
    #[inline(always)]
    pub fn new(file: File, rank: Rank) -> Result<Self> {
        if !Self::exists(file, rank) {
            bail!("Invalid Square: {file}{rank} is not on the board");
        }

        Ok(Self::new_unchecked(file, rank))
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`], without checking that it exists.
    ///
    /// # Panics
    ///
    /// If the grid cell is not part of the board.
    #[inline(always)]
    pub const fn new_unchecked(file: File, rank: Rank) -> Self {
        let Some(slot) = Self::slot_of(file, rank) else {
            panic!("Grid cell is not a square on the board");
        };
        let section = rank.0 / SECTION_RANKS;
        let row = rank.0 % SECTION_RANKS;

        Self(section * SECTION_SIZE + row * SLOTS + slot)
    }

    /// Creates a new [`Square`] from the provided index value.
    ///
    /// The provided `index` must be `[0, 95]` or else an error is returned.
    ///
    /// # Example
    /// ```
    /// # use yalta::Square;
    /// assert_eq!(Square::from_index(0).unwrap(), Square::A1);
    /// assert!(Square::from_index(96).is_err());
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index > Self::MAX as usize {
            bail!(
                "Invalid index for Square: Must be between [{}, {}]. Got {index}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(index as u8))
    }

    /// Creates a new [`Square`] from the provided index value, without error checking.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Index must be between [0,96)");
        Self(index as u8)
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Position of this square along its rank line, `[0, 7]`.
    #[inline(always)]
    pub const fn slot(&self) -> u8 {
        self.0 % SLOTS
    }

    /// Row of this square within its home section, `[0, 3]`, counted from the lowest rank number.
    #[inline(always)]
    const fn row(&self) -> u8 {
        (self.0 % SECTION_SIZE) / SLOTS
    }

    /// Fetches the [`File`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Square, File};
    /// assert_eq!(Square::E9.file(), File::E);
    /// assert_eq!(Square::L12.file(), File::L);
    /// ```
    #[inline(always)]
    pub const fn file(&self) -> File {
        let slot = self.slot();
        let file = match self.0 / SECTION_SIZE {
            0 => slot,
            1 if slot < 4 => slot,
            2 if slot < 4 => 7 - slot,
            _ => slot + 4,
        };

        File(file)
    }

    /// Fetches the [`Rank`] of this [`Square`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Square, Rank};
    /// assert_eq!(Square::E9.rank(), Rank::NINE);
    /// ```
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank((self.0 / SECTION_SIZE) * SECTION_RANKS + self.row())
    }

    /// Fetches the [`File`] and [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn parts(&self) -> (File, Rank) {
        (self.file(), self.rank())
    }

    /// The home section this [`Square`] lies in, identified by the [`Player`] who starts there.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Square, Player};
    /// assert_eq!(Square::H1.section(), Player::Red);
    /// assert_eq!(Square::I5.section(), Player::White);
    /// assert_eq!(Square::E9.section(), Player::Black);
    /// ```
    #[inline(always)]
    pub const fn section(&self) -> Player {
        Player::from_index_unchecked((self.0 / SECTION_SIZE) as usize)
    }

    /// Distance of this square's rank from the back rank of its section, `[0, 3]`.
    ///
    /// `0` is the rank the section's owner starts their pieces on, `3` is the rank touching the center.
    ///
    /// # Example
    /// ```
    /// # use yalta::Square;
    /// assert_eq!(Square::A1.relative_rank(), 0);
    /// assert_eq!(Square::D4.relative_rank(), 3);
    /// assert_eq!(Square::A8.relative_rank(), 0);
    /// assert_eq!(Square::I5.relative_rank(), 3);
    /// assert_eq!(Square::L12.relative_rank(), 0);
    /// assert_eq!(Square::E9.relative_rank(), 3);
    /// ```
    #[inline(always)]
    pub const fn relative_rank(&self) -> u8 {
        match self.section() {
            Player::Red => self.row(),
            _ => SECTION_RANKS - 1 - self.row(),
        }
    }

    /// Returns `true` if this is one of the six squares that touch the center of the board.
    ///
    /// # Example
    /// ```
    /// # use yalta::Square;
    /// assert!(Square::D4.is_center());
    /// assert!(Square::I9.is_center());
    /// assert!(!Square::C4.is_center());
    /// ```
    #[inline(always)]
    pub const fn is_center(&self) -> bool {
        self.relative_rank() == SECTION_RANKS - 1 && (self.slot() == 3 || self.slot() == 4)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Parses a [`Square`] from its name, such as `"d4"` or `"L12"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars
            .next()
            .context("Invalid Square string: String must not be empty")?;
        let file = File::from_char(file)?;
        let rank = chars.as_str().parse::<Rank>()?;

        Self::new(file, rank)
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<usize> for Square {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.0)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Represents one of twelve ranks on the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);
    pub const NINE: Self = Self(8);
    pub const TEN: Self = Self(9);
    pub const ELEVEN: Self = Self(10);
    pub const TWELVE: Self = Self(11);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 11;
    pub const COUNT: usize = 12;

    /// Returns an iterator over all available ranks, in ascending order.
    ///
    /// # Example
    /// ```
    /// # use yalta::Rank;
    /// let mut iter = Rank::iter();
    /// assert_eq!(iter.len(), 12);
    /// assert_eq!(iter.next().unwrap(), Rank::ONE);
    /// assert_eq!(iter.last().unwrap(), Rank::TWELVE);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Construct a new [`Rank`] from its zero-based index.
    #[inline(always)]
    pub fn new(rank: u8) -> Result<Self> {
        if rank > Self::MAX {
            bail!(
                "Invalid int for Rank: Must be between [{}, {}]. Got {rank}",
                Self::MIN,
                Self::MAX
            );
        }

        Ok(Self(rank))
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// The rank number as printed on the board, `[1, 12]`.
    #[inline(always)]
    pub const fn number(&self) -> u8 {
        self.0 + 1
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl FromStr for Rank {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Invalid Rank: Must be between [1, 12]. Got {s:?}");
        }

        let number = s
            .parse::<u8>()
            .with_context(|| format!("Invalid Rank: Must be between [1, 12]. Got {s:?}"))?;

        let Some(rank) = number.checked_sub(1) else {
            bail!("Invalid Rank: Must be between [1, 12]. Got {number}");
        };

        Self::new(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.0)
    }
}

/// Represents one of twelve file letters on the board, `A` through `L`.
///
/// Not every file exists on every rank; see [`Square::exists`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct File(pub(crate) u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);
    pub const I: Self = Self(8);
    pub const J: Self = Self(9);
    pub const K: Self = Self(10);
    pub const L: Self = Self(11);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 11;
    pub const COUNT: usize = 12;

    /// Returns an iterator over all available files.
    ///
    /// # Example
    /// ```
    /// # use yalta::File;
    /// let mut iter = File::iter();
    /// assert_eq!(iter.len(), 12);
    /// assert_eq!(iter.next().unwrap(), File::A);
    /// assert_eq!(iter.last().unwrap(), File::L);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    #[inline(always)]
    pub fn new(file: u8) -> Result<Self> {
        if file > Self::MAX {
            bail!(
                "Invalid int for File: Must be between [{}, {}]. Got {file}",
                Self::MIN,
                Self::MAX
            );
        }
        Ok(Self(file))
    }

    /// Parses a [`File`] from its letter, ignoring case.
    #[inline(always)]
    pub fn from_char(file: char) -> Result<Self> {
        if !file.is_ascii_alphabetic() {
            bail!("Invalid char for File: Must be between [A, L]. Got {file}");
        }

        let file_int = file.to_ascii_uppercase() as u8 - b'A';
        if file_int > Self::MAX {
            bail!("Invalid char for File: Must be between [A, L]. Got {file}");
        }

        Self::new(file_int)
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'A') as char
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;
    #[inline(always)]
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}
