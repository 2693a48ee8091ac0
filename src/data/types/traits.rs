use std::{fmt::Debug, hash::Hash};

/// A finite alphabet whose letters are identified by a rank in `0..SIZE`.
///
/// Every letter has exactly one rank and every rank in `0..SIZE` has exactly
/// one letter. The [`Ord`] implementation must agree with the rank order, so
/// that a [`Composite`] built from the alphabet is ordered lexicographically.
///
/// [`Composite`]: crate::data::composite::Composite
pub trait Alphabet: Copy + Eq + Ord + Hash + Default + Debug {
    /// The number of letters in the alphabet. Must be at least one.
    const SIZE: usize;

    /// Returns the rank of the letter, which is always less than
    /// [`SIZE`](Alphabet::SIZE).
    #[must_use]
    fn to_rank(self) -> usize;

    /// Creates the letter with the given rank.
    ///
    /// ## Panics
    ///
    /// `rank` must be less than [`SIZE`](Alphabet::SIZE).
    #[must_use]
    fn from_rank(rank: usize) -> Self;

    /// Creates the letter with the given rank, or returns `None` if the rank
    /// is out of range.
    #[inline]
    #[must_use]
    fn from_rank_checked(rank: usize) -> Option<Self> {
        if rank < Self::SIZE {
            Some(Self::from_rank(rank))
        } else {
            None
        }
    }

    /// Overwrites the letter with the one of the given rank.
    ///
    /// ## Panics
    ///
    /// `rank` must be less than [`SIZE`](Alphabet::SIZE).
    #[inline]
    fn assign_rank(&mut self, rank: usize) -> &mut Self {
        *self = Self::from_rank(rank);
        self
    }
}

/// An [`Alphabet`] whose letters have a printable ASCII representation.
pub trait CharAlphabet: Alphabet {
    /// Returns the ASCII character of the letter.
    #[must_use]
    fn to_char(self) -> u8;

    /// Overwrites the letter with the one represented by `c`. This is total:
    /// characters outside of the alphabet are handled by the alphabet's own
    /// catch-all policy.
    fn assign_char(&mut self, c: u8) -> &mut Self;

    /// Creates a letter from an ASCII character. See
    /// [`assign_char`](CharAlphabet::assign_char) for how invalid characters
    /// are treated.
    #[inline]
    #[must_use]
    fn from_char(c: u8) -> Self {
        let mut letter = Self::default();
        letter.assign_char(c);
        letter
    }

    /// Whether `c` is a member of the alphabet's character domain, rather
    /// than a character handled by the catch-all policy.
    #[inline]
    #[must_use]
    fn char_is_valid(c: u8) -> bool {
        Self::from_char(c).to_char() == c
    }
}

/// A nucleotide-like alphabet with a complement.
pub trait SequenceAlphabet: CharAlphabet {
    /// Returns the complement of the letter. The operation is an involution,
    /// so `x.complement().complement() == x`.
    #[must_use]
    fn complement(self) -> Self;
}

/// An alphabet of Phred quality scores.
pub trait QualityAlphabet: CharAlphabet {
    /// Returns the numeric Phred score of the letter.
    #[must_use]
    fn to_phred(self) -> u8;

    /// Overwrites the letter with the one representing the Phred score `phred`.
    /// Scores outside of the representable range are clamped by the
    /// alphabet.
    fn assign_phred(&mut self, phred: u8) -> &mut Self;

    /// Creates a letter from a numeric Phred score. See
    /// [`assign_phred`](QualityAlphabet::assign_phred) for how out-of-range
    /// scores are treated.
    #[inline]
    #[must_use]
    fn from_phred(phred: u8) -> Self {
        let mut letter = Self::default();
        letter.assign_phred(phred);
        letter
    }
}
