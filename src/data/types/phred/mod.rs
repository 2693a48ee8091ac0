//! ## Phred quality alphabets
//!
//! Single-letter quality alphabets that can be used as the quality component of
//! a [`Qualified`] letter. The rank of a letter is its Phred score, and the
//! character is the score offset by [`SANGER_OFFSET`] (as in FASTQ).
//!
//! | Alphabet    | Phred range | Characters  |
//! |-------------|-------------|-------------|
//! | [`Phred42`] | `0..=41`    | `!`..=`J`   |
//! | [`Phred63`] | `0..=62`    | `!`..=`_`   |
//! | [`Phred94`] | `0..=93`    | `!`..=`~`   |
//!
//! Scores and characters beyond the range of an alphabet are clamped to the
//! nearest representable score.
//!
//! [`Qualified`]: crate::data::qualified::Qualified

use crate::data::types::{Alphabet, CharAlphabet, QualityAlphabet};

mod std_traits;

/// The ASCII offset between a Phred score and its character representation.
pub const SANGER_OFFSET: u8 = 33;

/// Defines a Phred alphabet as a `u8` newtype holding the score, along with its
/// [`Alphabet`], [`CharAlphabet`], and [`QualityAlphabet`] implementations.
macro_rules! define_phred {
    ($(#[$meta:meta])* pub struct $name:ident(max = $max:literal);) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
        pub struct $name(pub(crate) u8);

        impl $name {
            /// The largest representable Phred score.
            pub const MAX_PHRED: u8 = $max;

            /// Creates a letter from a Phred score, clamping to
            #[doc = concat!("[`MAX_PHRED`](", stringify!($name), "::MAX_PHRED).")]
            #[inline]
            #[must_use]
            pub const fn new(phred: u8) -> Self {
                if phred > Self::MAX_PHRED {
                    $name(Self::MAX_PHRED)
                } else {
                    $name(phred)
                }
            }

            /// Obtains the Phred score as a `u8`.
            #[inline]
            #[must_use]
            pub const fn as_u8(self) -> u8 {
                self.0
            }

            /// Calculates the expected rate of machine error.
            #[inline]
            #[must_use]
            pub fn to_error(self) -> f32 {
                const BASE: f32 = 10.0;
                BASE.powf(-f32::from(self.0) / BASE)
            }
        }

        impl Alphabet for $name {
            const SIZE: usize = $max + 1;

            #[inline]
            fn to_rank(self) -> usize {
                self.0 as usize
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_rank(rank: usize) -> Self {
                assert!(rank < Self::SIZE, "rank out of range for {}", stringify!($name));
                // Truncation will not occur since SIZE is at most 256
                $name(rank as u8)
            }
        }

        impl CharAlphabet for $name {
            #[inline]
            fn to_char(self) -> u8 {
                self.0 + SANGER_OFFSET
            }

            #[inline]
            fn assign_char(&mut self, c: u8) -> &mut Self {
                *self = Self::new(c.saturating_sub(SANGER_OFFSET));
                self
            }
        }

        impl QualityAlphabet for $name {
            #[inline]
            fn to_phred(self) -> u8 {
                self.0
            }

            #[inline]
            fn assign_phred(&mut self, phred: u8) -> &mut Self {
                *self = Self::new(phred);
                self
            }
        }
    };
}

define_phred! {
    /// Phred scores `0..=41`, covering Illumina 1.8+ quality strings.
    pub struct Phred42(max = 41);
}

define_phred! {
    /// Phred scores `0..=62`.
    pub struct Phred63(max = 62);
}

define_phred! {
    /// Phred scores `0..=93`, covering every graphic ASCII character.
    pub struct Phred94(max = 93);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::err::AlphabetError;

    #[test]
    fn sizes() {
        assert_eq!(Phred42::SIZE, 42);
        assert_eq!(Phred63::SIZE, 63);
        assert_eq!(Phred94::SIZE, 94);
    }

    #[test]
    fn phred_char_rank_agree() {
        for rank in 0..Phred42::SIZE {
            let q = Phred42::from_rank(rank);
            assert_eq!(q.to_rank(), rank);
            assert_eq!(usize::from(q.to_phred()), rank);
            assert_eq!(usize::from(q.to_char()), rank + 33);
            assert_eq!(Phred42::from_char(q.to_char()), q);
        }
        assert_eq!(Phred42::from_phred(41).to_char(), b'J');
        assert_eq!(Phred94::from_phred(93).to_char(), b'~');
    }

    #[test]
    fn clamping() {
        assert_eq!(Phred42::from_phred(60), Phred42::from_phred(41));
        assert_eq!(Phred42::from_char(b'~').to_phred(), 41);
        assert_eq!(Phred63::from_char(b' ').to_phred(), 0);
        assert_eq!(Phred63::from_char(0).to_phred(), 0);
        assert_eq!(Phred94::new(255).as_u8(), 93);
    }

    #[test]
    fn char_is_valid() {
        assert!(Phred42::char_is_valid(b'!'));
        assert!(Phred42::char_is_valid(b'J'));
        assert!(!Phred42::char_is_valid(b'K'));
        assert!(!Phred42::char_is_valid(b'j'));
        assert!(!Phred94::char_is_valid(b' '));
        assert!(Phred94::char_is_valid(b'~'));
    }

    #[test]
    fn ord_agrees_with_rank() {
        assert!(Phred42::from_phred(3) < Phred42::from_phred(30));
        assert!(Phred42::from_rank(0) < Phred42::from_rank(1));
    }

    #[test]
    fn error_rate() {
        assert!((Phred42::from_phred(20).to_error() - 0.01).abs() < 1e-6);
        assert!((Phred42::from_phred(0).to_error() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn display_and_try_from() {
        assert_eq!(Phred42::new(7).to_string(), "7");
        assert_eq!(Phred42::try_from(b'('), Ok(Phred42::new(7)));
        assert_eq!(Phred42::try_from(b'z'), Err(AlphabetError::InvalidChar(b'z')));
    }

    #[test]
    #[should_panic(expected = "rank out of range")]
    fn from_rank_out_of_range() {
        let _ = Phred63::from_rank(63);
    }
}
