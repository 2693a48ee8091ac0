//! ## Quality-aware sequence letters
//!
//! A [`Qualified`] letter pairs a sequence letter (such as a [`Dna4`] base)
//! with a quality letter (such as a [`Phred42`] score). It is a two-component
//! [`Composite`] that also exposes the capabilities of its components:
//!
//! * Character conversions ([`CharAlphabet`]) act on the sequence letter.
//! * Phred conversions ([`QualityAlphabet`]) act on the quality letter.
//! * [`complement`](SequenceAlphabet::complement) complements the sequence
//!   letter and keeps the quality letter unchanged.
//!
//! ```
//! # use zoe_alphabet::prelude::*;
//! let mut letter = Qualified::new(Dna4::A, Phred42::new(7));
//! assert_eq!(letter.to_rank(), 7);
//! assert_eq!(letter.to_char(), b'A');
//! assert_eq!(letter.to_phred(), 7);
//!
//! let complement = letter.complement();
//! assert_eq!(complement, Qualified::new(Dna4::T, Phred42::new(7)));
//! assert_eq!(complement.to_rank(), 3 * 42 + 7);
//!
//! letter.assign(Phred42::new(41));
//! assert_eq!(letter.to_rank(), 41);
//! ```
//!
//! A qualified letter can also be compared directly against a bare letter of
//! either component type, in which case the other component is ignored:
//!
//! ```
//! # use zoe_alphabet::prelude::*;
//! let letter = Qualified::new(Dna4::A, Phred42::new(7));
//! assert!(letter == Dna4::A && Dna4::A == letter);
//! assert!(letter < Dna4::G && Dna4::G > letter);
//! assert!(letter > Phred42::new(3));
//! ```
//!
//! Such comparisons are provided for the alphabets in this crate. Other
//! alphabets can opt in with [`impl_sequence_comparisons`] and
//! [`impl_quality_comparisons`].
//!
//! [`Dna4`]: crate::data::nucleotides::Dna4
//! [`Phred42`]: crate::data::phred::Phred42
//! [`impl_sequence_comparisons`]: crate::impl_sequence_comparisons
//! [`impl_quality_comparisons`]: crate::impl_quality_comparisons

use crate::data::{
    composite::{Composite, Find, Slot},
    types::{Alphabet, CharAlphabet, QualityAlphabet, SequenceAlphabet},
};

mod compare;
mod seq;
mod std_traits;

pub use seq::*;

/// A sequence letter of alphabet `S` together with a quality letter of
/// alphabet `Q`. See the [module documentation](self) for details.
///
/// The sequence alphabet must provide a complement and the quality alphabet
/// must provide phred conversions, so swapping the two is rejected at compile
/// time:
///
/// ```compile_fail
/// # use zoe_alphabet::prelude::*;
/// let letter = Qualified::<Phred42, Dna4>::default();
/// ```
///
/// as is a quality alphabet that is not a [`QualityAlphabet`]:
///
/// ```compile_fail
/// # use zoe_alphabet::prelude::*;
/// let letter = Qualified::new(Dna4::A, Dna5::N);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Qualified<S: SequenceAlphabet, Q: QualityAlphabet>(Composite<(S, Q)>);

impl<S: SequenceAlphabet, Q: QualityAlphabet> Qualified<S, Q> {
    /// Creates a letter from its sequence and quality letters.
    #[inline]
    #[must_use]
    pub const fn new(sequence: S, quality: Q) -> Self {
        Qualified(Composite::new((sequence, quality)))
    }

    /// Creates a letter from a sequence letter and a numeric Phred score. The
    /// score is clamped by the quality alphabet if it is out of range.
    #[inline]
    #[must_use]
    pub fn with_phred(sequence: S, phred: u8) -> Self {
        Self::new(sequence, Q::from_phred(phred))
    }

    /// Gets the sequence letter.
    #[inline]
    #[must_use]
    pub fn sequence(&self) -> S {
        self.0.components().0
    }

    /// Gets the quality letter.
    #[inline]
    #[must_use]
    pub fn quality(&self) -> Q {
        self.0.components().1
    }

    /// Gets a mutable reference to the sequence letter.
    #[inline]
    #[must_use]
    pub fn sequence_mut(&mut self) -> &mut S {
        &mut self.0.components_mut().0
    }

    /// Gets a mutable reference to the quality letter.
    #[inline]
    #[must_use]
    pub fn quality_mut(&mut self) -> &mut Q {
        &mut self.0.components_mut().1
    }

    /// Gets a copy of the letter in slot `I`, where slot 0 holds the sequence
    /// letter and slot 1 the quality letter.
    #[inline]
    #[must_use]
    pub fn get<const I: usize>(&self) -> <(S, Q) as Slot<I>>::Output
    where
        (S, Q): Slot<I>, {
        self.0.get::<I>()
    }

    /// Gets a mutable reference to the letter in slot `I`.
    #[inline]
    #[must_use]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <(S, Q) as Slot<I>>::Output
    where
        (S, Q): Slot<I>, {
        self.0.get_mut::<I>()
    }

    /// Overwrites the component of type `T` with `value`, leaving the other
    /// component unchanged.
    ///
    /// `T` must be exactly one of `S` or `Q`. When `S` and `Q` are the same
    /// type the call is ambiguous and fails to compile.
    #[inline]
    pub fn assign<T, Index>(&mut self, value: T) -> &mut Self
    where
        (S, Q): Find<T, Index>, {
        self.0.assign(value);
        self
    }

    /// Gets a reference to the `(sequence, quality)` tuple.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> &(S, Q) {
        self.0.components()
    }

    /// Gets a mutable reference to the `(sequence, quality)` tuple.
    #[inline]
    #[must_use]
    pub fn components_mut(&mut self) -> &mut (S, Q) {
        self.0.components_mut()
    }

    /// Consumes the letter and returns the `(sequence, quality)` tuple.
    #[inline]
    #[must_use]
    pub fn into_components(self) -> (S, Q) {
        self.0.into_components()
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> Alphabet for Qualified<S, Q> {
    const SIZE: usize = <Composite<(S, Q)> as Alphabet>::SIZE;

    #[inline]
    fn to_rank(self) -> usize {
        self.0.to_rank()
    }

    #[inline]
    fn from_rank(rank: usize) -> Self {
        Qualified(Composite::from_rank(rank))
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> CharAlphabet for Qualified<S, Q> {
    /// Returns the character of the sequence letter.
    #[inline]
    fn to_char(self) -> u8 {
        self.sequence().to_char()
    }

    /// Overwrites the sequence letter with the one represented by `c`. The
    /// quality letter is unchanged.
    #[inline]
    fn assign_char(&mut self, c: u8) -> &mut Self {
        self.sequence_mut().assign_char(c);
        self
    }

    #[inline]
    fn char_is_valid(c: u8) -> bool {
        S::char_is_valid(c)
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> QualityAlphabet for Qualified<S, Q> {
    /// Returns the Phred score of the quality letter.
    #[inline]
    fn to_phred(self) -> u8 {
        self.quality().to_phred()
    }

    /// Overwrites the quality letter with the one representing `phred`. The
    /// sequence letter is unchanged.
    #[inline]
    fn assign_phred(&mut self, phred: u8) -> &mut Self {
        self.quality_mut().assign_phred(phred);
        self
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> SequenceAlphabet for Qualified<S, Q> {
    /// Complements the sequence letter and keeps the quality letter.
    #[inline]
    fn complement(self) -> Self {
        Self::new(self.sequence().complement(), self.quality())
    }
}
