use crate::data::{
    nucleotides::{Dna4, Dna5, Rna4},
    phred::{Phred42, Phred63, Phred94},
};

/// Implements `==`, `!=`, `<`, `>`, `<=`, and `>=` between
/// [`Qualified<S, Q>`](crate::data::qualified::Qualified) and each given
/// sequence alphabet `S`, in both operand orders. Only the sequence letter is
/// compared; the quality letter is ignored.
///
/// ```
/// # use zoe_alphabet::prelude::*;
/// # use zoe_alphabet::impl_sequence_comparisons;
/// # #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
/// # struct Bit(bool);
/// # impl Alphabet for Bit {
/// #     const SIZE: usize = 2;
/// #     fn to_rank(self) -> usize { usize::from(self.0) }
/// #     fn from_rank(rank: usize) -> Self { assert!(rank < 2); Bit(rank == 1) }
/// # }
/// # impl CharAlphabet for Bit {
/// #     fn to_char(self) -> u8 { if self.0 { b'1' } else { b'0' } }
/// #     fn assign_char(&mut self, c: u8) -> &mut Self { self.0 = c == b'1'; self }
/// # }
/// impl SequenceAlphabet for Bit {
///     fn complement(self) -> Self {
///         Bit(!self.0)
///     }
/// }
///
/// impl_sequence_comparisons!(Bit);
///
/// let letter = Qualified::new(Bit(false), Phred42::new(20));
/// assert!(letter == Bit(false));
/// assert!(Bit(true) > letter);
/// ```
#[macro_export]
macro_rules! impl_sequence_comparisons {
    ($($seq:ty),+ $(,)?) => {
        $(
            impl<Q: $crate::data::types::QualityAlphabet> ::core::cmp::PartialEq<$seq>
                for $crate::data::qualified::Qualified<$seq, Q>
            {
                #[inline]
                fn eq(&self, other: &$seq) -> bool {
                    self.sequence() == *other
                }
            }

            impl<Q: $crate::data::types::QualityAlphabet> ::core::cmp::PartialEq<$crate::data::qualified::Qualified<$seq, Q>>
                for $seq
            {
                #[inline]
                fn eq(&self, other: &$crate::data::qualified::Qualified<$seq, Q>) -> bool {
                    other == self
                }
            }

            impl<Q: $crate::data::types::QualityAlphabet> ::core::cmp::PartialOrd<$seq>
                for $crate::data::qualified::Qualified<$seq, Q>
            {
                #[inline]
                fn partial_cmp(&self, other: &$seq) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(&self.sequence(), other))
                }
            }

            impl<Q: $crate::data::types::QualityAlphabet> ::core::cmp::PartialOrd<$crate::data::qualified::Qualified<$seq, Q>>
                for $seq
            {
                #[inline]
                fn partial_cmp(
                    &self, other: &$crate::data::qualified::Qualified<$seq, Q>,
                ) -> ::core::option::Option<::core::cmp::Ordering> {
                    other.partial_cmp(self).map(::core::cmp::Ordering::reverse)
                }
            }
        )+
    };
}

/// Implements `==`, `!=`, `<`, `>`, `<=`, and `>=` between
/// [`Qualified<S, Q>`](crate::data::qualified::Qualified) and each given
/// quality alphabet `Q`, in both operand orders. Only the quality letter is
/// compared; the sequence letter is ignored.
#[macro_export]
macro_rules! impl_quality_comparisons {
    ($($qual:ty),+ $(,)?) => {
        $(
            impl<S: $crate::data::types::SequenceAlphabet> ::core::cmp::PartialEq<$qual>
                for $crate::data::qualified::Qualified<S, $qual>
            {
                #[inline]
                fn eq(&self, other: &$qual) -> bool {
                    self.quality() == *other
                }
            }

            impl<S: $crate::data::types::SequenceAlphabet> ::core::cmp::PartialEq<$crate::data::qualified::Qualified<S, $qual>>
                for $qual
            {
                #[inline]
                fn eq(&self, other: &$crate::data::qualified::Qualified<S, $qual>) -> bool {
                    other == self
                }
            }

            impl<S: $crate::data::types::SequenceAlphabet> ::core::cmp::PartialOrd<$qual>
                for $crate::data::qualified::Qualified<S, $qual>
            {
                #[inline]
                fn partial_cmp(&self, other: &$qual) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(&self.quality(), other))
                }
            }

            impl<S: $crate::data::types::SequenceAlphabet> ::core::cmp::PartialOrd<$crate::data::qualified::Qualified<S, $qual>>
                for $qual
            {
                #[inline]
                fn partial_cmp(
                    &self, other: &$crate::data::qualified::Qualified<S, $qual>,
                ) -> ::core::option::Option<::core::cmp::Ordering> {
                    other.partial_cmp(self).map(::core::cmp::Ordering::reverse)
                }
            }
        )+
    };
}

impl_sequence_comparisons!(Dna4, Dna5, Rna4);
impl_quality_comparisons!(Phred42, Phred63, Phred94);
