//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the letter types of *Zoe Alphabet*, as well as wrapper types to provide
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations with stronger assumptions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::data::{
    composite::{Composite, ComponentList},
    nucleotides::{Dna4, Dna5, Rna4},
    phred::{Phred42, Phred63, Phred94},
    qualified::Qualified,
    types::{Alphabet, QualityAlphabet, SequenceAlphabet},
};
use arbitrary::{Arbitrary, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty $(, $($generics:tt)*)?) => {
        impl$($($generics)*)? ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl$($($generics)*)? ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// Implements [`Arbitrary`] for letter types by choosing a rank uniformly.
macro_rules! impl_arbitrary_letter {
    ($($name:ty),+) => {
        $(
            impl<'a> Arbitrary<'a> for $name {
                fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
                    arbitrary_letter(u)
                }

                fn size_hint(depth: usize) -> (usize, Option<usize>) {
                    let _ = depth;
                    (1, Some(1))
                }
            }
        )+
    };
}

#[inline]
fn arbitrary_letter<A: Alphabet>(u: &mut Unstructured<'_>) -> Result<A> {
    Ok(A::from_rank(u.choose_index(A::SIZE)?))
}

impl_arbitrary_letter!(Dna4, Dna5, Rna4, Phred42, Phred63, Phred94);

impl<'a, L: ComponentList> Arbitrary<'a> for Composite<L> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        arbitrary_letter(u)
    }
}

impl<'a, S: SequenceAlphabet, Q: QualityAlphabet> Arbitrary<'a> for Qualified<S, Q> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        arbitrary_letter(u)
    }
}

/// A sequence string and a quality string of the same length, where both
/// strings are graphic ASCII in the range `!`..=`~`. The characters are not
/// necessarily valid for any particular alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceQualityBytes {
    pub sequence: Vec<u8>,
    pub quality:  Vec<u8>,
}

impl<'a> Arbitrary<'a> for SequenceQualityBytes {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<(u8, u8)>()?;
        let mut sequence = Vec::with_capacity(len);
        let mut quality = Vec::with_capacity(len);
        for _ in 0..len {
            sequence.push(u.int_in_range(b'!'..=b'~')?);
            quality.push(u.int_in_range(b'!'..=b'~')?);
        }

        Ok(SequenceQualityBytes { sequence, quality })
    }
}

/// A wrapper around a vector of [`Qualified`] letters such that the
/// implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates reads that are not empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedRead<S: SequenceAlphabet, Q: QualityAlphabet>(pub Vec<Qualified<S, Q>>);

impl_deref! {QualifiedRead<S, Q>, Vec<Qualified<S, Q>>, <S: SequenceAlphabet, Q: QualityAlphabet>}

impl<'a, S: SequenceAlphabet, Q: QualityAlphabet> Arbitrary<'a> for QualifiedRead<S, Q> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let mut read = vec![Qualified::arbitrary(u)?];
        read.extend(u.arbitrary_iter::<Qualified<S, Q>>()?.collect::<Result<Vec<_>>>()?);
        Ok(QualifiedRead(read))
    }
}
