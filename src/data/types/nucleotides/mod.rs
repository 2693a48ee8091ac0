//! ## Nucleotide alphabets
//!
//! Single-letter nucleotide alphabets that can be used as the sequence
//! component of a [`Qualified`] letter. Each alphabet is a `u8`-backed enum
//! whose discriminant is the letter's rank, so that [`Ord`] agrees with the
//! rank order.
//!
//! Character input ignores case, and output is always uppercase. Characters
//! outside of an alphabet are mapped to that alphabet's catch-all letter:
//!
//! | Alphabet | Letters | Synonyms | Catch-all |
//! |----------|---------|----------|-----------|
//! | [`Dna4`] | `ACGT`  | `U`→`T`  | `A`       |
//! | [`Dna5`] | `ACGTN` | `U`→`T`  | `N`       |
//! | [`Rna4`] | `ACGU`  | `T`→`U`  | `A`       |
//!
//! ```
//! # use zoe_alphabet::prelude::*;
//! assert_eq!(Dna4::from_char(b'g'), Dna4::G);
//! assert_eq!(Dna4::from_char(b'U'), Dna4::T);
//! assert_eq!(Dna5::from_char(b'*'), Dna5::N);
//! assert_eq!(Dna4::C.complement(), Dna4::G);
//! ```
//!
//! [`Qualified`]: crate::data::qualified::Qualified

use crate::data::{
    mappings::{DNA4_MAP, DNA5_MAP, IS_DNA4, IS_DNA5, IS_RNA4, RNA4_MAP},
    types::{Alphabet, CharAlphabet, SequenceAlphabet},
};

mod std_traits;

/// Defines a nucleotide alphabet as a `u8`-backed enum along with its
/// [`Alphabet`], [`CharAlphabet`], and [`SequenceAlphabet`] implementations.
///
/// The variants must be listed in rank order, matching the keys of the
/// [`ByteIndexMap`]. The complement is given as a list of variants, where the
/// entry at position `i` is the complement of the letter with rank `i`.
///
/// [`ByteIndexMap`]: crate::data::mappings::ByteIndexMap
macro_rules! define_nucleotides {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $rank:literal),+ $(,)?
        }

        map: $map:expr,
        valid: $valid:expr,
        complement: [$($complement:ident),+ $(,)?] $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$variant_meta])* $variant = $rank),+
        }

        impl $name {
            /// All letters of the alphabet, in rank order.
            pub const LETTERS: &[Self] = &[$(Self::$variant),+];

            const COMPLEMENT: &[Self] = &[$(Self::$complement),+];
        }

        const _: () = assert!($map.len() == $name::LETTERS.len());
        const _: () = assert!($name::COMPLEMENT.len() == $name::LETTERS.len());

        impl Alphabet for $name {
            const SIZE: usize = Self::LETTERS.len();

            #[inline]
            fn to_rank(self) -> usize {
                self as usize
            }

            #[inline]
            fn from_rank(rank: usize) -> Self {
                assert!(rank < Self::SIZE, "rank out of range for {}", stringify!($name));
                Self::LETTERS[rank]
            }
        }

        impl CharAlphabet for $name {
            #[inline]
            fn to_char(self) -> u8 {
                $map.to_byte(self as usize)
            }

            #[inline]
            fn assign_char(&mut self, c: u8) -> &mut Self {
                *self = Self::LETTERS[$map.to_index(c)];
                self
            }

            #[inline]
            fn char_is_valid(c: u8) -> bool {
                $valid[c as usize]
            }
        }

        impl SequenceAlphabet for $name {
            #[inline]
            fn complement(self) -> Self {
                Self::COMPLEMENT[self as usize]
            }
        }
    };
}

define_nucleotides! {
    /// The four canonical DNA bases. `U` is read as `T`, and any other
    /// character is read as `A`.
    pub enum Dna4 {
        #[default]
        A = 0,
        C = 1,
        G = 2,
        T = 3,
    }

    map: DNA4_MAP,
    valid: IS_DNA4,
    complement: [T, G, C, A],
}

define_nucleotides! {
    /// The four canonical DNA bases plus `N`. `U` is read as `T`, and any
    /// other character is read as `N`.
    pub enum Dna5 {
        #[default]
        A = 0,
        C = 1,
        G = 2,
        T = 3,
        N = 4,
    }

    map: DNA5_MAP,
    valid: IS_DNA5,
    complement: [T, G, C, A, N],
}

define_nucleotides! {
    /// The four canonical RNA bases. `T` is read as `U`, and any other
    /// character is read as `A`.
    pub enum Rna4 {
        #[default]
        A = 0,
        C = 1,
        G = 2,
        U = 3,
    }

    map: RNA4_MAP,
    valid: IS_RNA4,
    complement: [U, G, C, A],
}

impl From<Dna4> for Dna5 {
    #[inline]
    fn from(base: Dna4) -> Self {
        Dna5::LETTERS[base.to_rank()]
    }
}

impl From<Dna4> for Rna4 {
    #[inline]
    fn from(base: Dna4) -> Self {
        Rna4::LETTERS[base.to_rank()]
    }
}

impl From<Rna4> for Dna4 {
    #[inline]
    fn from(base: Rna4) -> Self {
        Dna4::LETTERS[base.to_rank()]
    }
}
