//! ## Alphabets for sequence and quality data
//!
//! Every letter type in *Zoe Alphabet* implements [`Alphabet`]: it has a finite
//! number of letters, each identified by a rank. Additional capabilities are
//! layered on top as traits:
//!
//! * [`CharAlphabet`] for letters with an ASCII representation.
//! * [`SequenceAlphabet`] for nucleotide-like letters with a complement.
//! * [`QualityAlphabet`] for Phred quality scores.
//!
//! The single-letter alphabets are [`Dna4`], [`Dna5`], and [`Rna4`] for
//! nucleotides and [`Phred42`], [`Phred63`], and [`Phred94`] for quality
//! scores. These can be combined into a [`Composite`], whose letters hold one
//! letter of each component, or into a [`Qualified`] letter holding a base
//! together with its quality score.
//!
//! ```
//! # use zoe_alphabet::prelude::*;
//! let read: Vec<Qualified<Dna4, Phred42>> = qualified_from_bytes(b"GATTACA", b"II5I+II").unwrap();
//! assert_eq!(read.min_phred(), Some(10));
//!
//! let rev_comp = read.to_reverse_complement();
//! assert_eq!(rev_comp.to_sequence_bytes(), b"TGTAATC");
//! assert_eq!(rev_comp.to_quality_bytes(), b"II+I5II");
//! ```
//!
//! ## Errors
//!
//! Type mismatches, such as using a quality alphabet in the sequence slot of a
//! [`Qualified`] letter, are compile-time errors. Character conversions such
//! as [`from_char`] never fail, since each alphabet maps unknown characters to
//! a catch-all letter or clamps them. The strict conversions instead return an
//! [`AlphabetError`], which the user can match on or display. For binaries,
//! [`unwrap_or_fail`] and [`unwrap_or_die`] print the error and exit.
//!
//! [`Alphabet`]: types::Alphabet
//! [`CharAlphabet`]: types::CharAlphabet
//! [`SequenceAlphabet`]: types::SequenceAlphabet
//! [`QualityAlphabet`]: types::QualityAlphabet
//! [`Dna4`]: nucleotides::Dna4
//! [`Dna5`]: nucleotides::Dna5
//! [`Rna4`]: nucleotides::Rna4
//! [`Phred42`]: phred::Phred42
//! [`Phred63`]: phred::Phred63
//! [`Phred94`]: phred::Phred94
//! [`Composite`]: composite::Composite
//! [`Qualified`]: qualified::Qualified
//! [`from_char`]: types::CharAlphabet::from_char
//! [`AlphabetError`]: err::AlphabetError
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for the alphabet traits and the letter types implementing them.
pub mod types;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;
/// Small const helpers for arrays.
pub(crate) mod array_types;

pub use constants::mappings::{ByteIndexMap, DNA4_MAP, DNA5_MAP, RNA4_MAP};
pub use types::{composite, nucleotides, phred, qualified};

pub(crate) use constants::{alphas, mappings};
