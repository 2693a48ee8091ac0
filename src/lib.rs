#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alphabet traits, letter types, and the composite and qualified alphabets
/// built from them.
pub mod data;

/// Generate random letters and sequences.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::composite::Composite;
    pub use crate::data::err::{AlphabetError, GetCode, OrFail};
    pub use crate::data::nucleotides::{Dna4, Dna5, Rna4};
    pub use crate::data::phred::{Phred42, Phred63, Phred94};
    pub use crate::data::qualified::{
        Qualified, QualifiedSequence, make_reverse_complement, qualified_from_bytes, qualified_from_bytes_checked,
        reverse_complement,
    };
    pub use crate::data::types::{Alphabet, CharAlphabet, QualityAlphabet, SequenceAlphabet};
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_letters, rand_qualified, rand_sequence};
}
