use super::*;
use crate::data::alphas::*;

//
// For if: u8 -> bool
//

/// A boolean mapping of the characters in the [`Dna4`] domain.
///
/// [`Dna4`]: crate::data::nucleotides::Dna4
pub(crate) const IS_DNA4: [bool; 256] = make_is_alpha_mapping(DNA4_WITH_U);

/// A boolean mapping of the characters in the [`Dna5`] domain.
///
/// [`Dna5`]: crate::data::nucleotides::Dna5
pub(crate) const IS_DNA5: [bool; 256] = make_is_alpha_mapping(DNA5_WITH_U);

/// A boolean mapping of the characters in the [`Rna4`] domain.
///
/// [`Rna4`]: crate::data::nucleotides::Rna4
pub(crate) const IS_RNA4: [bool; 256] = make_is_alpha_mapping(RNA4_WITH_T);

//
// For ByteIndexMap: u8 -> usize
//

/// Used to convert any byte to [`Dna4`] ranks where {0: A, 1: C, 2: G, 3: T}.
/// A is used as a catch-all. U is treated as T.
///
/// [`Dna4`]: crate::data::nucleotides::Dna4
pub const DNA4_MAP: ByteIndexMap<4> = ByteIndexMap::new_ignoring_case(*b"ACGT", b'A').add_synonym_ignoring_case(b'U', b'T');

/// Used to convert any byte to [`Dna5`] ranks where {0: A, 1: C, 2: G, 3: T,
/// 4: N}. N is used as a catch-all. U is treated as T.
///
/// [`Dna5`]: crate::data::nucleotides::Dna5
pub const DNA5_MAP: ByteIndexMap<5> =
    ByteIndexMap::new_ignoring_case(*b"ACGTN", b'N').add_synonym_ignoring_case(b'U', b'T');

/// Used to convert any byte to [`Rna4`] ranks where {0: A, 1: C, 2: G, 3: U}.
/// A is used as a catch-all. T is treated as U.
///
/// [`Rna4`]: crate::data::nucleotides::Rna4
pub const RNA4_MAP: ByteIndexMap<4> = ByteIndexMap::new_ignoring_case(*b"ACGU", b'A').add_synonym_ignoring_case(b'T', b'U');
