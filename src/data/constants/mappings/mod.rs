pub(crate) mod byte_index;
pub(crate) mod dna;

#[cfg(test)]
mod test;

pub use byte_index::*;
pub use dna::*;

/// Utility function for building *is alpha*-like maps
const fn make_is_alpha_mapping<const N: usize>(alpha: &[u8; N]) -> [bool; 256] {
    let mut mapping = [false; 256];
    let mut i = 0;

    while i < N {
        mapping[alpha[i] as usize] = true;
        i += 1;
    }
    mapping
}
