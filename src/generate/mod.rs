use crate::data::{
    qualified::Qualified,
    types::{Alphabet, QualityAlphabet, SequenceAlphabet},
};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a random byte string of `length` characters drawn uniformly from
/// `alpha`, seeded with `seed`.
///
/// ## Panics
///
/// `alpha` must not be empty.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates `length` random letters of the alphabet `A`, seeded with `seed`.
/// For a composite alphabet, every component is drawn independently.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rand_letters<A: Alphabet>(length: usize, seed: u64) -> Vec<A> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    // Truncation is harmless since the remainder is less than SIZE
    (1..=length)
        .map(|_| A::from_rank((rng.next_u64() % A::SIZE as u64) as usize))
        .collect()
}

/// Generates a random qualified sequence of `length` letters, seeded with
/// `seed`.
#[inline]
#[must_use]
pub fn rand_qualified<S, Q>(length: usize, seed: u64) -> Vec<Qualified<S, Q>>
where
    S: SequenceAlphabet,
    Q: QualityAlphabet, {
    rand_letters(length, seed)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{
        composite::Composite,
        nucleotides::{Dna4, Dna5},
        phred::{Phred42, Phred94},
        qualified::QualifiedSequence,
    };

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
    }

    #[test]
    fn rand_letters_cover_alphabet() {
        const LEN: usize = 10_000;

        let letters: Vec<Dna5> = rand_letters(LEN, 42);
        assert_eq!(letters.len(), LEN);
        for &letter in Dna5::LETTERS {
            assert!(letters.contains(&letter));
        }

        let phreds: Vec<Phred94> = rand_letters(LEN, 7);
        assert!(phreds.iter().any(|q| q.as_u8() == 0));
        assert!(phreds.iter().any(|q| q.as_u8() == 93));
    }

    #[test]
    fn rand_letters_are_reproducible() {
        let first: Vec<Composite<(Dna4, Phred42, Dna5)>> = rand_letters(500, 1234);
        let second: Vec<Composite<(Dna4, Phred42, Dna5)>> = rand_letters(500, 1234);
        assert_eq!(first, second);

        let other: Vec<Composite<(Dna4, Phred42, Dna5)>> = rand_letters(500, 4321);
        assert_ne!(first, other);
    }

    #[test]
    fn rand_qualified_round_trip() {
        let read: Vec<Qualified<Dna4, Phred42>> = rand_qualified(1_000, 99);
        let sequence = read.to_sequence_bytes();
        let quality = read.to_quality_bytes();

        let parsed: Vec<Qualified<Dna4, Phred42>> =
            crate::data::qualified::qualified_from_bytes_checked(&sequence, &quality).unwrap();
        assert_eq!(parsed, read);
    }
}
