use super::Qualified;
use crate::data::{
    err::AlphabetError,
    types::{CharAlphabet, QualityAlphabet, SequenceAlphabet},
};

/// Pairs the characters of a sequence string with those of a quality string
/// (ASCII-encoded with an offset of 33, as in FASTQ).
///
/// Characters are converted leniently: sequence characters outside of `S`
/// fall back to its catch-all letter and quality characters out of range are
/// clamped. Use [`qualified_from_bytes_checked`] to reject them instead.
///
/// ## Errors
///
/// The two strings must have the same length.
#[inline]
pub fn qualified_from_bytes<S, Q>(sequence: &[u8], quality: &[u8]) -> Result<Vec<Qualified<S, Q>>, AlphabetError>
where
    S: SequenceAlphabet,
    Q: QualityAlphabet, {
    check_lengths(sequence, quality)?;

    Ok(sequence
        .iter()
        .zip(quality)
        .map(|(&s, &q)| Qualified::new(S::from_char(s), Q::from_char(q)))
        .collect())
}

/// Pairs the characters of a sequence string with those of a quality string,
/// rejecting any character that is not in the domain of its alphabet.
///
/// ## Errors
///
/// The two strings must have the same length, every byte of `sequence` must
/// be valid for `S`, and every byte of `quality` must be valid for `Q`. The
/// first invalid byte is reported with its position.
pub fn qualified_from_bytes_checked<S, Q>(
    sequence: &[u8], quality: &[u8],
) -> Result<Vec<Qualified<S, Q>>, AlphabetError>
where
    S: SequenceAlphabet,
    Q: QualityAlphabet, {
    check_lengths(sequence, quality)?;

    sequence
        .iter()
        .zip(quality)
        .enumerate()
        .map(|(position, (&s, &q))| {
            if !S::char_is_valid(s) {
                Err(AlphabetError::InvalidSequenceChar { position, byte: s })
            } else if !Q::char_is_valid(q) {
                Err(AlphabetError::InvalidQualityChar { position, byte: q })
            } else {
                Ok(Qualified::new(S::from_char(s), Q::from_char(q)))
            }
        })
        .collect()
}

#[inline]
fn check_lengths(sequence: &[u8], quality: &[u8]) -> Result<(), AlphabetError> {
    if sequence.len() == quality.len() {
        Ok(())
    } else {
        Err(AlphabetError::LengthMismatch {
            sequence: sequence.len(),
            quality:  quality.len(),
        })
    }
}

/// Reverses and complements a slice of letters in place.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn make_reverse_complement<A: SequenceAlphabet>(letters: &mut [A]) {
    letters.reverse();
    for x in letters {
        *x = x.complement();
    }
}

/// Reverses and complements a slice of letters into a new vector.
#[inline]
#[must_use]
pub fn reverse_complement<A: SequenceAlphabet>(letters: &[A]) -> Vec<A> {
    letters.iter().rev().map(|x| x.complement()).collect()
}

/// Methods for slices of [`Qualified`] letters.
pub trait QualifiedSequence<S: SequenceAlphabet, Q: QualityAlphabet> {
    /// Gets the slice as `(sequence, quality)` letters.
    fn as_qualified(&self) -> &[Qualified<S, Q>];

    /// Collects the sequence characters into a byte string.
    #[inline]
    #[must_use]
    fn to_sequence_bytes(&self) -> Vec<u8> {
        self.as_qualified().iter().map(|x| x.to_char()).collect()
    }

    /// Collects the quality characters, offset by 33, into a byte string.
    #[inline]
    #[must_use]
    fn to_quality_bytes(&self) -> Vec<u8> {
        self.as_qualified().iter().map(|x| x.quality().to_char()).collect()
    }

    /// Collects the numeric Phred scores.
    #[inline]
    #[must_use]
    fn to_phred_scores(&self) -> Vec<u8> {
        self.as_qualified().iter().map(|x| x.to_phred()).collect()
    }

    /// Gets the smallest Phred score, or `None` for an empty slice.
    #[inline]
    #[must_use]
    fn min_phred(&self) -> Option<u8> {
        self.as_qualified().iter().map(|x| x.to_phred()).min()
    }

    /// Gets the largest Phred score, or `None` for an empty slice.
    #[inline]
    #[must_use]
    fn max_phred(&self) -> Option<u8> {
        self.as_qualified().iter().map(|x| x.to_phred()).max()
    }

    /// The mean of the Phred scores, or `None` for an empty slice. This is the
    /// geometric mean of the error rates represented as a Phred score.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    fn mean_phred(&self) -> Option<f32> {
        let letters = self.as_qualified();
        if letters.is_empty() {
            return None;
        }

        let sum: usize = letters.iter().map(|x| usize::from(x.to_phred())).sum();
        Some(sum as f32 / letters.len() as f32)
    }

    /// The arithmetic mean of the error rates represented as a Phred score, or
    /// `None` for an empty slice.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    fn mean_error_phred(&self) -> Option<f32> {
        const BASE: f32 = 10.0;

        let letters = self.as_qualified();
        if letters.is_empty() {
            return None;
        }

        let sum: f32 = letters
            .iter()
            .map(|x| BASE.powf(-f32::from(x.to_phred()) / BASE))
            .sum();
        Some(-BASE * (sum / letters.len() as f32).log10())
    }

    /// Reverse complements the letters into a new vector. Each quality letter
    /// stays with its base.
    #[inline]
    #[must_use]
    fn to_reverse_complement(&self) -> Vec<Qualified<S, Q>> {
        reverse_complement(self.as_qualified())
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> QualifiedSequence<S, Q> for [Qualified<S, Q>] {
    #[inline]
    fn as_qualified(&self) -> &[Qualified<S, Q>] {
        self
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> QualifiedSequence<S, Q> for Vec<Qualified<S, Q>> {
    #[inline]
    fn as_qualified(&self) -> &[Qualified<S, Q>] {
        self
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet, const N: usize> QualifiedSequence<S, Q> for [Qualified<S, Q>; N] {
    #[inline]
    fn as_qualified(&self) -> &[Qualified<S, Q>] {
        self
    }
}
