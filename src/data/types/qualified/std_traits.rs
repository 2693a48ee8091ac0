use super::*;
use std::fmt;

impl<S: SequenceAlphabet, Q: QualityAlphabet> fmt::Display for Qualified<S, Q> {
    /// Writes the character of the sequence letter.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Write::write_char(f, char::from(self.to_char()))
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> From<(S, Q)> for Qualified<S, Q> {
    #[inline]
    fn from((sequence, quality): (S, Q)) -> Self {
        Qualified::new(sequence, quality)
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> From<Qualified<S, Q>> for (S, Q) {
    #[inline]
    fn from(letter: Qualified<S, Q>) -> Self {
        letter.into_components()
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> From<Composite<(S, Q)>> for Qualified<S, Q> {
    #[inline]
    fn from(composite: Composite<(S, Q)>) -> Self {
        Qualified(composite)
    }
}

impl<S: SequenceAlphabet, Q: QualityAlphabet> From<Qualified<S, Q>> for Composite<(S, Q)> {
    #[inline]
    fn from(letter: Qualified<S, Q>) -> Self {
        letter.0
    }
}
