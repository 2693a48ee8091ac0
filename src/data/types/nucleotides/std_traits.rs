use super::*;
use crate::data::err::AlphabetError;
use std::fmt::{self, Write};

macro_rules! impl_std_traits {
    ($($name:ty),+) => {
        $(
            impl fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_char(char::from(self.to_char()))
                }
            }

            impl TryFrom<u8> for $name {
                type Error = AlphabetError;

                /// Converts an ASCII character into a letter, failing if the
                /// character would otherwise be handled by the catch-all.
                #[inline]
                fn try_from(c: u8) -> Result<Self, Self::Error> {
                    if <$name>::char_is_valid(c) {
                        Ok(<$name>::from_char(c))
                    } else {
                        Err(AlphabetError::InvalidChar(c))
                    }
                }
            }

            impl From<$name> for char {
                #[inline]
                fn from(letter: $name) -> char {
                    char::from(letter.to_char())
                }
            }
        )+
    };
}

impl_std_traits!(Dna4, Dna5, Rna4);
