use super::*;
use crate::data::err::AlphabetError;
use std::fmt;

macro_rules! impl_std_traits {
    ($($name:ty),+) => {
        $(
            impl fmt::Display for $name {
                /// Writes the numeric Phred score.
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    let mut buff = itoa::Buffer::new();
                    f.write_str(buff.format(self.0))
                }
            }

            impl TryFrom<u8> for $name {
                type Error = AlphabetError;

                /// Converts an ASCII-encoded quality score into a letter,
                /// failing if it is out of range rather than clamping. This
                /// assumes that a 33 ASCII offset is used.
                #[inline]
                fn try_from(c: u8) -> Result<Self, Self::Error> {
                    if <$name>::char_is_valid(c) {
                        Ok(<$name>::from_char(c))
                    } else {
                        Err(AlphabetError::InvalidChar(c))
                    }
                }
            }

            impl From<$name> for u8 {
                /// Returns the numeric Phred score.
                #[inline]
                fn from(q: $name) -> u8 {
                    q.0
                }
            }
        )+
    };
}

impl_std_traits!(Phred42, Phred63, Phred94);
