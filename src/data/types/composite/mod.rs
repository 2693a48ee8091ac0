//! ## Composite alphabets
//!
//! A [`Composite`] joins 2 to 5 independent alphabets into a single alphabet.
//! A letter of the composite holds one letter of each component, and its rank
//! is the mixed-radix number formed by the component ranks, with component 0
//! as the most significant digit:
//!
//! ```text
//! rank = Σ_i rank(c_i) * Π_{j>i} SIZE(c_j)
//! ```
//!
//! Consequently, the size of a composite is the product of the sizes of its
//! components, and comparing two composites compares their components
//! lexicographically.
//!
//! ```
//! # use zoe_alphabet::prelude::*;
//! type Triple = Composite<(Dna4, Phred42, Dna5)>;
//! assert_eq!(Triple::SIZE, 4 * 42 * 5);
//!
//! let mut letter = Triple::new((Dna4::C, Phred42::new(7), Dna5::N));
//! assert_eq!(letter.to_rank(), 1 * 42 * 5 + 7 * 5 + 4);
//! assert_eq!(Triple::from_rank(letter.to_rank()), letter);
//!
//! // Each slot can be read or written on its own
//! assert_eq!(letter.get::<2>(), Dna5::N);
//! *letter.get_mut::<0>() = Dna4::G;
//!
//! // Assigning a component value overwrites the slot of the same type
//! letter.assign(Phred42::new(30));
//! assert_eq!(letter.components(), &(Dna4::G, Phred42::new(30), Dna5::N));
//! ```
//!
//! Per-type assignment is resolved at compile time, so a type that is not a
//! component is rejected:
//!
//! ```compile_fail
//! # use zoe_alphabet::prelude::*;
//! let mut letter = Composite::new((Dna4::A, Phred42::new(7)));
//! letter.assign(Dna5::N);
//! ```
//!
//! as is a type that appears in more than one slot:
//!
//! ```compile_fail
//! # use zoe_alphabet::prelude::*;
//! let mut letter = Composite::new((Dna4::A, Phred42::new(7), Dna4::T));
//! letter.assign(Dna4::C);
//! ```
//!
//! Slots are also checked at compile time, so an index past the last
//! component is rejected:
//!
//! ```compile_fail
//! # use zoe_alphabet::prelude::*;
//! let base = Composite::<(Dna4, Phred42)>::default().get::<2>();
//! ```
//!
//! The size of a composite must fit in a `usize`. A composite whose product of
//! component sizes overflows fails during constant evaluation as soon as its
//! rank is used:
//!
//! ```compile_fail
//! # use zoe_alphabet::prelude::*;
//! type Wide = Composite<(Phred94, Phred94, Phred94, Phred94, Phred94)>;
//! type Huge = Composite<(Wide, Wide, Wide)>;
//! let rank = Huge::default().to_rank();
//! ```

use crate::data::types::Alphabet;

mod list;
mod std_traits;
#[cfg(test)]
mod test;

pub use list::*;

/// A letter of the alphabet formed by combining the alphabets in `L`, a tuple
/// of 2 to 5 [`Alphabet`] types. See the [module documentation](self) for
/// details.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Composite<L: ComponentList>(pub(crate) L);

impl<L: ComponentList> Composite<L> {
    /// The number of components.
    pub const LEN: usize = L::LEN;

    /// Creates a composite letter from a tuple of component letters.
    #[inline]
    #[must_use]
    pub const fn new(components: L) -> Self {
        Composite(components)
    }

    /// Consumes the composite and returns the tuple of component letters.
    #[inline]
    #[must_use]
    pub fn into_components(self) -> L {
        self.0
    }

    /// Gets a reference to the tuple of component letters.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> &L {
        &self.0
    }

    /// Gets a mutable reference to the tuple of component letters, which can
    /// be destructured to modify several slots at once.
    #[inline]
    #[must_use]
    pub fn components_mut(&mut self) -> &mut L {
        &mut self.0
    }

    /// Gets a copy of the letter in slot `I`.
    #[inline]
    #[must_use]
    pub fn get<const I: usize>(&self) -> <L as Slot<I>>::Output
    where
        L: Slot<I>, {
        *self.0.slot()
    }

    /// Gets a mutable reference to the letter in slot `I`. Writing through the
    /// reference leaves all other slots unchanged.
    #[inline]
    #[must_use]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <L as Slot<I>>::Output
    where
        L: Slot<I>, {
        self.0.slot_mut()
    }

    /// Overwrites the slot whose alphabet is `T` with `value`, leaving all
    /// other slots unchanged. The slot is chosen at compile time; `T` must
    /// occur exactly once in `L`.
    #[inline]
    pub fn assign<T, Index>(&mut self, value: T) -> &mut Self
    where
        L: Find<T, Index>, {
        *self.0.find_mut() = value;
        self
    }
}

impl<L: ComponentList> Alphabet for Composite<L> {
    const SIZE: usize = L::SIZE;

    #[inline]
    fn to_rank(self) -> usize {
        self.0.encode()
    }

    #[inline]
    fn from_rank(rank: usize) -> Self {
        assert!(rank < Self::SIZE, "rank out of range for the composite alphabet");
        Composite(L::decode(rank))
    }
}
