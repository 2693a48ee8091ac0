use crate::data::{
    array_types::{checked_product, stride},
    types::Alphabet,
};
use std::{fmt::Debug, hash::Hash};

mod private {
    /// Seals [`ComponentList`](super::ComponentList) so that it is only
    /// implemented for tuples of alphabets.
    pub trait Sealed {}
}

/// An ordered list of component alphabets, represented as a tuple of 2 to 5
/// [`Alphabet`] types. Position 0 is the most significant digit of the
/// combined rank.
pub trait ComponentList: private::Sealed + Copy + Eq + Hash + Default + Debug {
    /// The number of components.
    const LEN: usize;

    /// The product of the sizes of all components.
    ///
    /// Evaluating this constant fails the build if the product does not fit in
    /// a `usize`.
    const SIZE: usize;

    /// Encodes the components as a mixed-radix rank in `0..SIZE`.
    #[must_use]
    fn encode(&self) -> usize;

    /// Decodes a mixed-radix rank into the components. `rank` must be less
    /// than [`SIZE`](ComponentList::SIZE).
    #[must_use]
    fn decode(rank: usize) -> Self;
}

/// Positional access to slot `I` of a [`ComponentList`]. Implemented only for
/// indices within the list, so an out-of-range index fails to compile.
pub trait Slot<const I: usize>: ComponentList {
    /// The alphabet stored at slot `I`.
    type Output: Alphabet;

    /// Gets a reference to slot `I`.
    #[must_use]
    fn slot(&self) -> &Self::Output;

    /// Gets a mutable reference to slot `I`.
    #[must_use]
    fn slot_mut(&mut self) -> &mut Self::Output;
}

/// A marker type naming the position of a component, used to infer which slot
/// [`Find`] refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Idx<const I: usize>;

/// Access to the unique slot of a [`ComponentList`] holding the alphabet `T`.
///
/// `Index` is inferred by the compiler. If `T` is not in the list, or if it
/// appears more than once, the index cannot be inferred and the code fails to
/// compile.
pub trait Find<T, Index> {
    /// Gets a mutable reference to the slot of type `T`.
    #[must_use]
    fn find_mut(&mut self) -> &mut T;
}

/// Implements [`ComponentList`], [`Slot`], and [`Find`] for a tuple.
macro_rules! impl_component_list {
    (@slots $all:tt $($idx:tt $T:ident),+) => {
        $(
            impl_component_list!(@slot $all $idx $T);
        )+
    };

    (@slot [$($All:ident),+] $idx:tt $T:ident) => {
        impl<$($All: Alphabet),+> Slot<$idx> for ($($All,)+) {
            type Output = $T;

            #[inline]
            fn slot(&self) -> &$T {
                &self.$idx
            }

            #[inline]
            fn slot_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }

        impl<$($All: Alphabet),+> Find<$T, Idx<$idx>> for ($($All,)+) {
            #[inline]
            fn find_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }
    };

    ($len:literal; $($idx:tt $T:ident),+) => {
        impl<$($T: Alphabet),+> private::Sealed for ($($T,)+) {}

        impl<$($T: Alphabet),+> ComponentList for ($($T,)+) {
            const LEN: usize = $len;

            const SIZE: usize = match checked_product(&[$(<$T as Alphabet>::SIZE),+]) {
                Some(size) => size,
                None => panic!("The product of the component sizes overflows a usize"),
            };

            #[inline]
            fn encode(&self) -> usize {
                let mut rank = 0;
                $(
                    rank = rank * <$T as Alphabet>::SIZE + self.$idx.to_rank();
                )+
                debug_assert!(rank < Self::SIZE);
                rank
            }

            #[inline]
            fn decode(rank: usize) -> Self {
                debug_assert!(rank < Self::SIZE);
                let sizes = [$(<$T as Alphabet>::SIZE),+];
                ($(
                    <$T as Alphabet>::from_rank(rank / stride(&sizes, $idx) % <$T as Alphabet>::SIZE),
                )+)
            }
        }

        impl_component_list!(@slots [$($T),+] $($idx $T),+);
    };
}

impl_component_list!(2; 0 A, 1 B);
impl_component_list!(3; 0 A, 1 B, 2 C);
impl_component_list!(4; 0 A, 1 B, 2 C, 3 D);
impl_component_list!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
