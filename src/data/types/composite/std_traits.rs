use super::*;
use std::cmp::Ordering;

impl<L: ComponentList> PartialOrd for Composite<L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L: ComponentList> Ord for Composite<L> {
    /// Compares by rank, which is the same as comparing the components
    /// lexicographically starting from slot 0.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_rank().cmp(&other.to_rank())
    }
}

impl<L: ComponentList> From<L> for Composite<L> {
    #[inline]
    fn from(components: L) -> Self {
        Composite(components)
    }
}
