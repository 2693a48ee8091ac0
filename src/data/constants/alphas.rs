/// Canonical DNA bases accepted by [`Dna4`], including `U` as a synonym for
/// `T`.
///
/// [`Dna4`]: crate::data::nucleotides::Dna4
pub(crate) const DNA4_WITH_U: &[u8; 10] = b"acgtuACGTU";
/// Canonical DNA bases and `N`, including `U` as a synonym for `T`.
pub(crate) const DNA5_WITH_U: &[u8; 12] = b"acgtunACGTUN";
/// Canonical RNA bases, including `T` as a synonym for `U`.
pub(crate) const RNA4_WITH_T: &[u8; 10] = b"acgutACGUT";
