/// Alphabets of valid characters, as byte strings.
pub(crate) mod alphas;
/// Byte lookup tables used by the concrete alphabets.
pub(crate) mod mappings;
