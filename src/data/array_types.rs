// Make into a trait when functionality becomes available.
// See: https://github.com/rust-lang/rust-project-goals/issues/106

pub(crate) const fn make_uppercase<const N: usize>(a: &[u8; N]) -> [u8; N] {
    let mut b = [0; N];
    let mut i = 0;
    while i < a.len() {
        b[i] = a[i].to_ascii_uppercase();
        i += 1;
    }
    b
}

pub(crate) const fn position<const N: usize>(a: &[u8; N], needle: u8) -> Option<usize> {
    let mut i = 0;
    while i < a.len() {
        if needle == a[i] {
            return Some(i);
        }
        i += 1;
    }
    None
}

pub(crate) const fn is_unique<const N: usize>(a: &[u8; N]) -> bool {
    let mut i = 0;
    while i < a.len() {
        let mut j = i + 1;
        while j < a.len() {
            if a[i] == a[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// The product of all alphabet sizes, or `None` on overflow.
pub(crate) const fn checked_product<const N: usize>(sizes: &[usize; N]) -> Option<usize> {
    let mut product: usize = 1;
    let mut i = 0;
    while i < N {
        product = match product.checked_mul(sizes[i]) {
            Some(p) => p,
            None => return None,
        };
        i += 1;
    }
    Some(product)
}

/// The place value of digit `index` in a mixed-radix number whose digits have
/// the bases in `sizes`, with index 0 the most significant.
pub(crate) const fn stride<const N: usize>(sizes: &[usize; N], index: usize) -> usize {
    let mut stride = 1;
    let mut i = index + 1;
    while i < N {
        stride *= sizes[i];
        i += 1;
    }
    stride
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_uniqe() {
        assert!(is_unique(b"ACGTN"), "Should be true!");
        assert!(!is_unique(b"ACGTNA"), "Should be false!");
    }

    #[test]
    fn test_position() {
        assert_eq!(position(b"ACGTN", b'T'), Some(3));
        assert_eq!(position(b"ACGTN", b'U'), None);
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product(&[4, 42]), Some(168));
        assert_eq!(checked_product(&[4, 42, 5]), Some(840));
        assert_eq!(checked_product(&[usize::MAX, 2]), None);
    }

    #[test]
    fn test_stride() {
        let sizes = [4, 42, 5];
        assert_eq!(stride(&sizes, 0), 210);
        assert_eq!(stride(&sizes, 1), 5);
        assert_eq!(stride(&sizes, 2), 1);
    }
}
