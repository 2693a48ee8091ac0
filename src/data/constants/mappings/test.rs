use super::{ByteIndexMap, DNA4_MAP, DNA5_MAP, IS_DNA4, IS_DNA5, IS_RNA4, RNA4_MAP};

#[test]
fn test_dna4_map() {
    for i in 0..=255 {
        match i {
            b'C' | b'c' => assert!(DNA4_MAP.to_index(i) == 1),
            b'G' | b'g' => assert!(DNA4_MAP.to_index(i) == 2),
            b'T' | b't' | b'U' | b'u' => assert!(DNA4_MAP.to_index(i) == 3),
            _ => assert!(DNA4_MAP.to_index(i) == 0),
        }
    }
}

#[test]
fn test_dna5_map() {
    for i in 0..=255 {
        match i {
            b'A' | b'a' => assert!(DNA5_MAP.to_index(i) == 0),
            b'C' | b'c' => assert!(DNA5_MAP.to_index(i) == 1),
            b'G' | b'g' => assert!(DNA5_MAP.to_index(i) == 2),
            b'T' | b't' | b'U' | b'u' => assert!(DNA5_MAP.to_index(i) == 3),
            _ => assert!(DNA5_MAP.to_index(i) == 4),
        }
    }
}

#[test]
fn test_rna4_map() {
    assert_eq!(RNA4_MAP.to_index(b'u'), 3);
    assert_eq!(RNA4_MAP.to_index(b'T'), 3);
    assert_eq!(RNA4_MAP.to_byte(3), b'U');
    assert_eq!(RNA4_MAP.to_index(b'?'), 0);
}

#[test]
fn test_map_ignores_case() {
    const MAP1: ByteIndexMap<4> = ByteIndexMap::new_ignoring_case(*b"acgt", b'a').add_synonym_ignoring_case(b'u', b'T');
    const MAP2: ByteIndexMap<4> = ByteIndexMap::new_ignoring_case(*b"AcGt", b'A').add_synonym_ignoring_case(b'U', b't');

    assert_eq!(DNA4_MAP, MAP1);
    assert_eq!(DNA4_MAP, MAP2);
}

#[test]
fn test_keys_are_uppercase() {
    for (i, &b) in b"ACGTN".iter().enumerate() {
        assert_eq!(DNA5_MAP.to_byte(i), b);
        assert_eq!(DNA5_MAP.to_index(b.to_ascii_lowercase()), i);
    }
}

#[test]
fn test_validity_maps() {
    for i in 0..=255u8 {
        assert_eq!(IS_DNA4[i as usize], b"ACGTUacgtu".contains(&i));
        assert_eq!(IS_DNA5[i as usize], b"ACGTUNacgtun".contains(&i));
        assert_eq!(IS_RNA4[i as usize], b"ACGUTacgut".contains(&i));
    }
}
