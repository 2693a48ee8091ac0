use zoe_alphabet::prelude::*;

#[test]
fn fastq_style_round_trip() {
    let sequence = b"ACGTNACGTN";
    let quality = b"!+5?IIII#~";

    let read: Vec<Qualified<Dna5, Phred94>> = qualified_from_bytes_checked(sequence, quality).unwrap();
    assert_eq!(read.to_sequence_bytes(), sequence);
    assert_eq!(read.to_quality_bytes(), quality);
    assert_eq!(read.max_phred(), Some(93));
}

#[test]
fn reverse_complement_keeps_qualities() {
    let mut read: Vec<Qualified<Dna4, Phred42>> = qualified_from_bytes(b"AAGC", b"!5?I").unwrap();
    make_reverse_complement(&mut read);
    assert_eq!(read.to_sequence_bytes(), b"GCTT");
    assert_eq!(read.to_quality_bytes(), b"I?5!");

    let twice = read.to_reverse_complement().to_reverse_complement();
    assert_eq!(twice, read);
}

#[test]
fn sort_by_composite_order() {
    let mut read: Vec<Qualified<Dna4, Phred42>> = qualified_from_bytes(b"TGCAA", b"!!!I!").unwrap();
    read.sort();
    assert_eq!(read.to_sequence_bytes(), b"AACGT");
    assert_eq!(read.to_quality_bytes(), b"!I!!!");
}

#[test]
fn filter_against_components() {
    let read: Vec<Qualified<Rna4, Phred63>> = qualified_from_bytes(b"ACGUUA", b"+5?I_!").unwrap();

    let bases_u = read.iter().filter(|&&x| x == Rna4::U).count();
    assert_eq!(bases_u, 2);

    let high_quality = read.iter().filter(|&&x| x >= Phred63::new(30)).count();
    assert_eq!(high_quality, 3);

    let kept: Vec<_> = read.iter().copied().filter(|&x| Phred63::new(20) < x).collect();
    assert_eq!(kept.to_sequence_bytes(), b"GUU");
}

#[test]
fn composite_of_qualified_letters() {
    type Pair = Composite<(Qualified<Dna4, Phred42>, Dna5)>;

    let letter = Pair::new((Qualified::new(Dna4::C, Phred42::new(3)), Dna5::N));
    assert_eq!(Pair::SIZE, 4 * 42 * 5);
    assert_eq!(letter.to_rank(), (42 + 3) * 5 + 4);
    assert_eq!(Pair::from_rank(letter.to_rank()), letter);
    assert!(letter.get::<0>() == Dna4::C);
}

#[test]
fn errors_report_position() {
    let err = qualified_from_bytes_checked::<Dna4, Phred42>(b"ACGN", b"IIII").unwrap_err();
    assert_eq!(err, AlphabetError::InvalidSequenceChar { position: 3, byte: b'N' });
    assert_eq!(err.get_code(), 1);
    assert_eq!(err.to_string(), "Invalid sequence byte 78 at position 3");
}

#[cfg(feature = "rand")]
#[test]
fn random_reads_are_consistent() {
    let read: Vec<Qualified<Dna5, Phred42>> = rand_qualified(2_000, 2024);
    for letter in &read {
        assert_eq!(letter.complement().complement(), *letter);
        assert!(*letter == letter.sequence());
        assert!(letter.quality() == *letter);
    }
}
