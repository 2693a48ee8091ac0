use super::*;
use crate::data::{
    nucleotides::{Dna4, Dna5},
    phred::{Phred42, Phred63},
};

type Pair = Composite<(Dna4, Phred42)>;
type Triple = Composite<(Dna5, Phred63, Dna4)>;
type Quintuple = Composite<(Dna4, Dna5, Phred42, Phred63, crate::data::nucleotides::Rna4)>;

#[test]
fn sizes() {
    assert_eq!(Pair::SIZE, 4 * 42);
    assert_eq!(Triple::SIZE, 5 * 63 * 4);
    assert_eq!(Quintuple::SIZE, 4 * 5 * 42 * 63 * 4);
    assert_eq!(Pair::LEN, 2);
    assert_eq!(Triple::LEN, 3);
    assert_eq!(Quintuple::LEN, 5);
}

#[test]
fn mixed_radix_rank() {
    let pair = Pair::new((Dna4::A, Phred42::new(7)));
    assert_eq!(pair.to_rank(), 7);

    let pair = Pair::new((Dna4::T, Phred42::new(7)));
    assert_eq!(pair.to_rank(), 3 * 42 + 7);

    let triple = Triple::new((Dna5::N, Phred63::new(1), Dna4::G));
    assert_eq!(triple.to_rank(), 4 * 63 * 4 + 4 + 2);
}

#[test]
fn rank_is_bijective() {
    for rank in 0..Pair::SIZE {
        assert_eq!(Pair::from_rank(rank).to_rank(), rank);
    }
    for rank in 0..Triple::SIZE {
        let letter = Triple::from_rank(rank);
        assert_eq!(letter.to_rank(), rank);
        assert_eq!(Triple::new(letter.into_components()), letter);
    }

    let mut seen = vec![false; Pair::SIZE];
    for &base in Dna4::LETTERS {
        for phred in 0..=Phred42::MAX_PHRED {
            let rank = Pair::new((base, Phred42::new(phred))).to_rank();
            assert!(!seen[rank], "rank {rank} produced twice");
            seen[rank] = true;
        }
    }
    assert!(seen.into_iter().all(|s| s));
}

#[test]
fn quintuple_round_trip() {
    let letter = Quintuple::new((
        Dna4::G,
        Dna5::N,
        Phred42::new(40),
        Phred63::new(2),
        crate::data::nucleotides::Rna4::U,
    ));
    assert_eq!(Quintuple::from_rank(letter.to_rank()), letter);
    assert_eq!(Quintuple::from_rank(Quintuple::SIZE - 1).get::<4>(), crate::data::nucleotides::Rna4::U);
    assert_eq!(Quintuple::from_rank(0), Quintuple::default());
}

#[test]
#[should_panic(expected = "rank out of range")]
fn from_rank_out_of_range() {
    let _ = Pair::from_rank(Pair::SIZE);
}

#[test]
fn checked_rank() {
    assert_eq!(Pair::from_rank_checked(Pair::SIZE), None);
    assert_eq!(
        Pair::from_rank_checked(Pair::SIZE - 1),
        Some(Pair::new((Dna4::T, Phred42::new(41))))
    );
}

#[test]
fn positional_access() {
    let mut triple = Triple::new((Dna5::C, Phred63::new(10), Dna4::T));
    assert_eq!(triple.get::<0>(), Dna5::C);
    assert_eq!(triple.get::<1>(), Phred63::new(10));
    assert_eq!(triple.get::<2>(), Dna4::T);

    *triple.get_mut::<1>() = Phred63::new(60);
    assert_eq!(triple.components(), &(Dna5::C, Phred63::new(60), Dna4::T));

    let (first, _, last) = triple.components_mut();
    *first = Dna5::N;
    *last = Dna4::A;
    assert_eq!(triple.into_components(), (Dna5::N, Phred63::new(60), Dna4::A));
}

#[test]
fn slot_independence() {
    let original = Triple::new((Dna5::G, Phred63::new(33), Dna4::C));

    for rank in 0..Phred63::SIZE {
        let mut letter = original;
        letter.get_mut::<1>().assign_rank(rank);
        assert_eq!(letter.get::<0>(), original.get::<0>());
        assert_eq!(letter.get::<2>(), original.get::<2>());

        let delta = rank.abs_diff(original.get::<1>().to_rank()) * Dna4::SIZE;
        assert_eq!(letter.to_rank().abs_diff(original.to_rank()), delta);
    }
}

#[test]
fn assign_by_type() {
    let mut triple = Triple::default();
    triple.assign(Phred63::new(12)).assign(Dna4::G);
    assert_eq!(triple.components(), &(Dna5::A, Phred63::new(12), Dna4::G));

    triple.assign(Dna5::T);
    assert_eq!(triple.components(), &(Dna5::T, Phred63::new(12), Dna4::G));
}

#[test]
fn default_is_rank_zero() {
    assert_eq!(Pair::default().to_rank(), 0);
    assert_eq!(Triple::default().components(), &(Dna5::A, Phred63::new(0), Dna4::A));
}

#[test]
fn order_is_rank_order() {
    let letters: Vec<Triple> = (0..Triple::SIZE).map(Triple::from_rank).collect();
    for w in letters.windows(2) {
        assert!(w[0] < w[1]);
        assert!(w[1] > w[0]);
        assert!(w[0] <= w[1] && w[0] != w[1]);
        assert_eq!(w[0].components().cmp(w[1].components()), w[0].cmp(&w[1]));
    }

    let a = Pair::new((Dna4::C, Phred42::new(41)));
    let b = Pair::new((Dna4::G, Phred42::new(0)));
    assert!(a < b);
    assert!(a >= Pair::new((Dna4::C, Phred42::new(40))));
}

#[test]
fn from_tuple() {
    let pair: Pair = (Dna4::G, Phred42::new(3)).into();
    assert_eq!(pair, Pair::new((Dna4::G, Phred42::new(3))));
}
