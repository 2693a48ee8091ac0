use std::env;
use zoe_alphabet::prelude::*;

// Pairs a sequence with its quality string, then prints the reverse complement
// and some quality statistics. Bases outside of ACGT are rejected.

fn main() {
    let args: Vec<String> = env::args().collect();

    let (sequence, quality) = if args.len() == 3 {
        (args[1].as_bytes().to_vec(), args[2].as_bytes().to_vec())
    } else {
        (b"GATTACAGGT".to_vec(), b"II5I+II?#!".to_vec())
    };

    let read: Vec<Qualified<Dna4, Phred42>> =
        qualified_from_bytes_checked(&sequence, &quality).unwrap_or_die("Could not read the sequence and quality!");

    let rev_comp = read.to_reverse_complement();
    println!("{}", String::from_utf8_lossy(&rev_comp.to_sequence_bytes()));
    println!("{}", String::from_utf8_lossy(&rev_comp.to_quality_bytes()));

    if let (Some(min), Some(mean)) = (read.min_phred(), read.mean_phred()) {
        println!("min Q: {min}, mean Q: {mean:.2}");
    }

    let high_quality = read.iter().filter(|&&letter| letter >= Phred42::new(30)).count();
    println!("{high_quality} of {} bases have Q >= 30", read.len());
}
