pub mod composite;
pub mod nucleotides;
pub mod phred;
pub mod qualified;

mod traits;
pub use traits::*;
