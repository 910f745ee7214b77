//! Three-component Tausworthe generator producing 32-bit words.
//!
//! The recurrence is reproduced bit-for-bit: three LFSR registers advance in
//! lock-step and each output word is the XOR of the registers *before* they
//! advance. Seeds are used verbatim, including degenerate zero registers.

mod error;
pub mod host;
mod rng;
mod taus;

pub use error::TausError;
pub use host::HostArgs;
pub use taus::{generate, to_unit_f64, try_generate, Taus88, TausState};
