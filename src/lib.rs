//! # Exact Two-Level Logic Minimizer
//!
//! This crate computes minimum sum-of-products covers of single-output
//! Boolean functions given as minterm lists or PLA files. It combines the
//! Quine-McCluskey method for prime-implicant generation with Petrick's method
//! for selecting a minimum cover.
//!
//! ## Overview
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`ImplicantGenerator`] merges adjacent implicants round by round and
//!    returns every prime implicant of the on-set and don't-care set.
//! 2. [`CoverageChart`] records which prime implicants cover which on-set
//!    minterms.
//! 3. [`MinimalCoverSolver`] takes the essential prime implicants, then
//!    expands Petrick's product-of-sums over the remaining minterms, applies
//!    absorption and picks the term with the fewest implicants, then the
//!    fewest literals.
//!
//! [`exact::minimize`] runs all three.
//!
//! ```
//! use qm_logic::{exact, MinimizerConfig};
//!
//! # fn main() -> Result<(), qm_logic::MinimizationError> {
//! // f(a, b, c, d) = m(1, 3, 7, 11, 15) + d(5, 9)
//! let result = exact::minimize(4, &[1, 3, 7, 11, 15], &[5, 9], &MinimizerConfig::default())?;
//!
//! for implicant in result.cover() {
//!     println!("{}", implicant); // "0--1" / "-0-1" and "--11"
//! }
//! assert_eq!(result.cover().literal_count(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## PLA Files
//!
//! [`Cover`] reads and writes single-output PLA files and implements
//! [`Minimizable`]:
//!
//! ```
//! use qm_logic::{Cover, CoverType, Minimizable, PLAReader, PLAWriter};
//!
//! # fn main() -> std::io::Result<()> {
//! let cover = Cover::from_pla_string(".i 2\n.o 1\n.p 3\n00 1\n01 1\n11 1\n.e\n")?;
//! let minimized = cover.minimize()?;
//!
//! let mut buffer = Vec::new();
//! minimized.write_pla(&mut buffer, CoverType::F)?;
//! assert_eq!(minimized.num_cubes(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Bit Order
//!
//! Position 0 of an implicant pattern is the most significant bit of the
//! minterm index, so the PLA row `01` is minterm 1 and position `i` is input
//! variable `i`.
//!
//! ## Cost
//!
//! Both stages are exponential in the worst case: the number of prime
//! implicants can grow as `3^n / n` and Petrick's expansion as the product of
//! the clause sizes. There is no timeout. [`MinimizerConfig::max_petrick_terms`]
//! makes the solver fail with an error instead of exhausting memory.
//!
//! ## Thread Safety
//!
//! Every call owns its working data and all public types are plain owned
//! values (`Send + Sync`), so independent minimizations can run on separate
//! threads.

pub mod chart;
pub mod cover;
pub mod error;
pub mod exact;
pub mod generator;
pub mod implicant;
pub mod petrick;
pub mod pla;
pub mod report;

// Re-export high-level public API
pub use chart::{CoverageChart, EssentialImplicant};
pub use cover::{Cover, CoverType, Cube, CubeType, Minimizable};
pub use error::{
    CoverageError, DimensionError, ExpansionError, MinimizationError, PatternError,
};
pub use generator::{ImplicantGenerator, PrimeImplicants, RoundTrace};
pub use implicant::{Implicant, Minterm, MAX_VARIABLES};
pub use petrick::{MinimalCover, MinimalCoverSolver, PetrickExpression, PetrickTerm, Solution};
pub use pla::{PLAReader, PLAWriter};

/// Configuration for the exact minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Largest number of terms Petrick's expansion may hold
    ///
    /// `None` (the default) never gives up. When set, a solve whose expansion
    /// would exceed the limit fails with [`ExpansionError::TermLimitExceeded`].
    pub max_petrick_terms: Option<usize>,
    /// Record the implicants of every generation group, for reporting
    pub trace: bool,
    /// Check the final cover against the on-set
    pub verify: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            max_petrick_terms: None,
            trace: false,
            verify: true,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
