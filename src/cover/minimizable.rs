//! Minimizable trait for Boolean function minimization
//!
//! This module provides the public [`Minimizable`] trait which defines a
//! uniform interface for exact two-level minimization.

use crate::error::MinimizationError;
use crate::MinimizerConfig;

/// Public trait for types that can be minimized exactly
///
/// All methods take `&self` and return a new minimized instance; the
/// original is left untouched.
///
/// ```
/// use qm_logic::{Cover, CoverType, Minimizable, MinimizerConfig};
///
/// # fn main() -> Result<(), qm_logic::MinimizationError> {
/// let mut cover = Cover::new(CoverType::FD);
/// cover.add_cube(&[Some(true), Some(true), Some(false)], Some(true));
/// cover.add_cube(&[Some(true), Some(true), Some(true)], None);
///
/// let minimized = cover.minimize_with_config(&MinimizerConfig::default())?;
/// assert_eq!(minimized.num_cubes(), 1);
/// assert_eq!(minimized.literal_count(), 2);
///
/// // Original is unchanged
/// assert_eq!(cover.literal_count(), 3);
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration
    ///
    /// Default implementation calls `minimize_with_config` with default config.
    fn minimize(&self) -> Result<Self, MinimizationError>
    where
        Self: Sized,
    {
        let config = MinimizerConfig::default();
        self.minimize_with_config(&config)
    }

    /// Minimize with a custom configuration
    ///
    /// This is the primary method that implementations must provide.
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError>
    where
        Self: Sized;
}
