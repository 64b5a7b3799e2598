//! Minimizable trait implementation for Cover
//!
//! The cover is flattened to on-set and don't-care minterms, handed to
//! [`exact::minimize`], and the selected prime implicants become the cubes of
//! a new F-type cover with the same labels.

use log::debug;

use super::minimizable::Minimizable;
use super::Cover;
use crate::error::MinimizationError;
use crate::exact::{self, Minimization};
use crate::MinimizerConfig;

impl Cover {
    /// Minimize and keep the full record of the run
    ///
    /// The returned [`Minimization`] holds the generation rounds, the coverage
    /// chart and the solver trace, which [`report`](crate::report) renders.
    pub fn minimize_with_trace(
        &self,
        config: &MinimizerConfig,
    ) -> Result<(Cover, Minimization), MinimizationError> {
        let minterms = self.on_set_minterms()?;
        let dont_cares = self.dont_care_minterms()?;
        debug!(
            "Minimizing cover with {} input(s): {} on-set, {} don't-care minterm(s)",
            self.num_inputs(),
            minterms.len(),
            dont_cares.len()
        );

        let result = exact::minimize(self.num_inputs(), &minterms, &dont_cares, config)?;
        let cover = self.with_implicants(result.cover());
        Ok((cover, result))
    }
}

impl Minimizable for Cover {
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        self.minimize_with_trace(config).map(|(cover, _)| cover)
    }
}
