//! Single-output covers of Boolean functions
//!
//! A [`Cover`] is a sum-of-products description of one Boolean function, as
//! read from or written to a PLA file. Cubes carry their role (ON-set,
//! don't-care or OFF-set) and the cover grows its input dimension as cubes
//! are added.
//!
//! Covers are turned into minterm lists for the exact minimizer with
//! [`Cover::on_set_minterms`] and [`Cover::dont_care_minterms`], and
//! minimized through the [`Minimizable`] trait.

mod conversions;
mod cubes;
pub mod error;
mod labels;
mod minimizable;
mod minimize;

pub use cubes::{Cube, CubeType};
pub use minimizable::Minimizable;

use std::collections::BTreeSet;
use std::sync::Arc;

use error::CoverError;
use labels::LabelManager;

use crate::error::DimensionError;
use crate::implicant::{check_num_vars, Implicant, Minterm};

/// Output name used when a cover has none, as PLA writers traditionally emit
pub(crate) const DEFAULT_OUTPUT_LABEL: &str = "F";

/// Represents the type of cover (F, FD, FR, or FDR)
///
/// This type determines which sets are included in the cover:
/// - F: ON-set only
/// - FD: ON-set + Don't-care set
/// - FR: ON-set + OFF-set
/// - FDR: ON-set + Don't-care set + OFF-set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverType {
    /// On-set only (F)
    F = 1,
    /// On-set and don't-care set (FD)
    FD = 3,
    /// On-set and off-set (FR)
    FR = 5,
    /// On-set, don't-care set, and off-set (FDR)
    FDR = 7,
}

impl CoverType {
    /// Check if this type includes F (ON-set)
    pub fn has_f(&self) -> bool {
        matches!(
            self,
            CoverType::F | CoverType::FD | CoverType::FR | CoverType::FDR
        )
    }

    /// Check if this type includes D (don't-care set)
    pub fn has_d(&self) -> bool {
        matches!(self, CoverType::FD | CoverType::FDR)
    }

    /// Check if this type includes R (OFF-set)
    pub fn has_r(&self) -> bool {
        matches!(self, CoverType::FR | CoverType::FDR)
    }
}

/// A single-output cover with dynamic input dimension
///
/// # Examples
///
/// ```
/// use qm_logic::{Cover, CoverType, Minimizable};
///
/// let mut cover = Cover::new(CoverType::F);
///
/// // Add cubes (dimensions grow automatically)
/// cover.add_cube(&[Some(false), Some(true)], Some(true));
/// cover.add_cube(&[Some(true), Some(true)], Some(true));
///
/// // Minimize it (returns new instance)
/// let minimized = cover.minimize().unwrap();
///
/// assert_eq!(minimized.num_cubes(), 1);
/// assert_eq!(minimized.literal_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cover {
    /// Number of input variables
    num_inputs: usize,
    /// Input label manager (prefix: 'x')
    input_labels: LabelManager<'x'>,
    /// Output name, if one was given
    output_label: Option<Arc<str>>,
    /// Cubes with their type (F/D/R)
    cubes: Vec<Cube>,
    /// Cover type (F, FD, FR, or FDR)
    cover_type: CoverType,
}

impl Cover {
    /// Create a new empty cover with the specified type
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, CoverType};
    ///
    /// let cover = Cover::new(CoverType::F);
    /// assert_eq!(cover.num_inputs(), 0);
    /// assert_eq!(cover.num_cubes(), 0);
    /// ```
    pub fn new(cover_type: CoverType) -> Self {
        Cover {
            num_inputs: 0,
            input_labels: LabelManager::new(),
            output_label: None,
            cubes: Vec::new(),
            cover_type,
        }
    }

    /// Create a new cover with pre-defined labels
    ///
    /// The number of inputs is the number of input labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, CoverType};
    ///
    /// let cover = Cover::with_labels(CoverType::F, &["a", "b", "c"], "out").unwrap();
    /// assert_eq!(cover.num_inputs(), 3);
    /// assert_eq!(cover.output_label().as_ref(), "out");
    /// ```
    pub fn with_labels<S: AsRef<str>>(
        cover_type: CoverType,
        input_labels: &[S],
        output_label: &str,
    ) -> Result<Self, CoverError> {
        let labels: Vec<Arc<str>> = input_labels.iter().map(|s| Arc::from(s.as_ref())).collect();
        Ok(Cover {
            num_inputs: labels.len(),
            input_labels: LabelManager::from_labels(labels)?,
            output_label: Some(Arc::from(output_label)),
            cubes: Vec::new(),
            cover_type,
        })
    }

    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of cubes (for F/FD types, only counts F cubes; for FR/FDR, counts all)
    pub fn num_cubes(&self) -> usize {
        if self.cover_type.has_r() {
            self.cubes.len()
        } else {
            self.cubes
                .iter()
                .filter(|cube| cube.cube_type() == CubeType::F)
                .count()
        }
    }

    /// Get the cover type (F, FD, FR, or FDR)
    pub fn cover_type(&self) -> CoverType {
        self.cover_type
    }

    /// Get input variable labels
    ///
    /// Empty unless labels were given; see [`Cover::set_input_labels`].
    pub fn input_labels(&self) -> &[Arc<str>] {
        self.input_labels.as_slice()
    }

    /// Position of the input called `name`
    pub fn input_position(&self, name: &str) -> Option<usize> {
        self.input_labels.find_position(name)
    }

    /// Name input variables
    ///
    /// The number of labels must equal the current number of inputs.
    pub fn set_input_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<(), CoverError> {
        if labels.len() != self.num_inputs {
            return Err(CoverError::LabelCountMismatch {
                expected: self.num_inputs,
                actual: labels.len(),
            });
        }
        let labels = labels.iter().map(|s| Arc::from(s.as_ref())).collect();
        self.input_labels = LabelManager::from_labels(labels)?;
        Ok(())
    }

    /// Get the output label, `F` when none was given
    pub fn output_label(&self) -> Arc<str> {
        match &self.output_label {
            Some(label) => Arc::clone(label),
            None => Arc::from(DEFAULT_OUTPUT_LABEL),
        }
    }

    /// Name the output
    pub fn set_output_label(&mut self, label: &str) {
        self.output_label = Some(Arc::from(label));
    }

    /// True when an output label was explicitly set
    pub fn has_output_label(&self) -> bool {
        self.output_label.is_some()
    }

    /// Iterate over cubes
    ///
    /// For F-type covers, only F cubes are returned.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> + '_ {
        let cover_type = self.cover_type;
        self.cubes
            .iter()
            .filter(move |cube| cover_type != CoverType::F || cube.cube_type() == CubeType::F)
    }

    /// Add a cube to the cover
    ///
    /// The input dimension grows automatically if the cube is wider; narrower
    /// cubes are padded with don't-cares. The output uses PLA notation:
    /// - `Some(true)` (`1`) → F cube (ON-set)
    /// - `Some(false)` (`0`) → R cube (OFF-set, only if the cover type includes R)
    /// - `None` (`-`) → D cube (don't-care, only if the cover type includes D)
    ///
    /// Rows whose output has no role in the cover type are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, CoverType};
    ///
    /// let mut cover = Cover::new(CoverType::FD);
    /// cover.add_cube(&[Some(false), Some(true)], Some(true));
    /// cover.add_cube(&[Some(true), None, Some(true)], None);
    /// assert_eq!(cover.num_inputs(), 3);
    /// assert_eq!(cover.num_cubes(), 1);
    /// ```
    pub fn add_cube(&mut self, inputs: &[Option<bool>], output: Option<bool>) {
        let cube_type = match output {
            Some(true) if self.cover_type.has_f() => CubeType::F,
            Some(false) if self.cover_type.has_r() => CubeType::R,
            None if self.cover_type.has_d() => CubeType::D,
            _ => return,
        };

        self.grow_to_fit(inputs.len());

        let mut padded_inputs = inputs.to_vec();
        padded_inputs.resize(self.num_inputs, None);
        self.cubes.push(Cube::new(&padded_inputs, cube_type));
    }

    /// Total literal count of the ON-set cubes
    pub fn literal_count(&self) -> usize {
        self.cubes_of(CubeType::F).map(Cube::literal_count).sum()
    }

    /// Expand the ON-set cubes into minterms, ascending
    pub fn on_set_minterms(&self) -> Result<Vec<Minterm>, DimensionError> {
        check_num_vars(self.num_inputs)?;
        Ok(self.expand(CubeType::F).into_iter().collect())
    }

    /// Expand the don't-care set into minterms, ascending
    ///
    /// For covers with an OFF-set, every point neither in F nor in R is also
    /// a don't-care.
    pub fn dont_care_minterms(&self) -> Result<Vec<Minterm>, DimensionError> {
        check_num_vars(self.num_inputs)?;
        let mut dont_cares = self.expand(CubeType::D);
        if self.cover_type.has_r() {
            let on_set = self.expand(CubeType::F);
            let off_set = self.expand(CubeType::R);
            let space: Minterm = 1 << self.num_inputs;
            dont_cares.extend((0..space).filter(|m| !on_set.contains(m) && !off_set.contains(m)));
        }
        Ok(dont_cares.into_iter().collect())
    }

    /// Build an F-type cover from implicants, reusing this cover's labels
    pub(crate) fn with_implicants<'a, I>(&self, implicants: I) -> Cover
    where
        I: IntoIterator<Item = &'a Implicant>,
    {
        Cover {
            num_inputs: self.num_inputs,
            input_labels: self.input_labels.clone(),
            output_label: self.output_label.clone(),
            cubes: implicants.into_iter().map(Cube::from).collect(),
            cover_type: CoverType::F,
        }
    }

    fn with_num_inputs(mut self, num_inputs: usize) -> Self {
        self.grow_to_fit(num_inputs);
        self
    }

    fn cubes_of(&self, cube_type: CubeType) -> impl Iterator<Item = &Cube> + '_ {
        self.cubes
            .iter()
            .filter(move |cube| cube.cube_type() == cube_type)
    }

    fn expand(&self, cube_type: CubeType) -> BTreeSet<Minterm> {
        self.cubes_of(cube_type)
            .flat_map(|cube| cube.minterms())
            .collect()
    }

    /// Grow the cover to at least `min_inputs` inputs
    ///
    /// Existing cubes are padded with don't-cares. Labelled covers get
    /// generated labels for the new inputs; unlabelled covers stay unlabelled.
    fn grow_to_fit(&mut self, min_inputs: usize) {
        if min_inputs <= self.num_inputs {
            return;
        }
        self.num_inputs = min_inputs;

        for cube in &mut self.cubes {
            let mut new_inputs = cube.inputs.to_vec();
            new_inputs.resize(self.num_inputs, None);
            cube.inputs = new_inputs.into();
        }

        if !self.input_labels.is_empty() {
            self.input_labels.backfill_to(self.num_inputs);
        }
    }
}

impl Default for Cover {
    fn default() -> Self {
        Self::new(CoverType::F)
    }
}

#[cfg(test)]
mod tests;
