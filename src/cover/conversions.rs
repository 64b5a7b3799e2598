//! Trait implementations for Cover
//!
//! PLA I/O support and conversions from minimization results.

use std::sync::Arc;

use super::cubes::Cube;
use super::error::CoverError;
use super::labels::LabelManager;
use super::{Cover, CoverType};
use crate::petrick::MinimalCover;

// Implement PLASerialisable for Cover (used for PLA I/O)
impl crate::pla::PLASerialisable for Cover {
    type CubesIter<'a> = std::slice::Iter<'a, Cube>;

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn internal_cubes_iter(&self) -> Self::CubesIter<'_> {
        self.cubes.iter()
    }

    fn get_input_labels(&self) -> Option<&[Arc<str>]> {
        if self.input_labels.is_empty() {
            None
        } else {
            Some(self.input_labels.as_slice())
        }
    }

    fn get_output_label(&self) -> Option<Arc<str>> {
        self.output_label.clone()
    }

    fn create_from_pla_parts(
        num_inputs: usize,
        input_labels: Option<Vec<Arc<str>>>,
        output_label: Option<Arc<str>>,
        cubes: Vec<Cube>,
        cover_type: CoverType,
    ) -> Result<Self, CoverError> {
        let input_labels = match input_labels {
            Some(labels) => LabelManager::from_labels(labels)?,
            None => LabelManager::new(),
        };
        Ok(Cover {
            num_inputs,
            input_labels,
            output_label,
            cubes,
            cover_type,
        })
    }
}

/// Convert a minimal cover into an unlabelled F-type [`Cover`]
///
/// # Examples
///
/// ```
/// use qm_logic::{exact, Cover, MinimizerConfig};
///
/// let result = exact::minimize(3, &[1, 3, 5, 7], &[], &MinimizerConfig::default()).unwrap();
/// let cover = Cover::from(result.cover());
/// assert_eq!(cover.num_inputs(), 3);
/// assert_eq!(cover.num_cubes(), 1);
/// ```
impl From<&MinimalCover> for Cover {
    fn from(minimal: &MinimalCover) -> Self {
        let num_inputs = minimal.iter().map(|i| i.num_vars()).max().unwrap_or(0);
        Cover::new(CoverType::F)
            .with_num_inputs(num_inputs)
            .with_implicants(minimal)
    }
}
