//! Cube types used in PLA covers
//!
//! - [`CubeType`]: distinguishes ON-set, don't-care and OFF-set cubes
//! - [`Cube`]: a single input pattern of a single-output cover

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::implicant::{expand_pattern, Implicant, Minterm};

/// Type of a cube (ON-set, DC-set, or OFF-set)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeType {
    /// ON-set cube (where the function is 1)
    F,
    /// Don't-care set cube (can be either 0 or 1)
    D,
    /// OFF-set cube (where the function is 0)
    R,
}

/// A cube in a single-output PLA cover
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    pub(crate) inputs: Arc<[Option<bool>]>,
    pub(crate) cube_type: CubeType,
}

impl Cube {
    pub(crate) fn new(inputs: &[Option<bool>], cube_type: CubeType) -> Self {
        Cube {
            inputs: inputs.into(),
            cube_type,
        }
    }

    /// Get the inputs of this cube
    ///
    /// Returns a slice where each element represents an input variable:
    /// - `Some(false)` - input must be 0
    /// - `Some(true)` - input must be 1
    /// - `None` - don't care (can be 0 or 1)
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Get the type of this cube (F, D, or R)
    pub fn cube_type(&self) -> CubeType {
        self.cube_type
    }

    /// Number of specified (non-`-`) inputs
    pub fn literal_count(&self) -> usize {
        self.inputs.iter().filter(|b| b.is_some()).count()
    }

    /// Every minterm matched by the input pattern
    ///
    /// Position 0 is the most significant bit. The caller must keep the
    /// width within [`MAX_VARIABLES`](crate::implicant::MAX_VARIABLES).
    pub(crate) fn minterms(&self) -> BTreeSet<Minterm> {
        expand_pattern(&self.inputs)
    }
}

impl From<&Implicant> for Cube {
    /// An ON-set cube with the implicant's pattern
    fn from(implicant: &Implicant) -> Self {
        Cube::new(implicant.bits(), CubeType::F)
    }
}

impl fmt::Display for Cube {
    /// PLA row notation for the inputs, e.g. `1-0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for input in self.inputs.iter() {
            let c = match input {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
