//! PLA (Programmable Logic Array) format support
//!
//! Single-output Berkeley PLA files are read into and written from
//! [`Cover`](crate::Cover) through the [`PLAReader`] and [`PLAWriter`] traits.
//!
//! ```text
//! .i 3
//! .o 1
//! .ilb a b c
//! .ob f
//! .p 2
//! 1-1 1
//! 01- 1
//! .e
//! ```

pub mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::cover::{CoverType, Cube, CubeType, DEFAULT_OUTPUT_LABEL};
use crate::error::{CoverError, PLAError, PLAReadError};

/// Internal trait for types that can be serialized to and deserialized from PLA format
///
/// It is the basis for the blanket `PLAReader` and `PLAWriter` implementations.
pub(crate) trait PLASerialisable: Sized {
    /// Associated type for iterating over cubes
    type CubesIter<'a>: Iterator<Item = &'a Cube>
    where
        Self: 'a;

    fn num_inputs(&self) -> usize;

    /// Iterate over all cubes, whatever their type
    fn internal_cubes_iter(&self) -> Self::CubesIter<'_>;

    /// Get input variable labels if available
    fn get_input_labels(&self) -> Option<&[Arc<str>]>;

    /// Get the output label if one was set
    fn get_output_label(&self) -> Option<Arc<str>>;

    /// Create an instance from parsed PLA components
    fn create_from_pla_parts(
        num_inputs: usize,
        input_labels: Option<Vec<Arc<str>>>,
        output_label: Option<Arc<str>>,
        cubes: Vec<Cube>,
        cover_type: CoverType,
    ) -> Result<Self, CoverError>;
}

/// Trait for types that support PLA serialization (writing)
///
/// Automatically implemented for all PLA-serialisable covers.
pub trait PLAWriter {
    /// Write this cover to PLA format using a writer
    ///
    /// Both `to_pla_string` and `to_pla_file` delegate to this method.
    fn write_pla<W: Write>(&self, writer: &mut W, pla_type: CoverType) -> io::Result<()>;

    /// Convert this cover to a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, CoverType, PLAWriter};
    ///
    /// let mut cover = Cover::new(CoverType::F);
    /// cover.add_cube(&[Some(true), None], Some(true));
    ///
    /// let pla = cover.to_pla_string(CoverType::F).unwrap();
    /// assert_eq!(pla, ".i 2\n.o 1\n.ob F\n.p 1\n1- 1\n.e\n");
    /// ```
    fn to_pla_string(&self, pla_type: CoverType) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer, pla_type)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write this cover to a PLA file
    fn to_pla_file<P: AsRef<Path>>(
        &self,
        path: P,
        pla_type: CoverType,
    ) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer, pla_type)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: PLASerialisable> PLAWriter for T {
    fn write_pla<W: Write>(
        &self,
        writer: &mut W,
        pla_type: CoverType,
    ) -> io::Result<()> {
        match pla_type {
            CoverType::FD => writeln!(writer, ".type fd")?,
            CoverType::FR => writeln!(writer, ".type fr")?,
            CoverType::FDR => writeln!(writer, ".type fdr")?,
            CoverType::F => {}
        }

        writeln!(writer, ".i {}", self.num_inputs())?;
        writeln!(writer, ".o 1")?;

        if let Some(labels) = self.get_input_labels() {
            write!(writer, ".ilb")?;
            for label in labels {
                write!(writer, " {}", label)?;
            }
            writeln!(writer)?;
        }

        let output_label = self
            .get_output_label()
            .unwrap_or_else(|| Arc::from(DEFAULT_OUTPUT_LABEL));
        writeln!(writer, ".ob {}", output_label)?;

        let filtered_cubes: Vec<&Cube> = self
            .internal_cubes_iter()
            .filter(|cube| match pla_type {
                CoverType::F => cube.cube_type == CubeType::F,
                CoverType::FD => cube.cube_type != CubeType::R,
                CoverType::FR => cube.cube_type != CubeType::D,
                CoverType::FDR => true,
            })
            .collect();

        writeln!(writer, ".p {}", filtered_cubes.len())?;

        for cube in filtered_cubes {
            let output = match cube.cube_type {
                CubeType::F => '1',
                CubeType::D => '2',
                CubeType::R => '0',
            };
            writeln!(writer, "{} {}", cube, output)?;
        }

        // ".e" for F-type, ".end" for FD/FR/FDR types
        match pla_type {
            CoverType::F => writeln!(writer, ".e")?,
            _ => writeln!(writer, ".end")?,
        }

        Ok(())
    }
}

/// Trait for types that support PLA deserialization (reading/parsing)
///
/// The convenience methods delegate to `from_pla_reader`.
pub trait PLAReader: Sized {
    /// Parse a cover from a PLA format reader
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse a cover from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::{Cover, PLAReader};
    ///
    /// let pla = ".i 2\n.o 1\n.p 2\n01 1\n11 -\n.e\n";
    /// let cover = Cover::from_pla_string(pla).unwrap();
    /// assert_eq!(cover.num_inputs(), 2);
    /// assert_eq!(cover.on_set_minterms().unwrap(), vec![1]);
    /// assert_eq!(cover.dont_care_minterms().unwrap(), vec![3]);
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load a cover from a PLA format file
    ///
    /// ```no_run
    /// use qm_logic::{Cover, PLAReader};
    ///
    /// let cover = Cover::from_pla_file("input.pla").unwrap();
    /// println!("Loaded {} inputs", cover.num_inputs());
    /// ```
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl<T: PLASerialisable> PLAReader for T {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut cubes = Vec::new();
        // FD by default: a '-' output is a don't-care
        let mut cover_type = CoverType::FD;
        let mut input_labels: Option<Vec<Arc<str>>> = None;
        let mut output_label: Option<Arc<str>> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let value = parts.get(1).copied().unwrap_or("");

                match parts.first().copied() {
                    Some(".i") => {
                        let n = value.parse().map_err(|_| PLAError::BadDirective {
                            line: line_number,
                            directive: ".i",
                            value: Arc::from(value),
                        })?;
                        num_inputs = Some(n);
                    }
                    Some(".o") => {
                        let n: usize =
                            value.parse().map_err(|_| PLAError::BadDirective {
                                line: line_number,
                                directive: ".o",
                                value: Arc::from(value),
                            })?;
                        if n != 1 {
                            return Err(PLAError::MultipleOutputs {
                                line: line_number,
                                count: n,
                            }
                            .into());
                        }
                    }
                    Some(".type") => {
                        cover_type = match value {
                            "f" => CoverType::F,
                            "fd" => CoverType::FD,
                            "fr" => CoverType::FR,
                            "fdr" => CoverType::FDR,
                            _ => {
                                return Err(PLAError::BadDirective {
                                    line: line_number,
                                    directive: ".type",
                                    value: Arc::from(value),
                                }
                                .into())
                            }
                        };
                    }
                    Some(".ilb") => {
                        let labels: Vec<Arc<str>> =
                            parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
                        if !labels.is_empty() {
                            input_labels = Some(labels);
                        }
                    }
                    Some(".ob") => {
                        if parts.len() > 2 {
                            return Err(PLAError::OutputLabelCount {
                                line: line_number,
                                count: parts.len() - 1,
                            }
                            .into());
                        }
                        if !value.is_empty() {
                            output_label = Some(Arc::from(value));
                        }
                    }
                    Some(".e") | Some(".end") => break,
                    Some(".p") => {}
                    Some(other) => debug!("Ignoring PLA directive {} on line {}", other, line_number),
                    None => {}
                }
                continue;
            }

            let (input_str, output_str) = split_cube_line(line, num_inputs);

            let ni = *num_inputs.get_or_insert(input_str.chars().count());
            if input_str.chars().count() != ni {
                return Err(PLAError::RowWidth {
                    line: line_number,
                    expected: ni,
                    actual: input_str.chars().count(),
                }
                .into());
            }
            let output_len = output_str.chars().count();
            if output_len != 1 {
                return Err(PLAError::MultipleOutputs {
                    line: line_number,
                    count: output_len,
                }
                .into());
            }

            let mut inputs = Vec::with_capacity(ni);
            for (column, character) in (1..).zip(input_str.chars()) {
                inputs.push(match character {
                    '0' => Some(false),
                    '1' => Some(true),
                    '-' | '~' | 'x' | 'X' => None,
                    _ => {
                        return Err(PLAError::BadInputCharacter {
                            line: line_number,
                            column,
                            character,
                        }
                        .into())
                    }
                });
            }

            // '1'/'4' ON, '0'/'3' OFF, '-'/'2' don't-care, '~' no role.
            // A role the cover type does not hold drops the row.
            let cube_type = match output_str.chars().next() {
                Some('1' | '4') if cover_type.has_f() => Some(CubeType::F),
                Some('0' | '3') if cover_type.has_r() => Some(CubeType::R),
                Some('-' | '2') if cover_type.has_d() => Some(CubeType::D),
                Some('1' | '4' | '0' | '3' | '-' | '2' | '~') => None,
                Some(character) => {
                    return Err(PLAError::BadOutputCharacter {
                        line: line_number,
                        character,
                    }
                    .into())
                }
                None => None,
            };

            if let Some(cube_type) = cube_type {
                cubes.push(Cube::new(&inputs, cube_type));
            }
        }

        let num_inputs = num_inputs.ok_or(PLAError::NoInputCount)?;

        if let Some(labels) = &input_labels {
            if labels.len() != num_inputs {
                return Err(PLAError::InputLabelCount {
                    expected: num_inputs,
                    actual: labels.len(),
                }
                .into());
            }
        }

        if cubes.is_empty() {
            warn!("PLA has no cubes contributing to the function");
        }
        debug!(
            "Read PLA: {} input(s), {} cube(s), type {:?}",
            num_inputs,
            cubes.len(),
            cover_type
        );

        Ok(T::create_from_pla_parts(
            num_inputs,
            input_labels,
            output_label,
            cubes,
            cover_type,
        )?)
    }
}

/// Split a cube line into its input and output parts
///
/// Inputs and outputs are normally separated by whitespace; a `|` separator
/// is also accepted. Once the input width is known, column-formatted inputs
/// (with embedded spaces) are joined back together.
fn split_cube_line(line: &str, num_inputs: Option<usize>) -> (String, String) {
    let (input_part, output_part) = match line.split_once('|') {
        Some((inputs, outputs)) => (inputs.to_string(), outputs.to_string()),
        None => {
            let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            match num_inputs {
                Some(ni) if compact.chars().count() > ni => {
                    let split = compact
                        .char_indices()
                        .nth(ni)
                        .map_or(compact.len(), |(i, _)| i);
                    let (inputs, outputs) = compact.split_at(split);
                    (inputs.to_string(), outputs.to_string())
                }
                _ => {
                    let mut parts = line.split_whitespace();
                    let inputs = parts.next().unwrap_or("").to_string();
                    let outputs: String = parts.collect();
                    (inputs, outputs)
                }
            }
        }
    };
    let strip = |s: String| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    (strip(input_part), strip(output_part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cover;

    #[test]
    fn test_split_cube_line() {
        assert_eq!(
            split_cube_line("01- 1", None),
            ("01-".to_string(), "1".to_string())
        );
        assert_eq!(
            split_cube_line("0 1 - 1", Some(3)),
            ("01-".to_string(), "1".to_string())
        );
        assert_eq!(
            split_cube_line("01-|1", None),
            ("01-".to_string(), "1".to_string())
        );
        // Too short for the declared width: reported as a dimension error later
        assert_eq!(
            split_cube_line("01 1", Some(3)),
            ("01".to_string(), "1".to_string())
        );
    }

    #[test]
    fn test_read_basic() {
        let pla = ".i 3\n.o 1\n.ilb a b c\n.ob f\n.p 2\n1-1 1\n01- 1\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert_eq!(cover.num_inputs(), 3);
        assert_eq!(cover.num_cubes(), 2);
        assert_eq!(cover.input_labels()[1].as_ref(), "b");
        assert_eq!(cover.output_label().as_ref(), "f");
        assert_eq!(cover.cover_type(), CoverType::FD);
        assert_eq!(cover.on_set_minterms().unwrap(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_infer_dimensions_from_first_cube() {
        let cover = Cover::from_pla_string("0-1 1\n111 1\n").unwrap();
        assert_eq!(cover.num_inputs(), 3);
        assert_eq!(cover.num_cubes(), 2);
    }

    #[test]
    fn test_dont_care_only_with_d_type() {
        let pla = ".type f\n.i 2\n.o 1\n00 1\n11 -\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert!(cover.dont_care_minterms().unwrap().is_empty());

        let pla = ".i 2\n.o 1\n00 1\n11 2\n01 ~\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert_eq!(cover.dont_care_minterms().unwrap(), vec![3]);
        assert_eq!(cover.on_set_minterms().unwrap(), vec![0]);
    }

    #[test]
    fn test_fr_type_unspecified_points_are_dont_cares() {
        let pla = ".type fr\n.i 2\n.o 1\n00 1\n11 0\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        assert_eq!(cover.on_set_minterms().unwrap(), vec![0]);
        assert_eq!(cover.dont_care_minterms().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_multiple_outputs_rejected() {
        let err = Cover::from_pla_string(".i 2\n.o 2\n01 11\n.e\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::MultipleOutputs { line: 2, count: 2 })
        ));
        let err = Cover::from_pla_string("# two outputs\n01 11\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::MultipleOutputs { line: 2, count: 2 })
        ));
    }

    #[test]
    fn test_invalid_characters() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n0a 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::BadInputCharacter {
                line: 3,
                column: 2,
                character: 'a'
            })
        ));
        let err = Cover::from_pla_string(".i 2\n.o 1\n01 z\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::BadOutputCharacter {
                line: 3,
                character: 'z'
            })
        ));
    }

    #[test]
    fn test_wrong_width_rejected() {
        let err = Cover::from_pla_string(".i 3\n.o 1\n01 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::RowWidth {
                line: 3,
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_label_errors() {
        let err = Cover::from_pla_string(".i 2\n.o 1\n.ilb a\n01 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::InputLabelCount {
                expected: 2,
                actual: 1
            })
        ));
        let err = Cover::from_pla_string(".i 2\n.o 1\n.ob f g\n01 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::OutputLabelCount { line: 3, count: 2 })
        ));
        let err = Cover::from_pla_string(".i 2\n.o 1\n.ilb a a\n01 1\n").unwrap_err();
        assert!(matches!(err, PLAReadError::Cover(CoverError::DuplicateLabel { .. })));
    }

    #[test]
    fn test_missing_dimensions() {
        let err = Cover::from_pla_string("# nothing here\n.e\n").unwrap_err();
        assert!(matches!(err, PLAReadError::Format(PLAError::NoInputCount)));
    }

    #[test]
    fn test_bad_directive_values() {
        let err = Cover::from_pla_string(".i three\n.o 1\n").unwrap_err();
        assert!(matches!(
            err,
            PLAReadError::Format(PLAError::BadDirective { line: 1, directive: ".i", .. })
        ));
        let err = Cover::from_pla_string(".i 2\n.o 1\n.type fx\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed PLA: line 3: cannot parse '.type fx'"
        );
    }

    #[test]
    fn test_missing_output_label_written_as_f() {
        let cover = Cover::from_pla_string(".i 1\n.o 1\n1 1\n.e\n").unwrap();
        let pla = cover.to_pla_string(CoverType::F).unwrap();
        assert_eq!(pla, ".i 1\n.o 1\n.ob F\n.p 1\n1 1\n.e\n");
    }

    #[test]
    fn test_write_fd_type() {
        let mut cover = Cover::with_labels(CoverType::FD, &["a", "b"], "out").unwrap();
        cover.add_cube(&[Some(false), Some(true)], Some(true));
        cover.add_cube(&[Some(true), Some(true)], None);
        let pla = cover.to_pla_string(CoverType::FD).unwrap();
        assert_eq!(
            pla,
            ".type fd\n.i 2\n.o 1\n.ilb a b\n.ob out\n.p 2\n01 1\n11 2\n.end\n"
        );

        // F output drops the don't-care rows
        let pla = cover.to_pla_string(CoverType::F).unwrap();
        assert!(pla.contains(".p 1\n01 1\n.e\n"));
    }

    #[test]
    fn test_read_write_preserves_function() {
        let pla = ".i 3\n.o 1\n.ilb a b c\n.ob f\n1-1 1\n01- 1\n000 -\n.e\n";
        let cover = Cover::from_pla_string(pla).unwrap();
        let written = cover.to_pla_string(CoverType::FD).unwrap();
        let reread = Cover::from_pla_string(&written).unwrap();
        assert_eq!(reread.on_set_minterms().unwrap(), cover.on_set_minterms().unwrap());
        assert_eq!(
            reread.dont_care_minterms().unwrap(),
            cover.dont_care_minterms().unwrap()
        );
        assert_eq!(reread.input_labels(), cover.input_labels());
    }
}
