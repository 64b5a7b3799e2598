//! Tests for the cover module

use super::*;
use crate::error::MinimizationError;
use crate::pla::{PLAReader, PLAWriter};
use crate::MinimizerConfig;

#[test]
fn test_cover_creation() {
    let cover = Cover::new(CoverType::F);
    assert_eq!(cover.num_inputs(), 0);
    assert_eq!(cover.num_cubes(), 0);
    assert!(cover.input_labels().is_empty());
    assert_eq!(cover.output_label().as_ref(), "F");
    assert!(!cover.has_output_label());
}

#[test]
fn test_cover_with_labels() {
    let cover = Cover::with_labels(CoverType::F, &["a", "b", "c"], "out").unwrap();
    assert_eq!(cover.num_inputs(), 3);
    assert_eq!(cover.input_labels()[0].as_ref(), "a");
    assert_eq!(cover.input_labels()[2].as_ref(), "c");
    assert_eq!(cover.input_position("b"), Some(1));
    assert_eq!(cover.output_label().as_ref(), "out");
}

#[test]
fn test_with_labels_rejects_duplicates() {
    let err = Cover::with_labels(CoverType::F, &["a", "a"], "out").unwrap_err();
    assert!(matches!(err, CoverError::DuplicateLabel { .. }));
}

#[test]
fn test_set_input_labels() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true), None], Some(true));
    let err = cover.set_input_labels(&["a"]).unwrap_err();
    assert_eq!(
        err,
        CoverError::LabelCountMismatch {
            expected: 2,
            actual: 1
        }
    );
    cover.set_input_labels(&["a", "b"]).unwrap();
    assert_eq!(cover.input_position("b"), Some(1));
}

#[test]
fn test_add_cube_by_output_role() {
    let mut cover = Cover::new(CoverType::FDR);
    cover.add_cube(&[Some(false), Some(true)], Some(true));
    cover.add_cube(&[Some(true), Some(true)], None);
    cover.add_cube(&[Some(false), Some(false)], Some(false));
    let types: Vec<CubeType> = cover.cubes().map(|c| c.cube_type()).collect();
    assert_eq!(types, vec![CubeType::F, CubeType::D, CubeType::R]);
    assert_eq!(cover.num_cubes(), 3);

    // An F cover ignores don't-care and off-set rows
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true)], None);
    cover.add_cube(&[Some(true)], Some(false));
    assert_eq!(cover.num_cubes(), 0);
    assert_eq!(cover.num_inputs(), 0);
}

#[test]
fn test_dynamic_growth() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(true), Some(false)], Some(true));
    assert_eq!(cover.num_inputs(), 2);

    cover.add_cube(&[Some(true), None, Some(false), None, Some(true)], Some(true));
    assert_eq!(cover.num_inputs(), 5);

    // Existing cubes are padded with don't-cares
    let first = cover.cubes().next().unwrap();
    assert_eq!(first.inputs().len(), 5);
    assert_eq!(first.inputs()[4], None);

    // Labels should NOT be auto-generated for unlabelled covers
    assert!(cover.input_labels().is_empty());
}

#[test]
fn test_dynamic_growth_backfills_labels() {
    let mut cover = Cover::with_labels(CoverType::F, &["a", "x2"], "f").unwrap();
    cover.add_cube(&[Some(true), None, None, Some(true)], Some(true));
    let names: Vec<&str> = cover.input_labels().iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, vec!["a", "x2", "x3", "x4"]);
}

#[test]
fn test_narrow_cube_is_padded() {
    let mut cover = Cover::with_labels(CoverType::F, &["a", "b", "c"], "f").unwrap();
    cover.add_cube(&[Some(true)], Some(true));
    assert_eq!(cover.on_set_minterms().unwrap(), vec![4, 5, 6, 7]);
}

#[test]
fn test_minterm_extraction() {
    let mut cover = Cover::new(CoverType::FD);
    cover.add_cube(&[Some(false), None, Some(true)], Some(true));
    cover.add_cube(&[Some(true), Some(true), None], None);
    assert_eq!(cover.on_set_minterms().unwrap(), vec![1, 3]);
    assert_eq!(cover.dont_care_minterms().unwrap(), vec![6, 7]);
}

#[test]
fn test_fr_dont_cares_are_unspecified_points() {
    let mut cover = Cover::new(CoverType::FR);
    cover.add_cube(&[Some(false), None], Some(true));
    cover.add_cube(&[Some(true), Some(true)], Some(false));
    assert_eq!(cover.on_set_minterms().unwrap(), vec![0, 1]);
    assert_eq!(cover.dont_care_minterms().unwrap(), vec![2]);
}

#[test]
fn test_literal_count() {
    let mut cover = Cover::new(CoverType::FD);
    cover.add_cube(&[Some(false), None, Some(true)], Some(true));
    cover.add_cube(&[Some(true), Some(true), Some(true)], Some(true));
    cover.add_cube(&[Some(true), Some(true), None], None);
    // D cubes carry no literal cost
    assert_eq!(cover.literal_count(), 5);
}

#[test]
fn test_minimize_xor_unchanged() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[Some(false), Some(true)], Some(true));
    cover.add_cube(&[Some(true), Some(false)], Some(true));
    let minimized = cover.minimize().unwrap();
    // XOR cannot be minimized
    assert_eq!(minimized.num_cubes(), 2);
    assert_eq!(minimized.literal_count(), 4);
}

#[test]
fn test_minimize_uses_dont_cares() {
    let mut cover = Cover::with_labels(CoverType::FD, &["a", "b", "c", "d"], "f").unwrap();
    for m in [1u64, 3, 7, 11, 15] {
        let inputs: Vec<Option<bool>> = (0..4).map(|p| Some((m >> (3 - p)) & 1 == 1)).collect();
        cover.add_cube(&inputs, Some(true));
    }
    for m in [5u64, 9] {
        let inputs: Vec<Option<bool>> = (0..4).map(|p| Some((m >> (3 - p)) & 1 == 1)).collect();
        cover.add_cube(&inputs, None);
    }

    let minimized = cover.minimize().unwrap();
    assert_eq!(minimized.cover_type(), CoverType::F);
    assert_eq!(minimized.num_cubes(), 2);
    assert_eq!(minimized.literal_count(), 4);
    assert_eq!(minimized.input_labels(), cover.input_labels());
    assert_eq!(minimized.output_label().as_ref(), "f");
}

#[test]
fn test_minimize_with_trace() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&[None, None], Some(true));
    let (minimized, result) = cover
        .minimize_with_trace(&MinimizerConfig::default())
        .unwrap();
    assert_eq!(minimized.num_cubes(), 1);
    assert_eq!(result.prime_implicants().len(), 1);
    assert_eq!(result.trace().essentials.len(), 1);
}

#[test]
fn test_minimize_empty_cover() {
    let cover = Cover::with_labels(CoverType::F, &["a", "b"], "f").unwrap();
    let minimized = cover.minimize().unwrap();
    assert_eq!(minimized.num_cubes(), 0);
    assert_eq!(minimized.num_inputs(), 2);
}

#[test]
fn test_minimize_too_wide_cover() {
    let mut cover = Cover::new(CoverType::F);
    cover.add_cube(&vec![None; 64], Some(true));
    let err = cover.minimize().unwrap_err();
    assert!(matches!(err, MinimizationError::Dimension(_)));
}

#[test]
fn test_pla_minimize_roundtrip() {
    let pla = ".i 3\n.o 1\n.ilb a b c\n.ob f\n.p 4\n001 1\n011 1\n101 1\n111 1\n.e\n";
    let cover = Cover::from_pla_string(pla).unwrap();
    let minimized = cover.minimize().unwrap();
    let output = minimized.to_pla_string(CoverType::F).unwrap();
    assert_eq!(output, ".i 3\n.o 1\n.ilb a b c\n.ob f\n.p 1\n--1 1\n.e\n");
}

#[test]
fn test_from_minimal_cover() {
    let result = crate::exact::minimize(2, &[1, 2], &[], &MinimizerConfig::default()).unwrap();
    let cover = Cover::from(result.cover());
    assert_eq!(cover.num_inputs(), 2);
    assert_eq!(cover.num_cubes(), 2);
    assert!(cover.input_labels().is_empty());
}
