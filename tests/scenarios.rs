//! End-to-end scenarios through the facade crate

use approx::assert_relative_eq;
use na_stats::prelude::*;

#[test]
fn test_integer_sum_scenarios() {
    assert_eq!(sum([1, 2, 3]), 6);
    assert_eq!(sum([1, i32::na(), 3]), i32::na());
}

#[test]
fn test_integer_prod_scenario() {
    assert_eq!(prod([2, 3, 4]), 24);
}

#[test]
fn test_real_sqrt_scenario() {
    let mut out = Vec::new();
    sqrt([1.0, f64::na(), 4.0], &mut out);
    assert_eq!(out.len(), 3);
    assert_relative_eq!(out[0], 1.0);
    assert!(out[1].is_na());
    assert_relative_eq!(out[2], 2.0);
}

#[test]
fn test_host_adapter_from_options() {
    // A host with its own missing encoding translates before calling in
    let host: Vec<Option<i32>> = vec![Some(4), None, Some(2)];
    let encoded: Vec<i32> = host.iter().map(|&v| i32::from_option(v)).collect();

    assert!(any_na(encoded.iter().copied()));
    assert!(encoded.na_sum().is_na());

    let clean: Vec<i32> = host.iter().flatten().copied().collect();
    assert_eq!(sum_nona(clean.iter().copied()), 6);
}

#[test]
fn test_configured_reducer() -> anyhow::Result<()> {
    let convention: EmptyProduct = "zero".parse()?;
    let reducer = Reducer::new(ReduceConfig::default().with_empty_product(convention));
    assert_eq!(reducer.prod(Vec::<f64>::new()), 0.0);
    assert_eq!(prod(Vec::<f64>::new()), 1.0);
    Ok(())
}

#[test]
fn test_kinds_are_exposed() {
    assert_eq!(<f64 as Element>::KIND, ElementKind::Real);
    assert_eq!(<i32 as Element>::KIND.to_string(), "integer");
}

#[test]
fn test_error_reaches_facade() {
    let mut out = [0.0; 2];
    let err = na_stats::transform_slice(&[1.0], &mut out, f64::ln).unwrap_err();
    assert!(matches!(err, na_stats::Error::LengthMismatch { .. }));
}
