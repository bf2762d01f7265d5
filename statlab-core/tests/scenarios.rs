//! Worked examples with exact expected values.

use rand::rngs::StdRng;
use rand::SeedableRng;
use statlab_core::order_stats::{
    five_number_summary_with_policy, interquartile_range_with_policy,
    lower_quartile_with_policy, upper_quartile_with_policy,
};
use statlab_core::{
    data_range, five_number_summary, interquartile_range, lower_quartile, maximum, mean, median,
    minimum, mode, random_sample, standard_deviation, upper_quartile, variance, QuartilePolicy,
    StatsError,
};

#[test]
fn four_consecutive_integers() {
    let d = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&d).unwrap(), 2.5);
    assert_eq!(median(&d).unwrap(), 2.5);
    assert_eq!(data_range(&d).unwrap(), 3.0);
    assert_eq!(minimum(&d).unwrap(), 1.0);
    assert_eq!(maximum(&d).unwrap(), 4.0);
}

#[test]
fn unimodal_dataset() {
    assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 4.0]).unwrap(), vec![2.0]);
}

#[test]
fn bimodal_tie() {
    assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]).unwrap(), vec![1.0, 2.0]);
}

#[test]
fn eight_values_quartiles_by_rank_interpolation() {
    let d = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    // positions 2.25, 4.5 and 6.75
    assert_eq!(lower_quartile(&d).unwrap(), 4.0);
    assert_eq!(median(&d).unwrap(), 4.5);
    assert_eq!(upper_quartile(&d).unwrap(), 6.5);
    assert_eq!(interquartile_range(&d).unwrap(), 2.5);
}

#[test]
fn single_value_dataset() {
    let d = [10.0];
    assert_eq!(median(&d).unwrap(), 10.0);
    assert_eq!(variance(&d).unwrap(), 0.0);
    assert_eq!(standard_deviation(&d).unwrap(), 0.0);
    assert_eq!(five_number_summary(&d).unwrap().as_array(), [10.0; 5]);
}

#[test]
fn single_value_dataset_under_strict_policy() {
    let d = [10.0];
    assert!(matches!(
        five_number_summary_with_policy(&d, QuartilePolicy::Strict),
        Err(StatsError::IndexOutOfRange { len: 1, .. })
    ));
    assert!(interquartile_range_with_policy(&d, QuartilePolicy::Strict).is_err());
}

#[test]
fn two_value_dataset_under_both_policies() {
    let d = [3.0, 1.0];
    assert_eq!(
        lower_quartile_with_policy(&d, QuartilePolicy::Clamp).unwrap(),
        1.0
    );
    assert_eq!(
        upper_quartile_with_policy(&d, QuartilePolicy::Clamp).unwrap(),
        3.0
    );
    assert_eq!(
        lower_quartile_with_policy(&d, QuartilePolicy::Strict),
        Err(StatsError::IndexOutOfRange {
            position: 0.75,
            len: 2
        })
    );
    assert_eq!(
        upper_quartile_with_policy(&d, QuartilePolicy::Strict),
        Err(StatsError::IndexOutOfRange {
            position: 2.25,
            len: 2
        })
    );
}

#[test]
fn from_three_values_up_both_policies_agree() {
    for n in 3..40 {
        let d: Vec<f64> = (0..n).map(|i| (i * 7 % 11) as f64).collect();
        assert_eq!(
            five_number_summary_with_policy(&d, QuartilePolicy::Clamp).unwrap(),
            five_number_summary_with_policy(&d, QuartilePolicy::Strict).unwrap(),
            "n = {n}"
        );
    }
}

#[test]
fn seeded_sample_larger_than_dataset() {
    let d = [1.0, 2.0, 3.0];
    let a = random_sample(&d, 5, &mut StdRng::seed_from_u64(2024)).unwrap();
    let b = random_sample(&d, 5, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(a.len(), 5);
    assert_eq!(a, b);
    assert!(a.iter().all(|v| d.contains(v)));
}

#[test]
fn every_statistic_rejects_empty_input() {
    let empty: [f64; 0] = [];
    assert!(mean(&empty).is_err());
    assert!(median(&empty).is_err());
    assert!(mode(&empty).is_err());
    assert!(data_range(&empty).is_err());
    assert!(interquartile_range(&empty).is_err());
    assert!(standard_deviation(&empty).is_err());
    assert!(five_number_summary(&empty).is_err());
    assert!(random_sample(&empty, 1, &mut StdRng::seed_from_u64(0)).is_err());
}
