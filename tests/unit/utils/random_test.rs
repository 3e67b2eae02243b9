use super::*;

#[test]
fn can_reproduce_values_with_same_seed() {
    let first = DefaultRandom::with_seed(42);
    let second = DefaultRandom::with_seed(42);

    let firsts: Vec<i32> = (0..16).map(|_| first.uniform_int(0, 100)).collect();
    let seconds: Vec<i32> = (0..16).map(|_| second.uniform_int(0, 100)).collect();

    assert_eq!(firsts, seconds);
}

#[test]
fn can_return_weighted_index_proportionally() {
    let random = DefaultRandom::with_seed(1);
    let weights = &[100., 50., 20.];
    let experiments = 10000_usize;
    let total: Float = weights.iter().sum();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| {
        counter[random.weighted(weights)] += 1;
    });

    weights.iter().enumerate().for_each(|(index, weight)| {
        let actual_ratio = counter[index] as Float / experiments as Float;
        let expected_ratio = weight / total;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}

#[test]
fn can_handle_all_zero_weights() {
    let random = DefaultRandom::with_seed(7);

    let index = random.weighted(&[0., 0., 0.]);

    assert!(index < 3);
}

#[test]
fn can_keep_uniform_int_within_range() {
    let random = DefaultRandom::with_seed(3);

    (0..100).for_each(|_| {
        let value = random.uniform_int(2, 5);
        assert!((2..=5).contains(&value));
    });

    assert_eq!(random.uniform_int(7, 7), 7);
}
