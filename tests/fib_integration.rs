//! Integration tests for the memoizing Fibonacci evaluator.

use quartet::fib::Fibonacci;

/// F(0)..=F(30).
const FIB_TABLE: [u128; 31] = [
    0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765,
    10946, 17711, 28657, 46368, 75025, 121393, 196418, 317811, 514229, 832040,
];

#[test]
fn matches_closed_form_values_up_to_30() {
    for (n, expected) in FIB_TABLE.iter().enumerate() {
        // Fresh instance per index: correctness must not depend on warmup.
        let mut fib = Fibonacci::new();
        assert_eq!(fib.evaluate(n as i64), *expected, "fib({n})");
    }

    // And the same values from one shared cache.
    let mut fib = Fibonacci::new();
    for (n, expected) in FIB_TABLE.iter().enumerate() {
        assert_eq!(fib.evaluate(n as i64), *expected, "fib({n}) warm");
    }
}

#[test]
fn negative_indices_clamp_to_zero_without_touching_counters() {
    let mut fib = Fibonacci::new();
    fib.evaluate(12);
    let stats_before = fib.stats();

    for n in [-1, -5, -100, i64::MIN] {
        assert_eq!(fib.evaluate(n), 0);
    }

    assert_eq!(fib.stats(), stats_before);
}

#[test]
fn instances_are_fully_isolated() {
    let mut fib1 = Fibonacci::new();
    let mut fib2 = Fibonacci::new();

    fib1.evaluate(10);

    assert!(fib1.is_cached(10));
    assert!(!fib2.is_cached(10));
    assert_eq!(fib2.cache_hits(), 0);
    assert_eq!(fib2.cache_misses(), 0);
}

#[test]
fn every_warm_index_is_exactly_one_hit() {
    let mut fib = Fibonacci::new();
    fib.evaluate(20);

    for n in 2..=20 {
        let hits_before = fib.cache_hits();
        let misses_before = fib.cache_misses();

        fib.evaluate(n);

        assert_eq!(fib.cache_hits(), hits_before + 1, "fib({n})");
        assert_eq!(fib.cache_misses(), misses_before, "fib({n})");
    }
}

#[test]
fn extending_a_warm_cache_misses_only_the_new_indices() {
    let mut fib = Fibonacci::new();
    assert_eq!(fib.evaluate(20), 6765);
    let misses_after_warmup = fib.cache_misses();
    let hits_after_warmup = fib.cache_hits();

    assert_eq!(fib.evaluate(30), 832_040);

    // Indices 21..=30 are freshly computed; everything below is reused.
    assert_eq!(fib.cache_misses(), misses_after_warmup + 10);
    assert!(fib.cache_hits() > hits_after_warmup);

    // The previously cached prefix is still served from cache.
    let hits_before = fib.cache_hits();
    fib.evaluate(15);
    assert_eq!(fib.cache_hits(), hits_before + 1);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let mut fib = Fibonacci::new();
    for n in [0, 1, 2, 7, 20, 30] {
        let first = fib.evaluate(n);
        for _ in 0..3 {
            assert_eq!(fib.evaluate(n), first, "fib({n})");
        }
    }
}
