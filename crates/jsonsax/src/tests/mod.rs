

/// Number of quickcheck cases; CI runs ten times as many.
fn quickcheck_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
