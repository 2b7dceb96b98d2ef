//! Benchmark suite for the settlement matching loop
//!
//! Measures the greedy matching algorithm at increasing account counts
//! using the divan benchmarking framework. The priority-queue
//! formulation should scale as O(N log N).
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use group_settler::core::{NoopObserver, Settler};
use group_settler::types::AccountBalance;
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

/// Build a zero-sum balance set of `n` accounts
///
/// Deterministic pseudo-varied magnitudes; the last account absorbs the
/// remainder so credits and debits balance exactly.
fn balances(n: usize) -> Vec<AccountBalance> {
    let mut entries = Vec::with_capacity(n);
    let mut total = Decimal::ZERO;

    for i in 0..n - 1 {
        let magnitude = Decimal::from((i % 97 + 1) as i64);
        let credit = if i % 2 == 0 { magnitude } else { -magnitude };
        total += credit;
        entries.push(AccountBalance::new(format!("account-{:06}", i), credit));
    }
    entries.push(AccountBalance::new("absorber", -total));

    entries
}

#[divan::bench(args = [100, 1_000, 10_000, 100_000])]
fn settle_accounts(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| balances(n))
        .bench_values(|snapshot| {
            Settler::from_balances(&snapshot)
                .settle(&mut NoopObserver)
                .expect("balanced input should settle")
        });
}
