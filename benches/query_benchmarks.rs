//! Benchmark suite for the rate queries
//!
//! Measures the three queries and the raw load over a synthetic dataset using
//! the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use mejor_cdt::{Calculator, ProfitabilityCalculator, RateDataset, RateRecord};

fn main() {
    divan::main();
}

/// Synthetic offers spread over terms 1..=720 and amounts up to 100 million
fn synthetic_records(count: u64) -> Vec<RateRecord> {
    (0..count)
        .map(|i| {
            let min_term_days = (i % 360) as u32 + 1;
            let min_amount = (i % 50) as f64 * 1_000_000.0;
            RateRecord {
                id: i,
                date: "2023-10-02".to_string(),
                min_amount,
                max_amount: min_amount + 50_000_000.0,
                min_term_days,
                max_term_days: min_term_days + 360,
                rate: 0.08 + (i % 40) as f64 * 0.001,
                bank: format!("Banco {}", i % 25),
            }
        })
        .collect()
}

fn synthetic_csv(count: u64) -> String {
    let mut csv = String::from("consecutivo;fecha;minmonto;maxmonto;minplazo;maxplazo;tasa;banco\n");
    for i in 0..count {
        csv.push_str(&format!(
            "{};2023-10-02;{}.000.000;{}.000.000;{};{};{:.3};Banco {}\n",
            i,
            i % 50 + 1,
            i % 50 + 51,
            i % 360 + 1,
            i % 360 + 361,
            0.08 + (i % 40) as f64 * 0.001,
            i % 25
        ));
    }
    csv
}

#[divan::bench(args = [100, 10_000])]
fn load(bencher: divan::Bencher, count: u64) {
    let csv = synthetic_csv(count);
    bencher.bench(|| RateDataset::from_reader(csv.as_bytes(), b';').expect("Load failed"));
}

#[divan::bench(args = [100, 10_000])]
fn overdue_rates(bencher: divan::Bencher, count: u64) {
    let calculator = ProfitabilityCalculator::with_dataset(RateDataset::from_records(
        synthetic_records(count),
    ));
    bencher.bench(|| calculator.calculate_overdue_rates(180));
}

#[divan::bench(args = [100, 10_000])]
fn roi(bencher: divan::Bencher, count: u64) {
    let mut calculator = ProfitabilityCalculator::with_dataset(RateDataset::from_records(
        synthetic_records(count),
    ));
    bencher.bench_local(|| {
        calculator
            .calculate_roi(25_000_000.0, 180, None)
            .expect("Query failed")
    });
}

#[divan::bench(args = [100, 10_000])]
fn search_rate(bencher: divan::Bencher, count: u64) {
    let mut calculator = ProfitabilityCalculator::with_dataset(RateDataset::from_records(
        synthetic_records(count),
    ));
    bencher.bench_local(|| {
        calculator
            .search_rate(25_000_000.0, 180, None)
            .expect("Query failed")
    });
}
