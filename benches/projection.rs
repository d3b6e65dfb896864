use budget_planner::core::services::SubmissionService;
use budget_planner::core::validation::ExpenseDraft;
use budget_planner::ledger::Ledger;
use budget_planner::presentation::Dashboard;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const CATEGORIES: [&str; 6] = ["Food", "Rent", "Transport", "Utilities", "Fun", "Health"];

fn build_sample_ledger(record_count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for idx in 0..record_count {
        let budgeted = 50.0 + (idx % 100) as f64;
        let spent = budgeted * if idx % 4 == 0 { 1.1 } else { 0.8 };
        ledger.append(CATEGORIES[idx % CATEGORIES.len()], budgeted, spent);
    }
    ledger
}

fn bench_projection(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(500));

    c.bench_function("dashboard_project_500", |b| {
        b.iter(|| {
            let dashboard = Dashboard::project(&ledger);
            black_box(dashboard);
        })
    });

    c.bench_function("totals_500", |b| b.iter(|| black_box(ledger.totals())));
}

fn bench_submission(c: &mut Criterion) {
    let draft = ExpenseDraft::new("Groceries", 120.0, 95.5);

    c.bench_function("submit_into_500", |b| {
        b.iter_batched(
            || build_sample_ledger(500),
            |mut ledger| {
                let receipt = SubmissionService::submit(&mut ledger, &draft).expect("valid draft");
                black_box(receipt);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_projection, bench_submission);
criterion_main!(benches);
