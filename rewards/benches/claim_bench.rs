use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use grove_relics::RelicLedger;
use grove_rewards::{ClaimEngine, RarityTable, RewardPayload, SlotSelector};
use grove_sap::{Role, SapLedger};
use grove_types::{PlayerAddress, Timestamp};

fn bench_band_resolution(c: &mut Criterion) {
    let mut table = RarityTable::new();
    table.set_rarity_rolls(10, 15, 18, 20, 90, 100).unwrap();

    let mut group = c.benchmark_group("band_of");
    for roll in [0u16, 17, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(roll), &roll, |b, &roll| {
            b.iter(|| black_box(table.band_of(black_box(roll))));
        });
    }
    group.finish();
}

fn bench_full_claim(c: &mut Criterion) {
    let operator = PlayerAddress::new("grv_bench_operator");
    let payload = RewardPayload {
        kind: 0,
        amount: 100,
        item_ids: vec![],
    }
    .encode();

    c.bench_function("claim_currency", |b| {
        b.iter_batched(
            || {
                let mut sap = SapLedger::new();
                sap.grant_role(&operator, Role::GameContract);
                let mut engine = ClaimEngine::new(operator.clone());
                engine.set_rarity_rolls(10, 15, 18, 20, 90, 100).unwrap();
                for slot in 0..5 {
                    engine.set_reward(0, slot, &payload).unwrap();
                }
                (engine, sap, RelicLedger::new())
            },
            |(mut engine, mut sap, mut relics)| {
                let user = PlayerAddress::new("grv_bench_user");
                let _ = black_box(engine.claim(
                    &mut sap,
                    &mut relics,
                    &user,
                    black_box(999),
                    0,
                    SlotSelector::ByRarity,
                    black_box(100),
                    Timestamp::new(1000),
                ));
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_band_resolution, bench_full_claim);
criterion_main!(benches);
