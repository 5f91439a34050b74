use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_treap::treap::TreapList;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 1_000;

fn build_list(rng: &mut XorShiftRng) -> TreapList<u32> {
    let mut list = TreapList::new();
    for i in 0..NUM_OF_OPERATIONS {
        let index = rng.gen_range(0, i + 1);
        list.insert(index, rng.next_u32());
    }
    list
}

fn bench_vec_insert(c: &mut Criterion) {
    c.bench_function("bench vec insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut vec = Vec::new();
            for i in 0..NUM_OF_OPERATIONS {
                let index = rng.gen_range(0, i + 1);
                vec.insert(index, rng.next_u32());
            }
        })
    });
}

fn bench_treap_list_insert(c: &mut Criterion) {
    c.bench_function("bench treap list insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            black_box(build_list(&mut rng));
        })
    });
}

fn bench_treap_list_get(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = build_list(&mut rng);

    c.bench_function("bench treap list get", move |b| {
        b.iter(|| {
            for index in 0..NUM_OF_OPERATIONS {
                black_box(list.get(index).ok());
            }
        })
    });
}

fn bench_vec_reverse_range(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut vec: Vec<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
    let ranges: Vec<(usize, usize)> = (0..NUM_OF_OPERATIONS)
        .map(|_| {
            let start = rng.gen_range(0, NUM_OF_OPERATIONS);
            (start, rng.gen_range(start, NUM_OF_OPERATIONS))
        })
        .collect();

    c.bench_function("bench vec reverse range", move |b| {
        b.iter(|| {
            for &(start, end) in &ranges {
                vec[start..=end].reverse();
            }
        })
    });
}

fn bench_treap_list_reverse_range(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = build_list(&mut rng);
    let ranges: Vec<(usize, usize)> = (0..NUM_OF_OPERATIONS)
        .map(|_| {
            let start = rng.gen_range(0, NUM_OF_OPERATIONS);
            (start, rng.gen_range(start, NUM_OF_OPERATIONS))
        })
        .collect();

    c.bench_function("bench treap list reverse range", move |b| {
        b.iter(|| {
            for &(start, end) in &ranges {
                black_box(list.reverse_range(start, end).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_vec_insert,
    bench_treap_list_insert,
    bench_treap_list_get,
    bench_vec_reverse_range,
    bench_treap_list_reverse_range,
);
criterion_main!(benches);
