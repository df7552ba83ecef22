use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typed_list::{boxed::BoxedList, heapless::FixedList, tagged::TypedList};

fn criterion_benchmark(criterion: &mut Criterion) {
    criterion.bench_function("FixedList<i32, 64>::contains", |bencher| {
        let slots: [i32; 64] = core::array::from_fn(|i| i as i32);
        let list = FixedList::from_parts(slots, 64).unwrap();

        bencher.iter(|| black_box(list.contains(black_box(63))));
    });

    criterion.bench_function("FixedList<i32, 64>::delete_at", |bencher| {
        let slots: [i32; 64] = core::array::from_fn(|i| i as i32);

        bencher.iter(|| {
            let mut list = FixedList::from_parts(slots, 64).unwrap();
            list.delete_at(black_box(0));
            black_box(list)
        });
    });

    criterion.bench_function("BoxedList<u8>::contains", |bencher| {
        let mut bytes = vec![b'a'; 255];
        bytes.push(0);
        let list = BoxedList::from_parts(bytes.into_boxed_slice(), 255).unwrap();

        bencher.iter(|| black_box(list.contains(black_box(b'z'))));
    });

    for n in 6..13 {
        let count: usize = 1 << n;

        criterion.bench_with_input(
            BenchmarkId::new("BoxedList<i64>::delete_at", count),
            &count,
            |b, count| {
                let list = BoxedList::from((0..*count as i64).collect::<Vec<i64>>());

                b.iter(|| {
                    let mut list = list.clone();
                    list.delete_at(0);
                    black_box(list)
                });
            },
        );

        criterion.bench_with_input(
            BenchmarkId::new("TypedList/8::contains", count),
            &count,
            |b, count| {
                let bytes: Vec<u8> = (0..*count as i64).flat_map(i64::to_ne_bytes).collect();
                let list = TypedList::from_ne_bytes(&bytes, *count, 8).unwrap();

                b.iter(|| black_box(list.contains(black_box(-1))));
            },
        );

        criterion.bench_with_input(
            BenchmarkId::new("TypedList/4::clear", count),
            &count,
            |b, count| {
                let bytes: Vec<u8> = (0..*count as i32).flat_map(i32::to_ne_bytes).collect();
                let list = TypedList::from_ne_bytes(&bytes, *count, 4).unwrap();

                b.iter(|| {
                    let mut list = list.clone();
                    list.clear();
                    black_box(list)
                });
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
