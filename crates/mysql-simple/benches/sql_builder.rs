use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mysql_simple::{Direction, Where, ident, qb};

/// AND tree with `n` equality conditions and one nested OR group.
fn build_tree(n: usize) -> Where {
    let mut tree = Where::and();
    for i in 0..n {
        tree = tree.eq(&format!("col{i}"), i as i64);
    }
    tree.nest(Where::or().eq("status", "active").is_null("deleted_at"))
}

fn bench_where_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/where_build");

    for n in [1, 5, 10, 50, 100] {
        let tree = build_tree(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(tree.build()));
        });
    }

    group.finish();
}

fn bench_select_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/select_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let q = qb::select("t")
                    .columns(["id", "status"])
                    .where_clause(build_tree(n))
                    .order_by("id", Direction::Desc)
                    .limit_offset(20, 40)
                    .build();
                black_box(q)
            });
        });
    }

    group.finish();
}

fn bench_insert_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert_build");

    for n in [5, 20, 100] {
        let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &columns, |b, columns| {
            b.iter(|| {
                let q = columns
                    .iter()
                    .enumerate()
                    .fold(qb::insert("t"), |q, (i, col)| q.add(col, i as i64))
                    .build_on_duplicate_update();
                black_box(q)
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| black_box(Where::and().in_list("id", values.as_slice()).build()));
        });
    }

    group.finish();
}

fn bench_questions(c: &mut Criterion) {
    c.bench_function("sql_builder/questions_cached", |b| {
        b.iter(|| black_box(ident::questions(black_box(32))));
    });
}

criterion_group!(
    benches,
    bench_where_build,
    bench_select_build,
    bench_insert_build,
    bench_in_list,
    bench_questions
);
criterion_main!(benches);
