use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bstree::{AnyTree, SearchTree, TreeKind};

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// kinds of BSTs before finishing the group.
///
/// Keys are inserted in ascending order, which is the worst case for the plain tree: it turns
/// into a chain as deep as it is long.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut AnyTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;

        for kind in [TreeKind::Plain, TreeKind::Balanced] {
            let mut tree = AnyTree::new(kind);
            for x in 0..num_nodes {
                tree.insert(x as i32);
            }
            let id = BenchmarkId::new(kind.as_str(), largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _result = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _result = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
