//! Build benchmarks — tree construction from template sets.

use trellis::PathTree;

fn main() {
    divan::main();
}

fn templates(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("/api/v{}/resource{}/:id/detail", i % 3, i))
        .collect()
}

#[divan::bench(args = [10, 100, 1000])]
fn insert_templates(bencher: divan::Bencher, n: usize) {
    let templates = templates(n);
    bencher.bench_local(|| {
        let mut tree = PathTree::new();
        for (i, t) in templates.iter().enumerate() {
            tree.add(t, i);
        }
        tree
    });
}

#[divan::bench]
fn overwrite_same_template(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut tree = PathTree::new();
        for i in 0..100 {
            tree.add("/users/:id", i);
        }
        tree
    });
}
