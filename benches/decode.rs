use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;
use std::fmt::Write as _;

/// Writes a structured grid of `n*n*n` hexahedra in the MSH 4.1 format.
fn cube(n: usize) -> String {
    let side = n + 1;
    let node_count = side * side * side;
    let element_count = n * n * n;
    let node = |i: usize, j: usize, k: usize| 1 + i + side * (j + side * k);

    let mut s = String::from("$MeshFormat\n4.1 0 8\n$EndMeshFormat\n");
    writeln!(s, "$Nodes\n1 {node_count} 1 {node_count}\n3 1 0 {node_count}").unwrap();
    for tag in 1..=node_count {
        writeln!(s, "{tag}").unwrap();
    }
    for k in 0..side {
        for j in 0..side {
            for i in 0..side {
                let h = n as f64;
                writeln!(s, "{} {} {}", i as f64 / h, j as f64 / h, k as f64 / h).unwrap();
            }
        }
    }
    s.push_str("$EndNodes\n");

    writeln!(s, "$Elements\n1 {element_count} 1 {element_count}").unwrap();
    writeln!(s, "3 1 5 {element_count}").unwrap();
    let mut tag = 0;
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                tag += 1;
                writeln!(
                    s,
                    "{tag} {} {} {} {} {} {} {} {}",
                    node(i, j, k),
                    node(i + 1, j, k),
                    node(i + 1, j + 1, k),
                    node(i, j + 1, k),
                    node(i, j, k + 1),
                    node(i + 1, j, k + 1),
                    node(i + 1, j + 1, k + 1),
                    node(i, j + 1, k + 1),
                )
                .unwrap();
            }
        }
    }
    s.push_str("$EndElements\n");
    s
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for n in [8, 16, 32] {
        let input = cube(n);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("lookup/{n}"), |b| {
            b.iter(|| msh_io::decode(black_box(input.as_bytes())).unwrap())
        });
        let options = msh_io::DecodeOptions {
            node_indexing: msh_io::NodeIndexing::Offset,
            ..msh_io::DecodeOptions::default()
        };
        group.bench_function(format!("offset/{n}"), |b| {
            b.iter(|| msh_io::decode_with(black_box(input.as_bytes()), &options).unwrap())
        });
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
