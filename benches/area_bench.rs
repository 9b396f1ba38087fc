use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fe_mesh2d::geometry::point::Point;
use fe_mesh2d::io::msh::{MshReader, MshWriter};
use fe_mesh2d::io::{MeshReader, MeshWriter};
use fe_mesh2d::mesh::TriangleMesh;
use fe_mesh2d::topology::triangle::Triangle;

/// Structured `n x n` grid of the unit square, two triangles per quad.
fn build_grid(n: usize) -> TriangleMesh {
    let h = 1.0 / n as f64;
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point::new(i as f64 * h, j as f64 * h));
        }
    }
    let idx = |i: usize, j: usize| j * (n + 1) + i;
    let mut cells = Vec::with_capacity(2 * n * n);
    for j in 0..n {
        for i in 0..n {
            cells.push(Triangle::new(idx(i, j), idx(i + 1, j), idx(i + 1, j + 1)));
            cells.push(Triangle::new(idx(i, j), idx(i + 1, j + 1), idx(i, j + 1)));
        }
    }
    TriangleMesh::from_parts(vertices, cells).expect("grid indices in range")
}

fn bench_areas(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_queries");

    for &n in &[32usize, 128usize] {
        let mesh = build_grid(n);

        group.bench_with_input(BenchmarkId::new("total_area", n), &n, |b, _| {
            b.iter(|| black_box(mesh.total_area().expect("valid mesh")));
        });

        group.bench_with_input(BenchmarkId::new("det_j_loop", n), &n, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for cell in 0..mesh.get_ncel() {
                    acc += mesh.det_j_affine_transform(cell).expect("valid cell");
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mesh = build_grid(128);
    let mut text = Vec::new();
    MshWriter.write(&mut text, &mesh).expect("serialize grid");

    c.bench_function("msh_parse_grid_128", |b| {
        b.iter(|| black_box(MshReader.read(text.as_slice()).expect("parse grid")));
    });
}

criterion_group!(benches, bench_areas, bench_parse);
criterion_main!(benches);
