use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use subway_lib::{build_graph, load_network, Line, Network, PathFinder, Station};

/// Side length of the synthetic grid network.
const GRID: usize = 40;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

fn grid_station(row: usize, column: usize) -> Station {
    Station::new(format!("S{row}-{column}"))
}

/// Horizontal and vertical lines crossing at every grid point.
fn grid_lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(GRID * 2);
    for row in 0..GRID {
        let mut line = Line::of(
            format!("H{row}"),
            "gray",
            grid_station(row, 0),
            grid_station(row, 1),
            1 + (row as u64 % 3),
        )
        .expect("valid section");
        for column in 1..GRID - 1 {
            line.register_section(
                grid_station(row, column),
                grid_station(row, column + 1),
                1 + ((row + column) as u64 % 5),
            )
            .expect("valid section");
        }
        lines.push(line);
    }
    for column in 0..GRID {
        let mut line = Line::of(
            format!("V{column}"),
            "gray",
            grid_station(0, column),
            grid_station(1, column),
            2,
        )
        .expect("valid section");
        for row in 1..GRID - 1 {
            line.register_section(
                grid_station(row, column),
                grid_station(row + 1, column),
                1 + ((row * column) as u64 % 4),
            )
            .expect("valid section");
        }
        lines.push(line);
    }
    lines
}

static NETWORK: Lazy<Network> = Lazy::new(|| load_network(&fixture_path()).expect("fixture loads"));
static GRID_LINES: Lazy<Vec<Line>> = Lazy::new(grid_lines);
static GRID_FINDER: Lazy<PathFinder> = Lazy::new(|| PathFinder::new(&GRID_LINES));

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;
    let finder = network.path_finder();
    let daerim = Station::new("Daerim");
    let mullae = Station::new("Mullae");

    c.bench_function("fixture_daerim_mullae", |b| {
        b.iter(|| {
            let path = finder.find_path(&daerim, &mullae).expect("route exists");
            black_box(path.weight())
        });
    });

    c.bench_function("grid_build_graph", |b| {
        let lines = &*GRID_LINES;
        b.iter(|| black_box(build_graph(lines).edge_count()));
    });

    let grid = &*GRID_FINDER;
    let corner = grid_station(0, 0);
    let opposite = grid_station(GRID - 1, GRID - 1);
    c.bench_function("grid_corner_to_corner", |b| {
        b.iter(|| {
            let path = grid.find_path(&corner, &opposite).expect("route exists");
            black_box(path.length())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
