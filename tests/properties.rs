use as_sssp::all_pairs::{CancelToken, all_pairs, all_pairs_cancellable};
use as_sssp::generator::{AsTopologyGenerator, TopologyGenerator};
use as_sssp::graph::WEIGHT_RANGE;
use as_sssp::weights::assign_weights;
use as_sssp::{DistanceMatrix, Graph, Session, SessionConfig, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generated(nodes: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let topology = AsTopologyGenerator::default()
        .generate(nodes, &mut rng)
        .unwrap();
    assign_weights(&topology, &mut rng).unwrap()
}

fn matrix_of(graph: &Graph, strategy: Strategy) -> DistanceMatrix {
    let maps = all_pairs(graph, strategy).unwrap();
    let order: Vec<usize> = graph.nodes().collect();
    DistanceMatrix::assemble(&maps, &order).unwrap()
}

const CASES: [(usize, u64); 5] = [(5, 1), (10, 2), (25, 3), (40, 4), (60, 5)];

#[test]
fn generated_graphs_are_valid() {
    for (nodes, seed) in CASES {
        let graph = generated(nodes, seed);
        assert_eq!(graph.node_count(), nodes);
        assert!(graph.is_connected());
        assert!(graph.edges().all(|(u, v, w)| u != v && WEIGHT_RANGE.contains(&w)));
    }
}

#[test]
fn symmetric_with_zero_diagonal() {
    for (nodes, seed) in CASES {
        let matrix = matrix_of(&generated(nodes, seed), Strategy::Scan);
        assert!(matrix.is_symmetric(), "{nodes} nodes, seed {seed}");
        for i in 0..nodes {
            assert_eq!(matrix.get(i, i), Some(0));
        }
        // connected, so every pair has a path
        assert!(matrix.unreachable_pairs().is_empty());
    }
}

#[test]
fn triangle_inequality() {
    for (nodes, seed) in CASES {
        let matrix = matrix_of(&generated(nodes, seed), Strategy::Heap);
        for i in 0..nodes {
            for j in 0..nodes {
                for k in 0..nodes {
                    let direct = matrix.get(i, j).unwrap();
                    let detour = matrix.get(i, k).unwrap() + matrix.get(k, j).unwrap();
                    assert!(direct <= detour, "d({i},{j}) > d({i},{k}) + d({k},{j})");
                }
            }
        }
    }
}

#[test]
fn distance_at_least_hop_count() {
    for (nodes, seed) in CASES {
        let graph = generated(nodes, seed);
        let matrix = matrix_of(&graph, Strategy::Scan);
        for i in graph.nodes() {
            let hops = graph.bfs_hops(i);
            for j in graph.nodes() {
                let distance = matrix.get(i, j).unwrap();
                let min_hops = hops[j].unwrap() as u64;
                assert!(distance >= min_hops);
                assert!(distance <= 99 * (nodes as u64 - 1));
            }
        }
    }
}

#[test]
fn adjacent_nodes_never_exceed_link_weight() {
    let graph = generated(40, 11);
    let matrix = matrix_of(&graph, Strategy::Scan);
    for (u, v, w) in graph.edges() {
        assert!(matrix.get(u, v).unwrap() <= u64::from(w));
    }
}

#[test]
fn strategies_agree() {
    for (nodes, seed) in CASES {
        let graph = generated(nodes, seed);
        assert_eq!(
            matrix_of(&graph, Strategy::Scan),
            matrix_of(&graph, Strategy::Heap)
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let graph = generated(30, 21);
    let first = matrix_of(&graph, Strategy::Scan);
    for _ in 0..3 {
        assert_eq!(matrix_of(&graph, Strategy::Scan), first);
    }
}

#[test]
fn parallel_and_sequential_sessions_agree() {
    let config = |parallel| SessionConfig {
        seed: Some(99),
        strategy: Strategy::Heap,
        parallel,
    };
    let mut sequential = Session::new(config(false));
    let mut parallel = Session::new(config(true));
    sequential.generate(35).unwrap();
    parallel.generate(35).unwrap();

    assert_eq!(
        sequential.distance_matrix().unwrap(),
        parallel.distance_matrix().unwrap()
    );
}

#[test]
fn cancellable_matches_plain() {
    let graph = generated(20, 8);
    let token = CancelToken::new();
    assert_eq!(
        all_pairs_cancellable(&graph, Strategy::Scan, &token).unwrap(),
        all_pairs(&graph, Strategy::Scan).unwrap()
    );
}
