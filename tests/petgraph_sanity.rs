use as_sssp::generator::{AsTopologyGenerator, TopologyGenerator};
use as_sssp::weights::assign_weights;
use as_sssp::{Graph, Strategy, shortest_paths};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generated(nodes: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let topology = AsTopologyGenerator::default()
        .generate(nodes, &mut rng)
        .unwrap();
    assign_weights(&topology, &mut rng).unwrap()
}

fn to_petgraph(graph: &Graph) -> UnGraph<(), u64> {
    let mut pg_graph = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = graph.nodes().map(|_| pg_graph.add_node(())).collect();
    for (from, to, weight) in graph.edges() {
        pg_graph.add_edge(nodes[from], nodes[to], u64::from(weight));
    }
    pg_graph
}

#[test]
fn sanity_with_petgraph() {
    let graph = generated(80, 2024);
    let pg_graph = to_petgraph(&graph);

    for source in [0, 7, 42, 79] {
        let expected = dijkstra(&pg_graph, NodeIndex::new(source), None, |e| *e.weight());

        for strategy in [Strategy::Scan, Strategy::Heap] {
            let ours = shortest_paths(&graph, source, strategy).unwrap();
            for node in graph.nodes() {
                assert_eq!(
                    ours.distance(node),
                    expected.get(&NodeIndex::new(node)).copied(),
                    "source {source}, node {node}, {strategy:?}"
                );
            }
        }
    }
}

#[test]
fn disconnected_agrees_with_petgraph() {
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(1, 2, 9).unwrap();
    graph.add_edge(3, 4, 2).unwrap();
    let pg_graph = to_petgraph(&graph);

    let expected = dijkstra(&pg_graph, NodeIndex::new(0), None, |e| *e.weight());
    let ours = shortest_paths(&graph, 0, Strategy::Scan).unwrap();

    println!("petgraph reached {} nodes", expected.len());
    for node in graph.nodes() {
        assert_eq!(
            ours.distance(node),
            expected.get(&NodeIndex::new(node)).copied()
        );
    }
}

#[cfg(feature = "petgraph")]
#[test]
fn built_in_conversion_matches() {
    let graph = generated(30, 5);
    let pg_graph = graph.to_petgraph();
    assert_eq!(pg_graph.node_count(), graph.node_count());
    assert_eq!(pg_graph.edge_count(), graph.edge_count());

    let expected = dijkstra(&pg_graph, NodeIndex::new(3), None, |e| u64::from(*e.weight()));
    let ours = shortest_paths(&graph, 3, Strategy::Heap).unwrap();
    for node in graph.nodes() {
        assert_eq!(ours.distance(node), expected.get(&NodeIndex::new(node)).copied());
    }
}
