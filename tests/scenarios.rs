use as_sssp::all_pairs::all_pairs;
use as_sssp::{DistanceMap, DistanceMatrix, Graph, Session, SessionConfig, Strategy, dijkstra};

fn matrix_of(graph: &Graph, strategy: Strategy) -> DistanceMatrix {
    let maps = all_pairs(graph, strategy).unwrap();
    let order: Vec<usize> = graph.nodes().collect();
    DistanceMatrix::assemble(&maps, &order).unwrap()
}

#[test]
fn dict_list_to_matrix() {
    let maps = vec![
        DistanceMap::from_entries(0, [(0, Some(0)), (1, Some(5)), (2, Some(20))]),
        DistanceMap::from_entries(1, [(0, Some(5)), (1, Some(0)), (2, Some(15))]),
        DistanceMap::from_entries(2, [(0, Some(20)), (1, Some(15)), (2, Some(0))]),
    ];

    let matrix = DistanceMatrix::assemble(&maps, &[0, 1, 2]).unwrap();

    let expected = vec![
        vec![Some(0), Some(5), Some(20)],
        vec![Some(5), Some(0), Some(15)],
        vec![Some(20), Some(15), Some(0)],
    ];
    assert_eq!(matrix.rows(), expected);
}

#[test]
fn single_edge_graph() {
    let mut graph = Graph::new(2);
    graph.add_edge(0, 1, 7).unwrap();

    for strategy in [Strategy::Scan, Strategy::Heap] {
        let matrix = matrix_of(&graph, strategy);
        assert_eq!(
            matrix.rows(),
            vec![vec![Some(0), Some(7)], vec![Some(7), Some(0)]]
        );
    }
}

#[test]
fn isolated_node_is_unreachable() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 3).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    // node 3 has no links

    let matrix = matrix_of(&graph, Strategy::Scan);
    for source in 0..3 {
        assert_eq!(matrix.get(source, 3), None, "source {source}");
        assert_eq!(matrix.get(3, source), None, "source {source}");
    }
    assert_eq!(matrix.get(3, 3), Some(0));

    let map = dijkstra(&graph, 0).unwrap();
    assert_eq!(map.entry(3), Some(None));
}

#[test]
fn star_goes_through_center() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(0, 3, 4).unwrap();

    let map = dijkstra(&graph, 1).unwrap();
    assert_eq!(map.distance(2), Some(5));

    let matrix = matrix_of(&graph, Strategy::Heap);
    assert_eq!(matrix.get(1, 2), Some(5));
    assert_eq!(matrix.get(2, 1), Some(5));
    assert_eq!(matrix.get(1, 3), Some(6));
    assert_eq!(matrix.get(2, 3), Some(7));
}

#[test]
fn star_route_from_session() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(0, 3, 4).unwrap();

    let mut session = Session::new(SessionConfig::default());
    session.replace_graph(graph);

    let route = session.route(1, 2).unwrap();
    assert_eq!(route.distance, Some(5));
    assert_eq!(route.hops, Some(vec![1, 0, 2]));
}

#[test]
fn single_node_graph() {
    let matrix = matrix_of(&Graph::new(1), Strategy::Scan);
    assert_eq!(matrix.rows(), vec![vec![Some(0)]]);
}
