#![no_main]

use libfuzzer_sys::fuzz_target;
use citygraph::{graph::algorithms, loader, EdgeListKind, Graph};

fuzz_target!(|data: &[u8]| {
    for kind in [EdgeListKind::Roads, EdgeListKind::Tasks] {
        let mut graph = Graph::new(kind.is_directed());
        if loader::load_bytes(&mut graph, kind, data).is_err() || graph.is_empty() {
            continue;
        }

        let start = graph.node_ids().next().unwrap();
        let _ = algorithms::bfs(&graph, start);
        let _ = algorithms::shortest_path(&graph, start, graph.node_ids().last().unwrap());
        let _ = algorithms::minimum_spanning_tree(&graph, start);
        if graph.is_directed() {
            let _ = algorithms::has_directed_cycle(&graph);
            let _ = algorithms::topological_order(&graph);
        }
    }
});
