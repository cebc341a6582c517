mod common;

use common::{line, station};
use subway_lib::build_graph;

#[test]
fn empty_line_set_builds_empty_graph() {
    let graph = build_graph(&[]);

    assert!(graph.is_empty());
    assert_eq!(graph.station_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbours(0).is_empty());
}

#[test]
fn vertices_are_the_union_of_line_stations() {
    let lines = vec![
        line("Line 2", "green", &[("Daerim", "Sindaebang", 10), ("Sindaebang", "Sindorim", 5)]),
        line("Line 1", "navy", &[("Sindorim", "Guro", 4)]),
    ];
    let graph = build_graph(&lines);

    assert_eq!(graph.station_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    let ids: Vec<_> = ["Daerim", "Sindaebang", "Sindorim", "Guro"]
        .iter()
        .map(|name| graph.station_id(&station(name)))
        .collect();
    assert_eq!(ids, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert!(!graph.contains(&station("Busan")));
}

#[test]
fn sections_produce_edges_in_both_directions() {
    let lines = vec![line("Line 2", "green", &[("Daerim", "Sindaebang", 10)])];
    let graph = build_graph(&lines);

    let daerim = graph.station_id(&station("Daerim")).unwrap();
    let sindaebang = graph.station_id(&station("Sindaebang")).unwrap();

    let forward: Vec<_> = graph
        .neighbours(daerim)
        .iter()
        .map(|edge| (edge.target, edge.distance))
        .collect();
    let backward: Vec<_> = graph
        .neighbours(sindaebang)
        .iter()
        .map(|edge| (edge.target, edge.distance))
        .collect();

    assert_eq!(forward, vec![(sindaebang, 10)]);
    assert_eq!(backward, vec![(daerim, 10)]);
}

#[test]
fn parallel_sections_are_kept_with_their_lines() {
    let lines = vec![
        line("Slow", "gray", &[("Seoul", "Yongsan", 12)]),
        line("Express", "red", &[("Seoul", "Yongsan", 4)]),
    ];
    let graph = build_graph(&lines);

    let seoul = graph.station_id(&station("Seoul")).unwrap();
    let edges: Vec<_> = graph
        .neighbours(seoul)
        .iter()
        .map(|edge| (graph.line_name(edge.line).unwrap(), edge.distance))
        .collect();

    assert_eq!(edges, vec![("Slow", 12), ("Express", 4)]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn building_does_not_mutate_lines() {
    let lines = vec![line("Line 2", "green", &[("Daerim", "Sindaebang", 10)])];
    let before = lines.clone();
    let _graph = build_graph(&lines);
    assert_eq!(lines, before);
}

#[test]
fn fuzzy_matches_rank_closest_names_first() {
    let lines = vec![line(
        "Line 2",
        "green",
        &[("Daerim", "Sindaebang", 10), ("Sindaebang", "Sindorim", 5)],
    )];
    let graph = build_graph(&lines);

    let exact = graph.fuzzy_station_matches("Sindorim", 3);
    assert_eq!(exact.first().map(String::as_str), Some("Sindorim"));

    let typo = graph.fuzzy_station_matches("sindorm", 3);
    assert_eq!(typo.first().map(String::as_str), Some("Sindorim"));

    let limited = graph.fuzzy_station_matches("Sind", 1);
    assert_eq!(limited.len(), 1);

    assert!(graph.fuzzy_station_matches("Busan", 3).is_empty());
}
