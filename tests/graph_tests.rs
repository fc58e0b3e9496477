//! Integration tests for building the reaction network

use reaction_network::core::builder::{build_graph, intermediate_id, BuildMode};
use reaction_network::core::dataset::{load_reactions, parse_reactions, Dataset};
use reaction_network::core::models::{GraphNode, Molecule, ReactionRecord};
use reaction_network::core::palette::DEFAULT_COLOR;
use std::path::Path;

const SAMPLE: &str = "samples/reactions.json";

fn reaction(
    reactants: &[(&str, &str)],
    products: &[(&str, &str)],
    name: &str,
    groups: &[&str],
) -> ReactionRecord {
    let molecules = |list: &[(&str, &str)]| {
        list.iter()
            .map(|(name, smiles)| Molecule::new(*name, *smiles))
            .collect()
    };
    ReactionRecord {
        reactants: molecules(reactants),
        products: molecules(products),
        reagents: "reagents".to_string(),
        reaction_name: name.to_string(),
        functional_groups: groups.iter().map(ToString::to_string).collect(),
    }
}

fn molecule_color<'a>(node: &'a GraphNode) -> &'a str {
    match node {
        GraphNode::Molecule { color, .. } => color,
        GraphNode::Intermediate { .. } => panic!("expected a molecule node"),
    }
}

#[test]
fn single_reactant_makes_one_direct_edge() {
    let dataset = Dataset::from_records(vec![reaction(
        &[("ethanol", "CCO")],
        &[("ethanal", "CC=O")],
        "Oxidation",
        &["alcohol", "aldehyde"],
    )]);

    let (graph, report) = build_graph(&dataset, BuildMode::Full);

    assert_eq!(report.processed, 1);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    let edge = graph.edge_between("ethanol", "ethanal").unwrap();
    assert_eq!(edge.label.as_deref(), Some("reagents"));
    assert_eq!(edge.title, "Oxidation");
}

#[test]
fn two_reactants_route_through_one_intermediate() {
    let dataset = Dataset::from_records(vec![reaction(
        &[("ethanoic acid", "CC(=O)O"), ("ethanol", "CCO")],
        &[("ethyl ethanoate", "CCOC(C)=O"), ("water", "O")],
        "Esterification",
        &["carboxylic-acid", "alcohol", "ester"],
    )]);

    let (graph, _) = build_graph(&dataset, BuildMode::Full);
    let hub = intermediate_id(0, "Esterification");

    assert_eq!(graph.intermediate_count(), 1);
    assert_eq!(graph.predecessors(&hub), vec!["ethanoic acid", "ethanol"]);
    assert_eq!(graph.successors(&hub), vec!["ethyl ethanoate", "water"]);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.edge_between("ethanol", "ethyl ethanoate").is_none());
    assert!(graph.edge_between("ethanoic acid", "water").is_none());
}

#[test]
fn shared_molecule_keeps_first_attributes() {
    let dataset = Dataset::from_records(vec![
        reaction(
            &[("ethanol", "CCO")],
            &[("ethanal", "CC=O")],
            "Oxidation",
            &["alcohol", "aldehyde"],
        ),
        reaction(
            &[("ethanal", "C(C)=O")],
            &[("ethanoic acid", "CC(=O)O")],
            "Further Oxidation",
            &["ketone", "carboxylic-acid"],
        ),
    ]);

    let (graph, _) = build_graph(&dataset, BuildMode::Full);

    assert_eq!(graph.node_count(), 3);
    match graph.node("ethanal").unwrap() {
        GraphNode::Molecule {
            smiles,
            functional_group,
            ..
        } => {
            assert_eq!(smiles, "CC=O");
            assert_eq!(functional_group, "aldehyde");
        }
        GraphNode::Intermediate { .. } => panic!("ethanal should be a molecule"),
    }
}

#[test]
fn record_missing_field_contributes_nothing() {
    let json = r#"[
        {"reactants": [{"iupac_name": "a", "smiles": "C"}],
         "reagents": "x", "reaction_name": "Broken", "functional_groups": []},
        {"reactants": [{"iupac_name": "b", "smiles": "CC"}],
         "products": [{"iupac_name": "c", "smiles": "CCC"}],
         "reagents": "y", "reaction_name": "Fine", "functional_groups": []}
    ]"#;
    let dataset = parse_reactions(json, Path::new("inline.json")).unwrap();

    let (graph, report) = build_graph(&dataset, BuildMode::Full);

    assert_eq!(report.malformed, 1);
    assert_eq!(report.processed, 1);
    assert!(!graph.contains("a"));
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn unknown_and_missing_groups_use_default_color() {
    let dataset = Dataset::from_records(vec![reaction(
        &[("mystery", "C")],
        &[("unlabeled", "CC")],
        "Unknown",
        &["not-a-real-group"],
    )]);

    let (graph, _) = build_graph(&dataset, BuildMode::Full);

    assert_eq!(molecule_color(graph.node("mystery").unwrap()), DEFAULT_COLOR);
    assert_eq!(molecule_color(graph.node("unlabeled").unwrap()), DEFAULT_COLOR);
}

#[test]
fn sample_dataset_builds_full_network() {
    let dataset = load_reactions(SAMPLE).expect("sample dataset should load");
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.malformed, 1);

    let (graph, report) = build_graph(&dataset, BuildMode::Full);

    assert_eq!(report.processed, 4);
    assert_eq!(report.malformed, 1);
    // ethene, ethanol, ethanal, ethanoic acid, ethyl ethanoate + one hub
    assert_eq!(graph.node_count(), 6);
    assert!(graph.contains(&intermediate_id(2, "Fischer Esterification")));
    assert!(!graph.contains("bromoethane"));
}

#[test]
fn simplified_mode_drops_multi_reactant_reactions() {
    let dataset = load_reactions(SAMPLE).expect("sample dataset should load");

    let (graph, report) = build_graph(&dataset, BuildMode::SingleReactant);

    assert_eq!(report.processed, 3);
    assert_eq!(report.skipped_multi_reactant, 1);
    assert_eq!(graph.intermediate_count(), 0);
    assert!(!graph.contains("ethyl ethanoate"));
    assert_eq!(graph.edge_count(), 3);
}
