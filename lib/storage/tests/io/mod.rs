use std::path::PathBuf;
use xowl_model::Node;
use xowl_storage::io::{dump, load, load_file, LoaderError, QuadPattern, RdfFormat};
use xowl_storage::memory::MemDataset;

const DOCUMENT: &str = r#"
@prefix ex: <http://example.com/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

ex:alice ex:knows ex:bob ;
    ex:name "Alice"@en ;
    ex:age "42"^^xsd:int .
ex:bob ex:knows [ ex:name "Carol" ] .
"#;

fn dump_sorted(dataset: &MemDataset, pattern: &QuadPattern) -> String {
    let output = dump(dataset, pattern, RdfFormat::NQuads, Vec::new()).unwrap();
    let mut lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    lines.sort();
    lines.join("\n")
}

#[test]
fn load_and_dump_turtle() {
    let mut dataset = MemDataset::new();
    let count = load(&mut dataset, DOCUMENT.as_bytes(), RdfFormat::Turtle, None, None).unwrap();

    assert_eq!(count, 5);
    assert_eq!(dataset.len(), 5);
    insta::assert_snapshot!(dump_sorted(&dataset, &QuadPattern::default()), @r#"
    <http://example.com/alice> <http://example.com/age> "42"^^<http://www.w3.org/2001/XMLSchema#int> .
    <http://example.com/alice> <http://example.com/knows> <http://example.com/bob> .
    <http://example.com/alice> <http://example.com/name> "Alice"@en .
    <http://example.com/bob> <http://example.com/knows> _:n0 .
    _:n0 <http://example.com/name> "Carol" .
    "#);
}

#[test]
fn dump_applies_pattern() {
    let mut dataset = MemDataset::new();
    load(&mut dataset, DOCUMENT.as_bytes(), RdfFormat::Turtle, None, None).unwrap();
    let knows = dataset.nodes_mut().get_iri_node("http://example.com/knows");

    let pattern = QuadPattern {
        property: Some(knows),
        ..QuadPattern::default()
    };
    insta::assert_snapshot!(dump_sorted(&dataset, &pattern), @r"
    <http://example.com/alice> <http://example.com/knows> <http://example.com/bob> .
    <http://example.com/bob> <http://example.com/knows> _:n0 .
    ");
}

#[test]
fn load_into_named_graph() {
    let mut dataset = MemDataset::new();
    let graph = dataset.nodes_mut().get_iri_node("http://example.com/g");
    load(
        &mut dataset,
        DOCUMENT.as_bytes(),
        RdfFormat::Turtle,
        None,
        Some(&graph),
    )
    .unwrap();

    let graph = Node::Iri(graph);
    assert_eq!(dataset.graphs(), vec![graph.clone()]);
    assert_eq!(dataset.count(Some(&graph), None, None, None), 5);
}

#[test]
fn reloading_increments_multiplicity() {
    let mut dataset = MemDataset::new();
    let document = "<http://example.com/s> <http://example.com/p> <http://example.com/o> .";
    load(&mut dataset, document.as_bytes(), RdfFormat::NTriples, None, None).unwrap();
    load(&mut dataset, document.as_bytes(), RdfFormat::NTriples, None, None).unwrap();

    let quad = dataset.iter().next().unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.multiplicity_of(&quad), 2);
}

#[test]
fn dumped_quads_load_back() {
    let mut dataset = MemDataset::new();
    load(&mut dataset, DOCUMENT.as_bytes(), RdfFormat::Turtle, None, None).unwrap();
    let output = dump(
        &dataset,
        &QuadPattern::default(),
        RdfFormat::NQuads,
        Vec::new(),
    )
    .unwrap();

    let mut reloaded = MemDataset::new();
    load(&mut reloaded, output.as_slice(), RdfFormat::NQuads, None, None).unwrap();
    assert_eq!(
        dump_sorted(&reloaded, &QuadPattern::default()),
        dump_sorted(&dataset, &QuadPattern::default())
    );
}

#[test]
fn load_file_guesses_format() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("load_file_guesses_format.ttl");
    std::fs::write(&path, DOCUMENT).unwrap();

    let mut dataset = MemDataset::new();
    assert_eq!(load_file(&mut dataset, &path, None, None).unwrap(), 5);
}

#[test]
fn load_file_rejects_unknown_extension() {
    let mut dataset = MemDataset::new();
    let error = load_file(&mut dataset, &PathBuf::from("data.unknown"), None, None).unwrap_err();
    assert!(matches!(error, LoaderError::UnknownFormat(_)));
    assert!(dataset.is_empty());
}

#[test]
fn invalid_document_leaves_dataset_unchanged() {
    let mut dataset = MemDataset::new();
    let document = "<http://example.com/s> <http://example.com/p> .";
    let error = load(&mut dataset, document.as_bytes(), RdfFormat::NTriples, None, None);
    assert!(matches!(error, Err(LoaderError::Parse(_))));
    assert!(dataset.is_empty());
}

#[test]
fn blank_and_anonymous_subjects_stay_distinct() {
    let mut dataset = MemDataset::new();
    let nodes = dataset.nodes_mut();
    let graph = Node::Iri(nodes.default_graph().clone());
    let property = nodes.get_iri_node("http://example.com/p");
    let object = Node::Iri(nodes.get_iri_node("http://example.com/o"));
    let subjects = [
        Node::Blank(nodes.get_blank_node()),
        Node::Anonymous(nodes.get_anon_node("n0")),
        Node::Anonymous(nodes.get_anon_node("genid:1")),
    ];
    for subject in &subjects {
        dataset.add(&graph, subject, &property, &object).unwrap();
    }

    insta::assert_snapshot!(dump_sorted(&dataset, &QuadPattern::default()), @r"
    _:a67656e69643a31 <http://example.com/p> <http://example.com/o> .
    _:a6e30 <http://example.com/p> <http://example.com/o> .
    _:n0 <http://example.com/p> <http://example.com/o> .
    ");

    let output = dump(
        &dataset,
        &QuadPattern::default(),
        RdfFormat::NQuads,
        Vec::new(),
    )
    .unwrap();
    let mut reloaded = MemDataset::new();
    load(&mut reloaded, output.as_slice(), RdfFormat::NQuads, None, None).unwrap();
    assert_eq!(reloaded.subject_counts().total(), 3);
}

#[test]
fn anonymous_graph_is_exported_as_blank_graph_name() {
    let mut dataset = MemDataset::new();
    let nodes = dataset.nodes_mut();
    let graph = Node::Anonymous(nodes.get_anon_node("g"));
    let subject = Node::Iri(nodes.get_iri_node("http://example.com/s"));
    let property = nodes.get_iri_node("http://example.com/p");
    let object = Node::Iri(nodes.get_iri_node("http://example.com/o"));
    dataset.add(&graph, &subject, &property, &object).unwrap();

    assert_eq!(dataset.graphs(), vec![graph]);
    insta::assert_snapshot!(dump_sorted(&dataset, &QuadPattern::default()), @"<http://example.com/s> <http://example.com/p> <http://example.com/o> _:a67 .");
}
