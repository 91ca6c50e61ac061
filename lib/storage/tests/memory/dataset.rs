use crate::Fixture;
use xowl_model::vocab::xsd;
use xowl_model::{Node, Quad, VariableNode};
use xowl_storage::memory::{AddResult, MemDataset, RemoveResult};

#[test]
fn multiplicity_collapses_in_queries() {
    let mut fixture = Fixture::new();
    let quad = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);

    assert_eq!(fixture.dataset.add_quad(&quad).unwrap(), AddResult::New);
    assert_eq!(fixture.dataset.add_quad(&quad).unwrap(), AddResult::Incremented);
    assert_eq!(fixture.dataset.multiplicity_of(&quad), 2);

    assert_eq!(
        fixture.dataset.remove_quad(&quad).unwrap(),
        RemoveResult::Decremented
    );
    assert_eq!(fixture.dataset.len(), 1);
    assert_eq!(fixture.dataset.iter().collect::<Vec<_>>(), vec![quad]);
}

#[test]
fn over_removal_is_a_no_op() {
    let mut fixture = Fixture::new();
    let quad = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);
    fixture.dataset.add_quad(&quad).unwrap();

    assert_eq!(
        fixture.dataset.remove_quad(&quad).unwrap(),
        RemoveResult::Removed
    );
    fixture.listener.take();

    assert_eq!(
        fixture.dataset.remove_quad(&quad).unwrap(),
        RemoveResult::NotFound
    );
    assert!(fixture.listener.take().is_empty());
    assert!(fixture.dataset.is_empty());
}

#[test]
fn graphs_are_independent_under_shared_statement() {
    let mut fixture = Fixture::new();
    fixture.add(&fixture.g1.clone(), &fixture.p1.clone(), &fixture.o1.clone());
    fixture.add(&fixture.g2.clone(), &fixture.p1.clone(), &fixture.o1.clone());

    let count = fixture.dataset.count(
        None,
        Some(&fixture.subject),
        Some(&fixture.p1),
        Some(&fixture.o1),
    );
    assert_eq!(count, 2);

    fixture
        .dataset
        .remove(
            Some(&fixture.g1),
            Some(&fixture.subject),
            Some(&fixture.p1),
            Some(&fixture.o1),
        )
        .unwrap();
    let remaining = fixture
        .dataset
        .get_all(
            None,
            Some(&fixture.subject),
            Some(&fixture.p1),
            Some(&fixture.o1),
        )
        .collect::<Vec<_>>();
    assert_eq!(
        remaining,
        vec![fixture.quad(&fixture.g2, &fixture.p1, &fixture.o1)]
    );
}

#[test]
fn wildcard_subject_query_flattens_properties() {
    let mut fixture = Fixture::new();
    fixture.add(&fixture.g1.clone(), &fixture.p1.clone(), &fixture.o1.clone());
    fixture.add(&fixture.g1.clone(), &fixture.p2.clone(), &fixture.o2.clone());

    let mut objects = fixture
        .dataset
        .get_all(None, Some(&fixture.subject), None, None)
        .map(|quad| quad.object.to_string())
        .collect::<Vec<_>>();
    objects.sort();
    assert_eq!(
        objects,
        vec!["<http://example.com/o1>", "<http://example.com/o2>"]
    );
}

#[test]
fn end_to_end_example() {
    let mut fixture = Fixture::new();
    let (g, p) = (fixture.g1.clone(), fixture.p1.clone());
    fixture.add(&g, &p, &fixture.o1.clone());
    fixture.add(&g, &p, &fixture.o2.clone());

    let subject = fixture.subject.clone();
    assert_eq!(
        fixture.dataset.count(Some(&g), Some(&subject), Some(&p), None),
        2
    );
    assert_eq!(
        fixture
            .dataset
            .get_all(Some(&g), Some(&subject), Some(&p), None)
            .count(),
        2
    );

    fixture
        .dataset
        .remove(Some(&g), Some(&subject), Some(&p), Some(&fixture.o1))
        .unwrap();
    assert_eq!(
        fixture.dataset.count(Some(&g), Some(&subject), Some(&p), None),
        1
    );
}

#[test]
fn literal_subject_is_rejected() {
    let mut fixture = Fixture::new();
    let literal = Node::Literal(fixture.dataset.nodes_mut().get_literal_node(
        "1",
        xsd::INT.as_str(),
        None,
    ));
    let quad = Quad::new(
        fixture.g1.clone(),
        literal,
        fixture.p1.clone(),
        fixture.o1.clone(),
    );

    let error = fixture.dataset.add_quad(&quad).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Subject node must be IRI, blank or anonymous, got the literal node \
         \"1\"^^<http://www.w3.org/2001/XMLSchema#int>"
    );
    assert!(fixture.dataset.is_empty());
    assert!(fixture.dataset.remove_quad(&quad).is_err());
    assert!(fixture.listener.take().is_empty());
}

#[test]
fn variables_are_wildcards() {
    let mut fixture = Fixture::new();
    fixture.add(&fixture.g1.clone(), &fixture.p1.clone(), &fixture.o1.clone());
    fixture.add(&fixture.g2.clone(), &fixture.p1.clone(), &fixture.o2.clone());

    let variable = Node::Variable(VariableNode::new("x"));
    assert_eq!(
        fixture
            .dataset
            .count(Some(&variable), Some(&variable), None, Some(&variable)),
        2
    );

    let pattern = Quad::new(
        variable.clone(),
        variable.clone(),
        fixture.p1.clone(),
        variable,
    );
    assert_eq!(
        fixture.dataset.remove_quad(&pattern).unwrap(),
        RemoveResult::Removed
    );
    assert!(fixture.dataset.is_empty());
}

#[test]
fn bulk_remove_only_reports_pruned_quads() {
    let mut fixture = Fixture::new();
    let (g1, p1, o1, o2) = (
        fixture.g1.clone(),
        fixture.p1.clone(),
        fixture.o1.clone(),
        fixture.o2.clone(),
    );
    fixture.add(&g1, &p1, &o1);
    fixture.add(&g1, &p1, &o1);
    fixture.add(&g1, &p1, &o2);
    fixture.listener.take();

    let result = fixture.dataset.remove(None, None, Some(&p1), None).unwrap();
    assert_eq!(result, RemoveResult::Removed);
    assert_eq!(fixture.dataset.multiplicity(&g1, &fixture.subject, &p1, &o1), 1);

    insta::assert_snapshot!(fixture.listener.take().join(""), @"- <http://example.com/s> <http://example.com/p1> <http://example.com/o2> <http://example.com/g1> .");
}

#[test]
fn bulk_remove_over_unknown_subject() {
    let mut fixture = Fixture::new();
    let unknown = Node::Iri(fixture.dataset.nodes_mut().get_iri_node("http://example.com/u"));
    assert_eq!(
        fixture
            .dataset
            .remove(None, Some(&unknown), None, None)
            .unwrap(),
        RemoveResult::NotFound
    );
}

#[test]
fn nodes_match_by_identity() {
    let mut fixture = Fixture::new();
    fixture.add(&fixture.g1.clone(), &fixture.p1.clone(), &fixture.o1.clone());

    let copy = xowl_model::IriNode::new("http://example.com/p1");
    assert!(copy.same_iri(&fixture.p1));
    assert_eq!(fixture.dataset.count(None, None, Some(&copy), None), 0);
    assert_eq!(fixture.dataset.count(None, None, Some(&fixture.p1), None), 1);
}

#[test]
fn subjects_are_partitioned_by_kind() {
    let mut dataset = MemDataset::new();
    let nodes = dataset.nodes_mut();
    let graph = Node::Iri(nodes.default_graph().clone());
    let property = nodes.get_iri_node("http://example.com/p");
    let object = Node::Literal(nodes.get_literal_node("v", xsd::STRING.as_str(), None));
    let subjects = [
        Node::Iri(nodes.get_iri_node("http://example.com/s")),
        Node::Blank(nodes.get_blank_node()),
        Node::Anonymous(nodes.get_anon_node("a1")),
    ];

    for subject in &subjects {
        dataset.add(&graph, subject, &property, &object).unwrap();
    }
    let counts = dataset.subject_counts();
    assert_eq!((counts.iri, counts.blank, counts.anonymous), (1, 1, 1));
    assert_eq!(dataset.count(None, None, None, Some(&object)), 3);

    dataset
        .remove(Some(&graph), Some(&subjects[1]), Some(&property), Some(&object))
        .unwrap();
    assert_eq!(dataset.subject_counts().total(), 2);
}

#[test]
fn clear_reports_every_quad_once() {
    let mut fixture = Fixture::new();
    let (g1, g2, p1, p2, o1, o2) = (
        fixture.g1.clone(),
        fixture.g2.clone(),
        fixture.p1.clone(),
        fixture.p2.clone(),
        fixture.o1.clone(),
        fixture.o2.clone(),
    );
    fixture.add(&g1, &p1, &o1);
    fixture.add(&g1, &p1, &o1);
    fixture.add(&g2, &p2, &o2);
    fixture.listener.take();

    fixture.dataset.clear();

    assert_eq!(fixture.dataset.len(), 0);
    insta::assert_snapshot!(fixture.listener.take().join(""), @r"
    - <http://example.com/s> <http://example.com/p1> <http://example.com/o1> <http://example.com/g1> .
    - <http://example.com/s> <http://example.com/p2> <http://example.com/o2> <http://example.com/g2> .
    ");

    fixture.dataset.clear();
    assert!(fixture.listener.take().is_empty());
}

#[test]
fn stored_variable_object_is_only_reached_by_open_patterns() {
    let mut fixture = Fixture::new();
    let variable = Node::Variable(VariableNode::new("o"));
    let (g1, p1) = (fixture.g1.clone(), fixture.p1.clone());
    fixture.add(&g1, &p1, &variable);

    assert_eq!(
        fixture
            .dataset
            .multiplicity(&g1, &fixture.subject, &p1, &variable),
        1
    );
    assert_eq!(
        fixture
            .dataset
            .count(Some(&g1), Some(&fixture.subject), Some(&p1), Some(&fixture.o1)),
        0
    );
    assert_eq!(
        fixture
            .dataset
            .count(Some(&g1), Some(&fixture.subject), Some(&p1), Some(&variable)),
        1
    );

    let result = fixture
        .dataset
        .remove(Some(&g1), Some(&fixture.subject), Some(&p1), Some(&variable))
        .unwrap();
    assert_eq!(result, RemoveResult::Removed);
    assert!(fixture.dataset.is_empty());
}
