use crate::{Fixture, RecordingListener};
use std::sync::Arc;
use xowl_model::{Change, ChangeListener, Changeset};

#[test]
fn single_mutations_notify_on_presence_changes() {
    let mut fixture = Fixture::new();
    let quad = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);

    fixture.dataset.add_quad(&quad).unwrap();
    fixture.dataset.add_quad(&quad).unwrap();
    fixture.dataset.remove_quad(&quad).unwrap();
    assert_eq!(fixture.listener.take(), vec![format!("+ {quad}")]);

    fixture.dataset.remove_quad(&quad).unwrap();
    assert_eq!(fixture.listener.take(), vec![format!("- {quad}")]);
}

#[test]
fn insert_emits_a_single_changeset() {
    let mut fixture = Fixture::new();
    let kept = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);
    let added = fixture.quad(&fixture.g1, &fixture.p2, &fixture.o2);
    let removed = fixture.quad(&fixture.g2, &fixture.p1, &fixture.o1);
    fixture.dataset.add_quad(&kept).unwrap();
    fixture.dataset.add_quad(&removed).unwrap();
    fixture.listener.take();

    fixture
        .dataset
        .insert(&Changeset::new(
            vec![kept.clone(), added.clone()],
            vec![removed.clone()],
        ))
        .unwrap();

    assert_eq!(fixture.dataset.multiplicity_of(&kept), 2);
    insta::assert_snapshot!(fixture.listener.take().join(""), @r"
    - <http://example.com/s> <http://example.com/p1> <http://example.com/o1> <http://example.com/g2> .
    + <http://example.com/s> <http://example.com/p2> <http://example.com/o2> <http://example.com/g1> .
    ");
}

#[test]
fn insert_with_no_net_effect_is_silent() {
    let mut fixture = Fixture::new();
    let quad = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);
    fixture.dataset.add_quad(&quad).unwrap();
    fixture.listener.take();

    fixture
        .dataset
        .insert(&Changeset::from_added(vec![quad.clone()]))
        .unwrap();
    fixture.dataset.insert_change(&Change::removed(quad.clone())).unwrap();

    assert_eq!(fixture.dataset.multiplicity_of(&quad), 1);
    assert!(fixture.listener.take().is_empty());
}

#[test]
fn insert_adds_before_removing() {
    let mut fixture = Fixture::new();
    let quad = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);

    fixture
        .dataset
        .insert(&Changeset::new(vec![quad.clone()], vec![quad.clone()]))
        .unwrap();

    assert!(fixture.dataset.is_empty());
    assert_eq!(
        fixture.listener.take(),
        vec![format!("- {quad}\n+ {quad}\n")]
    );
}

#[test]
fn rejected_insert_leaves_dataset_unchanged() {
    let mut fixture = Fixture::new();
    let valid = fixture.quad(&fixture.g1, &fixture.p1, &fixture.o1);
    let mut invalid = valid.clone();
    invalid.subject = xowl_model::Node::Variable(xowl_model::VariableNode::new("s"));

    let result = fixture
        .dataset
        .insert(&Changeset::new(vec![valid], vec![invalid]));

    assert!(result.is_err());
    assert!(fixture.dataset.is_empty());
    assert!(fixture.listener.take().is_empty());
}

#[test]
fn removed_listener_is_no_longer_notified() {
    let mut fixture = Fixture::new();
    let listener = Arc::clone(&fixture.listener) as Arc<dyn ChangeListener>;
    let other = Arc::new(RecordingListener::default()) as Arc<dyn ChangeListener>;

    assert!(!fixture.dataset.remove_listener(&other));
    assert!(fixture.dataset.remove_listener(&listener));
    assert!(!fixture.dataset.remove_listener(&listener));

    let (g1, p1, o1) = (fixture.g1.clone(), fixture.p1.clone(), fixture.o1.clone());
    fixture.add(&g1, &p1, &o1);
    assert!(fixture.listener.take().is_empty());
}
