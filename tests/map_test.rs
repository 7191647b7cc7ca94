use labelmap::{IdKind, LabelId, LabelMap, LabelMapError};

#[test]
fn add_assigns_sequential_ids() {
    let mut map = LabelMap::new();
    map.add("cat");
    map.add("dog");
    map.add("cat");

    assert_eq!(map.len(), 2, "duplicate add must not create an entry");
    assert_eq!(map.to_id("cat").unwrap(), LabelId::Int(0));
    assert_eq!(map.to_id("dog").unwrap(), LabelId::Int(1));
}

#[test]
fn removed_ids_are_never_reused() {
    let mut map = LabelMap::new();
    map.add("cat");
    map.add("dog");
    map.remove("dog");

    assert_eq!(map.len(), 1);

    map.add("fox");
    assert_eq!(
        map.to_id("fox").unwrap(),
        LabelId::Int(2),
        "the id counter must not roll back on removal"
    );
}

#[test]
fn remove_of_absent_label_is_a_noop() {
    let mut map = LabelMap::new();
    map.add("cat");
    map.remove("unicorn");
    assert_eq!(map.len(), 1);
}

#[test]
fn force_get_round_trips() {
    let mut map = LabelMap::new();
    let id = map.force_get("cat").expect("cat is not excluded");

    assert_eq!(map.to_id("cat").unwrap(), id);
    assert_eq!(map.to_text(id).unwrap(), "cat");

    let again = map.force_get("cat").unwrap();
    assert_eq!(again, id, "force_get must not reassign an existing label");
    assert_eq!(map.len(), 1);
}

#[test]
fn excluded_labels_are_never_inserted() {
    let mut map = LabelMap::new().exclude(["background"]);

    map.add("background");
    assert!(map.is_empty());

    assert_eq!(
        map.force_get("background"),
        None,
        "force_get must not insert an excluded label"
    );

    let err = map.to_id("background").unwrap_err();
    assert!(
        matches!(err, LabelMapError::UnknownLabel(_)),
        "excluded label lookup must fail as unknown, got: {}",
        err
    );

    map.add("cat");
    assert_eq!(
        map.to_id("cat").unwrap(),
        LabelId::Int(0),
        "a refused excluded add must not consume an id"
    );
}

#[test]
fn to_text_of_unknown_id_fails() {
    let mut map = LabelMap::new();
    map.add("cat");

    let err = map.to_text(LabelId::Int(9)).unwrap_err();
    assert!(matches!(err, LabelMapError::UnknownId(_)));
}

#[test]
fn reverse_lookup_sees_every_mutation() {
    let mut map = LabelMap::new();
    map.add("cat");
    assert_eq!(map.to_text(LabelId::Int(0)).unwrap(), "cat");

    map.remove("cat");
    assert!(
        map.to_text(LabelId::Int(0)).is_err(),
        "reverse cache must be rebuilt after a removal"
    );

    map.add("dog");
    assert_eq!(
        map.to_text(LabelId::Int(1)).unwrap(),
        "dog",
        "reverse cache must be rebuilt after an insert"
    );
}

#[test]
fn labels_keep_insertion_order() {
    let mut map = LabelMap::new();
    for label in ["zebra", "ant", "mole"] {
        map.add(label);
    }
    assert_eq!(map.labels(), vec!["zebra", "ant", "mole"]);

    map.remove("ant");
    assert_eq!(map.labels(), vec!["zebra", "mole"]);
}

#[test]
fn iter_pairs_labels_with_ids_in_order() {
    let mut map = LabelMap::new();
    map.add("cat");
    map.add("dog");

    let pairs: Vec<(&str, LabelId)> = map.iter().collect();
    assert_eq!(
        pairs,
        vec![("cat", LabelId::Int(0)), ("dog", LabelId::Int(1))]
    );
}

#[test]
fn map_view_matches_lookups() {
    let mut map = LabelMap::new();
    map.add("cat");

    let view = map.map();
    assert_eq!(view.len(), 1);
    assert_eq!(view.get("cat"), Some(&LabelId::Int(0)));
}

#[test]
fn float_kind_synthesizes_float_ids() {
    let mut map = LabelMap::with_id_kind(IdKind::Float);
    map.add("cat");
    map.add("dog");

    assert_eq!(map.id_kind(), IdKind::Float);
    assert_eq!(map.to_id("cat").unwrap().kind(), IdKind::Float);
    assert_eq!(map.to_id("cat").unwrap(), LabelId::Float(0.0));
    assert_eq!(map.to_id("dog").unwrap(), LabelId::Float(1.0));
    assert_eq!(map.to_text(LabelId::Float(1.0)).unwrap(), "dog");
}

#[test]
fn empty_map_counts_are_zero() {
    let map = LabelMap::new();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(map.labels().is_empty());
    assert!(map.source_records().is_empty());
}
