use pickchart::{Point, PointId, Selection, SelectionMatch};

#[test]
fn toggle_twice_restores_previous_state() {
    let mut sel = Selection::default();
    assert_eq!(sel.matching(), SelectionMatch::Coordinates);
    let a = Point::new(1, 1.0, 2.0);
    let b = Point::new(2, 2.0, 5.0);
    sel.toggle(&a);
    let before = sel.clone();

    assert!(sel.toggle(&b));
    assert_eq!(sel.len(), 2);
    assert!(!sel.toggle(&b));
    assert_eq!(sel, before);
}

#[test]
fn selection_keeps_click_order() {
    let mut sel = Selection::default();
    for p in [Point::new(3, 3.0, 1.0), Point::new(1, 1.0, 2.0), Point::new(2, 2.0, 5.0)] {
        sel.toggle(&p);
    }
    let ids: Vec<u64> = sel.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn remove_by_id_shrinks_by_exactly_one() {
    let mut sel = Selection::default();
    sel.toggle(&Point::new(1, 1.0, 2.0));
    sel.toggle(&Point::new(2, 2.0, 5.0));

    assert_eq!(sel.remove_by_id(PointId(1)), 1);
    assert_eq!(sel.len(), 1);
    assert_eq!(sel.items()[0].id, PointId(2));
}

#[test]
fn remove_missing_id_is_a_no_op() {
    let mut sel = Selection::default();
    sel.toggle(&Point::new(1, 1.0, 2.0));
    assert_eq!(sel.remove_by_id(PointId(99)), 0);
    assert_eq!(sel.len(), 1);
}

#[test]
fn coordinate_matching_toggles_records_sharing_a_position() {
    let mut sel = Selection::new(SelectionMatch::Coordinates);
    let a = Point::new(1, 4.0, 4.0);
    let twin = Point::new(7, 4.0, 4.0);
    sel.toggle(&a);
    assert!(sel.contains(&twin));
    assert!(!sel.toggle(&twin));
    assert!(sel.is_empty());
}

#[test]
fn coordinate_matching_requires_both_axes() {
    let mut sel = Selection::new(SelectionMatch::Coordinates);
    sel.toggle(&Point::new(1, 4.0, 4.0));
    assert!(!sel.contains(&Point::new(2, 4.0, 5.0)));
    assert!(!sel.contains(&Point::new(3, 5.0, 4.0)));
}

#[test]
fn id_matching_keeps_twins_apart() {
    let mut sel = Selection::new(SelectionMatch::Id);
    assert_eq!(sel.matching(), SelectionMatch::Id);
    sel.toggle(&Point::new(1, 4.0, 4.0));
    assert!(sel.toggle(&Point::new(7, 4.0, 4.0)));
    assert_eq!(sel.len(), 2);
    assert!(!sel.toggle(&Point::new(1, 0.0, 0.0)));
    assert_eq!(sel.len(), 1);
}

#[test]
fn match_mode_parses_from_cli_text() {
    assert_eq!("id".parse::<SelectionMatch>(), Ok(SelectionMatch::Id));
    assert_eq!(
        "Coordinates".parse::<SelectionMatch>(),
        Ok(SelectionMatch::Coordinates)
    );
    assert_eq!("xy".parse::<SelectionMatch>(), Ok(SelectionMatch::Coordinates));
    assert!("label".parse::<SelectionMatch>().is_err());
    assert_eq!(SelectionMatch::Id.to_string(), "id");
}
