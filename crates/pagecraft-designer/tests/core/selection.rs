use pagecraft_designer::model::{Layer, LayerType};
use pagecraft_designer::selection_manager::{
    can_delete, can_group, can_ungroup, delete_layers, deletable_ids, group_layers,
    grouped_count, toggle_selection, ungroup_layer, ungrouped_count, Selection, SelectionManager,
};
use pagecraft_designer::transform::Transform;
use pagecraft_designer::IdGenerator;

fn stack(ids: &[&str]) -> Vec<Layer> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            Layer::new(
                *id,
                *id,
                LayerType::Shape,
                Transform::new(i as f64 * 15.0, 0.0, 10.0, 10.0),
            )
        })
        .collect()
}

#[test]
fn test_toggle_grows_and_shrinks() {
    let empty = Selection::new();
    let one = toggle_selection(&empty, "a");
    assert_eq!(one.len(), 1);
    let two = toggle_selection(&one, "b");
    assert_eq!(two.len(), 2);
    assert_eq!(toggle_selection(&two, "a").len(), 1);
}

#[test]
fn test_predicates() {
    assert!(!can_group(0));
    assert!(!can_group(1));
    assert!(can_group(2));
    assert!(!can_delete(0));
    assert!(can_delete(1));
    assert_eq!(grouped_count(5, 3), Some(3));
    assert_eq!(ungrouped_count(3, 3), Some(5));

    let layers = stack(&["a"]);
    assert!(!can_ungroup(&layers[0]));
    let group = Layer::group("g", "Group 1", stack(&["x", "y"]));
    assert!(can_ungroup(&group));
}

#[test]
fn test_counts_outside_their_domain() {
    assert_eq!(grouped_count(1, 3), None);
    assert_eq!(grouped_count(3, 3), Some(1));
    assert_eq!(ungrouped_count(0, 3), None);
    assert_eq!(ungrouped_count(1, 0), Some(0));
    assert_eq!(ungrouped_count(usize::MAX, 2), None);
}

#[test]
fn test_group_then_ungroup_restores_count() {
    let mut layers = stack(&["a", "b", "c", "d", "e"]);
    let selected = ["b".to_string(), "d".to_string(), "e".to_string()];
    group_layers(&mut layers, &selected, "g".to_string(), "Group 1").unwrap();
    assert_eq!(Some(layers.len()), grouped_count(5, 3));
    let released = ungroup_layer(&mut layers, "g").unwrap();
    assert_eq!(Some(layers.len()), ungrouped_count(3, released.len()));
    assert_eq!(layers.len(), 5);
}

#[test]
fn test_deletable_excludes_locked() {
    let mut layers = stack(&["a", "b", "c"]);
    layers[0].locked = true;
    let selection = Selection::from_ids(["a", "c"]);
    assert_eq!(deletable_ids(&layers, &selection), ["c"]);

    let outcome = delete_layers(&mut layers, &selection).unwrap();
    assert_eq!(outcome.removed, ["c"]);
    assert!(outcome.selection.contains("a"));
    assert!(!outcome.selection.contains("c"));
    assert_eq!(layers.len(), 2);
}

#[test]
fn test_delete_only_locked_fails() {
    let mut layers = stack(&["a"]);
    layers[0].locked = true;
    assert!(delete_layers(&mut layers, &Selection::from_ids(["a"])).is_err());
    assert_eq!(layers.len(), 1);
}

#[test]
fn test_manager_group_and_ungroup() {
    let mut layers = stack(&["a", "b", "c"]);
    let mut ids = IdGenerator::new();
    let mut manager = SelectionManager::new();
    manager.select_id("a", false);
    manager.select_id("c", true);

    let group_id = manager.group_selected(&mut layers, &mut ids).unwrap();
    assert_eq!(manager.primary(), Some(group_id.as_str()));
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[1].name, "Group 1");

    let released = manager.ungroup_selected(&mut layers).unwrap();
    assert_eq!(released, ["a", "c"]);
    assert_eq!(manager.selection(), &Selection::from_ids(["a", "c"]));
    assert_eq!(layers.len(), 3);
}

#[test]
fn test_manager_retain_existing_moves_primary() {
    let layers = stack(&["a", "b"]);
    let mut manager = SelectionManager::new();
    manager.select_id("a", false);
    manager.select_id("z", true);
    manager.retain_existing(&layers);
    assert_eq!(manager.selection(), &Selection::from_ids(["a"]));
    assert_eq!(manager.primary(), Some("a"));
}
