use pagecraft_designer::layer_registry::{
    reorder, reorder_layers, seq_to_view_index, view_order, view_to_seq_index, z_index_of,
    z_order_requests,
};
use pagecraft_designer::model::{Layer, LayerType};
use pagecraft_designer::transform::Transform;

fn stack(ids: &[&str]) -> Vec<Layer> {
    ids.iter()
        .map(|id| Layer::new(*id, *id, LayerType::Image, Transform::default()))
        .collect()
}

#[test]
fn test_reorder_layers_scenario() {
    let mut ids = vec!["a", "b", "c"];
    assert!(reorder_layers(&mut ids, 0, 2));
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn test_view_is_reversed_backing_order() {
    let layers = stack(&["bottom", "middle", "top"]);
    let view: Vec<&str> = view_order(&layers).iter().map(|l| l.id.as_str()).collect();
    assert_eq!(view, ["top", "middle", "bottom"]);
    for view_index in 0..3 {
        let seq = view_to_seq_index(view_index, 3).unwrap();
        assert_eq!(view[view_index], layers[seq].id);
        assert_eq!(seq_to_view_index(seq, 3), Some(view_index));
    }
}

#[test]
fn test_reorder_keeps_count_and_ids() {
    let mut layers = stack(&["a", "b", "c", "d"]);
    assert!(reorder(&mut layers, 3, 0));
    assert_eq!(layers.len(), 4);
    assert_eq!(layers[3].id, "a");
    assert_eq!(z_index_of(&layers, "a").unwrap().z_index, 3);
}

#[test]
fn test_reorder_noops() {
    let mut layers = stack(&["a", "b"]);
    let before = layers.clone();
    assert!(!reorder(&mut layers, 1, 1));
    assert!(!reorder(&mut layers, 2, 0));
    assert!(!reorder(&mut layers, 0, 9));
    assert_eq!(layers, before);
}

#[test]
fn test_z_order_requests_follow_backing_order() {
    let layers = stack(&["a", "b", "c"]);
    let requests = z_order_requests(&layers);
    assert_eq!(requests[2].id, "c");
    assert_eq!(requests[2].z_index, 2);
}
