use pagecraft_designer::alignment::{AlignDirection, AlignmentConfig, DistributeDirection};
use pagecraft_designer::export::ExportConfig;
use pagecraft_designer::model::{Background, Document, LayerType, Page, SceneObject};
use pagecraft_designer::transform::{Delta, Transform, TransformPartial};
use pagecraft_designer::{DesignerError, DesignerState};

fn state_with_shapes(count: usize) -> (DesignerState, Vec<String>) {
    let mut state = DesignerState::new();
    let ids = (0..count)
        .map(|i| {
            state
                .place_element(
                    LayerType::Shape,
                    Transform::new(i as f64 * 200.0 + 10.0, 10.0 + i as f64 * 7.0, 100.0, 100.0),
                    None,
                )
                .unwrap()
        })
        .collect();
    (state, ids)
}

#[test]
fn test_new_state_has_one_entry() {
    let state = DesignerState::new();
    assert_eq!(state.history().len(), 1);
    assert!(!state.can_undo());
    assert!(!state.is_modified);
    assert_eq!(state.document().page_count(), 1);
}

#[test]
fn test_from_document_captures_entry_zero() {
    let doc = Document::with_pages(vec![Page::new("p1", "Cover", 1080, 1350)], 0).unwrap();
    let state = DesignerState::from_document(doc, AlignmentConfig::default(), 10).unwrap();
    assert_eq!(state.history().current_index(), Some(0));
    assert_eq!(state.history().max_history(), 10);
    assert_eq!(state.current_page().height, 1350);
}

#[test]
fn test_each_gesture_commits_once() {
    let (mut state, ids) = state_with_shapes(2);
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_page().layers[1].name, "Shape 2");

    state.toggle_lock(&ids[0]).unwrap();
    state.rename_layer(&ids[1], "Badge").unwrap();
    assert_eq!(state.history().len(), 5);

    state.undo().unwrap();
    assert_eq!(state.current_page().layers[1].name, "Shape 2");
    state.redo().unwrap();
    assert_eq!(state.current_page().layers[1].name, "Badge");
}

#[test]
fn test_drag_updates_do_not_commit() {
    let (mut state, ids) = state_with_shapes(2);
    let entries = state.history().len();

    state.begin_drag(&ids[1]).unwrap();
    for x in [300.0, 250.0, 215.0] {
        state.drag_to(x, 400.0).unwrap();
    }
    assert_eq!(state.history().len(), entries);

    // The other shape's left edge is 10 and right edge 110; 108 snaps to 110.
    let snap = state.drag_to(108.0, 400.0).unwrap();
    assert_eq!(snap.left, 110.0);
    assert!(!snap.active_lines.is_empty());

    let last = state.end_drag().unwrap();
    assert_eq!(last.map(|s| s.left), Some(110.0));
    assert_eq!(state.history().len(), entries + 1);
    assert!(state.drag().is_none());
}

#[test]
fn test_cancelled_drag_restores_position() {
    let (mut state, ids) = state_with_shapes(1);
    let before = state.current_page().layers[0].bounds();
    state.begin_drag(&ids[0]).unwrap();
    state.drag_to(700.0, 700.0).unwrap();
    state.cancel_drag().unwrap();
    assert_eq!(state.current_page().layers[0].bounds(), before);
    assert!(matches!(state.end_drag(), Err(DesignerError::NoActiveDrag)));
}

#[test]
fn test_locked_layers_refuse_transforms() {
    let (mut state, ids) = state_with_shapes(1);
    state.toggle_lock(&ids[0]).unwrap();
    assert!(matches!(
        state.begin_drag(&ids[0]),
        Err(DesignerError::LayerLocked { .. })
    ));
    assert!(matches!(
        state.transform_layer(&ids[0], &TransformPartial::position(0.0, 0.0)),
        Err(DesignerError::LayerLocked { .. })
    ));
}

#[test]
fn test_invalid_transform_leaves_layer_untouched() {
    let (mut state, ids) = state_with_shapes(1);
    let entries = state.history().len();
    let before = state.current_page().layers[0].clone();
    let bad = TransformPartial {
        scale_x: Some(0.0),
        left: Some(5.0),
        ..TransformPartial::default()
    };
    assert!(state.transform_layer(&ids[0], &bad).is_err());
    assert_eq!(state.current_page().layers[0], before);
    assert_eq!(state.history().len(), entries);
}

#[test]
fn test_group_ungroup_and_undo() {
    let (mut state, ids) = state_with_shapes(3);
    state.select(&ids[0], false);
    state.select(&ids[2], true);
    let group = state.group_selected().unwrap();
    assert_eq!(state.current_page().layer_count(), 2);
    assert_eq!(state.selected_ids(), [group.clone()]);

    state
        .transform_layer(&group, &TransformPartial::position(0.0, 0.0))
        .unwrap();
    let moved = state.current_page().find_layer_by_id(&group).unwrap().bounds();
    assert_eq!((moved.left, moved.top), (0.0, 0.0));

    let rotate = TransformPartial {
        angle: Some(45.0),
        ..TransformPartial::default()
    };
    assert!(state.transform_layer(&group, &rotate).is_err());

    state.ungroup_selected().unwrap();
    assert_eq!(state.current_page().layer_count(), 3);

    state.undo().unwrap();
    state.undo().unwrap();
    state.undo().unwrap();
    assert_eq!(state.current_page().layer_count(), 3);
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_delete_selected_keeps_locked() {
    let (mut state, ids) = state_with_shapes(3);
    state.toggle_lock(&ids[1]).unwrap();
    state.select_all();
    let removed = state.delete_selected().unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(state.selected_ids(), [ids[1].clone()]);
    assert_eq!(state.current_page().layer_count(), 1);
}

#[test]
fn test_reorder_and_restack() {
    let (mut state, ids) = state_with_shapes(3);
    assert!(state.reorder_layer(0, 2).unwrap());
    assert_eq!(state.current_page().layers[0].id, ids[2]);
    assert!(!state.reorder_layer(1, 1).unwrap());
    let entries = state.history().len();
    assert!(matches!(
        state.reorder_layer(0, 3),
        Err(DesignerError::LayerIndexOutOfRange { index: 3, total: 3 })
    ));
    assert!(matches!(
        state.reorder_layer(7, 0),
        Err(DesignerError::LayerIndexOutOfRange { index: 7, total: 3 })
    ));
    assert_eq!(state.history().len(), entries);
    assert_eq!(state.current_page().layers[0].id, ids[2]);
    assert!(state.bring_to_front(&ids[2]).unwrap());
    assert_eq!(state.layer_view()[0].id, ids[2]);
    assert!(!state.bring_forward(&ids[2]).unwrap());
    assert!(state.bring_to_front("missing").is_err());
}

#[test]
fn test_align_and_distribute_selected() {
    let (mut state, ids) = state_with_shapes(3);
    state.select_all();
    let moved = state.align_selected(AlignDirection::Top).unwrap();
    assert_eq!(moved, 2);
    for id in &ids {
        let b = state.current_page().find_layer_by_id(id).unwrap().bounds();
        assert_eq!(b.top, 10.0);
    }

    state
        .transform_layer(&ids[1], &TransformPartial::position(120.0, 10.0))
        .unwrap();
    let moved = state.distribute_selected(DistributeDirection::Horizontal).unwrap();
    assert_eq!(moved, 1);
    let middle = state.current_page().find_layer_by_id(&ids[1]).unwrap().bounds();
    assert_eq!(middle.left, 210.0);

    state.deselect_all();
    assert!(matches!(
        state.align_selected(AlignDirection::Left),
        Err(DesignerError::NothingSelected)
    ));
}

#[test]
fn test_page_switch_clears_selection_without_commit() {
    let (mut state, ids) = state_with_shapes(1);
    state.add_page().unwrap();
    let entries = state.history().len();

    state.set_current_page(0).unwrap();
    assert!(state.select(&ids[0], false));
    state.set_current_page(1).unwrap();
    assert!(state.selected_ids().is_empty());
    assert_eq!(state.history().len(), entries);
    assert!(!state.select(&ids[0], false));
}

#[test]
fn test_page_operations_commit() {
    let mut state = DesignerState::new();
    state.add_page().unwrap();
    state.duplicate_page(1).unwrap();
    state.reorder_pages(2, 0).unwrap();
    state
        .set_page_background(Background::Solid {
            color: "#000000".to_string(),
        })
        .unwrap();
    state.delete_page(0).unwrap();
    assert_eq!(state.document().page_count(), 2);
    assert_eq!(state.history().len(), 6);
    assert!(matches!(state.delete_page(5), Err(DesignerError::PageIndexOutOfRange { .. })));

    while state.can_undo() {
        state.undo().unwrap();
    }
    assert_eq!(state.document().page_count(), 1);
}

#[test]
fn test_sync_scene_and_flags() {
    let mut state = DesignerState::new();
    let mut hidden = SceneObject::new("image", Transform::new(0.0, 0.0, 50.0, 50.0));
    hidden.visible = false;
    let mut objects = vec![hidden, SceneObject::new("textbox", Transform::default())];

    let view = state.sync_scene(&mut objects).unwrap();
    assert_eq!(view[0].layer_type, LayerType::Text);
    let image_id = objects[0].id.clone().unwrap();
    assert_eq!(state.current_page().layers[0].id, image_id);
    assert!(!state.drawable_flags(&image_id).unwrap().visible);

    state.select_all();
    assert_eq!(state.selected_ids().len(), 1);
}

#[test]
fn test_move_selected_and_export_plan() {
    let (mut state, ids) = state_with_shapes(2);
    state.select(&ids[0], false);
    assert_eq!(state.move_selected(Delta::new(5.0, 5.0)).unwrap(), 1);
    assert_eq!(state.current_page().layers[0].transform.left, 15.0);

    let plan = state.export_plan(&ExportConfig::default()).unwrap();
    assert_eq!(plan[0].file_name, "page-1-1.png");
    assert!(state.export_plan(&ExportConfig { scale: 9, ..ExportConfig::default() }).is_err());
}

#[test]
fn test_duplicate_layer_ids_cannot_be_opened() {
    let layer = r#"{"id": "a", "name": "A", "layer_type": "shape", "visible": true,
        "locked": false, "transform": {"left": 0, "top": 0, "width": 10, "height": 10}}"#;
    let json = format!(
        r#"{{"pages": [
            {{"id": "p1", "name": "Page 1", "width": 100, "height": 100,
                "layers": [{layer}, {layer}]}},
            {{"id": "p2", "name": "Page 2", "width": 100, "height": 100}}
        ]}}"#
    );
    assert!(serde_json::from_str::<Document>(&json).is_err());

    let mut page = Page::new("p1", "Page 1", 100, 100);
    page.layers.push(pagecraft_designer::Layer::new(
        "a",
        "A",
        LayerType::Shape,
        Transform::new(0.0, 0.0, 10.0, 10.0),
    ));
    let duplicate = page.clone();
    assert!(matches!(
        Document::with_pages(vec![page, duplicate], 0),
        Err(DesignerError::DuplicateId { id }) if id == "p1"
    ));
}
