use pagecraft_designer::model::{
    find_layer_by_id, find_layer_index, rename_layer, sync_layers, toggle_lock,
    toggle_visibility, Background, Document, IdGenerator, Layer, LayerType, Page, SceneObject,
};
use pagecraft_designer::transform::{Delta, Transform};

fn layer(id: &str, left: f64, top: f64) -> Layer {
    Layer::new(id, id, LayerType::Shape, Transform::new(left, top, 10.0, 10.0))
}

#[test]
fn test_layer_type_tokens() {
    assert_eq!(LayerType::from_token("i-text"), LayerType::Text);
    assert_eq!(LayerType::from_token("text"), LayerType::Text);
    assert_eq!(LayerType::from_token("textbox"), LayerType::Text);
    assert_eq!(LayerType::from_token("image"), LayerType::Image);
    assert_eq!(LayerType::from_token("group"), LayerType::Group);
    assert_eq!(LayerType::from_token("polygon"), LayerType::Shape);
}

#[test]
fn test_flag_helpers_return_copies() {
    let original = layer("a", 0.0, 0.0);
    let hidden = toggle_visibility(&original);
    assert!(original.visible);
    assert!(!hidden.visible);
    assert!(!hidden.drawable_flags().visible);

    let locked = toggle_lock(&original);
    assert!(locked.locked);
    let flags = locked.drawable_flags();
    assert!(!flags.selectable);
    assert!(!flags.evented);

    let renamed = rename_layer(&original, "Logo");
    assert_eq!(renamed.name, "Logo");
    assert_eq!(renamed.id, original.id);
}

#[test]
fn test_lookup_by_id() {
    let layers = vec![layer("a", 0.0, 0.0), layer("b", 0.0, 0.0)];
    assert_eq!(find_layer_index(&layers, "b"), Some(1));
    assert_eq!(find_layer_by_id(&layers, "a").map(|l| l.id.as_str()), Some("a"));
    assert!(find_layer_by_id(&layers, "c").is_none());
}

#[test]
fn test_group_bounds_follow_children() {
    let mut group = Layer::group(
        "g",
        "Group 1",
        vec![layer("a", 0.0, 0.0), layer("b", 40.0, 30.0)],
    );
    let b = group.bounds();
    assert_eq!((b.left, b.top, b.width, b.height), (0.0, 0.0, 50.0, 40.0));

    group.translate(Delta::new(5.0, 5.0));
    assert_eq!(group.children[1].transform.left, 45.0);
    assert_eq!(group.bounds().left, 5.0);
}

#[test]
fn test_next_layer_name_counts_per_type() {
    let mut page = Page::new("p", "Page 1", 100, 100);
    page.layers.push(Layer::new("t", "Text 1", LayerType::Text, Transform::default()));
    assert_eq!(page.next_layer_name(LayerType::Text), "Text 2");
    assert_eq!(page.next_layer_name(LayerType::Image), "Image 1");
}

#[test]
fn test_other_element_bounds_skips_hidden_and_excluded() {
    let mut page = Page::new("p", "Page 1", 100, 100);
    page.layers = vec![layer("a", 0.0, 0.0), layer("b", 0.0, 0.0), layer("c", 0.0, 0.0)];
    page.layers[1].visible = false;
    let others = page.other_element_bounds(&["a".to_string()]);
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].id, "c");
}

#[test]
fn test_document_serde_round_trip() {
    let mut ids = IdGenerator::new();
    let mut doc = Document::blank(1080, 1350, &mut ids);
    doc.current_page_mut().background = Background::Transparent;
    doc.current_page_mut().layers.push(layer("a", 1.0, 2.0));

    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_id_generator_never_collides() {
    let doc = Document::with_pages(vec![Page::new("page-1", "Page 1", 10, 10)], 0).unwrap();
    let mut ids = doc.id_generator();
    assert!(ids.is_taken("page-1"));
    let a = ids.next_layer_id();
    let b = ids.next_layer_id();
    assert_ne!(a, b);
    assert!(a.starts_with("layer-"));
}

#[test]
fn test_scene_sync_assigns_ids_once() {
    let mut ids = IdGenerator::new();
    let mut group = SceneObject::new("group", Transform::default());
    group
        .objects
        .push(SceneObject::new("i-text", Transform::new(0.0, 0.0, 10.0, 10.0)));
    let mut objects = vec![SceneObject::new("rect", Transform::default()), group];

    let first = sync_layers(&mut objects, &mut ids);
    let second = sync_layers(&mut objects, &mut ids);
    assert_eq!(first, second);
    assert_eq!(first[0].layer_type, LayerType::Group);
    assert_eq!(first[0].children[0].layer_type, LayerType::Text);
    assert_eq!(first[1].name, "Shape");
}
