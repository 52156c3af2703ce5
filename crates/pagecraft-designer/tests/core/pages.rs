use pagecraft_designer::model::{Background, Document, IdGenerator, Layer, LayerType, Page};
use pagecraft_designer::transform::Transform;
use pagecraft_designer::DesignerError;

fn document(ids: &[&str], current: usize) -> Document {
    let pages = ids
        .iter()
        .enumerate()
        .map(|(i, id)| Page::new(*id, format!("Page {}", i + 1), 1080, 1080))
        .collect();
    Document::with_pages(pages, current).unwrap()
}

fn page_ids(doc: &Document) -> Vec<String> {
    doc.pages().iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_add_page_scenario() {
    let mut doc = document(&["p1"], 0);
    let mut ids = doc.id_generator();
    doc.add_page(&mut ids);

    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.current_page_index(), 1);
    let added = doc.current_page();
    assert_eq!((added.width, added.height), (1080, 1080));
    assert_ne!(added.id, "p1");
}

#[test]
fn test_delete_page_scenario() {
    let mut doc = document(&["p1", "p2", "p3"], 2);
    let removed = doc.delete_page(0).unwrap();
    assert_eq!(removed.id, "p1");
    assert_eq!(doc.page_count(), 2);
    assert_eq!(doc.current_page_index(), 1);
    assert_eq!(doc.current_page().id, "p3");
}

#[test]
fn test_delete_last_remaining_page_fails() {
    let mut doc = document(&["p1"], 0);
    assert!(matches!(doc.delete_page(0), Err(DesignerError::LastPage)));
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn test_duplicate_current_page_moves_to_copy() {
    let mut doc = document(&["p1", "p2"], 0);
    doc.page_mut(0).unwrap().background = Background::Transparent;
    doc.page_mut(0).unwrap().layers.push(Layer::new(
        "l1",
        "Image 1",
        LayerType::Image,
        Transform::new(0.0, 0.0, 100.0, 100.0),
    ));
    let mut ids = doc.id_generator();
    let copy = doc.duplicate_page(0, &mut ids).unwrap();

    assert_eq!(copy, 1);
    assert_eq!(doc.current_page_index(), 1);
    let page = doc.current_page();
    assert_eq!(page.background, Background::Transparent);
    assert_eq!(page.layers.len(), 1);
    assert_ne!(page.layers[0].id, "l1");
    assert_eq!(page.layers[0].name, "Image 1");
}

#[test]
fn test_duplicate_out_of_range() {
    let mut doc = document(&["p1"], 0);
    let mut ids = IdGenerator::new();
    assert!(doc.duplicate_page(3, &mut ids).is_err());
    assert_eq!(doc.page_count(), 1);
}

#[test]
fn test_reorder_pages_preserves_ids() {
    let mut doc = document(&["p1", "p2", "p3", "p4"], 2);
    doc.reorder_pages(3, 0).unwrap();
    assert_eq!(page_ids(&doc), ["p4", "p1", "p2", "p3"]);
    assert_eq!(doc.current_page().id, "p3");

    doc.reorder_pages(3, 1).unwrap();
    assert_eq!(page_ids(&doc), ["p4", "p3", "p1", "p2"]);
    assert_eq!(doc.current_page_index(), 1);
}
