use folio_core::item::build_items;
use folio_core::{GalleryContent, ItemId, RawItem};
use glam::Vec3;

#[test]
fn id_is_a_stable_uuid_v5_of_the_url() {
    let a = ItemId::from_url("https://img.example/a.jpg");
    let again = ItemId::from_url("https://img.example/a.jpg");
    let b = ItemId::from_url("https://img.example/b.jpg");
    assert_eq!(a, again);
    assert_ne!(a, b);
    let s = a.as_str();
    assert_eq!(s.len(), 36);
    assert_eq!(s.as_bytes()[14], b'5', "version nibble");
    assert_eq!(a.to_string(), s);
}

#[test]
fn duplicate_urls_still_get_unique_ids() {
    let content = GalleryContent {
        items: vec![
            RawItem::new("https://img.example/same.jpg"),
            RawItem::new("https://img.example/same.jpg"),
            RawItem::new("https://img.example/other.jpg"),
        ],
        logo_url: None,
    };
    let items = build_items(&content, 3.5);
    assert_eq!(items[0].id, ItemId::from_url("https://img.example/same.jpg"));
    assert_ne!(items[0].id, items[1].id);
    assert_eq!(items[1].id, ItemId::from_url("https://img.example/same.jpg#1"));
    // rebuilding gives the same ids
    let again = build_items(&content, 3.5);
    assert_eq!(
        items.iter().map(|i| &i.id).collect::<Vec<_>>(),
        again.iter().map(|i| &i.id).collect::<Vec<_>>()
    );

    // a literal url that matches a later duplicate's fallback id
    let tricky = GalleryContent {
        items: vec![
            RawItem::new("a.jpg#2"),
            RawItem::new("a.jpg"),
            RawItem::new("a.jpg"),
        ],
        logo_url: None,
    };
    let items = build_items(&tricky, 3.5);
    assert_ne!(items[0].id, items[2].id);
    assert_ne!(items[1].id, items[2].id);
    assert_ne!(items[0].id, items[1].id);
}

#[test]
fn descriptors_carry_through() {
    let content = GalleryContent {
        items: vec![RawItem {
            url: "https://img.example/a.jpg".into(),
            name: Some("Harbour 1".into()),
            slug: Some("harbour".into()),
        }],
        logo_url: None,
    };
    let items = build_items(&content, 2.0);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Harbour 1");
    assert_eq!(items[0].slug.as_deref(), Some("harbour"));
    assert_eq!(items[0].url, "https://img.example/a.jpg");
    assert_eq!(items[0].position, Vec3::new(0.0, 0.0, -2.0));
}

#[test]
fn local_points_follow_the_item_transform() {
    let content = GalleryContent {
        items: (0..3)
            .map(|i| RawItem::new(format!("https://img.example/{i}.jpg")))
            .collect(),
        logo_url: None,
    };
    let items = build_items(&content, 3.5);
    let offset = Vec3::new(0.0, -0.5, 0.0);
    // leftmost frame at x = -r faces +X
    let p = items[0].local_to_world(Vec3::new(0.0, 0.0, 1.0), offset);
    assert!(p.abs_diff_eq(Vec3::new(-2.5, -0.5, 0.0), 1e-5));
}
