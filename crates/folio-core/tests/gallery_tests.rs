use folio_core::constants::{IMAGE_SCALE_HOVER, IMAGE_SCALE_IDLE};
use folio_core::{
    Effect, FocusTarget, Gallery, GalleryContent, InteractionState, ItemId, MemoryRoute,
    PointerRig, RawItem, RouteSignal, StageConfig,
};
use glam::{Vec2, Vec3};

fn content(n: usize) -> GalleryContent {
    GalleryContent {
        items: (0..n)
            .map(|i| RawItem::new(format!("https://img.example/{i}.jpg")))
            .collect(),
        logo_url: Some("https://img.example/logo.svg".into()),
    }
}

fn gallery_with(n: usize) -> (Gallery<MemoryRoute>, MemoryRoute, PointerRig) {
    let config = StageConfig::default();
    let rig = PointerRig::new(&config);
    let route = MemoryRoute::new();
    let mut gallery = Gallery::new(config, route.clone(), &rig);
    gallery.set_content(&content(n), 0.0);
    (gallery, route, rig)
}

fn id(gallery: &Gallery<MemoryRoute>, i: usize) -> ItemId {
    gallery.items()[i].id.clone()
}

/// Run the return timeline far enough for it to settle.
fn settle(gallery: &mut Gallery<MemoryRoute>, rig: &mut PointerRig, now: f64) {
    gallery.choreographer_mut().advance_timeline(now + 1.5, rig);
    gallery.choreographer_mut().advance_timeline(now + 2.0, rig);
}

#[test]
fn nine_descriptors_become_nine_items_on_the_arc() {
    let (gallery, _, _) = gallery_with(9);
    let r = gallery.config().layout_radius;
    assert_eq!(gallery.items().len(), 9);
    assert_eq!(gallery.visuals().len(), 9);
    assert!(gallery.items()[4]
        .position
        .abs_diff_eq(Vec3::new(0.0, 0.0, -r), 1e-5));
    let names: Vec<_> = gallery.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names[0], "Frame 1");
    assert_eq!(names[8], "Frame 9");
    assert_eq!(gallery.logo_url(), Some("https://img.example/logo.svg"));
}

#[test]
fn empty_content_is_a_valid_gallery() {
    let (mut gallery, route, _) = gallery_with(0);
    assert!(gallery.items().is_empty());
    gallery.click_background(1.0);
    gallery.wheel(-100.0, 1.0);
    gallery.sync_route(1.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
    assert_eq!(route.get(), None);
}

#[test]
fn clicking_a_frame_focuses_it_and_writes_the_route() {
    let (mut gallery, route, _) = gallery_with(3);
    let a = id(&gallery, 1);
    gallery.click_item(&a, 0.0);
    assert_eq!(gallery.state(), InteractionState::Focused(a.clone()));
    assert!(gallery.is_focused());
    assert_eq!(route.get().as_deref(), Some(a.as_str()));
    assert_eq!(gallery.selected().map(|i| &i.id), Some(&a));
    assert!(gallery
        .take_effects()
        .contains(&Effect::FocusChanged(true)));
}

#[test]
fn selecting_a_then_b_resolves_to_b() {
    let (mut gallery, route, _) = gallery_with(5);
    let a = id(&gallery, 0);
    let b = id(&gallery, 3);
    gallery.click_item(&a, 0.0);
    gallery.click_item(&b, 0.01);
    assert_eq!(gallery.state(), InteractionState::Focused(b.clone()));
    assert_eq!(route.get().as_deref(), Some(b.as_str()));
    let item_b = gallery.item(b.as_str()).cloned().unwrap();
    assert_eq!(
        gallery.choreographer().focus_target().cloned().unwrap(),
        FocusTarget::for_item(&item_b, gallery.config())
    );
    let effects = gallery.take_effects();
    assert_eq!(
        effects
            .iter()
            .filter(|e| matches!(e, Effect::FocusChanged(_)))
            .count(),
        1,
        "signal raised once and never dropped"
    );
}

#[test]
fn reclicking_returns_then_browses_and_the_signal_drops_last() {
    let (mut gallery, route, mut rig) = gallery_with(3);
    let a = id(&gallery, 2);
    gallery.click_item(&a, 0.0);
    gallery.take_effects();

    gallery.click_item(&a, 1.0);
    assert_eq!(gallery.state(), InteractionState::Returning);
    assert_eq!(route.get(), None);
    assert!(gallery.is_focused());
    assert!(!gallery
        .take_effects()
        .contains(&Effect::FocusChanged(false)));

    settle(&mut gallery, &mut rig, 1.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
    assert!(!gallery.is_focused());
    assert!(gallery
        .take_effects()
        .contains(&Effect::FocusChanged(false)));
}

#[test]
fn background_click_releases_focus() {
    let (mut gallery, route, _) = gallery_with(3);
    let a = id(&gallery, 0);
    gallery.click_item(&a, 0.0);
    gallery.click_background(0.5);
    assert_eq!(gallery.state(), InteractionState::Returning);
    assert_eq!(route.get(), None);
}

#[test]
fn wheel_up_is_ignored_while_browsing() {
    let (mut gallery, route, _) = gallery_with(3);
    gallery.wheel(-240.0, 0.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
    assert!(gallery.take_effects().is_empty());
    assert_eq!(route.get(), None);
}

#[test]
fn wheel_up_while_focused_releases_and_clears_the_route() {
    let (mut gallery, route, _) = gallery_with(3);
    let a = id(&gallery, 1);
    gallery.click_item(&a, 0.0);
    gallery.take_effects();
    gallery.wheel(-1.0, 0.2);
    assert_eq!(gallery.state(), InteractionState::Returning);
    assert_eq!(route.get(), None);
    assert_eq!(gallery.take_effects().as_slice(), &[Effect::UnsubscribeWheel]);
}

#[test]
fn external_navigation_selects_and_deselects() {
    let (mut gallery, route, _) = gallery_with(4);
    let b = id(&gallery, 3);
    route.set(Some(b.as_str()));
    gallery.sync_route(0.0);
    assert_eq!(gallery.state(), InteractionState::Focused(b.clone()));

    route.set(None);
    gallery.sync_route(1.0);
    assert_eq!(gallery.state(), InteractionState::Returning);
}

#[test]
fn own_route_writes_are_not_replayed() {
    let (mut gallery, _, _) = gallery_with(3);
    let a = id(&gallery, 0);
    gallery.click_item(&a, 0.0);
    gallery.take_effects();
    gallery.sync_route(0.1);
    assert_eq!(gallery.state(), InteractionState::Focused(a));
    assert!(gallery.take_effects().is_empty());
}

#[test]
fn unknown_route_id_waits_for_content() {
    let config = StageConfig::default();
    let rig = PointerRig::new(&config);
    let route = MemoryRoute::new();
    let mut gallery = Gallery::new(config, route.clone(), &rig);

    let wanted = ItemId::from_url("https://img.example/1.jpg");
    route.set(Some(wanted.as_str()));
    gallery.sync_route(0.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
    assert!(gallery.choreographer().focus_target().is_none());
    assert_eq!(gallery.pending_selection(), Some(wanted.as_str()));

    gallery.set_content(&content(3), 0.5);
    assert_eq!(gallery.state(), InteractionState::Focused(wanted));
    assert_eq!(gallery.pending_selection(), None);
}

#[test]
fn clicking_a_frame_supersedes_a_waiting_route_id() {
    let (mut gallery, route, _) = gallery_with(3);
    let later = ItemId::from_url("https://img.example/5.jpg");
    route.set(Some(later.as_str()));
    gallery.sync_route(0.0);
    assert_eq!(gallery.pending_selection(), Some(later.as_str()));

    let a = id(&gallery, 0);
    gallery.click_item(&a, 0.1);
    assert_eq!(gallery.pending_selection(), None);
    assert_eq!(route.get().as_deref(), Some(a.as_str()));

    gallery.set_content(&content(6), 0.5);
    assert_eq!(gallery.state(), InteractionState::Focused(a.clone()));
    assert_eq!(route.get().as_deref(), Some(a.as_str()));
}

#[test]
fn bogus_route_id_never_focuses() {
    let (mut gallery, route, _) = gallery_with(3);
    route.set(Some("not-an-item"));
    gallery.sync_route(0.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
    gallery.set_content(&content(2), 1.0);
    assert_eq!(gallery.state(), InteractionState::Browsing);
}

#[test]
fn replacing_content_releases_a_vanished_focus() {
    let (mut gallery, route, _) = gallery_with(5);
    let last = id(&gallery, 4);
    gallery.click_item(&last, 0.0);
    gallery.set_content(&content(2), 0.5);
    assert_eq!(gallery.state(), InteractionState::Returning);
    assert_eq!(route.get(), None);
}

#[test]
fn replacing_content_refreshes_a_surviving_focus() {
    let (mut gallery, _, _) = gallery_with(5);
    let first = id(&gallery, 0);
    gallery.click_item(&first, 0.0);
    let old_anchor = gallery.choreographer().focus_target().unwrap().anchor;

    // same first URL, different count: the slot moves
    gallery.set_content(&content(3), 0.5);
    assert_eq!(gallery.state(), InteractionState::Focused(first.clone()));
    let item = gallery.item(first.as_str()).cloned().unwrap();
    let target = gallery.choreographer().focus_target().cloned().unwrap();
    assert_eq!(target, FocusTarget::for_item(&item, gallery.config()));
    // -π/2 slot is the same for any count, so the anchor is unchanged
    assert!(target.anchor.abs_diff_eq(old_anchor, 1e-5));
}

#[test]
fn hover_highlight_eases_independently_of_focus() {
    let (mut gallery, _, _) = gallery_with(3);
    let a = id(&gallery, 0);
    let b = id(&gallery, 1);
    gallery.hover(Some(&a));
    assert_eq!(gallery.hovered(), Some(&a));
    for _ in 0..120 {
        gallery.update_visuals(1.0 / 60.0);
    }
    let hovered = gallery.visuals()[0];
    assert!(hovered
        .image_scale
        .abs_diff_eq(Vec2::from_array(IMAGE_SCALE_HOVER), 1e-3));
    assert!(hovered.tint < 0.9);
    assert_eq!(gallery.state(), InteractionState::Browsing);

    // the active frame keeps its idle scale under the pointer
    gallery.click_item(&b, 0.0);
    gallery.hover(Some(&b));
    for _ in 0..120 {
        gallery.update_visuals(1.0 / 60.0);
    }
    assert!(gallery.visuals()[1]
        .image_scale
        .abs_diff_eq(Vec2::from_array(IMAGE_SCALE_IDLE), 1e-3));
    assert!(gallery.visuals()[0]
        .image_scale
        .abs_diff_eq(Vec2::from_array(IMAGE_SCALE_IDLE), 1e-3));

    gallery.hover(None);
    assert_eq!(gallery.hovered(), None);
}

#[test]
fn hover_on_unknown_item_is_ignored() {
    let (mut gallery, _, _) = gallery_with(2);
    gallery.hover(Some(&ItemId::from_url("https://elsewhere.example/x.png")));
    assert_eq!(gallery.hovered(), None);
}
