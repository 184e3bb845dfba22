use folio_core::scene::StarField;
use folio_core::{
    Effect, GalleryContent, InteractionState, MemoryRoute, RawItem, RouteSignal, Stage,
    StageConfig,
};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn small_config() -> StageConfig {
    StageConfig {
        star_count: 10,
        ..StageConfig::default()
    }
}

fn content(n: usize, logo: bool) -> GalleryContent {
    GalleryContent {
        items: (0..n)
            .map(|i| RawItem::new(format!("https://img.example/{i}.jpg")))
            .collect(),
        logo_url: logo.then(|| "https://img.example/logo.svg".to_owned()),
    }
}

fn stage(n: usize) -> (Stage<MemoryRoute>, MemoryRoute) {
    let route = MemoryRoute::new();
    let mut stage = Stage::new(small_config(), route.clone());
    stage.set_content(&content(n, false), 0.0);
    (stage, route)
}

#[test]
fn centre_of_the_view_picks_the_middle_frame() {
    let (stage, _) = stage(9);
    let middle = stage.gallery().items()[4].id.clone();
    assert_eq!(stage.pick(Vec2::ZERO, 1.0), Some(middle));
}

#[test]
fn sky_click_misses_every_frame() {
    let (mut stage, _) = stage(9);
    assert_eq!(stage.pick(Vec2::new(0.0, 0.95), 1.0), None);
    stage.click(Vec2::new(0.0, 0.95), 1.0, 0.0);
    assert_eq!(stage.gallery().state(), InteractionState::Browsing);
}

#[test]
fn click_focuses_then_frames_drive_back_to_browsing() {
    let (mut stage, route) = stage(9);
    let middle = stage.gallery().items()[4].id.clone();
    stage.click(Vec2::ZERO, 1.0, 0.0);
    assert_eq!(stage.gallery().state(), InteractionState::Focused(middle.clone()));
    assert_eq!(route.get().as_deref(), Some(middle.as_str()));

    let mut now = 0.0;
    let mut effects = Vec::new();
    for _ in 0..120 {
        now += DT as f64;
        effects.extend(stage.frame(now, DT));
    }
    assert!(effects.contains(&Effect::SubscribeWheel));
    assert!(effects.contains(&Effect::FocusChanged(true)));

    stage.gallery_mut().click_background(now);
    assert_eq!(stage.gallery().state(), InteractionState::Returning);
    for _ in 0..180 {
        now += DT as f64;
        effects.extend(stage.frame(now, DT));
    }
    assert_eq!(stage.gallery().state(), InteractionState::Browsing);
    assert_eq!(effects.last(), Some(&Effect::FocusChanged(false)));
    assert!(effects.contains(&Effect::ClearActiveMarkers));
}

#[test]
fn projection_follows_the_same_frames_fov() {
    let (mut stage, _) = stage(3);
    let id = stage.gallery().items()[1].id.clone();
    stage.gallery_mut().click_item(&id, 0.0);
    stage.gallery_mut().choreographer_mut().take_projection_dirty();
    stage.frame(DT as f64, DT);
    let choreo = stage.gallery_mut().choreographer_mut();
    assert!(choreo.take_projection_dirty());
    assert!(choreo.camera().fov_deg > 50.0);
}

#[test]
fn ambience_runs_in_every_state() {
    let (mut stage, _) = stage(3);
    stage.frame(0.5, 0.5);
    let t0 = stage.ambience().elapsed();
    let id = stage.gallery().items()[0].id.clone();
    stage.gallery_mut().click_item(&id, 0.5);
    stage.frame(1.0, 0.5);
    assert!(stage.ambience().elapsed() > t0);
}

#[test]
fn pointer_feeds_the_idle_rig() {
    let (mut stage, _) = stage(3);
    stage.set_pointer(Vec2::new(3.0, -0.5));
    assert_eq!(stage.rig().pointer(), Vec2::new(1.0, -0.5));
    let x0 = stage.gallery().choreographer().camera().position.x;
    for i in 0..60 {
        stage.frame(i as f64 * DT as f64, DT);
    }
    assert!(stage.gallery().choreographer().camera().position.x > x0);
}

#[test]
fn hover_tracks_the_pointer_over_frames() {
    let (mut stage, _) = stage(9);
    stage.pointer_over(Vec2::ZERO, 1.0);
    assert_eq!(
        stage.gallery().hovered(),
        Some(&stage.gallery().items()[4].id)
    );
    stage.pointer_over(Vec2::new(0.0, 0.95), 1.0);
    assert_eq!(stage.gallery().hovered(), None);
}

#[test]
fn draw_list_holds_frames_and_background() {
    let (mut stage, _) = stage(4);
    let mut out = Vec::new();
    stage.draw_list(&mut out);
    // three boxes per frame, stars, light, planet and moon
    assert_eq!(out.len(), 4 * 3 + 10 + 3);

    stage.set_content(&content(2, true), 1.0);
    stage.draw_list(&mut out);
    assert_eq!(out.len(), 2 * 3 + 10 + 3 + 1);

    stage.set_content(&GalleryContent::empty(), 2.0);
    stage.draw_list(&mut out);
    assert_eq!(out.len(), 10 + 3);
}

#[test]
fn star_field_is_seeded() {
    let a = StarField::generate(50, 7);
    let b = StarField::generate(50, 7);
    let c = StarField::generate(50, 8);
    assert_eq!(a.points(), b.points());
    assert_ne!(a.points(), c.points());
    for p in a.points() {
        let r = p.length();
        assert!((99.0..=151.0).contains(&r), "star radius {r}");
    }
}
