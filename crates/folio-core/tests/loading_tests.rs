use folio_core::{AssetKind, LoadingEvent, LoadingTracker};

#[test]
fn nothing_registered_completes_after_the_idle_window() {
    let mut t = LoadingTracker::new(10.0);
    t.poll(10.5);
    assert!(!t.is_complete());
    assert!(t.take_events().is_empty());
    t.poll(11.0);
    assert!(t.is_complete());
    assert_eq!(t.take_events(), vec![LoadingEvent::Complete]);
    t.poll(12.0);
    assert!(t.take_events().is_empty(), "completes once");
}

#[test]
fn progress_counts_settled_assets() {
    let mut t = LoadingTracker::new(0.0);
    t.register(AssetKind::Image);
    t.register(AssetKind::Image);
    t.register(AssetKind::Svg);
    t.register(AssetKind::Texture);
    let counts = t.counts();
    assert_eq!((counts.images, counts.svgs, counts.textures, counts.models), (2, 1, 1, 0));
    assert_eq!(counts.total, 4);
    assert_eq!(t.take_events(), vec![LoadingEvent::Started]);

    t.settle(true);
    assert_eq!(t.progress(), 25.0);
    t.settle(false);
    t.settle(true);
    assert!(!t.is_complete());
    t.settle(true);
    assert!(t.is_complete());
    assert_eq!(t.progress(), 100.0);

    let events = t.take_events();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], LoadingEvent::Progress { percent, .. } if percent == 25.0));
    assert_eq!(events.last(), Some(&LoadingEvent::Complete));
}

#[test]
fn registered_assets_block_idle_completion() {
    let mut t = LoadingTracker::new(0.0);
    t.register(AssetKind::Model);
    t.poll(5.0);
    assert!(!t.is_complete());
    assert_eq!(t.progress(), 0.0);
}

#[test]
fn stray_settle_is_ignored() {
    let mut t = LoadingTracker::new(0.0);
    t.settle(true);
    assert_eq!(t.progress(), 0.0);
    assert!(t.take_events().is_empty());
}

#[test]
fn trackers_do_not_share_counts() {
    let mut a = LoadingTracker::new(0.0);
    let b = LoadingTracker::new(0.0);
    a.register(AssetKind::Image);
    assert_eq!(a.counts().total, 1);
    assert_eq!(b.counts().total, 0);
}
