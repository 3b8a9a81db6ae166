use std::time::Duration;

use revolve_core::{
    CarouselConfig, CarouselController, CarouselError, CarouselKey,
    CarouselState, Cause, IgnoreReason, Indicators, OrbitLayout, PageLayout,
    Phase, RecordingSurface, Transition, TripleLayout,
};
use tokio::time::advance;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn destinations(n: usize) -> CarouselState<usize, OrbitLayout> {
    CarouselState::new(
        (0..n).collect(),
        OrbitLayout::default(),
        CarouselConfig::destinations_defaults(),
    )
    .expect("valid carousel")
}

#[tokio::test(start_paused = true)]
async fn initial_render_reaches_the_surface() {
    let surface = RecordingSurface::new();
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(8),
        surface.clone(),
    );

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current, 0);
    assert_eq!(snapshot.positions, 8);
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.auto_advance, Some(ms(4_000)));

    let frames = surface.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].active, 0);
    assert_eq!(
        surface.last_indicators(),
        Some(Indicators {
            count: 8,
            active: 0
        })
    );

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn eight_item_scenario_with_lock_gaps() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(8),
        RecordingSurface::new(),
    );
    handle.stop_auto_advance().await.unwrap();

    for _ in 0..3 {
        assert!(handle.next().await.unwrap().is_moved());
        advance(ms(600)).await;
    }
    assert_eq!(handle.snapshot().await.unwrap().current, 3);

    handle.previous().await.unwrap();
    advance(ms(600)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 2);

    let jump = handle.go_to(7).await.unwrap();
    assert_eq!(
        jump,
        Transition::Moved {
            from: 2,
            to: 7,
            cause: Cause::Select
        }
    );
    advance(ms(600)).await;

    handle.next().await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().current, 0);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn requests_during_a_transition_are_dropped() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(5),
        RecordingSurface::new(),
    );

    handle.next().await.unwrap();
    let locked = Transition::Ignored {
        reason: IgnoreReason::Locked,
    };
    assert_eq!(handle.next().await.unwrap(), locked);
    assert_eq!(handle.previous().await.unwrap(), locked);
    assert_eq!(handle.go_to(3).await.unwrap(), locked);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current, 1);
    assert_eq!(snapshot.phase, Phase::Transitioning);

    advance(ms(599)).await;
    assert_eq!(handle.snapshot().await.unwrap().phase, Phase::Transitioning);
    advance(ms(1)).await;
    assert_eq!(handle.snapshot().await.unwrap().phase, Phase::Idle);

    assert!(handle.next().await.unwrap().is_moved());
    assert_eq!(handle.snapshot().await.unwrap().current, 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn auto_advance_moves_on_its_period() {
    let surface = RecordingSurface::new();
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(3),
        surface.clone(),
    );

    advance(ms(4_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 1);
    advance(ms(4_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 2);
    advance(ms(4_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 0);

    // Initial render plus one per tick.
    assert_eq!(surface.frames().len(), 4);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn tick_during_transition_is_skipped_without_extending_the_lock() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(8),
        RecordingSurface::new(),
    );

    // Manual move at t=3700 locks until t=4300.
    advance(ms(3_700)).await;
    handle.next().await.unwrap();

    // The tick at t=4000 lands inside the lock and is dropped.
    advance(ms(300)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current, 1);
    assert_eq!(snapshot.phase, Phase::Transitioning);

    // The lock still ends at t=4300, not 600ms after the dropped tick.
    advance(ms(300)).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current, 1);
    assert_eq!(snapshot.phase, Phase::Idle);

    // The next tick at t=8000 advances normally.
    advance(ms(3_700)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn paged_mode_is_instant_and_has_no_timer() {
    let surface = RecordingSurface::new();
    let state = CarouselState::new(
        (0..8).collect::<Vec<_>>(),
        PageLayout::new(4),
        CarouselConfig::partners_defaults(),
    )
    .unwrap();
    let handle =
        CarouselController::spawn(CarouselKey::Partners, state, surface.clone());

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.positions, 2);
    assert_eq!(snapshot.auto_advance, None);

    handle.next().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.current, 1);
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(surface.frames().last().unwrap().range, 4..8);

    // No lock: a second request goes through immediately.
    handle.next().await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().current, 0);
    assert_eq!(surface.frames().last().unwrap().range, 0..4);

    advance(ms(60_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 0);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn out_of_range_selection_is_an_error() {
    let surface = RecordingSurface::new();
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(4),
        surface.clone(),
    );

    let err = handle.go_to(9).await.unwrap_err();
    assert_eq!(
        err,
        CarouselError::IndexOutOfRange {
            index: 9,
            positions: 4
        }
    );
    // Nothing re-rendered and no lock taken.
    assert_eq!(surface.frames().len(), 1);
    assert_eq!(handle.snapshot().await.unwrap().phase, Phase::Idle);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn testimonial_roles_follow_the_cursor() {
    let surface = RecordingSurface::new();
    let state = CarouselState::new(
        (0..5).collect::<Vec<_>>(),
        TripleLayout,
        CarouselConfig::testimonials_defaults(),
    )
    .unwrap();
    let handle = CarouselController::spawn(
        CarouselKey::Testimonials,
        state,
        surface.clone(),
    );

    let first = surface.frames()[0];
    assert_eq!((first.previous, first.active, first.next), (4, 0, 1));

    advance(ms(6_000)).await;
    handle.snapshot().await.unwrap();
    let latest = *surface.frames().last().unwrap();
    assert_eq!((latest.previous, latest.active, latest.next), (0, 1, 2));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn auto_advance_can_be_stopped_and_restarted() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(4),
        RecordingSurface::new(),
    );

    handle.stop_auto_advance().await.unwrap();
    assert_eq!(handle.snapshot().await.unwrap().auto_advance, None);
    advance(ms(20_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 0);

    let period = handle.start_auto_advance(Some(ms(1_000))).await.unwrap();
    assert_eq!(period, Some(ms(1_000)));
    advance(ms(1_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 1);

    let period = handle.start_auto_advance(None).await.unwrap();
    assert_eq!(period, Some(ms(4_000)));

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn zero_period_disables_auto_advance() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(4),
        RecordingSurface::new(),
    );

    let period = handle.start_auto_advance(Some(Duration::ZERO)).await.unwrap();
    assert_eq!(period, None);
    assert_eq!(handle.snapshot().await.unwrap().auto_advance, None);

    advance(ms(10_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().current, 0);

    assert!(handle.next().await.unwrap().is_moved());
    assert_eq!(handle.snapshot().await.unwrap().current, 1);
    assert!(handle.is_running());

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn lock_ending_with_a_tick_releases_first() {
    let config = CarouselConfig::destinations_defaults()
        .with_transition_ms(Some(1_000))
        .with_auto_advance_ms(Some(1_000));
    let state =
        CarouselState::new((0..8).collect(), OrbitLayout::default(), config)
            .expect("valid carousel");
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        state,
        RecordingSurface::new(),
    );

    for expected in 1..=4 {
        advance(ms(1_000)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.current, expected);
        assert_eq!(snapshot.phase, Phase::Transitioning);
    }

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_published_snapshots() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(4),
        RecordingSurface::new(),
    );
    let mut updates = handle.subscribe();

    handle.go_to(2).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().current, 2);

    handle.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn dropped_handle_releases_the_task() {
    let handle = CarouselController::spawn(
        CarouselKey::Destinations,
        destinations(4),
        RecordingSurface::new(),
    );
    let mut updates = handle.subscribe();
    assert!(handle.is_running());

    drop(handle);

    // The snapshot sender lives in the task; it closes once the task is gone.
    assert!(updates.changed().await.is_err());
}
