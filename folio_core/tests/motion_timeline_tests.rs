//! Timeline tests for mounted animations, driven by tokio's paused clock.

use std::time::Duration;

use folio_core::{
    CounterTiming, CyclePhase, CyclerTiming, Mounted, ProgressCounter, Rect, TextCycler,
    VisibilitySignal, Viewport,
};
use pretty_assertions::assert_eq;
use tokio::time::{advance, sleep};

/// Lets spawned timer tasks run at the current instant.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_go_rust_timeline() {
    let hero = Mounted::spawn("hero", TextCycler::new(["Go", "Rust"], CyclerTiming::default()));
    settle().await;

    sleep(Duration::from_millis(200)).await;
    settle().await;
    let frame = hero.current();
    assert_eq!(frame.text, "Go");
    assert_eq!(frame.role_index, 0);

    // One more type tick notices the full word, then the hold starts
    sleep(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(hero.current().phase, CyclePhase::Holding);

    sleep(Duration::from_millis(1990)).await;
    settle().await;
    assert_eq!(hero.current().text, "Go");

    // Hold ends at 2300ms, deletes land at 2350ms and 2400ms
    sleep(Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(hero.current().phase, CyclePhase::Deleting);

    sleep(Duration::from_millis(50)).await;
    settle().await;
    assert_eq!(hero.current().text, "G");

    sleep(Duration::from_millis(50)).await;
    settle().await;
    assert_eq!(hero.current().text, "");
    assert_eq!(hero.current().role_index, 0);

    sleep(Duration::from_millis(50)).await;
    settle().await;
    assert_eq!(hero.current().role_index, 1);
    assert_eq!(hero.current().phase, CyclePhase::Typing);

    sleep(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(hero.current().text, "R");
}

#[tokio::test(start_paused = true)]
async fn test_counter_waits_for_visibility() {
    let signal = VisibilitySignal::new();
    let skill = Mounted::spawn_when_visible(
        "python",
        ProgressCounter::new(95, CounterTiming::default()),
        &signal,
    );

    sleep(Duration::from_secs(3)).await;
    settle().await;
    assert_eq!(skill.current().value, 0);
    assert!(skill.is_running());

    let viewport = Viewport::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
    let section = Rect::new(0.0, 1500.0, 1280.0, 900.0);
    assert!(!viewport.observe(&section, &signal));
    assert!(viewport.observe(&section.translated_y(-1200.0), &signal));

    sleep(Duration::from_millis(1000)).await;
    settle().await;
    let midway = skill.current().value;
    assert!(midway > 30 && midway < 95, "midway value {midway}");

    sleep(Duration::from_millis(1100)).await;
    settle().await;
    let done = skill.current();
    assert_eq!(done.value, 95);
    assert!(done.finished);
    assert!(!skill.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_counter_values_never_decrease_or_overshoot() {
    let signal = VisibilitySignal::new();
    signal.report(true);
    let mut skill = Mounted::spawn_when_visible(
        "docker",
        ProgressCounter::new(92, CounterTiming::default()),
        &signal,
    );

    let started = tokio::time::Instant::now();
    let mut last = 0;
    while skill.changed().await {
        let value = skill.current().value;
        assert!(value >= last);
        assert!(value <= 92);
        last = value;
    }
    assert_eq!(last, 92);

    let elapsed = started.elapsed();
    assert!(elapsed <= Duration::from_millis(2000 + 16), "took {elapsed:?}");
    assert!(elapsed >= Duration::from_millis(2000 - 16), "took {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_full_counter_stops_ticking_at_hundred() {
    let signal = VisibilitySignal::new();
    signal.report(true);
    let mut skill = Mounted::spawn_when_visible(
        "aws",
        ProgressCounter::new(100, CounterTiming::default()),
        &signal,
    );

    while skill.changed().await {}
    assert_eq!(skill.current().value, 100);

    // No timer remains, so nothing changes however far the clock moves
    advance(Duration::from_secs(10)).await;
    assert_eq!(skill.current().value, 100);
    assert!(!skill.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_zero_level_renders_immediately() {
    let signal = VisibilitySignal::new();
    let skill = Mounted::spawn_when_visible(
        "cobol",
        ProgressCounter::new(0, CounterTiming::default()),
        &signal,
    );
    assert_eq!(skill.current().value, 0);
    assert!(skill.current().finished);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_a_cycler_stops_its_timer() {
    let hero = Mounted::spawn("hero", TextCycler::new(["Platform"], CyclerTiming::default()));
    let rx = hero.subscribe();

    sleep(Duration::from_millis(350)).await;
    settle().await;
    let before = rx.borrow().clone();
    assert_eq!(before.text, "Pla");

    drop(hero);
    sleep(Duration::from_secs(30)).await;
    settle().await;
    assert_eq!(*rx.borrow(), before);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_before_visible_never_starts() {
    let signal = VisibilitySignal::new();
    let skill = Mounted::spawn_when_visible(
        "jenkins",
        ProgressCounter::new(85, CounterTiming::default()),
        &signal,
    );
    let rx = skill.subscribe();
    skill.unmount().await;

    signal.report(true);
    sleep(Duration::from_secs(3)).await;
    settle().await;
    assert_eq!(rx.borrow().value, 0);
}
