//! Integration tests for the focus timer and its tick driver.

use std::time::Duration;

use energize_core::{Event, FocusTimer, ProgressBasis, SessionType, TimerDriver, TimerSettings};

fn state(t: &FocusTimer) -> (u32, u32, SessionType, bool) {
    (t.minutes(), t.seconds(), t.session_type(), t.is_active())
}

#[test]
fn focus_then_break_then_focus_cycle() {
    let mut timer = FocusTimer::default();

    timer.toggle();
    let mut completions = Vec::new();
    for _ in 0..=1500 {
        if let Some(event) = timer.tick() {
            completions.push(event);
        }
    }
    assert_eq!(state(&timer), (5, 0, SessionType::Break, false));
    assert_eq!(completions.len(), 1);

    timer.toggle();
    for _ in 0..=300 {
        timer.tick();
    }
    assert_eq!(state(&timer), (25, 0, SessionType::Focus, false));
}

#[test]
fn ticks_after_completion_are_ignored_until_restarted() {
    let mut timer = FocusTimer::at(TimerSettings::default(), SessionType::Focus, 0, 0);
    timer.toggle();
    assert!(timer.tick().is_some());
    for _ in 0..10 {
        assert!(timer.tick().is_none());
    }
    assert_eq!(state(&timer), (5, 0, SessionType::Break, false));
}

#[test]
fn reset_from_every_reachable_shape() {
    let settings = TimerSettings::default();
    let starts = [
        FocusTimer::default(),
        FocusTimer::at(settings.clone(), SessionType::Break, 3, 12),
        FocusTimer::at(settings.clone(), SessionType::Focus, 0, 0),
        FocusTimer::at(settings, SessionType::Focus, 44, 59),
    ];
    for mut timer in starts {
        timer.toggle();
        timer.tick();
        timer.reset();
        assert_eq!(state(&timer), (25, 0, SessionType::Focus, false));
    }
}

#[test]
fn custom_session_lengths_drive_transitions() {
    let settings = TimerSettings {
        focus_minutes: 50,
        break_minutes: 10,
        presets: vec![50],
        progress_basis: ProgressBasis::Session,
    };
    let mut timer = FocusTimer::at(settings, SessionType::Focus, 0, 0);
    assert_eq!(timer.settings().focus_minutes, 50);
    timer.toggle();
    timer.tick();
    assert_eq!(state(&timer), (10, 0, SessionType::Break, false));
    timer.reset();
    assert_eq!(state(&timer), (50, 0, SessionType::Focus, false));
}

#[tokio::test(start_paused = true)]
async fn driver_runs_a_short_break_to_completion() {
    let timer = FocusTimer::at(TimerSettings::default(), SessionType::Break, 0, 3);
    let (mut driver, mut rx) = TimerDriver::new(timer);
    assert!(matches!(driver.toggle(), Event::TimerStarted { remaining_secs: 3, .. }));

    let mut snapshots = 0;
    let completed = loop {
        match rx.recv().await.expect("driver channel closed") {
            Event::StateSnapshot { .. } => snapshots += 1,
            event @ Event::SessionCompleted { .. } => break event,
            other => panic!("unexpected event: {other:?}"),
        }
    };
    // 00:02, 00:01, 00:00, then the completing tick.
    assert_eq!(snapshots, 4);
    assert!(matches!(
        completed,
        Event::SessionCompleted {
            completed: SessionType::Break,
            next: SessionType::Focus,
            next_duration_secs: 1500,
            ..
        }
    ));
    assert_eq!(state(&driver.timer()), (25, 0, SessionType::Focus, false));
}

#[tokio::test(start_paused = true)]
async fn driver_resume_continues_from_paused_time() {
    let (mut driver, mut rx) = TimerDriver::with_period(FocusTimer::default(), Duration::from_millis(10));
    driver.toggle();
    for _ in 0..5 {
        rx.recv().await;
    }
    driver.toggle();
    assert_eq!(driver.timer().clock(), "24:55");

    driver.toggle();
    assert!(driver.is_ticking());
    rx.recv().await;
    assert_eq!(driver.timer().clock(), "24:54");
}
