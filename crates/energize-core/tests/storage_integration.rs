//! Integration tests for persisting application state through SQLite.

use energize_core::storage::kv::{KEY_CURRENT_ENERGY, KEY_SENSORY_MODE, KEY_TASKS};
use energize_core::{App, Database, EnergyLevel, KvStore, StateStore};
use tempfile::TempDir;

fn open_app(dir: &TempDir) -> App<Database> {
    let db = Database::open_at(&dir.path().join("energize.db")).unwrap();
    App::load(StateStore::new(db))
}

#[test]
fn state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let (kept, removed) = {
        let mut app = open_app(&dir);
        app.set_energy(EnergyLevel::Low);
        app.set_sensory_mode(true);
        let kept = app.add_task("Pay rent", EnergyLevel::Low).unwrap();
        let removed = app.add_task("Old idea", EnergyLevel::High).unwrap();
        app.toggle_task(&kept.id);
        app.delete_task(&removed.id);
        (kept, removed)
    };

    let app = open_app(&dir);
    assert_eq!(app.current_energy(), EnergyLevel::Low);
    assert!(app.sensory_mode());
    assert_eq!(app.tasks().len(), 1);
    let task = app.tasks().get(&kept.id).unwrap();
    assert!(task.completed);
    assert_eq!(task.created_at, kept.created_at);
    assert!(app.tasks().get(&removed.id).is_none());
}

#[test]
fn insertion_order_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = open_app(&dir);
        for title in ["one", "two", "three"] {
            app.add_task(title, EnergyLevel::Medium);
        }
    }
    let app = open_app(&dir);
    let titles: Vec<_> = app.tasks().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[test]
fn malformed_records_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    {
        let db = Database::open_at(&dir.path().join("energize.db")).unwrap();
        db.set(KEY_CURRENT_ENERGY, "supercharged").unwrap();
        db.set(KEY_TASKS, "[{\"id\": 1}]").unwrap();
        db.set(KEY_SENSORY_MODE, "on").unwrap();
    }
    let app = open_app(&dir);
    assert_eq!(app.current_energy(), EnergyLevel::Medium);
    assert!(app.tasks().is_empty());
    assert!(!app.sensory_mode());
}

#[test]
fn reads_records_written_by_other_frontends() {
    let dir = TempDir::new().unwrap();
    {
        let db = Database::open_at(&dir.path().join("energize.db")).unwrap();
        db.set(KEY_CURRENT_ENERGY, "burnout").unwrap();
        db.set(
            KEY_TASKS,
            r#"[{"id":"7c1","title":"Stretch","completed":false,"energyRequired":"burnout","createdAt":"2024-05-02T08:00:00.000Z","priority":"medium"}]"#,
        )
        .unwrap();
        db.set(KEY_SENSORY_MODE, "false").unwrap();
    }
    let app = open_app(&dir);
    assert_eq!(app.current_energy(), EnergyLevel::Burnout);
    let buckets = app.buckets();
    assert_eq!(buckets.perfect.len(), 1);
    assert_eq!(buckets.perfect[0].title, "Stretch");
}
