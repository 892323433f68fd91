mod common;
use common::SimulationBuilder;
use soup_lib::app::App;
use soup_lib::model::config::{AppConfig, Ruleset};
use soup_lib::model::snapshot::WorldSnapshot;
use soup_lib::model::state::LiveEvent;
use soup_lib::ui::{paint, RecordingSurface};
use std::path::PathBuf;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("soup_{tag}_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn seeded(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.seed = Some(seed);
    config
}

#[test]
fn test_primordial_frame_has_only_cell_count() {
    let sim = SimulationBuilder::new()
        .with_config(|c| c.simulation.ruleset = Ruleset::Primordial)
        .build();
    let mut surface = RecordingSurface::new();
    paint(&sim, &mut surface);
    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(texts, vec!["Cells: 1"]);
}

#[test]
fn test_adaptive_frame_lists_environment_then_count() {
    let sim = SimulationBuilder::new().build();
    let mut surface = RecordingSurface::new();
    paint(&sim, &mut surface);
    let texts: Vec<_> = surface.texts().collect();
    assert_eq!(
        texts,
        vec![
            "Temperature: 25.0°C",
            "pH: 7.00",
            "O2: 21.0%",
            "CO2: 0.5%",
            "Brightness: 50.0%",
            "Cells: 1",
        ]
    );
}

#[test]
fn test_history_log_records_births() {
    let dir = scratch_dir("history");
    let mut config = seeded(3);
    config.simulation.reproduction_probability = 1.0;
    let mut app = App::new(config).unwrap().with_history(&dir).unwrap();
    app.run_headless(2_000).unwrap();

    let events = app.history.read_events().unwrap();
    assert!(events
        .iter()
        .any(|e| matches!(e, LiveEvent::Birth { gen: 1, .. })));
    assert!(events
        .iter()
        .any(|e| matches!(e, LiveEvent::Snapshot { .. })));
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_snapshot_file_matches_final_state() {
    let dir = scratch_dir("snapshot");
    let path = dir.join("final.json");
    let mut app = App::new(seeded(9)).unwrap();
    app.run_headless(5_000).unwrap();
    app.save_snapshot(&path).unwrap();

    let snap = WorldSnapshot::load(&path).unwrap();
    assert_eq!(snap.tick, app.sim.tick);
    assert_eq!(snap.cells.len(), app.sim.population());
    assert_eq!(snap.environment, *app.sim.env.values());
    assert_eq!(snap.ruleset, Ruleset::Adaptive);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_render_text_shows_overlay() {
    let app = App::new(seeded(1)).unwrap();
    let text = app.render_text(60, 20);
    assert!(text.contains("Cells: 1"));
    assert!(text.contains("●"));
}
