//! Whole-round behaviour through the public API

use balloon_typer::consts::REFERENCE_FRAME_MS;
use balloon_typer::sim::{Game, RoundPhase, intercept};
use balloon_typer::view::ViewEvent;
use balloon_typer::{Recorder, Settings, SoundEffect};
use glam::Vec2;

const DT: f32 = REFERENCE_FRAME_MS;

#[test]
fn test_full_round_with_typist() {
    let mut settings = Settings::default();
    settings.round.seed = 2024;
    let mut game = Game::new(settings);
    let mut view = Recorder::new();
    game.start(&mut view);

    let mut time = 0.0f64;
    let mut frames = 0u32;
    let mut last_score = 0;
    while game.phase() == RoundPhase::Running {
        if frames % 15 == 0 {
            let letters: Vec<char> = game
                .balloons()
                .iter()
                .filter(|b| !b.hit && b.pos.y < 600.0)
                .map(|b| b.letter)
                .collect();
            for letter in letters {
                game.handle_key(letter, &mut view);
            }
        }
        time += DT as f64;
        game.update(time, DT, &mut view);
        frames += 1;

        assert!(game.score() >= last_score, "score never decreases");
        last_score = game.score();
        assert!(frames < 60 * 70, "round must end after its countdown");
    }

    assert_eq!(game.timer(), 0);
    assert_eq!(view.game_over_count(), 1);
    assert_eq!(view.sounds(SoundEffect::GameOver), 1);
    assert!(game.score() > 0);
    // every point comes with exactly one pop effect and sound
    assert_eq!(game.score() as usize, view.explosions());
    assert_eq!(game.score() as usize, view.sounds(SoundEffect::Pop));
    // five ramps over sixty seconds
    assert!(game.difficulty_level() >= 5);
    assert!(game.spawn_interval_ms() < 1500.0);
    assert!(game.spawn_interval_ms() >= 500.0);

    // Frozen after game over
    let snapshot = game.balloons().to_vec();
    game.update(time + 1000.0, DT, &mut view);
    assert_eq!(game.balloons(), snapshot.as_slice());
}

#[test]
fn test_scenario_q_balloon() {
    let mut settings = Settings::default();
    settings.round.initial_spawn_interval_ms = 1.0e9;
    settings.round.spawn_interval_floor_ms = 1.0e9;
    let mut game = Game::new(settings);
    let mut view = Recorder::new();

    game.spawn_balloon_at(Vec2::new(400.0, 650.0), 'Q', &mut view);
    assert_eq!(game.handle_key('Q', &mut view), 1);

    let bird = &game.birds()[0];
    assert_eq!(bird.pos, Vec2::new(-20.0, 620.0));
    let shot = intercept::solve(Vec2::new(-20.0, 620.0), Vec2::new(400.0, 650.0), 1.0, 4.0, -20.0);
    assert!(shot.time >= 0.0);
    assert!(shot.target.y <= 650.0);
    assert_eq!(bird.target, shot.target);

    assert!(
        view.events
            .iter()
            .any(|e| matches!(e, ViewEvent::BirdSpawned { .. }))
    );
}

#[test]
fn test_settings_file_drives_round() {
    let path = std::env::temp_dir().join(format!("balloon_typer_round_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "round": { "start_timer_seconds": 1, "seed": 3 } }"#).unwrap();
    let settings = Settings::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let mut game = Game::new(settings);
    let mut view = Recorder::new();
    game.start(&mut view);
    assert_eq!(view.last_timer(), Some(1));

    let mut time = 0.0f64;
    for _ in 0..61 {
        time += DT as f64;
        game.update(time, DT, &mut view);
    }
    assert_eq!(game.phase(), RoundPhase::GameOver);
}
