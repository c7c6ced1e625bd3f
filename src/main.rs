//! Balloon Typer headless driver
//!
//! Plays one full round at a fixed 60 FPS with a scripted typist and logs
//! what a frontend would draw. Usage: `balloon-typer [settings.json] [seed]`
//! (set `RUST_LOG=debug` to watch every shot).

use glam::Vec2;

use balloon_typer::consts::REFERENCE_FRAME_MS;
use balloon_typer::sim::{EntityId, Game, RoundPhase};
use balloon_typer::{AudioMixer, Presentation, Settings, SoundEffect};

/// Safety cap on simulated frames (ten minutes at 60 FPS)
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Presentation sink that narrates through the log
struct LogPresentation {
    mixer: AudioMixer,
    score: u32,
    pops: u32,
}

impl LogPresentation {
    fn new(mixer: AudioMixer) -> Self {
        Self {
            mixer,
            score: 0,
            pops: 0,
        }
    }
}

impl Presentation for LogPresentation {
    fn balloon_spawned(&mut self, id: EntityId, pos: Vec2, letter: char) {
        log::debug!("[balloon {id}] '{letter}' at ({:.0}, {:.0})", pos.x, pos.y);
    }

    fn bird_spawned(&mut self, id: EntityId, pos: Vec2) {
        log::debug!("[bird {id}] launched from ({:.0}, {:.0})", pos.x, pos.y);
    }

    fn score_changed(&mut self, score: u32) {
        self.score = score;
        log::debug!("Score: {score}");
    }

    fn timer_changed(&mut self, seconds: u32) {
        if seconds % 10 == 0 {
            log::info!("Time: {seconds} (score {})", self.score);
        }
    }

    fn explosion(&mut self, pos: Vec2) {
        self.pops += 1;
        log::trace!("Pop at ({:.0}, {:.0})", pos.x, pos.y);
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        match self.mixer.volume_for(effect) {
            Some(vol) => log::trace!("Sound {} at {:.2}", effect.as_str(), vol),
            None => log::trace!("Sound {} muted", effect.as_str()),
        }
    }

    fn game_over(&mut self, message: &str, pos: Vec2) {
        log::info!("{message} (shown at {:.0}, {:.0})", pos.x, pos.y);
    }
}

/// Types the letter of the lowest untargeted balloon every few frames
struct Typist {
    reaction_frames: u32,
    cooldown: u32,
}

impl Typist {
    fn new(reaction_frames: u32) -> Self {
        Self {
            reaction_frames,
            cooldown: reaction_frames,
        }
    }

    fn next_key(&mut self, game: &Game) -> Option<char> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return None;
        }
        let visible_bottom = game.settings().field.height;
        let target = game
            .balloons()
            .iter()
            .filter(|b| !b.hit && b.pos.y < visible_bottom)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;
        self.cooldown = self.reaction_frames;
        Some(target.letter)
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(seed) = args.next() {
        match seed.parse() {
            Ok(seed) => settings.round.seed = seed,
            Err(_) => log::warn!("Ignoring non-numeric seed {seed:?}"),
        }
    }

    log::info!("Balloon Typer (headless) starting...");
    let mut view = LogPresentation::new(AudioMixer::from_settings(&settings.audio));
    let mut game = Game::new(settings);
    let mut typist = Typist::new(20);
    game.start(&mut view);

    let mut time_ms = 0.0f64;
    let mut frames = 0;
    while game.phase() == RoundPhase::Running && frames < MAX_FRAMES {
        if let Some(key) = typist.next_key(&game) {
            game.handle_key(key, &mut view);
        }
        time_ms += REFERENCE_FRAME_MS as f64;
        game.update(time_ms, REFERENCE_FRAME_MS, &mut view);
        frames += 1;
    }

    println!(
        "Final score: {} ({} pops, difficulty level {}, {} frames)",
        game.score(),
        view.pops,
        game.difficulty_level(),
        frames
    );
}
