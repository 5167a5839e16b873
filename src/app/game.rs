use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::app::autopilot::{Autopilot, InputSource};
use crate::app::clock::FixedStep;
use crate::core::grid::Grid;
use crate::player::character::{Character, PhysicsParams};
use crate::player::input::{EditRequest, InputState};
use crate::render::{AsciiRenderer, NullRenderer, Renderer};
use crate::utils::settings::{GameSettings, default_settings_path, load_settings};
use crate::world::generator::WorldGenerator;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(version, about = "Procedural 2D block world with platformer physics")]
pub struct Args {
    /// Settings file (TOML). Defaults to the user config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// World seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// World width in blocks
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub width: Option<usize>,

    /// World height in blocks
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub height: Option<usize>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Simulation ticks per second
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tick_rate: Option<u32>,

    /// Run without drawing frames
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Draw with ANSI colours
    #[arg(long, default_value_t = false)]
    pub color: bool,
}

impl Args {
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(seed) = self.seed {
            settings.world.seed = Some(seed);
        }
        if let Some(width) = self.width {
            settings.world.width = width;
        }
        if let Some(height) = self.height {
            settings.world.height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            settings.simulation.tick_rate = tick_rate;
        }
        if self.color {
            settings.display.color = true;
        }
    }
}

/// One play session: the world grid, the player, and the physics constants.
pub struct Game {
    grid: Grid,
    player: Character,
    physics: PhysicsParams,
    seed: Option<u64>,
    ticks: u64,
}

impl Game {
    pub fn new(grid: Grid, player: Character, physics: PhysicsParams) -> Self {
        Game {
            grid,
            player,
            physics,
            seed: None,
            ticks: 0,
        }
    }

    /// Generates a fresh world from the settings.
    pub fn from_settings(settings: &GameSettings) -> Self {
        let seed = settings.world.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        tracing::info!(
            seed,
            width = settings.world.width,
            height = settings.world.height,
            "Generating world..."
        );
        let grid = WorldGenerator::new(settings.generation.clone()).generate(
            settings.world.width,
            settings.world.height,
            &mut rng,
        );

        let player = Character::spawn_at(settings.world.spawn_x, settings.world.spawn_y);
        let mut game = Game::new(grid, player, settings.physics);
        game.seed = Some(seed);
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn physics(&self) -> &PhysicsParams {
        &self.physics
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the player by one physics tick.
    pub fn tick(&mut self, input: &InputState) {
        self.player.update(&self.grid, input, &self.physics);
        self.ticks += 1;
    }

    /// Applies a single-cell edit. Out-of-bounds requests are ignored.
    pub fn apply_edit(&mut self, edit: EditRequest) -> bool {
        let applied = self.grid.set(edit.x, edit.y, edit.block);
        if applied {
            tracing::debug!(x = edit.x, y = edit.y, block = %edit.block, "block edited");
        } else {
            tracing::debug!(x = edit.x, y = edit.y, "edit outside the world ignored");
        }
        applied
    }

    /// Pending edits first, then one tick with the freshly sampled intent.
    pub fn step<I: InputSource + ?Sized>(&mut self, input: &mut I) {
        for edit in input.drain_edits() {
            self.apply_edit(edit);
        }
        let intent = input.poll(self);
        self.tick(&intent);
    }

    /// Runs `ticks` steps back to back, rendering after each one.
    pub fn run<I, R>(&mut self, ticks: u64, input: &mut I, renderer: &mut R) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        for _ in 0..ticks {
            self.step(input);
            renderer.render(&self.grid, &self.player)?;
        }
        Ok(())
    }
}

fn resolve_settings(args: &Args) -> GameSettings {
    let path = args
        .config
        .clone()
        .or_else(|| default_settings_path().filter(|path| path.exists()));

    let mut settings = match path {
        Some(path) => match load_settings(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                GameSettings::default()
            }
        },
        None => GameSettings::default(),
    };
    args.apply(&mut settings);
    settings
}

/// Main game entry point - call this from the actual main() function
pub fn run_game() {
    let args = Args::parse();
    let settings = resolve_settings(&args);
    // The file is validated on load and clap rejects out-of-range flags
    if let Err(e) = settings.validate() {
        tracing::error!("{}", e);
        return;
    }

    let mut game = Game::from_settings(&settings);
    let mut input = Autopilot::default();
    tracing::info!(
        seed = ?game.seed(),
        ticks = args.ticks,
        headless = args.headless,
        "Starting simulation"
    );

    if args.headless {
        if let Err(e) = game.run(args.ticks, &mut input, &mut NullRenderer) {
            tracing::error!("Simulation stopped: {}", e);
        }
    } else {
        let mut renderer: Box<dyn Renderer> = Box::new(AsciiRenderer::stdout(
            settings.display.columns,
            settings.display.rows,
            settings.display.color,
        ));
        let mut clock = FixedStep::new(
            settings.simulation.tick_rate,
            settings.simulation.max_ticks_per_frame,
        );
        let mut last_frame = Instant::now();

        while game.ticks() < args.ticks {
            let now = Instant::now();
            let steps = clock.accumulate(now.duration_since(last_frame));
            last_frame = now;

            for _ in 0..steps {
                if game.ticks() >= args.ticks {
                    break;
                }
                game.step(&mut input);
            }

            if let Err(e) = renderer.render(game.grid(), game.player()) {
                // Drawing problems never stop the simulation
                tracing::warn!("Render error: {}; continuing without output", e);
                renderer = Box::new(NullRenderer);
            }
            std::thread::sleep(clock.step());
        }
    }

    let player = game.player();
    tracing::info!(
        ticks = game.ticks(),
        x = player.x,
        y = player.y,
        grounded = player.grounded,
        "Simulation finished"
    );
}
