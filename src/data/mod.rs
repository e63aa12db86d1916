pub mod config;
pub mod logger;

use std::time::Duration;

use crate::{
    graphics::{composite_layers, Argb, COLOR_BACKGROUND},
    math::rng::new_rng,
    modes::Mode,
    scene::{sprites::SpriteSheet, Scene},
};

use config::Config;

pub const DEFAULT_MILLI_HZ: u32 = 60 * 1000;
pub const CAP_MILLI_HZ: u32 = 240 * 1000;

pub const DEFAULT_SIZE_WIN: (u32, u32) = (800, 600);
pub const DEFAULT_WIN_SCALE: u8 = 1;
pub const MAX_SCALE_FACTOR: u8 = 8;

/// Scenes larger than this many pixels get a warning at startup.
pub const LARGE_SCENE_PIXELS: usize = 2_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRateMode {
    Sync,
    Specified,
}

/// Main program struct. Owns the scene and the settings the hosts need
/// to drive it.
pub(crate) struct Program {
    pub scene: Scene,

    mode: Mode,
    scale: u8,

    hidden: bool,
    fullscreen: bool,

    win_size: (u32, u32),
    seed: Option<u64>,

    milli_hz: u32,
    refresh_rate_mode: RefreshRateMode,
    refresh_rate: Duration,
}

impl Program {
    pub fn new(config: &Config) -> Self {
        let scale = config.scale.max(1);
        let (w, h) = config.size;

        let scene = Scene::new(
            (w / scale as u32) as usize,
            (h / scale as u32) as usize,
            new_rng(config.seed),
            SpriteSheet::load(),
        );

        let mode = match config.headless {
            Some(ticks) => Mode::Headless(ticks),
            None => Mode::Win,
        };

        let mut prog = Self {
            scene,
            mode,
            scale,
            hidden: false,
            fullscreen: config.fullscreen,
            win_size: config.size,
            seed: config.seed,
            milli_hz: DEFAULT_MILLI_HZ,
            refresh_rate_mode: RefreshRateMode::Sync,
            refresh_rate: Duration::ZERO,
        };

        match config.milli_hz {
            Some(milli_hz) => {
                prog.refresh_rate_mode = RefreshRateMode::Specified;
                prog.change_fps_frac(milli_hz);
            }
            None => prog.change_fps_frac(DEFAULT_MILLI_HZ),
        }

        prog
    }

    pub fn print_startup_info(&self) {
        log::info!("cashburst {}", env!("CARGO_PKG_VERSION"));

        log::info!(
            "Scene: {}x{} (scale {})",
            self.scene.width(),
            self.scene.height(),
            self.scale
        );

        match self.refresh_rate_mode {
            RefreshRateMode::Specified => {
                log::info!("Refresh rate: {}hz (locked)", self.milli_hz as f32 / 1000.0)
            }
            RefreshRateMode::Sync if self.mode == Mode::Win => {
                log::info!("Refresh rate: follows the monitor")
            }
            RefreshRateMode::Sync => {}
        }

        if let Some(seed) = self.seed {
            log::info!("Seed: {seed}");
        }

        if self.scene.width() * self.scene.height() > LARGE_SCENE_PIXELS {
            log::warn!(
                "cashburst draws on the CPU. Large windows may drop frames; try --scale 2."
            );
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn win_size(&self) -> (u32, u32) {
        self.win_size
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_hidden(&mut self, b: bool) {
        self.hidden = b;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn milli_hz(&self) -> u32 {
        self.milli_hz
    }

    pub fn rr_mode(&self) -> RefreshRateMode {
        self.refresh_rate_mode
    }

    /// Time between two redraw requests.
    pub fn refresh_rate(&self) -> Duration {
        self.refresh_rate
    }

    pub fn change_fps_frac(&mut self, milli_hz: u32) {
        let milli_hz = milli_hz.clamp(1, CAP_MILLI_HZ);
        self.milli_hz = milli_hz;
        self.refresh_rate = Duration::from_micros(1_000_000_000 / milli_hz as u64);

        log::debug!("Redraw interval set to {:?}", self.refresh_rate);
    }

    /// Resizes the scene to fit a buffer of `width`x`height` physical pixels.
    pub fn update_size(&mut self, width: u32, height: u32) {
        let scale = self.scale as u32;
        let (w, h) = ((width / scale) as usize, (height / scale) as usize);

        self.scene.resize(w, h);

        log::debug!("Resized to {width}x{height}, scene is {w}x{h}");
    }

    /// Size of the physical buffer the scene fills at the current scale.
    pub fn buffer_size(&self) -> (usize, usize) {
        let scale = self.scale as usize;
        (self.scene.width() * scale, self.scene.height() * scale)
    }

    /// Runs one tick of the animation.
    pub fn render(&mut self) {
        self.scene.tick();
    }

    pub fn composite(&self, dest: &mut [Argb], dst_width: usize) {
        composite_layers(
            &self.scene.layers(),
            self.scale as usize,
            dest,
            dst_width,
            COLOR_BACKGROUND,
        );
    }
}
