//! input → update → raycast → composite → present, once per frame.

use std::time::Duration;

use thiserror::Error;

use super::{
    Action, InputCmd, SimState,
    clock::{Clock, FramePacer, Timer},
    player::Tuning,
};
use crate::{
    config::{Config, ConfigError},
    engine::{Minimap, Raycaster},
    platform::{Frontend, PlatformError},
    renderer::{DrawCall, Palette, RendererExt, Software},
};

/// How often frame-time averages are logged.
const REPORT_EVERY: Duration = Duration::from_secs(3);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Error, Debug)]
pub enum LoopError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Totals for a finished (or running) session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    /// Unpaused session time.
    pub play_time: Duration,
}

pub struct GameLoop<C: Clock> {
    state: LoopState,
    sim: SimState,
    tuning: Tuning,
    width: usize,
    height: usize,

    raycaster: Raycaster,
    minimap: Minimap,
    renderer: Software,
    calls: Vec<DrawCall>,

    clock: C,
    pacer: FramePacer,
    play_timer: Timer,
    /// Duration of the previous frame; the next update's `dt`.
    last_dt: Duration,
    frames: u64,

    /* ────────── frame-time report state ────────── */
    acc_time: Duration,
    acc_frames: u32,
    last_report: Duration,
}

impl<C: Clock> GameLoop<C> {
    pub fn new(cfg: &Config, clock: C) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let sim = SimState::from_config(cfg)?;
        Ok(Self::with_state(cfg, sim, clock))
    }

    /// Start from an explicit simulation state (custom maps, tests).
    pub fn with_state(cfg: &Config, sim: SimState, clock: C) -> Self {
        let now = clock.now();
        let mut play_timer = Timer::default();
        play_timer.start(now);
        Self {
            state: LoopState::Running,
            sim,
            tuning: cfg.tuning(),
            width: cfg.width,
            height: cfg.height,
            raycaster: Raycaster::new(Palette::default()),
            minimap: Minimap::default(),
            renderer: Software::new(cfg.ceiling, cfg.floor),
            calls: Vec::with_capacity(cfg.width * 2),
            clock,
            pacer: FramePacer::new(cfg.target_fps, now),
            play_timer,
            last_dt: Duration::ZERO,
            frames: 0,
            acc_time: Duration::ZERO,
            acc_frames: 0,
            last_report: now,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.play_timer.is_paused()
    }

    /// Last composited frame.
    #[inline]
    pub fn renderer(&self) -> &Software {
        &self.renderer
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frames: self.frames,
            play_time: self.play_timer.elapsed(self.clock.now()),
        }
    }

    /// Run until the input source asks to quit.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<FrameStats, LoopError> {
        log::info!(
            "running at {}x{}, {}",
            self.width,
            self.height,
            match self.pacer.budget() {
                Some(b) => format!("{:.2} ms frame budget", b.as_secs_f64() * 1000.0),
                None => "uncapped".to_owned(),
            }
        );
        while self.step(frontend)? == LoopState::Running {}

        let stats = self.stats();
        log::info!(
            "stopped after {} frames ({:.1} s played)",
            stats.frames,
            stats.play_time.as_secs_f64()
        );
        Ok(stats)
    }

    /// One iteration.  Returns the state *after* the iteration.
    pub fn step<F: Frontend>(&mut self, frontend: &mut F) -> Result<LoopState, LoopError> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        /* 1. input ------------------------------------------------------- */
        let snap = frontend.poll();
        if snap.quit {
            self.play_timer.pause(self.clock.now());
            self.state = LoopState::Stopped;
            return Ok(self.state);
        }
        if snap.pressed.contains(Action::TOGGLE_MINIMAP) {
            self.sim.show_minimap = !self.sim.show_minimap;
            log::debug!("minimap {}", if self.sim.show_minimap { "on" } else { "off" });
        }
        if snap.pressed.contains(Action::PAUSE) {
            self.toggle_pause();
        }

        /* 2. update ------------------------------------------------------ */
        if !self.is_paused() {
            let cmd = InputCmd::from_snapshot(&snap);
            self.sim
                .player
                .update(&cmd, &self.tuning, self.last_dt.as_secs_f64());
        }

        /* 3. raycast + overlay ------------------------------------------ */
        self.calls.clear();
        self.raycaster.build_frame(
            &self.sim.map,
            &self.sim.player,
            self.width,
            self.height,
            &mut self.calls,
        );
        if self.sim.show_minimap {
            self.minimap.build(
                &self.sim.map,
                &self.sim.player,
                self.raycaster.columns(),
                &mut self.calls,
            );
        }

        /* 4. composite + present ---------------------------------------- */
        let mut blitted = Ok(());
        self.renderer
            .draw_frame(self.width, self.height, &self.calls, |fb, w, h| {
                blitted = frontend.blit(fb, w, h);
            });
        blitted?;
        frontend.present()?;
        self.frames += 1;

        /* 5. pace -------------------------------------------------------- */
        self.last_dt = self.pacer.wait(&self.clock);
        self.report(self.last_dt);

        Ok(self.state)
    }

    fn toggle_pause(&mut self) {
        let now = self.clock.now();
        if self.play_timer.is_paused() {
            self.play_timer.unpause(now);
            log::info!("resumed");
        } else {
            self.play_timer.pause(now);
            log::info!("paused");
        }
    }

    /// Accumulate frame time and log the average every few seconds.
    fn report(&mut self, dt: Duration) {
        self.acc_time += dt;
        self.acc_frames += 1;
        let now = self.clock.now();
        if now.saturating_sub(self.last_report) >= REPORT_EVERY {
            let avg_ms = self.acc_time.as_secs_f64() * 1000.0 / self.acc_frames as f64;
            log::debug!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            self.acc_time = Duration::ZERO;
            self.acc_frames = 0;
            self.last_report = now;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
