//! Game Session
//!
//! Ties the track, jump controller, tumble animation and camera together and
//! drives them from one per-frame [`GameSession::step`]. The UI layer talks to
//! the session only through input handlers, callbacks and `restart`.
//!
//! # Frame order
//!
//! 1. Controller or tumble animation (never both: a tumble only exists
//!    after a failed landing, which locks the controller)
//! 2. Camera easing
//! 3. Scene sync: jumper pose, look-at, render

use glam::Vec3;

use crate::camera::focus::{CameraFocus, CameraPlanner};
use crate::game::config::GameConfig;
use crate::physics::landing::{LandingClassifier, LandingOutcome};
use crate::player::jump_controller::{JumpController, JumpPhase, JumpStep, Jumper};
use crate::player::tumble::{FailureAnimator, FallDirection, TumbleStep};
use crate::render::scene_sink::SceneSink;
use crate::world::track::{PlatformTrack, TrackError, TravelDirection};

/// Coarse state of the session, as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a press
    Idle,
    Charging,
    Airborne,
    /// Failed landing animation in progress
    Tumbling,
    /// Tumble finished; only `restart` does anything now
    GameOver,
}

type SuccessFn = Box<dyn FnMut(u32)>;
type FailedFn = Box<dyn FnMut()>;

/// One playthrough of the jump game, restartable in place.
pub struct GameSession<S: SceneSink> {
    config: GameConfig,
    classifier: LandingClassifier,
    score: u32,
    track: PlatformTrack,
    controller: JumpController,
    camera: CameraPlanner,
    tumble: Option<FailureAnimator>,
    game_over: bool,
    scene: S,
    on_success: Option<SuccessFn>,
    on_failed: Option<FailedFn>,
}

impl<S: SceneSink> GameSession<S> {
    /// Build a session and seed it with two platforms and a jumper.
    pub fn new(config: GameConfig, scene: S) -> Self {
        let track = match config.seed {
            Some(seed) => PlatformTrack::with_seed(seed),
            None => PlatformTrack::new(),
        };
        let mut session = Self {
            classifier: LandingClassifier::new(config.platform.width, config.jumper.width),
            config,
            score: 0,
            track,
            controller: JumpController::new(),
            camera: CameraPlanner::new(),
            tumble: None,
            game_over: false,
            scene,
            on_success: None,
            on_failed: None,
        };
        session.scene.configure(&session.config);
        session.populate();
        session
    }

    /// Called with the new score after every successful landing.
    pub fn add_success_fn(&mut self, f: impl FnMut(u32) + 'static) {
        self.on_success = Some(Box::new(f));
    }

    /// Called once when a failed landing's tumble animation finishes.
    pub fn add_failed_fn(&mut self, f: impl FnMut() + 'static) {
        self.on_failed = Some(Box::new(f));
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn track(&self) -> &PlatformTrack {
        &self.track
    }

    pub fn jumper(&self) -> &Jumper {
        self.controller.jumper()
    }

    pub fn focus(&self) -> &CameraFocus {
        self.camera.focus()
    }

    /// Current look-at point.
    pub fn look_at(&self) -> Vec3 {
        self.camera.look_at()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            return SessionPhase::GameOver;
        }
        if self.tumble.is_some() {
            return SessionPhase::Tumbling;
        }
        match self.controller.phase() {
            JumpPhase::Idle => SessionPhase::Idle,
            JumpPhase::Charging => SessionPhase::Charging,
            JumpPhase::Airborne => SessionPhase::Airborne,
            // Locked after a failure but before the tumble was attached
            JumpPhase::Landed(_) => SessionPhase::Tumbling,
        }
    }

    /// Pointer/touch pressed: start charging if standing still.
    pub fn input_down(&mut self) {
        self.controller.press();
    }

    /// Pointer/touch released: launch if charging.
    pub fn input_up(&mut self) {
        self.controller.release();
    }

    /// Advance everything by one frame.
    pub fn step(&mut self) -> Result<SessionPhase, TrackError> {
        let direction = self.travel_direction();

        if let Some(tumble) = self.tumble.as_mut() {
            if tumble.step(self.controller.jumper_mut()) == TumbleStep::Ended {
                self.tumble = None;
                self.game_over = true;
                log::info!("game over with score {}", self.score);
                if let Some(on_failed) = self.on_failed.as_mut() {
                    on_failed();
                }
            }
        } else {
            let classifier = self.classifier;
            let track = &self.track;
            let step = self
                .controller
                .step(direction, |jumper| classifier.classify_on_track(jumper.position, track))?;
            if let JumpStep::Landed(outcome) = step {
                self.resolve_landing(outcome, direction)?;
            }
        }

        let look_at = self.camera.step(self.track.direction());
        self.scene.update_jumper(self.controller.jumper());
        self.scene.look_at(look_at);
        self.scene.render();

        Ok(self.phase())
    }

    /// Start over: score 0, two fresh platforms, a fresh jumper at rest.
    pub fn restart(&mut self) {
        log::info!("restarting session (previous score {})", self.score);
        self.score = 0;
        self.tumble = None;
        self.game_over = false;

        self.scene.remove_jumper();
        for platform in self.track.clear() {
            self.scene.remove_platform(&platform);
        }
        self.camera.reset();
        self.populate();
    }

    fn populate(&mut self) {
        self.controller.reset();
        for _ in 0..2 {
            let spawn = self.track.spawn();
            self.scene.add_platform(&spawn.spawned);
        }
        // Two platforms were just spawned, so a pair always exists.
        if let Err(e) = self.camera.retarget(&self.track) {
            log::error!("camera retarget after populate failed: {e}");
        }
        self.scene.add_jumper(self.controller.jumper());
        self.scene.look_at(self.camera.look_at());
        self.scene.render();
    }

    fn resolve_landing(&mut self, outcome: LandingOutcome, direction: TravelDirection) -> Result<(), TrackError> {
        log::info!("landed: {outcome:?}");

        if outcome.is_success() {
            self.score += 1;
            let spawn = self.track.spawn();
            if let Some(evicted) = spawn.evicted {
                self.scene.remove_platform(&evicted);
            }
            self.scene.add_platform(&spawn.spawned);
            self.camera.retarget(&self.track)?;
            if let Some(on_success) = self.on_success.as_mut() {
                on_success(self.score);
            }
            return Ok(());
        }

        let jumper_coord = direction.coord(self.controller.jumper().position);
        let next_coord = direction.coord(self.track.next()?.position);
        if let Some(fall) = FallDirection::from_landing(outcome, direction, jumper_coord, next_coord) {
            log::debug!("tumbling {fall:?}");
            self.tumble = Some(FailureAnimator::new(fall, self.config.ground, self.config.jumper.width));
        }
        Ok(())
    }

    fn travel_direction(&self) -> TravelDirection {
        self.track.direction().unwrap_or(TravelDirection::Left)
    }
}
