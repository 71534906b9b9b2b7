//! Frame loop driver
//!
//! One scheduled frame runs one tick and one render. Frames stop being
//! scheduled once the session ends; a restart schedules them again. The
//! scheduler is injected so tests can step frames by hand.

use log::{debug, info, warn};

use crate::error::Result;
use crate::render::{draw_frame, DrawTarget};
use crate::{Command, Game, Session};

/// Source of display-refresh callbacks
pub trait FrameScheduler {
    /// Ask for `LoopDriver::frame` to be called on the next refresh
    fn request_frame(&mut self);
    /// Drop a requested frame that has not run yet
    fn cancel_frame(&mut self);
}

/// Result display owned by the host
pub trait Overlay {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

pub struct LoopDriver<S, O, T> {
    game: Game,
    scheduler: S,
    overlay: O,
    target: T,
    frame_pending: bool,
    overlay_visible: bool,
    stopped: bool,
}

impl<S, O, T> LoopDriver<S, O, T>
where
    S: FrameScheduler,
    O: Overlay,
    T: DrawTarget,
{
    pub fn new(game: Game, scheduler: S, overlay: O, target: T) -> Self {
        Self {
            game,
            scheduler,
            overlay,
            target,
            frame_pending: false,
            overlay_visible: false,
            stopped: false,
        }
    }

    /// Draw the initial state and schedule the first frame
    pub fn start(&mut self) {
        self.stopped = false;
        draw_frame(&self.game, &mut self.target);
        self.sync_session();
    }

    /// One display refresh: tick, render, reschedule while running
    pub fn frame(&mut self) {
        self.frame_pending = false;
        self.game.tick();
        draw_frame(&self.game, &mut self.target);
        self.sync_session();
    }

    /// Hand a host event to the game
    ///
    /// While frames are running the command waits for the next tick. When the
    /// loop is idle it is applied immediately so restarts and resizes still
    /// take effect.
    pub fn submit(&mut self, command: Command) -> Result<()> {
        if let Err(e) = self.game.push(command) {
            warn!("dropping {:?}: {}", command, e);
            return Err(e);
        }

        if !self.frame_pending {
            self.game.apply_commands();
            draw_frame(&self.game, &mut self.target);
            self.sync_session();
        }
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.submit(Command::Restart)
    }

    /// Cancel any pending frame (teardown)
    ///
    /// No further frames are requested until `start` is called again.
    pub fn stop(&mut self) {
        self.stopped = true;
        if self.frame_pending {
            self.scheduler.cancel_frame();
            self.frame_pending = false;
            debug!("frame loop stopped");
        }
    }

    fn sync_session(&mut self) {
        match self.game.session() {
            Session::Running => {
                if self.overlay_visible {
                    self.overlay.hide();
                    self.overlay_visible = false;
                }
                if !self.frame_pending && !self.stopped {
                    self.scheduler.request_frame();
                    self.frame_pending = true;
                }
            }
            Session::Ended(outcome) => {
                if !self.overlay_visible {
                    info!("showing result: {}", outcome.message());
                    self.overlay.show(outcome.message());
                    self.overlay_visible = true;
                }
            }
        }
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

/// Scheduler that only counts requests; frames run when the caller says so
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub requested: usize,
    pub cancelled: usize,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }

    fn cancel_frame(&mut self) {
        self.cancelled += 1;
    }
}
