/// Power Plant: an idle game about building generators to meet grid demand.

pub mod actions;
pub mod catalog;
pub mod logic;
pub mod prestige;
pub mod render;
pub mod save;
pub mod state;

use tracing::{info, warn};

use crate::config::SimConfig;
use crate::input::InputEvent;
use crate::time::{FrameClock, Interval};

use actions::Intent;
use logic::format_number;
use prestige::PrestigePreview;
use save::{BlobStore, LoadSource, SaveSlot};
use state::EconomyState;

/// Log entry shown in the event panel.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// The running game: economy, save slot, timers and UI state.
pub struct PowerPlant {
    pub state: EconomyState,
    saves: SaveSlot,
    clock: FrameClock,
    autosave: Interval,
    log_capacity: usize,
    /// Prestige confirmation is open.
    prompt_open: bool,
    pub log: Vec<LogEntry>,
    /// The last save attempt failed.
    pub save_failed: bool,
}

impl PowerPlant {
    /// Load the save (crediting offline time) and start the timers.
    /// A store that cannot be read starts a fresh game.
    pub fn boot(store: Box<dyn BlobStore>, config: &SimConfig, wall_ms: f64) -> Self {
        let saves = SaveSlot::new(store, config);
        let mut plant = Self {
            state: EconomyState::new(),
            saves,
            clock: FrameClock::new(),
            autosave: Interval::new(config.autosave_interval_ms),
            log_capacity: config.log_capacity,
            prompt_open: false,
            log: Vec::new(),
            save_failed: false,
        };

        match plant.saves.load(wall_ms) {
            Ok(loaded) => {
                plant.state = loaded.state;
                match loaded.source {
                    LoadSource::Fresh => plant.add_log("Welcome! Build a generator with [1].", false),
                    LoadSource::Restored => plant.add_log("Save loaded.", false),
                    LoadSource::Recovered { defaulted } => plant.add_log(
                        &format!("Save was damaged; {} field(s) reset.", defaulted.len()),
                        true,
                    ),
                }
                if let Some(report) = loaded.offline.filter(|r| r.earnings > 0.0) {
                    plant.add_log(
                        &format!(
                            "Offline for {}s: earned ${}",
                            format_number(report.credited_seconds),
                            format_number(report.earnings)
                        ),
                        true,
                    );
                }
            }
            Err(e) => {
                warn!(error = %e, "could not read save, starting fresh");
                plant.add_log("Could not read save; starting fresh.", true);
            }
        }
        plant
    }

    /// Advance by one animation frame. `frame_ms` is a monotonic timestamp,
    /// `wall_ms` the wall clock used to stamp autosaves. Returns the income earned.
    pub fn frame(&mut self, frame_ms: f64, wall_ms: f64) -> f64 {
        let elapsed = self.clock.update(frame_ms);
        let earned = logic::tick(&mut self.state, elapsed);
        if self.autosave.advance(elapsed) {
            self.persist(wall_ms);
        }
        earned
    }

    /// Handle a key press or click. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent, wall_ms: f64) -> bool {
        let intent = match event {
            InputEvent::Key(c) => Intent::from_key(*c),
            InputEvent::Click(id) => Intent::from_action(*id),
        };
        match intent {
            Some(intent) => self.dispatch(intent, wall_ms),
            None => false,
        }
    }

    /// Apply a player intent. Returns true if anything changed.
    pub fn dispatch(&mut self, intent: Intent, wall_ms: f64) -> bool {
        match intent {
            Intent::BuyGenerator(kind) => {
                if self.prompt_open || !logic::buy(&mut self.state, kind) {
                    return false;
                }
                let count = self.state.holding(kind).count;
                self.add_log(&format!("Built {} #{}", kind.name(), count), false);
                self.persist(wall_ms);
                true
            }
            Intent::RequestPrestige => {
                if self.prompt_open {
                    return false;
                }
                if !prestige::can_prestige(&self.state) {
                    self.add_log(
                        &format!(
                            "Prestige needs ${} lifetime earnings.",
                            format_number(prestige::PRESTIGE_THRESHOLD)
                        ),
                        false,
                    );
                    return false;
                }
                self.prompt_open = true;
                true
            }
            Intent::ConfirmPrestige => {
                if !self.prompt_open {
                    return false;
                }
                self.prompt_open = false;
                match prestige::do_prestige(&mut self.state) {
                    Some(reward) => {
                        self.add_log(
                            &format!(
                                "Prestige! +{} level(s), income x{:.1}",
                                reward, self.state.prestige_multiplier
                            ),
                            true,
                        );
                        self.persist(wall_ms);
                        true
                    }
                    None => false,
                }
            }
            Intent::CancelPrestige => {
                let was_open = self.prompt_open;
                self.prompt_open = false;
                was_open
            }
        }
    }

    /// The open prestige prompt, with the reward as of now.
    pub fn prompt(&self) -> Option<PrestigePreview> {
        if self.prompt_open {
            prestige::preview(&self.state)
        } else {
            None
        }
    }

    /// Save now. Failures are logged and flagged; the game keeps running.
    pub fn persist(&mut self, wall_ms: f64) -> bool {
        match self.saves.save(&self.state, wall_ms) {
            Ok(()) => {
                if self.save_failed {
                    info!("saving recovered");
                    self.add_log("Saving works again.", false);
                }
                self.save_failed = false;
                self.autosave.reset();
                true
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                if !self.save_failed {
                    self.add_log(&format!("Save failed: {}", e), true);
                }
                self.save_failed = true;
                false
            }
        }
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > self.log_capacity {
            let excess = self.log.len() - self.log_capacity;
            self.log.drain(..excess);
        }
    }
}
