use anyhow::{Context, Result};
use tracing::{debug, info};

use super::autopilot::choose_direction;
use crate::game::{GameStatus, StepEvent, World, WorldConfig};

/// Outcome of an unattended game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSummary {
    pub status: GameStatus,
    pub score: usize,
    pub steps: u32,
    pub length: usize,
}

/// Headless mode: the autopilot plays a single game without a terminal
pub struct AutoMode {
    config: WorldConfig,
    max_steps: u32,
}

impl AutoMode {
    pub fn new(config: WorldConfig, max_steps: u32) -> Self {
        Self { config, max_steps }
    }

    pub fn run(&self) -> Result<AutoSummary> {
        let mut world = World::from_config(&self.config).context("Failed to create world")?;
        world.start();

        while !world.is_terminal() && world.steps() < self.max_steps {
            if let Some(direction) = choose_direction(&world) {
                world.change_direction(direction);
            }

            if world.step() == StepEvent::Ate {
                debug!(score = world.score(), steps = world.steps(), "autopilot ate reward");
            }
        }

        let summary = AutoSummary {
            status: world.status(),
            score: world.score(),
            steps: world.steps(),
            length: world.snake_len(),
        };
        info!(?summary, "autopilot finished");

        Ok(summary)
    }
}
