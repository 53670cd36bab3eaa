use std::time::{Duration, Instant};

use crate::game::GameStatus;

/// Session-wide statistics shown next to the board
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: usize,
    pub games_played: u32,
    pub games_won: u32,
    clock_running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            games_won: 0,
            clock_running: false,
        }
    }

    /// Refresh the game clock; frozen while no game is in play
    pub fn update(&mut self) {
        if self.clock_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.clock_running = true;
    }

    pub fn on_game_over(&mut self, status: GameStatus, final_score: usize) {
        self.update();
        self.clock_running = false;
        self.games_played += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
        }
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
