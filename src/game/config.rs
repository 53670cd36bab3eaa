use serde::{Deserialize, Serialize};

use super::error::WorldError;

/// Configuration for a single game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Side length of the square board
    pub width: usize,
    /// Cell the snake starts on; the centre cell when unset
    pub spawn_index: Option<usize>,
    /// Snake length that wins the game; the whole board when unset
    pub win_length: Option<usize>,
    /// Seed for reward placement; drawn from the thread RNG when unset
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 16,
            spawn_index: None,
            win_length: None,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Create a new configuration with custom board width
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(8)
    }

    /// Create a large board
    pub fn large() -> Self {
        Self::new(32)
    }

    pub fn with_spawn_index(mut self, index: usize) -> Self {
        self.spawn_index = Some(index);
        self
    }

    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = Some(length);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn capacity(&self) -> usize {
        self.width * self.width
    }

    pub fn resolved_spawn_index(&self) -> usize {
        self.spawn_index
            .unwrap_or((self.width / 2) * self.width + self.width / 2)
    }

    pub fn resolved_win_length(&self) -> usize {
        self.win_length.unwrap_or(self.capacity())
    }

    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width < 2 {
            return Err(WorldError::WidthTooSmall { width: self.width });
        }

        let capacity = self.capacity();
        let spawn = self.resolved_spawn_index();
        if spawn >= capacity {
            return Err(WorldError::IndexOutOfRange {
                index: spawn,
                capacity,
            });
        }

        let win_length = self.resolved_win_length();
        if !(2..=capacity).contains(&win_length) {
            return Err(WorldError::InvalidWinLength {
                win_length,
                capacity,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.width, 16);
        assert_eq!(config.resolved_spawn_index(), 8 * 16 + 8);
        assert_eq!(config.resolved_win_length(), 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = WorldConfig::new(4).with_spawn_index(5).with_win_length(6);
        assert_eq!(config.resolved_spawn_index(), 5);
        assert_eq!(config.resolved_win_length(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_width() {
        assert_eq!(
            WorldConfig::new(1).validate(),
            Err(WorldError::WidthTooSmall { width: 1 })
        );
        assert_eq!(
            WorldConfig::new(0).validate(),
            Err(WorldError::WidthTooSmall { width: 0 })
        );
    }

    #[test]
    fn test_rejects_spawn_out_of_range() {
        let config = WorldConfig::new(4).with_spawn_index(16);
        assert_eq!(
            config.validate(),
            Err(WorldError::IndexOutOfRange {
                index: 16,
                capacity: 16
            })
        );
    }

    #[test]
    fn test_rejects_bad_win_length() {
        assert!(WorldConfig::new(4).with_win_length(1).validate().is_err());
        assert!(WorldConfig::new(4).with_win_length(17).validate().is_err());
        assert!(WorldConfig::new(4).with_win_length(16).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{"width": 10, "spawn_index": 3, "win_length": null, "seed": 7}"#;
        let config: WorldConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, WorldConfig::new(10).with_spawn_index(3).with_seed(7));
    }
}
