use super::{
    action::Direction,
    board::Board,
    config::WorldConfig,
    error::WorldError,
    state::{CellKind, GameStatus, StepEvent},
};
use rand::{Rng, RngCore, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A snake game on a toroidal board.
///
/// The world owns the snake body (head first), the reward cell and the game
/// status. It never schedules itself: the caller starts it, forwards turns
/// and calls [`World::step`] at whatever rate it likes. Once the status is
/// terminal every mutating call is a no-op.
#[derive(Debug, Clone)]
pub struct World<R = ChaCha8Rng> {
    board: Board,
    snake: Vec<usize>,
    heading: Direction,
    reward: Option<usize>,
    status: GameStatus,
    win_length: usize,
    steps: u32,
    rng: R,
}

impl World<ChaCha8Rng> {
    /// Create a world of `width × width` cells with the snake's head at `spawn_index`
    pub fn new(width: usize, spawn_index: usize) -> Result<Self, WorldError> {
        Self::from_config(&WorldConfig::new(width).with_spawn_index(spawn_index))
    }

    /// Create a world from a full configuration, seeding reward placement from it
    pub fn from_config(config: &WorldConfig) -> Result<Self, WorldError> {
        let seed = config
            .seed
            .unwrap_or_else(|| rand::thread_rng().next_u64());
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> World<R> {
    /// Create a world drawing reward cells from `rng`
    pub fn with_rng(config: &WorldConfig, rng: R) -> Result<Self, WorldError> {
        config.validate()?;

        let mut world = Self {
            board: Board::new(config.width),
            snake: vec![config.resolved_spawn_index()],
            heading: Direction::Right,
            reward: None,
            status: GameStatus::Unstarted,
            win_length: config.resolved_win_length(),
            steps: 0,
            rng,
        };
        world.reward = world.spawn_reward();

        Ok(world)
    }

    /// Rebuild a world from an explicit layout.
    ///
    /// `body` is head first and every segment must be adjacent (with
    /// wraparound) to the one before it. A missing `reward` is placed at
    /// random. The world starts `Unstarted`.
    pub fn from_parts(
        config: &WorldConfig,
        body: Vec<usize>,
        heading: Direction,
        reward: Option<usize>,
        rng: R,
    ) -> Result<Self, WorldError> {
        config.validate()?;
        let board = Board::new(config.width);
        let capacity = board.capacity();

        let Some(&head) = body.first() else {
            return Err(WorldError::EmptyBody);
        };

        let mut seen = vec![false; capacity];
        for (position, &index) in body.iter().enumerate() {
            if !board.contains(index) {
                return Err(WorldError::IndexOutOfRange { index, capacity });
            }
            if seen[index] {
                return Err(WorldError::DuplicateCell { index });
            }
            seen[index] = true;

            if position > 0 && board.direction_between(body[position - 1], index).is_none() {
                return Err(WorldError::DetachedSegment { position, index });
            }
        }

        let win_length = config.resolved_win_length();
        if body.len() >= win_length {
            return Err(WorldError::BodyTooLong {
                length: body.len(),
                win_length,
            });
        }

        let last_move = match body.get(1) {
            Some(&neck) => board
                .direction_between(neck, head)
                .ok_or(WorldError::DetachedSegment {
                    position: 1,
                    index: neck,
                })?,
            None => heading,
        };
        if body.len() > 1 && heading.is_opposite(last_move) {
            return Err(WorldError::ReversedHeading { heading });
        }

        if let Some(index) = reward {
            if !board.contains(index) {
                return Err(WorldError::IndexOutOfRange { index, capacity });
            }
            if seen[index] {
                return Err(WorldError::RewardOnSnake { index });
            }
        }

        let mut world = Self {
            board,
            snake: body,
            heading,
            reward,
            status: GameStatus::Unstarted,
            win_length,
            steps: 0,
            rng,
        };
        if world.reward.is_none() {
            world.reward = world.spawn_reward();
        }

        Ok(world)
    }

    /// Move from `Unstarted` into play; no-op in any other status
    pub fn start(&mut self) {
        if self.status == GameStatus::Unstarted {
            self.status = GameStatus::Played;
            info!(width = self.board.width(), head = self.head(), "game started");
        }
    }

    /// Set the heading used by the next step.
    ///
    /// Reversing the current heading is ignored while the snake has more
    /// than one segment. Inert once the game is over.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.status.is_terminal() {
            return;
        }

        if self.snake.len() > 1 && direction.is_opposite(self.heading) {
            return;
        }

        self.heading = direction;
    }

    /// Advance the game by one tick
    pub fn step(&mut self) -> StepEvent {
        if self.status != GameStatus::Played {
            return StepEvent::Inert;
        }

        let new_head = self.board.neighbor(self.head(), self.heading);

        if self.snake.contains(&new_head) {
            self.status = GameStatus::Lost;
            info!(cell = new_head, score = self.score(), "snake collided with itself");
            return StepEvent::Collided;
        }

        self.snake.insert(0, new_head);
        self.steps = self.steps.saturating_add(1);

        if self.reward != Some(new_head) {
            self.snake.pop();
            return StepEvent::Moved;
        }

        debug!(cell = new_head, length = self.snake.len(), "reward eaten");

        if self.snake.len() >= self.win_length {
            return self.win();
        }

        self.reward = self.spawn_reward();
        match self.reward {
            Some(cell) => {
                debug!(cell, "reward placed");
                StepEvent::Ate
            }
            None => self.win(),
        }
    }

    fn win(&mut self) -> StepEvent {
        self.reward = None;
        self.status = GameStatus::Won;
        info!(length = self.snake.len(), steps = self.steps, "game won");
        StepEvent::Won
    }

    /// Pick a free cell uniformly at random, or `None` if the snake fills the board
    fn spawn_reward(&mut self) -> Option<usize> {
        let mut occupied = vec![false; self.board.capacity()];
        for &cell in &self.snake {
            occupied[cell] = true;
        }

        let free: Vec<usize> = (0..occupied.len()).filter(|&i| !occupied[i]).collect();
        free.choose(&mut self.rng).copied()
    }
}

impl<R> World<R> {
    /// Snake cells, head first
    pub fn snake(&self) -> &[usize] {
        &self.snake
    }

    pub fn head(&self) -> usize {
        self.snake[0]
    }

    pub fn tail(&self) -> usize {
        self.snake[self.snake.len() - 1]
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn reward_cell(&self) -> Option<usize> {
        self.reward
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of segments grown since the game began
    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    /// Number of committed moves
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn cell_at(&self, index: usize) -> CellKind {
        if index == self.head() {
            CellKind::Head
        } else if self.snake.contains(&index) {
            CellKind::Body
        } else if self.reward == Some(index) {
            CellKind::Reward
        } else {
            CellKind::Empty
        }
    }

    /// Classification of every cell in index order
    pub fn cells(&self) -> Vec<CellKind> {
        let mut cells = vec![CellKind::Empty; self.board.capacity()];
        if let Some(reward) = self.reward {
            cells[reward] = CellKind::Reward;
        }
        for &segment in &self.snake[1..] {
            cells[segment] = CellKind::Body;
        }
        cells[self.head()] = CellKind::Head;
        cells
    }
}
