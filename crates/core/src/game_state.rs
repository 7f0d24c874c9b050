//! Game state module - manages the complete game state
//!
//! This module ties together the core components: board, snake, food, RNG, and
//! scoring. It owns the phase machine and runs one tick of gameplay per
//! [`GameState::step`] call. Nothing outside this module mutates the snake,
//! board, or food.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::CoreError;
use crate::food::{place_food, roll_reward_tier};
use crate::geometry::step;
use crate::rng::SimpleRng;
use crate::scoring::{apply_speed_progression, reward_points, Speed};
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Events produced by a single step (at most food, tier change, and game over)
pub type StepEvents = ArrayVec<GameEvent, 3>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: CellId,
    /// Tier of the food currently on the board; awarded when it is eaten.
    food_tier: RewardTier,
    /// Direction the next step will move in.
    direction: Direction,
    /// Direction of the last executed step.
    heading: Direction,
    score: u32,
    speed: Speed,
    phase: Phase,
    player_name: String,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game in the `NotStarted` phase
    pub fn new(config: GameConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let board = Board::new(config.board_size)?;
        let (snake, food) = initial_layout(&board, &mut rng)?;
        let speed = Speed::initial(&config);

        Ok(Self {
            config,
            board,
            snake,
            food,
            food_tier: RewardTier::Common,
            direction: Direction::Right,
            heading: Direction::Right,
            score: 0,
            speed,
            phase: Phase::NotStarted,
            player_name: String::new(),
            rng,
        })
    }

    /// Create a game with an explicit snake (head first), food, and direction
    pub fn with_layout(
        config: GameConfig,
        snake: &[Coord],
        food: Coord,
        direction: Direction,
    ) -> Result<Self, CoreError> {
        let mut state = Self::new(config)?;
        let snake = Snake::from_coords(&state.board, snake).ok_or(CoreError::InvalidLayout)?;
        let food = state.board.cell_at(food)?;
        if snake.contains(food) {
            return Err(CoreError::InvalidLayout);
        }
        state.snake = snake;
        state.food = food;
        state.direction = direction;
        state.heading = direction;
        Ok(state)
    }

    /// Start the game for `name`
    ///
    /// Only valid before the first start. The name must contain a
    /// non-whitespace character and be at most `max_name_len` characters.
    pub fn start(&mut self, name: &str) -> Result<(), CoreError> {
        if self.phase != Phase::NotStarted {
            return Err(self.phase_error("start"));
        }
        let name = name.trim();
        if name.is_empty() || name.chars().count() > self.config.max_name_len {
            return Err(CoreError::InvalidName);
        }

        self.player_name = name.to_string();
        self.phase = Phase::Running;
        info!("game started for {} (seed {})", self.player_name, self.config.seed);
        Ok(())
    }

    /// Start a fresh round with the same player
    pub fn reset(&mut self) -> Result<(), CoreError> {
        if self.phase == Phase::NotStarted {
            return Err(self.phase_error("reset"));
        }

        let board = Board::new(self.config.board_size)?;
        let (snake, food) = initial_layout(&board, &mut self.rng)?;
        self.board = board;
        self.snake = snake;
        self.food = food;
        self.food_tier = RewardTier::Common;
        self.direction = Direction::Right;
        self.heading = Direction::Right;
        self.score = 0;
        self.speed = apply_speed_progression(self.score, self.speed, &self.config);
        self.phase = Phase::Running;
        info!("game reset for {}", self.player_name);
        Ok(())
    }

    /// Advance the game by one tick
    ///
    /// Does nothing unless the game is running.
    pub fn step(&mut self) -> StepEvents {
        let mut events = StepEvents::new();
        if self.phase != Phase::Running {
            return events;
        }

        let direction = self.direction;
        let next = step(self.snake.head().coord, direction);

        let Ok(next_cell) = self.board.cell_at(next) else {
            debug!("wall collision at ({}, {})", next.row, next.col);
            self.finish(&mut events);
            return events;
        };

        if self.snake.contains(next_cell) {
            debug!("self collision at cell {}", next_cell);
            self.finish(&mut events);
            return events;
        }

        self.snake.advance(next, next_cell);
        self.heading = direction;

        if next_cell == self.food {
            self.consume_food(&mut events);
        }

        events
    }

    fn consume_food(&mut self, events: &mut StepEvents) {
        let grew = self.snake.grow(&self.board, self.heading);
        self.score = self.score.saturating_add(reward_points(self.food_tier));
        debug!(
            "food eaten: {} tier, score {}, grew {}",
            self.food_tier.as_str(),
            self.score,
            grew
        );
        events.push(GameEvent::FoodEaten { score: self.score });

        let previous = self.food;
        match place_food(
            &mut self.rng,
            self.snake.occupied(),
            self.board.max_cell(),
            Some(previous),
        ) {
            Some(cell) => self.food = cell,
            None => {
                info!("no free cell left for food");
                self.finish(events);
                return;
            }
        }

        let tier = roll_reward_tier(&mut self.rng);
        if tier != self.food_tier {
            events.push(GameEvent::TierChanged { tier });
        }
        self.food_tier = tier;

        let speed = apply_speed_progression(self.score, self.speed, &self.config);
        if speed.tier != self.speed.tier {
            info!(
                "speed tier {} ({}ms per tick)",
                speed.tier, speed.interval_ms
            );
        }
        self.speed = speed;
    }

    fn finish(&mut self, events: &mut StepEvents) {
        self.phase = Phase::GameOver;
        info!(
            "game over for {} with score {}",
            self.player_name, self.score
        );
        events.push(GameEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Request a new direction for the next step
    ///
    /// Rejected while not running, and for a snake longer than one segment
    /// when it would reverse into the body: the request may not be the
    /// opposite of the pending direction nor of the last step's heading.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.snake.len() > 1
            && (direction == self.direction.opposite() || direction == self.heading.opposite())
        {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Pause a running game; pausing an already paused game is a no-op
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Apply a presentation command
    ///
    /// Returns whether the command changed the state. While paused, only
    /// `Resume` and `TogglePause` are honoured.
    pub fn apply_command(&mut self, command: GameCommand) -> Result<bool, CoreError> {
        if self.phase == Phase::Paused
            && !matches!(command, GameCommand::Resume | GameCommand::TogglePause)
        {
            return Ok(false);
        }

        match command {
            GameCommand::Start { name } => self.start(&name).map(|_| true),
            GameCommand::ChangeDirection(direction) => Ok(self.change_direction(direction)),
            GameCommand::Pause => Ok(self.pause()),
            GameCommand::Resume => Ok(self.resume()),
            GameCommand::TogglePause => Ok(self.toggle_pause()),
            GameCommand::Reset => self.reset().map(|_| true),
        }
    }

    fn phase_error(&self, command: &'static str) -> CoreError {
        CoreError::InvalidPhase {
            command,
            phase: self.phase.as_str(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_tier(&self) -> u32 {
        self.speed.tier
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.speed.interval_ms
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> CellId {
        self.food
    }

    pub fn food_tier(&self) -> RewardTier {
        self.food_tier
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board_size = self.board.size();
        out.snake.clear();
        out.snake.extend(self.snake.segments().map(|s| s.coord));
        out.food = self.board.coord_of(self.food);
        out.food_cell = self.food;
        out.food_tier = self.food_tier;
        out.direction = self.direction;
        out.score = self.score;
        out.speed_tier = self.speed.tier;
        out.tick_interval_ms = self.speed.interval_ms;
        out.phase = self.phase;
        out.player_name.clear();
        out.player_name.push_str(&self.player_name);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Snake at the board's start coordinate and food a fixed offset after it
fn initial_layout(board: &Board, rng: &mut SimpleRng) -> Result<(Snake, CellId), CoreError> {
    let start = board.start_coord();
    let start_cell = board.cell_at(start)?;
    let snake = Snake::new(start, start_cell);

    let offset_cell = start_cell + FOOD_START_OFFSET;
    let food = if offset_cell <= board.max_cell() {
        offset_cell
    } else {
        place_food(rng, snake.occupied(), board.max_cell(), None).ok_or(CoreError::InvalidConfig)?
    };
    Ok((snake, food))
}
