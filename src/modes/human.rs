use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::game::{GameStatus, StepEvent, World, WorldConfig};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    config: WorldConfig,
    tick_interval: Duration,
    world: World,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: WorldConfig, tick_interval: Duration) -> Result<Self> {
        let world = World::from_config(&config).context("Failed to create world")?;

        Ok(Self {
            config,
            tick_interval,
            world,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.world.status() == GameStatus::Played {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.world, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            self.apply(self.input_handler.handle_key_event(key));
        }
    }

    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                self.world.change_direction(direction);
            }
            KeyAction::Start => {
                if self.world.status() == GameStatus::Unstarted {
                    self.world.start();
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Restart => {
                self.reset_game();
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        match self.world.step() {
            StepEvent::Collided | StepEvent::Won => {
                self.metrics
                    .on_game_over(self.world.status(), self.world.score());
            }
            StepEvent::Inert | StepEvent::Moved | StepEvent::Ate => {}
        }
    }

    fn reset_game(&mut self) {
        match World::from_config(&self.config) {
            Ok(world) => {
                info!(games_played = self.metrics.games_played, "restarting game");
                self.world = world;
            }
            Err(e) => warn!(error = %e, "restart failed, keeping current game"),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
