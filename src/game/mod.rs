pub mod render;

use std::time::Duration;

use crossterm::event::KeyCode;
use labcore::{
    algorithms::{random_from_seed, Algorithm, MazeBuilder},
    dims::Dims,
    gameboard::{CellWall, Grid},
    traversal::{MoveMode, TraversalSession},
};

use self::render::{draw_maze, from_maze_to_real, maze_render_size, Marks};
use crate::{
    error::GameError,
    logging,
    renderer::{Frame, Renderer},
    settings::{ColorScheme, Settings},
    ui,
};

const INPUT_POLL: Duration = Duration::from_millis(90);

/// Everything needed to generate and play one maze, settings merged with the command line.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// Rows and columns, asked for in a menu when missing.
    pub size: Option<(i32, i32)>,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
    pub animate: bool,
    pub step_delay: Duration,
    pub move_mode: MoveMode,
}

impl GameOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        GameOptions {
            size: None,
            algorithm: settings.get_default_algorithm(),
            seed: None,
            animate: settings.get_animate_generation(),
            step_delay: settings.get_step_delay(),
            move_mode: settings.get_move_mode(),
        }
    }

    /// Size of the chosen maze, or of the default preset.
    pub fn size_or_default(&self, settings: &Settings) -> (i32, i32) {
        self.size.unwrap_or_else(|| {
            let mazes = settings.get_mazes();
            let preset = &mazes[settings.default_maze_index()];
            (preset.rows, preset.columns)
        })
    }

    /// Carves the whole maze at once.
    pub fn generate(&self, rows: i32, columns: i32) -> Result<Grid, GameError> {
        let mut rng = random_from_seed(self.seed);
        let grid = Grid::new(rows, columns, &mut rng)?;
        Ok(MazeBuilder::run_to_completion(grid, self.algorithm, rng)?)
    }
}

fn direction_of(code: KeyCode) -> Option<CellWall> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(CellWall::Top),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(CellWall::Bottom),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(CellWall::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(CellWall::Right),
        _ => None,
    }
}

fn next_move_mode(mode: MoveMode) -> MoveMode {
    match mode {
        MoveMode::Single => MoveMode::Corridor,
        MoveMode::Corridor => MoveMode::Straight,
        MoveMode::Straight => MoveMode::Single,
    }
}

/// Where to put the top left corner of the maze: centered when it fits, around `focus`
/// otherwise.
fn maze_pos(screen: Dims, grid: &Grid, focus: Dims) -> Dims {
    let maze_size = maze_render_size(grid);
    if maze_size.0 > screen.0 || maze_size.1 + 4 > screen.1 {
        let focus = from_maze_to_real(focus);
        Dims(screen.0 / 2 - focus.0, screen.1 / 2 - focus.1)
    } else {
        ui::box_center_screen(screen, maze_size)
    }
}

struct Corners<'a> {
    top_left: &'a str,
    top_right: &'a str,
    bottom_left: &'a str,
    bottom_right: &'a str,
}

fn draw_texts(frame: &mut Frame, scheme: &ColorScheme, texts: Corners) {
    let size = frame.size();
    let style = scheme.texts();
    let right = |text: &str| size.0 - 1 - ui::text_width(text);

    frame.draw_str(Dims(1, 0), texts.top_left, style);
    frame.draw_str(Dims(right(texts.top_right), 0), texts.top_right, style);
    frame.draw_str(Dims(1, size.1 - 1), texts.bottom_left, style);
    frame.draw_str(
        Dims(right(texts.bottom_right), size.1 - 1),
        texts.bottom_right,
        style,
    );

    let logger = logging::get_logger();
    let logs = logger.get_logs();
    for (i, message) in logs.iter().enumerate() {
        let y = size.1 - 2 - (logs.len() - i) as i32;
        frame.draw_str(Dims(1, y), &message.line(), style);
    }
}

fn draw_game(
    frame: &mut Frame,
    grid: &Grid,
    session: &TraversalSession,
    mode: MoveMode,
    scheme: &ColorScheme,
) {
    let trail = session
        .moves()
        .iter()
        .map(|&(pos, _)| pos)
        .collect::<Vec<_>>();
    let pos = maze_pos(frame.size(), grid, session.position());

    draw_maze(
        frame,
        pos,
        grid,
        Marks {
            player: Some(session.position()),
            cursor: None,
            trail: &trail,
        },
        scheme,
    );

    let player = session.position();
    draw_texts(
        frame,
        scheme,
        Corners {
            top_left: &format!(
                "{}x{} at {}x{}",
                grid.rows(),
                grid.columns(),
                player.row() + 1,
                player.column() + 1
            ),
            top_right: &format!("{:?} moves (m)", mode),
            bottom_left: &format!("{} steps", session.move_count()),
            bottom_right: &session.elapsed().map(ui::format_duration).unwrap_or_default(),
        },
    );
}

fn draw_generation(frame: &mut Frame, builder: &MazeBuilder, scheme: &ColorScheme) {
    let grid = builder.grid();
    let pos = maze_pos(frame.size(), grid, builder.current());
    draw_maze(
        frame,
        pos,
        grid,
        Marks {
            cursor: Some(builder.current()),
            ..Default::default()
        },
        scheme,
    );

    let progress = builder.progress();
    draw_texts(
        frame,
        scheme,
        Corners {
            top_left: &format!(
                "Generating {}x{} maze",
                grid.rows(),
                grid.columns()
            ),
            top_right: &builder.algorithm().to_string(),
            bottom_left: &format!(
                "{}/{} cells, {:.0}%",
                progress.done,
                progress.from,
                progress.percent() * 100.0
            ),
            bottom_right: "Enter: skip, Esc: cancel",
        },
    );
}

pub struct Game {
    renderer: Renderer,
    settings: Settings,
    options: GameOptions,
}

impl Game {
    pub fn new(settings: Settings, options: GameOptions) -> Result<Self, GameError> {
        Ok(Game {
            renderer: Renderer::new()?,
            settings,
            options,
        })
    }

    pub fn run(mut self) -> Result<(), GameError> {
        loop {
            match self.run_game() {
                Ok(()) | Err(GameError::Quit) => break,
                Err(GameError::NewGame) => {
                    // a fixed seed would only repeat the same maze
                    self.options.seed = None;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    fn run_game(&mut self) -> Result<(), GameError> {
        let (rows, columns) = self.pick_size()?;
        let grid = self.generate(rows, columns)?;
        self.play(&grid)
    }

    fn pick_size(&mut self) -> Result<(i32, i32), GameError> {
        if let Some(size) = self.options.size {
            return Ok(size);
        }

        let mazes = self.settings.get_mazes();
        let titles = mazes
            .iter()
            .map(|maze| maze.title.clone())
            .collect::<Vec<_>>();

        let index = ui::run_menu(
            &mut self.renderer,
            self.settings.get_color_scheme().normals(),
            "Maze size",
            &titles,
            self.settings.default_maze_index(),
        )?;

        Ok((mazes[index].rows, mazes[index].columns))
    }

    /// Generates the maze step by step, drawing every step.
    ///
    /// Enter finishes the rest at once, Esc or q cancels.
    fn generate(&mut self, rows: i32, columns: i32) -> Result<Grid, GameError> {
        let mut rng = random_from_seed(self.options.seed);
        let grid = Grid::new(rows, columns, &mut rng)?;
        let mut builder = MazeBuilder::new(grid, self.options.algorithm, rng);
        let scheme = self.settings.get_color_scheme();

        let mut animate = self.options.animate;
        while !builder.is_complete() {
            if !animate {
                builder.run()?;
                break;
            }

            builder.step()?;
            draw_generation(self.renderer.frame(), &builder, &scheme);
            self.renderer.show()?;

            if let Some(event) = ui::poll_event(self.options.step_delay)? {
                self.renderer.on_event(&event);
                match ui::key_press(&event) {
                    Some(KeyCode::Esc | KeyCode::Char('q' | 'Q')) => {
                        log::info!("Generation cancelled after {} steps", builder.steps());
                        return Err(GameError::Quit);
                    }
                    Some(KeyCode::Enter | KeyCode::Char(' ')) => animate = false,
                    _ => {}
                }
            }
        }

        Ok(builder.into_grid())
    }

    fn play(&mut self, grid: &Grid) -> Result<(), GameError> {
        let mut session = TraversalSession::new(grid);
        let scheme = self.settings.get_color_scheme();

        loop {
            let mode = self.options.move_mode;

            if session.is_finished() {
                let steps = format!("You reached the goal in {} steps", session.move_count());
                let time = format!(
                    "Time: {}",
                    ui::format_duration(session.elapsed().unwrap_or_default())
                );

                let key = ui::popup(
                    &mut self.renderer,
                    scheme.normals(),
                    "Finished",
                    &[steps.as_str(), time.as_str(), "", "N: new maze", "R: play again"],
                    |frame| draw_game(frame, grid, &session, mode, &scheme),
                )?;

                match key {
                    KeyCode::Char('n' | 'N') => return Err(GameError::NewGame),
                    KeyCode::Char('r' | 'R') if session.start() != session.goal() => {
                        session.reset();
                    }
                    _ => return Ok(()),
                }
            }

            draw_game(self.renderer.frame(), grid, &session, mode, &scheme);
            self.renderer.show()?;

            let Some(event) = ui::poll_event(INPUT_POLL)? else {
                continue;
            };
            self.renderer.on_event(&event);
            let Some(code) = ui::key_press(&event) else {
                continue;
            };

            match code {
                KeyCode::Esc | KeyCode::Char('q' | 'Q') => return Err(GameError::Quit),
                KeyCode::Char('n' | 'N') => return Err(GameError::NewGame),
                KeyCode::Char('r' | 'R') => session.reset(),
                KeyCode::Char('m' | 'M') => self.options.move_mode = next_move_mode(mode),
                KeyCode::Char('l' | 'L') => logging::get_logger().switch_debug(),
                code => {
                    if let Some(direction) = direction_of(code) {
                        if let Err(err) = session.move_player(grid, direction, mode) {
                            log::debug!("{}", err);
                        }
                    }
                }
            }
        }
    }
}
