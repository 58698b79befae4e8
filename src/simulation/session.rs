use crate::simulation::{render, Engine};
use crate::utils::{is_quit, is_yes, DEFAULT_CHUNK, DEFAULT_STATE_FILE};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const EDGE_REACHED: &str = "The ant cannot advance (edge reached). Simulation finished.";
const STOPPED: &str = "Simulation stopped by user.";

/// How the session drives the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Render after every step, advance on ENTER
    Step,
    /// Run in chunks, render after each chunk
    Batch,
    /// Run without prompting and render once at the end
    Headless,
}

/// Session options, normally filled from the command line
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// `None` asks the user through the menu
    pub mode: Option<Mode>,
    /// Total steps for batch/headless; 0 runs until the ant leaves the tape.
    /// `None` asks the user in batch mode and means 0 in headless mode.
    pub total: Option<u64>,
    pub chunk: u64,
    pub color: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: None,
            total: None,
            chunk: DEFAULT_CHUNK,
            color: true,
        }
    }
}

/// What happened during a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub mode: Mode,
    /// Steps in which the ant moved
    pub moved: u64,
    /// The ant reached the edge
    pub finished: bool,
}

/// Console driver around an [`Engine`], reading answers from `input` and
/// writing the tape to `output`
pub struct Session<'e, R, W> {
    engine: &'e mut Engine,
    input: R,
    output: W,
    config: SessionConfig,
}

impl<'e, R: BufRead, W: Write> Session<'e, R, W> {
    pub fn new(engine: &'e mut Engine, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            engine,
            input,
            output,
            config,
        }
    }

    /// Run the session in the configured mode (asking for it if unset)
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        let mode = match self.config.mode {
            Some(mode) => mode,
            None => self.choose_mode()?,
        };
        log::debug!("session mode: {:?}", mode);

        let moved = match mode {
            Mode::Step => self.run_step_mode()?,
            Mode::Batch => {
                let total = match self.config.total {
                    Some(total) => total,
                    None => self.ask_total()?,
                };
                self.run_batch_mode(total)?
            }
            Mode::Headless => {
                let total = self.config.total.unwrap_or(0);
                self.run_headless(total)?
            }
        };
        self.output.flush()?;

        Ok(SessionOutcome {
            mode,
            moved,
            finished: self.engine.is_finished(),
        })
    }

    /// Ask whether to save and where. `None` when the user declines.
    pub fn ask_save_path(&mut self) -> io::Result<Option<PathBuf>> {
        let answer = self.prompt("Save the simulation state to a file? (y/n): ")?;
        if !answer.as_deref().is_some_and(is_yes) {
            return Ok(None);
        }
        let name = self.prompt("Output file name: ")?.unwrap_or_default();
        let name = name.trim();
        Ok(Some(PathBuf::from(if name.is_empty() {
            DEFAULT_STATE_FILE
        } else {
            name
        })))
    }

    fn choose_mode(&mut self) -> io::Result<Mode> {
        let title = self.title("Langton's ant simulation");
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "Modes:")?;
        writeln!(
            self.output,
            "  1) Step by step (ENTER to advance, 'q' + ENTER to quit)"
        )?;
        writeln!(
            self.output,
            "  2) Run N steps (0 = until the ant leaves the tape)"
        )?;
        let answer = self.prompt("Choose a mode (1 or 2): ")?;
        Ok(match answer.as_deref().map(str::trim) {
            Some("2") => Mode::Batch,
            _ => Mode::Step,
        })
    }

    fn ask_total(&mut self) -> io::Result<u64> {
        let answer = self.prompt("Number of steps to run (0 = until the end): ")?;
        Ok(answer
            .and_then(|a| a.trim().parse().ok())
            .unwrap_or(0))
    }

    fn run_step_mode(&mut self) -> io::Result<u64> {
        writeln!(
            self.output,
            "Step mode. Press ENTER to take a step, 'q' + ENTER to quit."
        )?;
        let mut moved = 0;
        loop {
            self.draw()?;
            let answer = self.prompt("ENTER = step, 'q' + ENTER = quit: ")?;
            if answer.as_deref().map_or(true, is_quit) {
                self.status(STOPPED)?;
                break;
            }
            if !self.engine.step() {
                self.draw()?;
                self.status(EDGE_REACHED)?;
                break;
            }
            moved += 1;
        }
        Ok(moved)
    }

    fn run_batch_mode(&mut self, total: u64) -> io::Result<u64> {
        let chunk = self.config.chunk.max(1);
        let mut executed = 0;
        while total == 0 || executed < total {
            let to_run = if total == 0 {
                chunk
            } else {
                chunk.min(total - executed)
            };
            let real = self.engine.run_steps(to_run);
            executed += real;
            log::debug!("chunk done: {}/{} moves, {} total", real, to_run, executed);
            self.draw()?;

            if real < to_run {
                self.status(EDGE_REACHED)?;
                break;
            }
            if total == 0 {
                let answer =
                    self.prompt("Continue? (ENTER = continue / q + ENTER = quit): ")?;
                if answer.as_deref().map_or(true, is_quit) {
                    self.status(STOPPED)?;
                    break;
                }
            }
        }
        Ok(executed)
    }

    fn run_headless(&mut self, total: u64) -> io::Result<u64> {
        let moved = self.engine.run_steps(total);
        self.draw()?;
        writeln!(
            self.output,
            "Ant moved {} times in {} steps",
            moved,
            self.engine.steps()
        )?;
        if self.engine.is_finished() {
            self.status(EDGE_REACHED)?;
        }
        Ok(moved)
    }

    fn draw(&mut self) -> io::Result<()> {
        let frame = render(&self.engine.snapshot(), self.config.color);
        self.output.write_all(frame.as_bytes())
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    fn status(&mut self, text: &str) -> io::Result<()> {
        if self.config.color {
            writeln!(self.output, "{}", text.yellow())
        } else {
            writeln!(self.output, "{}", text)
        }
    }

    fn title(&self, text: &str) -> String {
        if self.config.color {
            text.bright_blue().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Orientation;
    use std::io::Cursor;

    fn plain(mode: Option<Mode>, total: Option<u64>) -> SessionConfig {
        SessionConfig {
            mode,
            total,
            chunk: DEFAULT_CHUNK,
            color: false,
        }
    }

    fn run_session(
        engine: &mut Engine,
        script: &str,
        config: SessionConfig,
    ) -> (SessionOutcome, String) {
        let mut out = Vec::new();
        let outcome = Session::new(engine, Cursor::new(script.as_bytes()), &mut out, config)
            .run()
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_step_mode_quit() {
        let mut engine = Engine::new(5, 5, 2, 2, Orientation::Up).unwrap();

        let (outcome, out) = run_session(&mut engine, "\n\nq\n", plain(Some(Mode::Step), None));

        assert_eq!(outcome.moved, 2);
        assert!(!outcome.finished);
        assert_eq!(engine.steps(), 2);
        assert!(out.contains("Step: 0"));
        assert!(out.contains("Step: 2"));
        assert!(out.contains(STOPPED));
    }

    #[test]
    fn test_step_mode_until_edge() {
        let mut engine = Engine::new(1, 1, 0, 0, Orientation::Up).unwrap();

        let (outcome, out) = run_session(&mut engine, "\n\n\n", plain(Some(Mode::Step), None));

        assert_eq!(outcome.moved, 0);
        assert!(outcome.finished);
        assert!(out.contains("Step: 1"));
        assert!(out.contains(EDGE_REACHED));
    }

    #[test]
    fn test_step_mode_stops_on_eof() {
        let mut engine = Engine::new(5, 5, 2, 2, Orientation::Up).unwrap();

        let (outcome, _) = run_session(&mut engine, "\n", plain(Some(Mode::Step), None));

        assert_eq!(outcome.moved, 1);
        assert_eq!(engine.steps(), 1);
    }

    #[test]
    fn test_batch_mode_fixed_total() {
        let mut engine = Engine::new(60, 60, 30, 30, Orientation::Up).unwrap();
        let mut config = plain(Some(Mode::Batch), Some(250));
        config.chunk = 100;

        let (outcome, out) = run_session(&mut engine, "", config);

        assert_eq!(outcome.moved, 250);
        assert_eq!(engine.steps(), 250);
        assert!(out.contains("Step: 100"));
        assert!(out.contains("Step: 200"));
        assert!(out.contains("Step: 250"));
    }

    #[test]
    fn test_batch_mode_reaches_edge() {
        let mut engine = Engine::new(3, 3, 1, 1, Orientation::Right).unwrap();

        let (outcome, out) = run_session(&mut engine, "", plain(Some(Mode::Batch), Some(50)));

        assert_eq!(outcome.moved, 10);
        assert!(outcome.finished);
        assert!(out.contains("Step: 11"));
        assert!(out.contains(EDGE_REACHED));
    }

    #[test]
    fn test_batch_until_end_prompts_between_chunks() {
        let mut engine = Engine::new(60, 60, 30, 30, Orientation::Up).unwrap();
        let mut config = plain(Some(Mode::Batch), Some(0));
        config.chunk = 10;

        let (outcome, out) = run_session(&mut engine, "\nq\n", config);

        assert_eq!(outcome.moved, 20);
        assert_eq!(out.matches("Continue?").count(), 2);
        assert!(out.contains(STOPPED));
    }

    #[test]
    fn test_menu_selects_batch_and_asks_total() {
        let mut engine = Engine::new(60, 60, 30, 30, Orientation::Up).unwrap();

        let (outcome, out) = run_session(&mut engine, "2\n30\n", plain(None, None));

        assert_eq!(outcome.mode, Mode::Batch);
        assert_eq!(outcome.moved, 30);
        assert!(out.contains("Choose a mode"));
        assert!(out.contains("Step: 30"));
    }

    #[test]
    fn test_menu_defaults_to_step_mode() {
        let mut engine = Engine::new(5, 5, 2, 2, Orientation::Up).unwrap();

        let (outcome, _) = run_session(&mut engine, "what\nq\n", plain(None, None));

        assert_eq!(outcome.mode, Mode::Step);
        assert_eq!(outcome.moved, 0);
    }

    #[test]
    fn test_headless_runs_to_edge() {
        let mut engine = Engine::new(2, 2, 0, 0, Orientation::Left).unwrap();

        let (outcome, out) = run_session(&mut engine, "", plain(Some(Mode::Headless), None));

        assert_eq!(outcome.moved, 4);
        assert!(outcome.finished);
        assert!(out.contains("Ant moved 4 times in 5 steps"));
    }

    #[test]
    fn test_ask_save_path() {
        let mut engine = Engine::new(2, 2, 0, 0, Orientation::Left).unwrap();
        let mut out = Vec::new();

        let mut session = Session::new(
            &mut engine,
            Cursor::new("y\nrun.txt\n".as_bytes()),
            &mut out,
            SessionConfig::default(),
        );
        assert_eq!(session.ask_save_path().unwrap(), Some(PathBuf::from("run.txt")));

        let mut session = Session::new(
            &mut engine,
            Cursor::new("s\n\n".as_bytes()),
            &mut out,
            SessionConfig::default(),
        );
        assert_eq!(
            session.ask_save_path().unwrap(),
            Some(PathBuf::from(DEFAULT_STATE_FILE))
        );

        let mut session = Session::new(
            &mut engine,
            Cursor::new("n\n".as_bytes()),
            &mut out,
            SessionConfig::default(),
        );
        assert_eq!(session.ask_save_path().unwrap(), None);
    }
}
