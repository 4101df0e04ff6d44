//! Interactive terminal viewer for rotating Platonic solids
//!
//! Controls:
//!   - WASD / Arrow Keys: adjust pitch/yaw spin
//!   - E/R: adjust roll spin
//!   - Space: pause/resume
//!   - 0: reset rotation
//!   - Q/ESC: quit

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use platon_core::{progressed_count, RenderConfig, Scene};

pub mod renderer;

pub use renderer::PolygonRasterizer;

/// How much one keypress changes a per-tick delta, in degrees.
const DELTA_STEP: f64 = 0.5;

/// Main application struct for the terminal viewer.
pub struct TerminalApp {
    scene: Scene,
    deltas: [f64; 3],
    interval: Duration,
    progressed: usize,
    rasterizer: PolygonRasterizer,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Builds the viewer from a validated configuration. `progress`
    /// optionally marks the progressed share of faces.
    pub fn new(config: RenderConfig, progress: Option<u32>) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let deltas = config.deltas();
        let interval = config.interval();
        let scale = config.scale;
        let progress_max = config.progress_max;
        let scene = config
            .into_scene()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let progressed = match progress {
            Some(value) => progressed_count(value, progress_max, scene.solid().face_count()),
            None => 0,
        };

        Ok(Self {
            scene,
            deltas,
            interval,
            progressed,
            // Leave the last row free for the status line.
            rasterizer: PolygonRasterizer::new(width as usize, height.saturating_sub(1) as usize, scale),
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            if !self.paused {
                let [dx, dy, dz] = self.deltas;
                self.scene.advance(dx, dy, dz);
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.deltas[0] += DELTA_STEP;
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.deltas[0] -= DELTA_STEP;
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.deltas[1] -= DELTA_STEP;
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.deltas[1] += DELTA_STEP;
                }
                KeyCode::Char('e') => {
                    self.deltas[2] += DELTA_STEP;
                }
                KeyCode::Char('r') => {
                    self.deltas[2] -= DELTA_STEP;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('0') => {
                    self.scene.reset();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.scene.frame();

        self.rasterizer.clear();
        self.rasterizer.render_frame(&frame, self.progressed);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.rasterizer.draw(&mut stdout)?;

        let rotation = self.scene.rotation();
        queue!(
            stdout,
            cursor::MoveTo(0, self.rasterizer.height() as u16),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} | fps {:.1} | spin ({:+.1}, {:+.1}, {:+.1}) deg/tick | angles ({:.0}, {:.0}, {:.0}) | WASD/arrows spin, E/R roll, space pause, 0 reset, Q quit",
                self.scene.solid().kind(),
                self.fps,
                self.deltas[0],
                self.deltas[1],
                self.deltas[2],
                rotation.x,
                rotation.y,
                rotation.z,
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
