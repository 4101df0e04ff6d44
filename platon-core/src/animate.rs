//! Fixed-cadence render loop
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::{ConfigError, RenderConfig};
use crate::frame::{Frame, Scene};

/// Drives a scene on a recurring tick: advance the rotation, rebuild the
/// frame from base coordinates, hand it to the sink. Two states: running
/// (ticker alive) and stopped.
///
/// Cadence is best effort; a slow sink delays subsequent ticks rather
/// than overlapping them, so ticks are always serialized. [`stop`] joins
/// the ticker before returning, so once it returns the sink will never be
/// called again.
///
/// [`stop`]: RenderLoop::stop
pub struct RenderLoop {
    ticker: Option<Ticker>,
}

struct Ticker {
    cancel: Sender<()>,
    handle: JoinHandle<Scene>,
}

impl RenderLoop {
    /// Starts the ticker on `scene` with per-tick degree `deltas` and the
    /// given tick interval.
    pub fn start<F>(mut scene: Scene, deltas: [f64; 3], interval: Duration, mut sink: F) -> Self
    where
        F: FnMut(&Frame) + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || {
            loop {
                // The interval wait doubles as the cancellation check: a
                // stop request arriving before or during it ends the loop
                // without another tick being delivered, even when the
                // timer already expired.
                match cancelled.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }
                let [dx, dy, dz] = deltas;
                scene.advance(dx, dy, dz);
                sink(&scene.frame());
            }
            scene
        });
        Self {
            ticker: Some(Ticker { cancel, handle }),
        }
    }

    /// Validates `config`, builds its scene, and starts the loop.
    pub fn from_config<F>(config: RenderConfig, sink: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&Frame) + Send + 'static,
    {
        let deltas = config.deltas();
        let interval = config.interval();
        let scene = config.into_scene()?;
        Ok(Self::start(scene, deltas, interval, sink))
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stops the ticker and returns the scene with its accumulated
    /// rotation. Joins the ticker first: no tick is observable after this
    /// returns. Idempotent; returns `None` when already stopped (or when
    /// the sink panicked).
    pub fn stop(&mut self) -> Option<Scene> {
        let ticker = self.ticker.take()?;
        let _ = ticker.cancel.send(());
        ticker.handle.join().ok()
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
