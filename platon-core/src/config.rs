//! Render configuration and setup-time validation
use std::time::Duration;

use crate::frame::Scene;
use crate::geometry::{Solid, SolidKind};

/// Setup-time configuration errors. Any of these prevents the render loop
/// from starting; there is no degraded mode.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("fps must be positive, got {0}")]
    Fps(u32),
    #[error("display scale must be positive and finite, got {0}")]
    Scale(f64),
    #[error("progress-max must be positive, got {0}")]
    ProgressMax(u32),
}

/// Validated configuration for an animated solid.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Which solid to build.
    pub kind: SolidKind,
    /// Per-tick rotation deltas, in degrees.
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    /// Tick cadence, frames per second.
    pub fps: u32,
    /// Uniform display scale applied to the unit solid.
    pub scale: f64,
    /// Denominator for the progress counter.
    pub progress_max: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            kind: SolidKind::Dodecahedron,
            dx: 1.0,
            dy: 1.0,
            dz: 0.0,
            fps: 40,
            scale: 128.0,
            progress_max: 100,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::Fps(self.fps));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Scale(self.scale));
        }
        if self.progress_max == 0 {
            return Err(ConfigError::ProgressMax(self.progress_max));
        }
        Ok(())
    }

    /// Tick interval derived from the fps value (1000/fps ms, at least 1).
    pub fn interval(&self) -> Duration {
        Duration::from_millis((1000 / u64::from(self.fps.max(1))).max(1))
    }

    /// Per-tick degree deltas as an array.
    pub fn deltas(&self) -> [f64; 3] {
        [self.dx, self.dy, self.dz]
    }

    /// Validates the configuration and builds the scene it describes.
    pub fn into_scene(self) -> Result<Scene, ConfigError> {
        self.validate()?;
        Ok(Scene::new(Solid::build(self.kind, self.scale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.kind, SolidKind::Dodecahedron);
        assert_eq!(config.deltas(), [1.0, 1.0, 0.0]);
        assert_eq!(config.fps, 40);
        assert_eq!(config.scale, 128.0);
        assert_eq!(config.progress_max, 100);
        assert!(config.validate().is_ok());
        assert_eq!(config.interval(), Duration::from_millis(25));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = RenderConfig {
            fps: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Fps(0))));

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RenderConfig {
                scale,
                ..RenderConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Scale(_))),
                "scale {scale}"
            );
        }

        let config = RenderConfig {
            progress_max: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ProgressMax(0))
        ));
    }

    #[test]
    fn test_into_scene_builds_the_requested_solid() {
        let scene = RenderConfig {
            kind: SolidKind::Octahedron,
            ..RenderConfig::default()
        }
        .into_scene()
        .unwrap();
        assert_eq!(scene.solid().kind(), SolidKind::Octahedron);
        assert_eq!(scene.solid().face_count(), 8);
    }

    #[test]
    fn test_into_scene_refuses_invalid_config() {
        let result = RenderConfig {
            scale: -128.0,
            ..RenderConfig::default()
        }
        .into_scene();
        assert!(result.is_err());
    }
}
