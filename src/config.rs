use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

// Defaults are tuned for a 640x480 capture frame; distances scale with resolution.
pub const PINCH_DISTANCE_PX: f32 = 20.0;
pub const PINCH_ANGLE_DEG: f32 = 90.0;
pub const SWIPE_DISTANCE_PX: f32 = 180.0;
pub const SWIPE_RIGHT_MAX_ANGLE_DEG: f32 = 30.0;
pub const SWIPE_LEFT_MIN_ANGLE_DEG: f32 = 150.0;
pub const MOTION_LAG_FRAMES: usize = 4;
/// Ten seconds of history at 60 fps; anything longer cannot describe a swipe.
pub const MAX_MOTION_LAG_FRAMES: usize = 600;
pub const WATCHDOG_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Max distance between the thumb IP joint and the index PIP joint for a finger heart.
    pub pinch_distance_px: f32,
    /// Max angle at the index PIP joint between thumb tip and index tip for a finger heart.
    pub pinch_angle_deg: f32,
    /// Min palm travel over the lag window to count as a swipe.
    pub swipe_distance_px: f32,
    pub swipe_right_max_angle_deg: f32,
    pub swipe_left_min_angle_deg: f32,
    /// How many frames back the swipe comparison looks.
    pub motion_lag_frames: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pinch_distance_px: PINCH_DISTANCE_PX,
            pinch_angle_deg: PINCH_ANGLE_DEG,
            swipe_distance_px: SWIPE_DISTANCE_PX,
            swipe_right_max_angle_deg: SWIPE_RIGHT_MAX_ANGLE_DEG,
            swipe_left_min_angle_deg: SWIPE_LEFT_MIN_ANGLE_DEG,
            motion_lag_frames: MOTION_LAG_FRAMES,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_MOTION_LAG_FRAMES).contains(&self.motion_lag_frames),
            "motion_lag_frames must be between 1 and {MAX_MOTION_LAG_FRAMES}"
        );
        ensure!(
            self.pinch_distance_px >= 0.0 && self.swipe_distance_px >= 0.0,
            "distance thresholds must be non-negative"
        );
        for angle in [
            self.pinch_angle_deg,
            self.swipe_right_max_angle_deg,
            self.swipe_left_min_angle_deg,
        ] {
            ensure!(
                (0.0..=180.0).contains(&angle),
                "angle threshold {angle} outside 0..=180 degrees"
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Forget the last dispatched command when the hand leaves the frame.
    pub reset_on_hand_loss: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    pub poll_interval_ms: u64,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: WATCHDOG_POLL_INTERVAL_MS,
        }
    }
}

impl WatchdogConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub dispatch: DispatchConfig,
    pub watchdog: WatchdogConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("invalid config")?;
        config.thresholds.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("using default config: {err:#}");
                Self::default()
            }
        }
    }
}
