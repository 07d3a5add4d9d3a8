use std::time::Duration;

use log::warn;

pub const DEFAULT_TICK_MS: u64 = 15;
pub const DEFAULT_ANIMATION_MS: u64 = 35;
pub const DEFAULT_RENDER_FPS: u64 = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub tick: Duration,
    pub animation: Duration,
    pub render_fps: u64,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            animation: Duration::from_millis(DEFAULT_ANIMATION_MS),
            render_fps: DEFAULT_RENDER_FPS,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = positive(&lookup, "PACMAN_TICK_MS").unwrap_or(DEFAULT_TICK_MS);
        let animation_ms = positive(&lookup, "PACMAN_ANIM_MS").unwrap_or(DEFAULT_ANIMATION_MS);
        let render_fps = positive(&lookup, "PACMAN_FPS").unwrap_or(DEFAULT_RENDER_FPS);
        let seed = lookup("PACMAN_SEED").and_then(|v| match v.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("ignoring PACMAN_SEED={:?}: not a u64", v);
                None
            }
        });

        Self {
            tick: Duration::from_millis(tick_ms),
            animation: Duration::from_millis(animation_ms),
            render_fps,
            seed,
        }
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.render_fps.max(1))
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!("ignoring {}={:?}: expected a positive integer", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PACMAN_TICK_MS", "20"),
            ("PACMAN_ANIM_MS", "50"),
            ("PACMAN_FPS", "30"),
            ("PACMAN_SEED", "99"),
        ]));
        assert_eq!(settings.tick, Duration::from_millis(20));
        assert_eq!(settings.animation, Duration::from_millis(50));
        assert_eq!(settings.render_fps, 30);
        assert_eq!(settings.seed, Some(99));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PACMAN_TICK_MS", "0"),
            ("PACMAN_FPS", "fast"),
            ("PACMAN_SEED", "-1"),
        ]));
        assert_eq!(settings.tick, Duration::from_millis(DEFAULT_TICK_MS));
        assert_eq!(settings.render_fps, DEFAULT_RENDER_FPS);
        assert_eq!(settings.seed, None);
    }
}
