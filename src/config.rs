//! Runtime configuration: environment variables first, then CLI flags.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LIFE_ROWS` / `LIFE_COLS` | 100 / 100 | Grid size for a fresh session |
//! | `LIFE_CELL_SIZE` | 2 | Initial zoom, terminal cells per grid cell |
//! | `LIFE_TICK_MS` | 100 | Generation interval while running |
//! | `LIFE_DENSITY` | 0.2 | Alive probability for randomize |
//! | `LIFE_SEED` | 1 | RNG seed |
//! | `LIFE_TOROIDAL` | off | `1`/`true` wraps the grid edges |
//! | `LIFE_LOG_PATH` | unset | Write tracing output to this file |
//!
//! Flags: `--level <path>`, `--save <path>`, `--seed <n>`, `--toroidal`,
//! `--pattern <name>` (initial pattern for `s`, see `core::patterns::PATTERNS`).

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::core::patterns::{self, Pattern};
use crate::core::{CameraConfig, SessionConfig};
use crate::types::{Boundary, DEFAULT_COLS, DEFAULT_DENSITY, DEFAULT_ROWS, DEFAULT_TICK_MS};

/// Level file written by `w` when neither `--save` nor `--level` is given.
pub const DEFAULT_SAVE_PATH: &str = "level.json";

/// Terminal glyphs are small, so start zoomed far out.
pub const DEFAULT_TERMINAL_CELL_SIZE: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: i32,
    pub tick_ms: u32,
    pub density: f64,
    pub seed: u32,
    pub toroidal: bool,
    pub log_path: Option<PathBuf>,
    pub level_path: Option<PathBuf>,
    pub save_path: Option<PathBuf>,
    pub pattern: &'static Pattern,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_TERMINAL_CELL_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            density: DEFAULT_DENSITY,
            seed: 1,
            toroidal: false,
            log_path: None,
            level_path: None,
            save_path: None,
            pattern: &patterns::GLIDER,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

/// Grid sides must be addressable as `i32` cell coordinates.
fn is_grid_side(n: usize) -> bool {
    n > 0 && n <= i32::MAX as usize
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

impl LifeConfig {
    /// Read `LIFE_*` environment variables. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let rows = parse_var(&lookup, "LIFE_ROWS")
            .filter(|&n: &usize| is_grid_side(n))
            .unwrap_or(defaults.rows);
        let cols = parse_var(&lookup, "LIFE_COLS")
            .filter(|&n: &usize| is_grid_side(n))
            .unwrap_or(defaults.cols);
        let cell_size = parse_var(&lookup, "LIFE_CELL_SIZE")
            .filter(|&n: &i32| n > 0)
            .unwrap_or(defaults.cell_size);
        let tick_ms = parse_var(&lookup, "LIFE_TICK_MS").unwrap_or(defaults.tick_ms);
        let density = parse_var(&lookup, "LIFE_DENSITY")
            .filter(|d: &f64| (0.0..=1.0).contains(d))
            .unwrap_or(defaults.density);
        let seed = parse_var(&lookup, "LIFE_SEED").unwrap_or(defaults.seed);
        let toroidal = lookup("LIFE_TOROIDAL")
            .map(|v| is_truthy(v.trim()))
            .unwrap_or(false);
        let log_path = lookup("LIFE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            rows,
            cols,
            cell_size,
            tick_ms,
            density,
            seed,
            toroidal,
            log_path,
            ..defaults
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--level" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --level"))?;
                    self.level_path = Some(PathBuf::from(v));
                }
                "--save" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --save"))?;
                    self.save_path = Some(PathBuf::from(v));
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--pattern" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --pattern"))?;
                    self.pattern = patterns::find(v)
                        .ok_or_else(|| anyhow!("unknown --pattern value: {}", v))?;
                }
                "--toroidal" => self.toroidal = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn boundary(&self) -> Boundary {
        if self.toroidal {
            Boundary::Toroidal
        } else {
            Boundary::Fixed
        }
    }

    /// Where `w` writes: `--save`, else the loaded level, else `level.json`.
    pub fn effective_save_path(&self) -> PathBuf {
        self.save_path
            .clone()
            .or_else(|| self.level_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH))
    }

    pub fn session_config(&self, view_width: i32, view_height: i32) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cols: self.cols,
            boundary: self.boundary(),
            view_width,
            view_height,
            camera: CameraConfig {
                cell_size: self.cell_size,
                ..CameraConfig::default()
            },
            density: self.density,
            seed: self.seed,
            pattern: self.pattern,
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
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_env() {
        let config = LifeConfig::from_lookup(|_| None);
        assert_eq!(config, LifeConfig::default());
        assert_eq!(config.boundary(), Boundary::Fixed);
    }

    #[test]
    fn env_overrides() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            ("LIFE_ROWS", "40"),
            ("LIFE_COLS", " 60 "),
            ("LIFE_DENSITY", "0.5"),
            ("LIFE_TOROIDAL", "TRUE"),
            ("LIFE_LOG_PATH", "/tmp/life.log"),
        ]));
        assert_eq!((config.rows, config.cols), (40, 60));
        assert_eq!(config.density, 0.5);
        assert_eq!(config.boundary(), Boundary::Toroidal);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/life.log")));
    }

    #[test]
    fn invalid_env_values_fall_back() {
        let config = LifeConfig::from_lookup(lookup_from(&[
            ("LIFE_ROWS", "0"),
            ("LIFE_CELL_SIZE", "-3"),
            ("LIFE_DENSITY", "1.5"),
            ("LIFE_SEED", "abc"),
            ("LIFE_LOG_PATH", "  "),
        ]));
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn args_set_paths_and_seed() {
        let mut config = LifeConfig::default();
        config
            .apply_args(&args(&["--level", "a.json", "--seed", "9", "--toroidal"]))
            .unwrap();
        assert_eq!(config.level_path, Some(PathBuf::from("a.json")));
        assert_eq!(config.seed, 9);
        assert!(config.toroidal);
        assert_eq!(config.effective_save_path(), PathBuf::from("a.json"));

        config.apply_args(&args(&["--save", "b.json"])).unwrap();
        assert_eq!(config.effective_save_path(), PathBuf::from("b.json"));
    }

    #[test]
    fn oversized_grid_sides_fall_back() {
        let too_big = (i32::MAX as u64 + 1).to_string();
        let config = LifeConfig::from_lookup(lookup_from(&[
            ("LIFE_ROWS", too_big.as_str()),
            ("LIFE_COLS", "2147483647"),
        ]));
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.cols, i32::MAX as usize);
    }

    #[test]
    fn pattern_flag_selects_from_library() {
        let mut config = LifeConfig::default();
        assert_eq!(config.session_config(80, 24).pattern.name, "Glider");
        config.apply_args(&args(&["--pattern", "r-PENTOMINO"])).unwrap();
        assert_eq!(config.pattern, &patterns::R_PENTOMINO);
        assert_eq!(config.session_config(80, 24).pattern.name, "R-pentomino");

        assert!(config.apply_args(&args(&["--pattern", "gun"])).is_err());
        assert!(config.apply_args(&args(&["--pattern"])).is_err());
    }

    #[test]
    fn bad_args_are_errors() {
        let mut config = LifeConfig::default();
        assert!(config.apply_args(&args(&["--seed"])).is_err());
        assert!(config.apply_args(&args(&["--seed", "x"])).is_err());
        assert!(config.apply_args(&args(&["--bogus"])).is_err());
        assert_eq!(
            LifeConfig::default().effective_save_path(),
            PathBuf::from(DEFAULT_SAVE_PATH)
        );
    }
}
