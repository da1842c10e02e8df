//! Settings and curriculum resolution.
//!
//! Settings come from the defaults, then a JSON file, then command-line
//! overrides. The file is `--settings`, else `$GREEK_DRILL_SETTINGS`, else
//! `<config dir>/greek-drill/settings.json` when it exists.

use crate::error::{AppError, Result};
use crate::Cli;
use greek_drill_core::{parse, Category, Curriculum, Lesson, QuizSettings};
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "GREEK_DRILL_SETTINGS";
pub const CURRICULUM_ENV: &str = "GREEK_DRILL_CURRICULUM";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory with the three lesson files. `None` uses the bundled set.
    pub curriculum_dir: Option<PathBuf>,
    pub settings: QuizSettings,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings_path = cli
            .settings
            .clone()
            .or_else(|| env_path(SETTINGS_ENV))
            .or_else(|| default_settings_path().filter(|p| p.exists()));

        let mut settings = match settings_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings");
                load_settings(&path)?
            }
            None => QuizSettings::default(),
        };
        apply_overrides(&mut settings, cli);
        validate(&settings)?;

        Ok(Self {
            curriculum_dir: cli.curriculum.clone().or_else(|| env_path(CURRICULUM_ENV)),
            settings,
            seed: cli.seed,
        })
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("greek-drill").join("settings.json"))
}

pub fn load_settings(path: &Path) -> Result<QuizSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("invalid settings in {}: {e}", path.display())))
}

fn apply_overrides(settings: &mut QuizSettings, cli: &Cli) {
    if let Some(ms) = cli.feedback_delay_ms {
        settings.feedback_delay_ms = ms;
    }
    if let Some(ms) = cli.notice_delay_ms {
        settings.notice_delay_ms = ms;
    }
    if let Some(len) = cli.quiz_length {
        settings.quiz_length = len;
    }
}

fn validate(settings: &QuizSettings) -> Result<()> {
    if settings.quiz_length == 0 {
        return Err(AppError::Config("quiz_length must be at least 1".to_string()));
    }
    Ok(())
}

/// Load lessons from `dir`, or the bundled curriculum when `dir` is `None`.
pub fn load_curriculum(dir: Option<&Path>) -> Result<Curriculum> {
    let Some(dir) = dir else {
        return Curriculum::bundled().map_err(|source| AppError::Curriculum {
            path: PathBuf::from("<bundled>"),
            source,
        });
    };

    Ok(Curriculum::new(
        read_lessons(dir, Category::Declension)?,
        read_lessons(dir, Category::Verb)?,
        read_lessons(dir, Category::Vocabulary)?,
    ))
}

fn read_lessons(dir: &Path, category: Category) -> Result<Vec<Lesson>> {
    let path = dir.join(Curriculum::file_name(category));
    let content = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    let lessons = parse(&content).map_err(|source| AppError::Curriculum {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lessons = lessons.len(), "curriculum file loaded");
    Ok(lessons)
}
