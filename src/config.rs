use serde::Deserialize;

use crate::board::DEFAULT_CARD_TEXT;

/// Runtime configuration, sourced from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Ordered stage names, left to right.
    pub stages: Vec<String>,
    /// Text new cards start with.
    pub default_card_text: String,
    /// Emit board events as JSON lines instead of plain announcements.
    pub json_events: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let stages = match std::env::var("TASKBOARD_STAGES") {
            Ok(raw) => parse_stage_names(&raw)?,
            Err(_) => default_stages(),
        };
        Ok(Self {
            stages,
            default_card_text: std::env::var("TASKBOARD_DEFAULT_TEXT")
                .unwrap_or_else(|_| DEFAULT_CARD_TEXT.into()),
            json_events: std::env::var("TASKBOARD_JSON_EVENTS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            default_card_text: DEFAULT_CARD_TEXT.into(),
            json_events: false,
        }
    }
}

fn default_stages() -> Vec<String> {
    vec!["open".into(), "processing".into(), "closed".into()]
}

fn parse_stage_names(raw: &str) -> Result<Vec<String>, anyhow::Error> {
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if names.is_empty() {
        anyhow::bail!("TASKBOARD_STAGES must name at least one stage, got '{raw}'");
    }
    Ok(names)
}
