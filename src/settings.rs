use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::ScoringError;
use crate::scoring::Criterion;
use crate::utils::log_settings_rejected;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub semantic: Semantic,
    pub rubric: Rubric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Fail the whole request.
    Reject,
    /// Score from the rule detectors alone.
    RuleOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Semantic {
    pub enabled: bool,
    pub timeout_ms: u64,
    pub on_failure: FailurePolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rubric {
    pub weights: RubricWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricWeights {
    pub salutation: u32,
    pub keyword_presence: u32,
    pub flow: u32,
    pub speech_rate: u32,
    pub grammar: u32,
    pub vocabulary: u32,
    pub clarity: u32,
    pub engagement: u32,
}

pub const DEFAULT_WEIGHTS: RubricWeights = RubricWeights {
    salutation: 5,
    keyword_presence: 30,
    flow: 5,
    speech_rate: 10,
    grammar: 10,
    vocabulary: 10,
    clarity: 15,
    engagement: 15,
};

const _: () = assert!(DEFAULT_WEIGHTS.total() == RubricWeights::TOTAL);

impl RubricWeights {
    pub const TOTAL: u32 = 100;

    pub const fn total(&self) -> u32 {
        self.salutation
            + self.keyword_presence
            + self.flow
            + self.speech_rate
            + self.grammar
            + self.vocabulary
            + self.clarity
            + self.engagement
    }

    pub fn weight(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::Salutation => self.salutation,
            Criterion::KeywordPresence => self.keyword_presence,
            Criterion::Flow => self.flow,
            Criterion::SpeechRate => self.speech_rate,
            Criterion::Grammar => self.grammar,
            Criterion::Vocabulary => self.vocabulary,
            Criterion::Clarity => self.clarity,
            Criterion::Engagement => self.engagement,
        }
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let sum = self.total();
        if sum == Self::TOTAL {
            Ok(())
        } else {
            Err(ScoringError::InvalidWeights { sum })
        }
    }
}

impl Default for RubricWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for Semantic {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_ms: 10_000,
            on_failure: FailurePolicy::Reject,
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        self.rubric.weights.validate()?;
        if self.semantic.timeout_ms == 0 {
            return Err(ScoringError::Settings(
                "semantic.timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn parse(content: &str) -> Result<Settings, ScoringError> {
        let settings: Settings =
            ron::from_str(content).map_err(|e| ScoringError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = Settings::default();
        for path in [default_path, override_path] {
            if let Some(loaded) = Self::read_layer(path) {
                settings = loaded;
            }
        }
        settings
    }

    fn read_layer(path: &Path) -> Option<Settings> {
        if !path.exists() {
            return None;
        }
        let result = fs::read_to_string(path)
            .map_err(|e| ScoringError::Settings(e.to_string()))
            .and_then(|content| Self::parse(&content));
        match result {
            Ok(settings) => Some(settings),
            Err(e) => {
                log_settings_rejected(&path.display().to_string(), &e.to_string());
                None
            }
        }
    }
}

pub fn settings() -> &'static Settings {
    Settings::load()
}
