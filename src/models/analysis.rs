use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match score out of 100 recovered from the model's free-text score field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Fields recovered from the first exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFields {
    pub analysis: String,
    pub tailoring_suggestions: String,
    pub score_justification: String,
    pub score: String,
}

/// Fields recovered from the second exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationFields {
    pub optimized_resume: String,
    pub changes_made: String,
    pub new_score: String,
    pub score_justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub analysis: String,
    pub tailoring_suggestions: String,
    pub score_justification: String,
    pub score: String,
    #[serde(default)]
    pub match_score: Option<MatchScore>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default = "Utc::now")]
    pub analyzed_at: DateTime<Utc>,
}

impl ResumeAnalysis {
    pub fn from_fields(fields: AnalysisFields, provider: &str, model: &str) -> Self {
        let match_score = crate::llm::parser::parse_score(&fields.score);
        Self {
            analysis: fields.analysis,
            tailoring_suggestions: fields.tailoring_suggestions,
            score_justification: fields.score_justification,
            score: fields.score,
            match_score,
            provider: provider.to_string(),
            model: model.to_string(),
            analyzed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedResume {
    pub optimized_resume: String,
    pub changes_made: String,
    pub new_score: String,
    pub score_justification: String,
    #[serde(default)]
    pub new_match_score: Option<MatchScore>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default = "Utc::now")]
    pub optimized_at: DateTime<Utc>,
}

impl OptimizedResume {
    pub fn from_fields(fields: OptimizationFields, provider: &str, model: &str) -> Self {
        let new_match_score = crate::llm::parser::parse_score(&fields.new_score);
        Self {
            optimized_resume: fields.optimized_resume,
            changes_made: fields.changes_made,
            new_score: fields.new_score,
            score_justification: fields.score_justification,
            new_match_score,
            provider: provider.to_string(),
            model: model.to_string(),
            optimized_at: Utc::now(),
        }
    }
}
