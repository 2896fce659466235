use crate::error::{Error, Result};
use crate::models::{AnalysisFields, MatchScore, OptimizationFields};

/// Returns the trimmed text between the first `<tag>` and the first `</tag>`
/// that follows it.
pub fn extract_tag<'a>(text: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = text.find(&open)? + open.len();
    let end = text[start..].find(&close)? + start;
    Some(text[start..end].trim())
}

fn require_tag(text: &str, tag: &str) -> Result<String> {
    extract_tag(text, tag)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingTag(tag.to_string()))
}

pub fn parse_analysis(response: &str) -> Result<AnalysisFields> {
    Ok(AnalysisFields {
        analysis: require_tag(response, "analysis")?,
        tailoring_suggestions: require_tag(response, "tailoring_suggestions")?,
        score_justification: require_tag(response, "score_justification")?,
        score: require_tag(response, "score")?,
    })
}

pub fn parse_optimization(response: &str) -> Result<OptimizationFields> {
    let fields = OptimizationFields {
        optimized_resume: require_tag(response, "optimized_resume")?,
        changes_made: require_tag(response, "changes_made")?,
        new_score: require_tag(response, "new_score")?,
        score_justification: require_tag(response, "score_justification")?,
    };

    if fields.optimized_resume.is_empty() {
        return Err(Error::ParseError(
            "Model returned an empty optimized resume".to_string(),
        ));
    }

    Ok(fields)
}

/// First integer in a free-text score field that is not a denominator
/// ("85", "85/100", "Score (out of 100): 85"). Anything above 100 is rejected.
pub fn parse_score(text: &str) -> Option<MatchScore> {
    let lower = text.to_ascii_lowercase();
    let mut rest = 0;

    while let Some(offset) = lower[rest..].find(|c: char| c.is_ascii_digit()) {
        let start = rest + offset;
        let len = lower[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(lower.len() - start);
        rest = start + len;

        let before = lower[..start].trim_end();
        if before.ends_with("out of") || before.ends_with('/') {
            continue;
        }

        return lower[start..rest]
            .parse::<u32>()
            .ok()
            .and_then(|v| u8::try_from(v).ok())
            .and_then(MatchScore::new);
    }

    None
}
