use serde::Deserialize;

use crate::domain::{TaskColor, TaskDate, TaskDraft};
use crate::GenerationError;

/// One item as the model returned it. Every field is required.
#[derive(Debug, Deserialize)]
struct RawDraft {
    title: String,
    description: String,
    date: String,
    color: String,
}

/// Parse the model's text output into validated drafts.
///
/// The batch is all-or-nothing: a single malformed item rejects the whole response.
pub fn parse_drafts(text: &str) -> Result<Vec<TaskDraft>, GenerationError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let raw: Vec<RawDraft> = serde_json::from_str(body)
        .map_err(|e| GenerationError::Malformed(format!("Failed to parse tasks JSON: {}", e)))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, item)| validate(index, item))
        .collect()
}

fn validate(index: usize, item: RawDraft) -> Result<TaskDraft, GenerationError> {
    let title = item.title.trim();
    if title.is_empty() {
        return Err(GenerationError::InvalidDraft {
            index,
            reason: "title is empty".to_string(),
        });
    }

    let date = TaskDate::parse(item.date.trim()).map_err(|e| GenerationError::InvalidDraft {
        index,
        reason: e.to_string(),
    })?;

    Ok(TaskDraft {
        title: title.to_string(),
        description: item.description.trim().to_string(),
        date,
        color: TaskColor::from_name_or_default(&item.color),
    })
}

// Models occasionally wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
