use async_trait::async_trait;
use std::time::Duration;
use taskgen::{GenerationError, TaskColor, TaskDate, TaskDraft, TaskGenerator};
use time::Date;

use crate::types::Task;

const TITLE_MAX_CHARS: usize = 40;

/// Offline generator for `daygrid dev`.
///
/// Every `YYYY-MM-DD` in the prompt becomes one draft (the reference date when
/// there are none). A prompt mentioning "fail" returns an error instead.
#[derive(Debug, Clone)]
pub struct DevGenerator {
    latency: Duration,
}

impl DevGenerator {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(800),
        }
    }

    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }
}

#[async_trait]
impl TaskGenerator for DevGenerator {
    async fn generate(
        &self,
        prompt: &str,
        reference_date: TaskDate,
    ) -> Result<Vec<TaskDraft>, GenerationError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if prompt.to_lowercase().contains("fail") {
            return Err(GenerationError::Malformed(
                "dev generator asked to fail".to_string(),
            ));
        }

        let mut dates = find_dates(prompt);
        if dates.is_empty() {
            dates.push(reference_date);
        }

        let title = dev_title(prompt);
        Ok(dates
            .into_iter()
            .zip(TaskColor::ALL.into_iter().cycle())
            .map(|(date, color)| {
                TaskDraft::new(title.clone(), date)
                    .with_description(format!("Generated offline from: {}", prompt.trim()))
                    .with_color(color)
            })
            .collect())
    }
}

/// Canonical dates appearing as standalone tokens in `text`, in order.
fn find_dates(text: &str) -> Vec<TaskDate> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 10 <= bytes.len() {
        let boundary_before = i == 0 || !bytes[i - 1].is_ascii_digit();
        let boundary_after = i + 10 == bytes.len() || !bytes[i + 10].is_ascii_digit();
        if boundary_before && boundary_after {
            if let Some(date) = text
                .get(i..i + 10)
                .and_then(|candidate| TaskDate::parse(candidate).ok())
            {
                found.push(date);
                i += 10;
                continue;
            }
        }
        i += 1;
    }
    found
}

fn dev_title(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.chars().count() <= TITLE_MAX_CHARS {
        return trimmed.to_string();
    }
    let mut title: String = trimmed.chars().take(TITLE_MAX_CHARS - 1).collect();
    title.push('…');
    title
}

/// A few tasks around `today` so a fresh dev session has something on screen.
pub fn seed_dev_tasks(today: Date) -> Vec<Task> {
    let entry = |offset: i64, title: &str, description: &str, color: TaskColor| {
        let date = TaskDate::new(today + time::Duration::days(offset));
        Task::from_draft(
            TaskDraft::new(title, date)
                .with_description(description)
                .with_color(color),
        )
    };

    vec![
        entry(0, "Stand-up", "Daily sync with the team", TaskColor::Indigo),
        entry(0, "Lunch with Sam", "", TaskColor::Green),
        entry(2, "Dentist", "Bring insurance card", TaskColor::Red),
        entry(5, "Gym", "Leg day", TaskColor::Yellow),
        entry(-3, "Pay rent", "", TaskColor::Purple),
    ]
}
