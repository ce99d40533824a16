use serde_json::{json, Value};

use crate::domain::{TaskColor, TaskDate};

/// Build the instruction block sent to the model for one generation request.
pub fn build_instruction(user_prompt: &str, reference_date: TaskDate) -> String {
    let colors = TaskColor::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an intelligent task scheduling assistant. Based on the user's request, generate a list of tasks.\n\
         The current date is {reference_date}.\n\
         Analyze the request for recurring events (e.g., \"every Monday,\" \"daily for a week\") and create a separate task object for each occurrence within a reasonable future timeframe (e.g., the next 2-3 months).\n\
         Adhere strictly to the provided JSON schema for the output. The date for each task must be in 'YYYY-MM-DD' format.\n\
         Pick a color for each task category from: {colors}.\n\
         \n\
         User Request: \"{user_prompt}\""
    )
}

/// Response schema forcing an array of `{title, description, date, color}` objects.
pub fn response_schema() -> Value {
    let colors: Vec<&str> = TaskColor::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "A short, concise title for the task (e.g., \"Team Meeting\")."
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief description of the task (e.g., \"Discuss Q3 roadmap\")."
                },
                "date": {
                    "type": "STRING",
                    "description": "The date for the task in strict 'YYYY-MM-DD' format."
                },
                "color": {
                    "type": "STRING",
                    "description": "A color for the task category.",
                    "enum": colors
                }
            },
            "required": ["title", "description", "date", "color"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_reference_date_and_prompt() {
        let date = TaskDate::parse("2024-07-01").unwrap();
        let text = build_instruction("Doctor's appointment on 2024-07-25 at 2pm", date);

        assert!(text.contains("The current date is 2024-07-01."));
        assert!(text.contains("User Request: \"Doctor's appointment on 2024-07-25 at 2pm\""));
        assert!(text.contains("next 2-3 months"));
        assert!(text.contains("'indigo'"));
    }

    #[test]
    fn schema_requires_every_field_and_lists_all_colors() {
        let schema = response_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);

        let colors = schema["items"]["properties"]["color"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(colors.len(), 7);
        assert!(colors.iter().any(|c| c == "pink"));
    }
}
