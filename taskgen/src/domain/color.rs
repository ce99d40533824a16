use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Category color of a task. Unknown names fall back to [`TaskColor::Blue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Indigo,
    Pink,
}

impl TaskColor {
    /// Picker order used by the editor.
    pub const ALL: [TaskColor; 7] = [
        TaskColor::Blue,
        TaskColor::Green,
        TaskColor::Red,
        TaskColor::Yellow,
        TaskColor::Purple,
        TaskColor::Indigo,
        TaskColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskColor::Red => "red",
            TaskColor::Blue => "blue",
            TaskColor::Green => "green",
            TaskColor::Yellow => "yellow",
            TaskColor::Purple => "purple",
            TaskColor::Indigo => "indigo",
            TaskColor::Pink => "pink",
        }
    }

    /// Strict lookup, case-insensitive. Returns `None` for anything outside the enumeration.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// Lookup that maps unrecognized names to the default color.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Next color in picker order, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.picker_index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous color in picker order, wrapping around.
    pub fn previous(self) -> Self {
        let idx = self.picker_index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn picker_index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // null, numbers and unknown names all land on the default
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(name)) => TaskColor::from_name_or_default(&name),
            _ => TaskColor::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse_case_insensitively() {
        assert_eq!(TaskColor::from_name("red"), Some(TaskColor::Red));
        assert_eq!(TaskColor::from_name(" Indigo "), Some(TaskColor::Indigo));
        assert_eq!(TaskColor::from_name("orange"), None);
    }

    #[test]
    fn unknown_color_deserializes_as_blue() {
        let color: TaskColor = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(color, TaskColor::Blue);

        let color: TaskColor = serde_json::from_str("\"pink\"").unwrap();
        assert_eq!(color, TaskColor::Pink);
    }

    #[test]
    fn non_string_color_deserializes_as_blue() {
        for raw in ["null", "3", "{\"name\":\"red\"}"] {
            let color: TaskColor = serde_json::from_str(raw).unwrap();
            assert_eq!(color, TaskColor::Blue, "{raw}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskColor::Yellow).unwrap(),
            "\"yellow\""
        );
    }

    #[test]
    fn next_and_previous_wrap_in_picker_order() {
        assert_eq!(TaskColor::Blue.next(), TaskColor::Green);
        assert_eq!(TaskColor::Pink.next(), TaskColor::Blue);
        assert_eq!(TaskColor::Blue.previous(), TaskColor::Pink);
        assert_eq!(TaskColor::Red.previous(), TaskColor::Green);
    }
}
