//! The journal entry: one record per calendar date.
//!
//! Backend rows come from a spreadsheet, so deserialization is lenient:
//! ratings may arrive as numbers or numeric strings, text cells may be
//! null or numeric, and dates may carry a time component.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Lowest value on the rating scale.
pub const LIKERT_MIN: i32 = 1;
/// Highest value on the rating scale.
pub const LIKERT_MAX: i32 = 7;
/// Midpoint used for a fresh form and for unreadable stored ratings.
pub const LIKERT_DEFAULT: i32 = 4;

/// Shortest accepted reflection, when text length is enforced.
pub const TEXT_MIN_LEN: usize = 5;
/// Longest accepted reflection, when text length is enforced.
pub const TEXT_MAX_LEN: usize = 600;

/// The six Likert-scale questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    EmotionalState,
    PhysicalState,
    SocialConnectedness,
    Accomplishment,
    Growth,
    Alignment,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::EmotionalState,
        Rating::PhysicalState,
        Rating::SocialConnectedness,
        Rating::Accomplishment,
        Rating::Growth,
        Rating::Alignment,
    ];

    /// Wire / column name.
    pub fn key(&self) -> &'static str {
        match self {
            Rating::EmotionalState => "emotional_state",
            Rating::PhysicalState => "physical_state",
            Rating::SocialConnectedness => "social_connectedness",
            Rating::Accomplishment => "accomplishment",
            Rating::Growth => "growth",
            Rating::Alignment => "alignment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::EmotionalState => "Emotional State",
            Rating::PhysicalState => "Physical State",
            Rating::SocialConnectedness => "Social Connectedness",
            Rating::Accomplishment => "Sense of Accomplishment",
            Rating::Growth => "Personal Growth",
            Rating::Alignment => "Reflection / Alignment",
        }
    }

    /// Column header used by the history table.
    pub fn short_label(&self) -> &'static str {
        match self {
            Rating::EmotionalState => "Emo",
            Rating::PhysicalState => "Phys",
            Rating::SocialConnectedness => "Social",
            Rating::Accomplishment => "Accomp",
            Rating::Growth => "Growth",
            Rating::Alignment => "Align",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Rating::EmotionalState => "I felt emotionally balanced and in control today.",
            Rating::PhysicalState => "I felt physically well and energised today.",
            Rating::SocialConnectedness => "I felt meaningfully connected to others today.",
            Rating::Accomplishment => "I accomplished what mattered most to me today.",
            Rating::Growth => "I learned something new or grew as a person today.",
            Rating::Alignment => {
                "My actions today were aligned with my values and long-term goals."
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Rating::ALL.into_iter().find(|r| r.key() == key)
    }
}

/// The four free-text reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reflection {
    Task1,
    Task2,
    Task3,
    ProudOf,
}

impl Reflection {
    pub const ALL: [Reflection; 4] = [
        Reflection::Task1,
        Reflection::Task2,
        Reflection::Task3,
        Reflection::ProudOf,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Reflection::Task1 => "task_1",
            Reflection::Task2 => "task_2",
            Reflection::Task3 => "task_3",
            Reflection::ProudOf => "proud_of",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Reflection::Task1 => "Task 1",
            Reflection::Task2 => "Task 2",
            Reflection::Task3 => "Task 3",
            Reflection::ProudOf => "Proud Of",
        }
    }
}

/// Backend-assigned row identifier. Opaque: it is echoed back to the
/// backend and displayed, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowNumber(Value);

impl RowNumber {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for RowNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(serialize_with = "ser_date", deserialize_with = "de_date")]
    pub date: NaiveDate,

    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub emotional_state: i32,
    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub physical_state: i32,
    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub social_connectedness: i32,
    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub accomplishment: i32,
    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub growth: i32,
    #[serde(default = "default_rating", deserialize_with = "de_rating")]
    pub alignment: i32,

    #[serde(default, deserialize_with = "de_text")]
    pub task_1: String,
    #[serde(default, deserialize_with = "de_text")]
    pub task_2: String,
    #[serde(default, deserialize_with = "de_text")]
    pub task_3: String,
    #[serde(default, deserialize_with = "de_text")]
    pub proud_of: String,

    #[serde(rename = "rowNumber", default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<RowNumber>,
}

impl Entry {
    /// A blank form for `date`: every rating at the midpoint, no text.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            emotional_state: LIKERT_DEFAULT,
            physical_state: LIKERT_DEFAULT,
            social_connectedness: LIKERT_DEFAULT,
            accomplishment: LIKERT_DEFAULT,
            growth: LIKERT_DEFAULT,
            alignment: LIKERT_DEFAULT,
            task_1: String::new(),
            task_2: String::new(),
            task_3: String::new(),
            proud_of: String::new(),
            row_number: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn rating(&self, rating: Rating) -> i32 {
        match rating {
            Rating::EmotionalState => self.emotional_state,
            Rating::PhysicalState => self.physical_state,
            Rating::SocialConnectedness => self.social_connectedness,
            Rating::Accomplishment => self.accomplishment,
            Rating::Growth => self.growth,
            Rating::Alignment => self.alignment,
        }
    }

    pub fn set_rating(&mut self, rating: Rating, value: i32) {
        let slot = match rating {
            Rating::EmotionalState => &mut self.emotional_state,
            Rating::PhysicalState => &mut self.physical_state,
            Rating::SocialConnectedness => &mut self.social_connectedness,
            Rating::Accomplishment => &mut self.accomplishment,
            Rating::Growth => &mut self.growth,
            Rating::Alignment => &mut self.alignment,
        };
        *slot = value;
    }

    pub fn text(&self, field: Reflection) -> &str {
        match field {
            Reflection::Task1 => &self.task_1,
            Reflection::Task2 => &self.task_2,
            Reflection::Task3 => &self.task_3,
            Reflection::ProudOf => &self.proud_of,
        }
    }

    pub fn set_text(&mut self, field: Reflection, value: impl Into<String>) {
        let slot = match field {
            Reflection::Task1 => &mut self.task_1,
            Reflection::Task2 => &mut self.task_2,
            Reflection::Task3 => &mut self.task_3,
            Reflection::ProudOf => &mut self.proud_of,
        };
        *slot = value.into();
    }
}

fn default_rating() -> i32 {
    LIKERT_DEFAULT
}

fn ser_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.format("%Y-%m-%d").to_string())
}

// Sheets often hand back "2024-05-01T00:00:00.000Z"; only the day matters.
fn de_date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(d)?;
    let day: String = raw.trim().chars().take(10).collect();
    NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map_err(|_| serde::de::Error::custom(format!("invalid entry date '{raw}'")))
}

fn de_rating<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(lenient_rating(&value))
}

/// Missing, zero, or non-integer cells read as the midpoint.
pub(crate) fn lenient_rating(value: &Value) -> i32 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| *n != 0)
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(LIKERT_DEFAULT)
}

fn de_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
