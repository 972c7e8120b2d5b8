//! Domain DTOs for the score API.
//!
//! # Design
//! These types mirror the service's JSON payloads (camelCase field names).
//! Optional scores are `Option<f32>` so that a missing score (`null`) stays
//! distinguishable from a real zero after decoding.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// An academic subject the student is enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discipline {
    pub id: u32,
    pub name: String,
}

/// The student's aggregate standing within a discipline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRating {
    pub total: f32,
    pub students_count: u32,
    pub rating: u32,
    pub min_total: f32,
    pub max_total: f32,
}

/// A discipline together with the student's rating and per-lesson scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineScoreResult {
    pub discipline: Discipline,
    pub score_rating: ScoreRating,
    /// Lessons in the order the service returned them. `null` decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scores: Vec<Score>,
}

/// Payload of the discipline list endpoint.
pub type DisciplineScoreResults = Vec<DisciplineScoreResult>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LessonType {
    pub id: u8,
    pub short_name: String,
    pub long_name: String,
}

/// A single scored class session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub date: DateTime<FixedOffset>,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
}

/// Scores a student received for one lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub lesson: Lesson,
    pub first_score: Option<f32>,
    pub second_score: Option<f32>,
    #[serde(default)]
    pub is_absent: bool,
}

/// A discipline paired with a single lesson score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisciplineScore {
    pub discipline: Discipline,
    pub score: Score,
}

/// Body the service sends alongside a non-200 status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
