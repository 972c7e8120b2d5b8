//! Synchronous typed client for the score API.
//!
//! # Overview
//! Fetches a student's disciplines, a single discipline, or a single lesson
//! score with one blocking HTTP GET each, and decodes the JSON response into
//! typed values.
//!
//! # Design
//! - `ScoreClient` holds only the host and a `Transport`; calls are
//!   independent of each other.
//! - Requests are plain data (`HttpRequest`), so the URL an operation will
//!   hit can be inspected without I/O.
//! - Any non-200 status is an error. A `{"error": "..."}` body becomes
//!   `ScoreError::Api`; anything else becomes `ScoreError::Status`.
//!
//! ```no_run
//! use score_client::ScoreClient;
//!
//! let client = ScoreClient::new("https://scores.example");
//! for result in client.get_student_disciplines(999)? {
//!     println!("{}: {}", result.discipline.name, result.score_rating.total);
//! }
//! # Ok::<(), score_client::ScoreError>(())
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod types;

pub use client::{ScoreApi, ScoreClient, API_VERSION};
pub use error::ScoreError;
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use response::parse_response;
pub use types::{
    Discipline, DisciplineScore, DisciplineScoreResult, DisciplineScoreResults, ErrorResponse,
    Lesson, LessonType, Score, ScoreRating,
};
