//! Typed client for the score API.
//!
//! # Design
//! `ScoreClient` holds only the host and a transport and carries no mutable
//! state between calls. Each endpoint has a `build_*` method that produces
//! the `HttpRequest` and a `get_*` method that sends it and decodes the
//! response through `parse_response`.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ScoreError;
use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::response::parse_response;
use crate::types::{DisciplineScore, DisciplineScoreResult, DisciplineScoreResults};

/// Version prefix placed between the host and every resource path.
pub const API_VERSION: &str = "/v1";

/// The operations the score API offers.
///
/// Depend on this trait instead of `ScoreClient` to substitute a fake in tests.
pub trait ScoreApi {
    fn get_student_disciplines(&self, student_id: u32) -> Result<DisciplineScoreResults, ScoreError>;

    fn get_student_discipline(
        &self,
        student_id: u32,
        discipline_id: u32,
    ) -> Result<DisciplineScoreResult, ScoreError>;

    fn get_student_score(
        &self,
        student_id: u32,
        discipline_id: u32,
        lesson_id: u32,
    ) -> Result<DisciplineScore, ScoreError>;
}

/// Synchronous client for the score API.
#[derive(Debug, Clone)]
pub struct ScoreClient<T = UreqTransport> {
    host: String,
    transport: T,
}

impl ScoreClient<UreqTransport> {
    /// Client for `host` (scheme and authority, e.g. `https://scores.example:8080`).
    pub fn new(host: &str) -> Self {
        Self::with_transport(host, UreqTransport::new())
    }
}

impl<T: Transport> ScoreClient<T> {
    pub fn with_transport(host: &str, transport: T) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn build_student_disciplines(&self, student_id: u32) -> HttpRequest {
        self.request(&format!("/students/{student_id}/disciplines"))
    }

    pub fn build_student_discipline(&self, student_id: u32, discipline_id: u32) -> HttpRequest {
        self.request(&format!("/students/{student_id}/disciplines/{discipline_id}"))
    }

    pub fn build_student_score(
        &self,
        student_id: u32,
        discipline_id: u32,
        lesson_id: u32,
    ) -> HttpRequest {
        self.request(&format!(
            "/students/{student_id}/disciplines/{discipline_id}/scores/{lesson_id}"
        ))
    }

    /// All disciplines of a student, with rating and scores.
    pub fn get_student_disciplines(
        &self,
        student_id: u32,
    ) -> Result<DisciplineScoreResults, ScoreError> {
        self.fetch(&self.build_student_disciplines(student_id))
    }

    pub fn get_student_discipline(
        &self,
        student_id: u32,
        discipline_id: u32,
    ) -> Result<DisciplineScoreResult, ScoreError> {
        self.fetch(&self.build_student_discipline(student_id, discipline_id))
    }

    /// The score of a single lesson within a discipline.
    pub fn get_student_score(
        &self,
        student_id: u32,
        discipline_id: u32,
        lesson_id: u32,
    ) -> Result<DisciplineScore, ScoreError> {
        self.fetch(&self.build_student_score(student_id, discipline_id, lesson_id))
    }

    fn request(&self, path: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}{API_VERSION}{path}", self.host),
        }
    }

    fn fetch<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R, ScoreError> {
        debug!(url = %request.url, "GET");
        let response = self.transport.execute(request)?;
        parse_response(&response)
    }
}

impl<T: Transport> ScoreApi for ScoreClient<T> {
    fn get_student_disciplines(&self, student_id: u32) -> Result<DisciplineScoreResults, ScoreError> {
        ScoreClient::get_student_disciplines(self, student_id)
    }

    fn get_student_discipline(
        &self,
        student_id: u32,
        discipline_id: u32,
    ) -> Result<DisciplineScoreResult, ScoreError> {
        ScoreClient::get_student_discipline(self, student_id, discipline_id)
    }

    fn get_student_score(
        &self,
        student_id: u32,
        discipline_id: u32,
        lesson_id: u32,
    ) -> Result<DisciplineScore, ScoreError> {
        ScoreClient::get_student_score(self, student_id, discipline_id, lesson_id)
    }
}
