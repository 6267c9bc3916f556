//! Mood detection HTTP API.
//!
//! Endpoints:
//! - POST /detectMood — Return the current mood result
//! - POST /api/recommendations — Audio profile and mock playlist for a mood
//! - GET  /health, /api/health — Liveness probe

pub mod routes;
