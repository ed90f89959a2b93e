// ABOUTME: Async HTTP client for the lead-scoring API.
// ABOUTME: Wraps reqwest with typed errors for the leads and score endpoints.

pub mod client;

pub use client::{ApiClient, ApiError, DEFAULT_API_BASE, LeadQuery, ScoreResponse};
