//! In-process integration tests for the TokenForge HTTP API.

mod helpers;

mod json_api_test;
mod middleware_test;
