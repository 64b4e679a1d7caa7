//! Unit tests for the HTTP surface.
//!
//! Wire-shape and error-mapping tests live here; full request/response
//! round trips run in the `http_api` integration suite against a live
//! server.
