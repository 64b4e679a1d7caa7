//! HTTP integration tests against an ephemeral in-memory server.

mod http_api {
    pub mod helpers;

    mod task_endpoint_tests;
}
