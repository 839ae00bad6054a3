//! Request URI construction.
//!
//! # Design
//! The host is kept verbatim on the controller and joined with each endpoint
//! per call. Joining only trims slashes at the seam; encoding and validation
//! are left to the transport.

/// Join `host` and `endpoint` with exactly one `/` between them.
///
/// Every trailing slash of the host and every leading slash of the endpoint
/// is dropped first. Nothing else is escaped or validated; a malformed result
/// is rejected later by the transport.
pub fn create_uri(host: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
