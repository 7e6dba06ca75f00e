//! HTTP-level constants for the Xendit API.

/// Environment variable holding the secret API key.
pub const API_KEY_ENV: &str = "XENDIT_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "XENDIT_BASE_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_SECS_ENV: &str = "XENDIT_TIMEOUT_SECS";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header used to act on behalf of a sub-account (xenPlatform).
pub const FOR_USER_ID_HEADER: &str = "for-user-id";

/// Header carrying a caller-chosen idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "X-IDEMPOTENCY-KEY";
