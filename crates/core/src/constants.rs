use std::time::Duration;

/// Days before account expiry at which warning surfaces start to show.
pub const ACCOUNT_EXPIRY_WARNING_DAYS: i64 = 30;

/// Days before card expiry at which the warning banner starts to show.
pub const CARD_EXPIRY_WARNING_DAYS: i64 = 30;

/// Maximum tolerated difference between server and device clocks.
/// The comparison is strictly exclusive: a skew of exactly this value fails.
pub const MAX_CLOCK_SKEW_MS: i64 = 300_000;

/// Server status value that indicates the identity server is available.
pub const SERVER_STATUS_OK: &str = "ok";

/// Default deadline for a single check's predicate. A check that has not
/// settled by then is resolved with its own safe default verdict.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(10);
