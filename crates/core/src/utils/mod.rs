pub mod dates;
pub mod version;

pub use dates::{days_until_ceil, format_long_date, whole_days_until};
pub use version::{is_version_greater_than, max_supported_version};
