//! Global constants

pub const DEFAULT_LOG_FILE: &str = "/tmp/S3buckets.txt";
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// e.g., `2024-Mar-07`
pub const BUCKET_DATE_FORMAT: &str = "%Y-%b-%d";
pub const UNKNOWN_DATE: &str = "unknown";

/// S3 global default, used when no region can be resolved.
pub const DEFAULT_REGION: &str = "us-east-1";
