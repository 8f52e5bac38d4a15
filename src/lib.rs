pub mod console;
pub mod db;
pub mod display;
pub mod domain;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;
pub mod services;

/// Minimum number of matching criteria for two universities to count as similar.
pub const SIMILARITY_THRESHOLD: u32 = 3;

/// Relative band around the target's student count, inclusive on both ends.
pub const STUDENT_COUNT_TOLERANCE: f64 = 0.25;

/// Maximum difference between combined (verbal + math) SAT scores.
pub const SAT_TOLERANCE: f64 = 75.0;

/// Combined SAT scores below this are treated as missing data.
pub const MIN_COMBINED_SAT: f64 = 400.0;

/// Maximum difference in percent admitted, in percentage points.
pub const ADMISSION_RATE_TOLERANCE: f64 = 15.0;

/// Maximum difference on the academics scale.
pub const ACADEMIC_SCALE_TOLERANCE: u8 = 1;
