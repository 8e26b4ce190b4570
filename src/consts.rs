/// Minimum representable year (inclusive), bounded by the 4-digit canonical form
pub const MIN_YEAR: i32 = 0;

/// Maximum representable year (inclusive), bounded by the 4-digit canonical form
pub const MAX_YEAR: i32 = 9999;

/// Number of months in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Month number for February (1-based)
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days in a calendar week; every calendar grid row has this many cells
pub const DAYS_IN_WEEK: usize = 7;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// strftime pattern producing the canonical `YYYY-MM-DD` form
pub const CANONICAL_PATTERN: &str = "%Y-%m-%d";

/// Granularity, in minutes, used when searching for the first instant of a day whose
/// midnight was skipped by a DST transition
pub(crate) const SKIPPED_MIDNIGHT_STEP_MINUTES: u32 = 15;

/// Minutes in a civil day
pub(crate) const MINUTES_PER_DAY: u32 = 24 * 60;
