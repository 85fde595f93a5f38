/// Column-name constants for the trip logs.
/// Single source of truth for loader, reporters and tests.

// ── Source columns ──────────────────────────────────────────────────────────
pub mod trip {
    pub const START_TIME: &str = "Start Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";

    pub const REQUIRED: [&str; 5] = [
        START_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

// ── Optional demographic columns (absent for washington) ────────────────────
pub mod demographics {
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";
}

// ── Derived columns ─────────────────────────────────────────────────────────
pub mod derived {
    pub const MONTH: &str = "month";
    pub const DAY_OF_WEEK: &str = "day_of_week";
    pub const HOUR: &str = "hour";
    pub const COUNT: &str = "_trip_count";
}

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
