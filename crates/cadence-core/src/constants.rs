/// Wire format for calendar dates (always zero padded).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Horizon applied to open-ended rules when no configuration is loaded.
pub const DEFAULT_HORIZON_DAYS: u32 = 365;

/// Name of the optional configuration file, without extension.
pub const CONFIG_FILE_STEM: &str = "cadence";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CADENCE";
