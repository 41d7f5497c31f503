/// Screener system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default path to the serialized classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/screener.onnx";

/// Default directory holding the pre-built front-end bundle.
pub const DEFAULT_STATIC_DIR: &str = "simon_says";

/// Default directory for persisted session records.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Filename prefix for persisted session records.
pub const RECORD_FILE_PREFIX: &str = "game_data_";

/// Timestamp format used in record filenames and `/collect` responses.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
