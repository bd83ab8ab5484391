//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Credential pool constants
pub mod credentials {
    /// Highest numbered environment slot scanned for credentials
    /// (`ADFORGE_API_KEY_1` .. `ADFORGE_API_KEY_22`)
    pub const MAX_KEY_SLOTS: usize = 22;

    /// Prefix of the numbered credential slots
    pub const KEY_SLOT_PREFIX: &str = "ADFORGE_API_KEY_";

    /// Legacy single-credential slot, used only when no numbered slot is set
    pub const LEGACY_KEY_VAR: &str = "ADFORGE_API_KEY";
}

/// Dispatcher constants
pub mod dispatch {
    /// Fixed pause between credential rotations within one dispatch (milliseconds)
    pub const ROTATION_BACKOFF_MS: u64 = 500;
}

/// Validation-retry constants
pub mod retry {
    /// Default number of retries after the first attempt
    pub const DEFAULT_MAX_RETRIES: u32 = 2;

    /// Linear backoff step between attempts (milliseconds); the wait before
    /// attempt N is `N * BASE_DELAY_MS`
    pub const BASE_DELAY_MS: u64 = 1000;

    /// Responses with fewer trimmed characters than this are treated as
    /// semantically empty and retried
    pub const MIN_SECTION_CHARS: usize = 50;
}

/// Pipeline constants
pub mod pipeline {
    /// Length of one video segment (seconds); duration packages are
    /// multiples of this
    pub const SEGMENT_SECONDS: u32 = 8;

    /// Literal separator the video-segment prompt asks the model to place
    /// between segments
    pub const SEGMENT_SEPARATOR: &str = "###SEGMENT###";

    /// Progress percentages for the full-pipeline steps, in order
    pub mod progress {
        pub const EXTRACTING: u8 = 10;
        pub const MAIN_FRAME: u8 = 30;
        pub const HEADER: u8 = 50;
        pub const POSTER: u8 = 55;
        pub const VOICE_OVER: u8 = 65;
        pub const VIDEO_SEGMENTS: u8 = 85;
        pub const DONE: u8 = 100;

        /// Extraction-only mode reports a single mid-run step
        pub const EXTRACT_ONLY: u8 = 30;
    }
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
}
