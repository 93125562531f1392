use thiserror::Error;

/// Rejected configuration. The simulation itself never fails; only the
/// parameters it is started with can be wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: f32, height: f32 },

    #[error("{what} size {width}x{height} must be positive and fit on a {screen_width}x{screen_height} screen")]
    BadEntitySize {
        what: &'static str,
        width: f32,
        height: f32,
        screen_width: f32,
        screen_height: f32,
    },

    #[error("{what} speed must be positive, got {value}")]
    NonPositiveSpeed { what: &'static str, value: f32 },

    #[error("power-up drop chance must be within [0, 1], got {0}")]
    DropChanceOutOfRange(f64),

    #[error("{what} range is empty: {min}..={max}")]
    EmptyRange {
        what: &'static str,
        min: u64,
        max: u64,
    },

    #[error("initial lives must be at least 1")]
    NoLives,

    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}
