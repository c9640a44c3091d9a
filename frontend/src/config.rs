use log::Level;

/// Content shown on the page, bundled into the binary.
pub const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

/// Fraction of a section that must be on screen before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
