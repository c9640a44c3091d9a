use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to parse portfolio content: {0}")]
    Content(#[from] serde_json::Error),

    #[error("skill `{skill}` has proficiency {value}, expected 0..=5")]
    ProficiencyOutOfRange { skill: String, value: u8 },

    #[error("intersection threshold {0} is outside (0, 1]")]
    InvalidThreshold(f64),

    #[error("invalid ramp: {0}")]
    InvalidRamp(&'static str),

    #[error("no global window available")]
    NoWindow,

    #[error("browser call failed: {0}")]
    Browser(String),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        PortfolioError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
