use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to the compact style once `scrollY` is past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const SUBMIT_DELAY_MS: u32 = 1_800;
pub const STATUS_HIDE_MS: u32 = 6_000;
pub const COOKIE_POPUP_DELAY_MS: u32 = 3_000;

pub const CONSENT_STORAGE_KEY: &str = "hyperq_cookies_accepted";
pub const CONSENT_ACCEPTED_VALUE: &str = "true";

pub const CAPTCHA_ERROR_MESSAGE: &str = "Error: wrong answer to the math question.";
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Success! We received your request and will get back to you shortly.";
pub const SUBMIT_LABEL: &str = "Send request";
pub const PROCESSING_LABEL: &str = "Processing...";
