use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("local storage {op} failed for key {key}: {message}")]
    Storage {
        op: &'static str,
        key: String,
        message: String,
    },
    #[error("javascript call `{call}` failed: {message}")]
    Js { call: &'static str, message: String },
    #[error("failed to encode parameters for `{call}`: {message}")]
    Encode { call: &'static str, message: String },
}

impl SiteError {
    pub fn js(call: &'static str, err: JsValue) -> Self {
        SiteError::Js {
            call,
            message: describe(&err),
        }
    }

    pub fn storage(op: &'static str, key: &str, err: JsValue) -> Self {
        SiteError::Storage {
            op,
            key: key.to_string(),
            message: describe(&err),
        }
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub type Result<T> = std::result::Result<T, SiteError>;
