use std::error::Error;
use std::fmt;

use url::ParseError;

#[derive(Debug)]
pub enum SycarexError {
    Config(String),
    Request(String),
    Rejected { status: u16, message: String },
    Parse(ParseError),
    #[cfg(target_arch = "wasm32")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for SycarexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SycarexError::Config(s) => write!(f, "invalid configuration: {}", s),
            SycarexError::Request(s) => write!(f, "request failed: {}", s),
            SycarexError::Rejected { status, message } => {
                write!(f, "rejected by service: {} - {}", status, message)
            }
            SycarexError::Parse(e) => write!(f, "{}", e),
            #[cfg(target_arch = "wasm32")]
            SycarexError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for SycarexError {}

impl From<ParseError> for SycarexError {
    fn from(error: ParseError) -> Self {
        SycarexError::Parse(error)
    }
}

impl From<&str> for SycarexError {
    fn from(error: &str) -> Self {
        SycarexError::Request(error.to_owned())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SycarexError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        SycarexError::Js(error)
    }
}
