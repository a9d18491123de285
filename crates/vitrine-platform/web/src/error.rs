use wasm_bindgen::JsValue;

/// Failure while attaching a component to the page.
///
/// Missing markup is not an error; components without their elements simply
/// do not mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    NoWindow,
    NoDocument,
    Dom { operation: &'static str, message: String },
}

impl MountError {
    pub(crate) fn dom(operation: &'static str, value: JsValue) -> Self {
        MountError::Dom {
            operation,
            message: js_message(&value),
        }
    }
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "no global window exists"),
            MountError::NoDocument => write!(f, "window has no document"),
            MountError::Dom { operation, message } => write!(f, "{operation} failed: {message}"),
        }
    }
}

impl std::error::Error for MountError {}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
