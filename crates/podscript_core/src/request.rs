use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_MAX_WORDS: u32 = 1200;
pub const DEFAULT_SPEAKING_WPM: u32 = 150;

pub const GENERATE_PATH: &str = "/generate";
pub const GENERATE_FILE_PATH: &str = "/generate/file";

/// Which input the user generates from. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Url,
    File,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Url => "url",
            InputMode::File => "file",
        }
    }
}

/// A file picked by the user, already read into memory by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw form controls, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: InputMode,
    pub text: String,
    pub url: String,
    pub file: Option<SelectedFile>,
    pub model: String,
    pub max_words: String,
    pub speaking_wpm: String,
    pub include_timestamps: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            text: String::new(),
            url: String::new(),
            file: None,
            model: DEFAULT_MODEL.to_string(),
            max_words: DEFAULT_MAX_WORDS.to_string(),
            speaking_wpm: DEFAULT_SPEAKING_WPM.to_string(),
            include_timestamps: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub model: String,
    pub max_words: u32,
    pub speaking_wpm: u32,
    pub include_timestamps: bool,
}

/// One outbound generation request. Text and URL travel as JSON, files as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    Text {
        text: String,
        params: GenerationParams,
    },
    Url {
        url: String,
        params: GenerationParams,
    },
    File {
        file: SelectedFile,
        params: GenerationParams,
    },
}

/// JSON body for `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'a str>,
    #[serde(flatten)]
    pub params: &'a GenerationParams,
}

impl RequestPayload {
    pub fn mode(&self) -> InputMode {
        match self {
            RequestPayload::Text { .. } => InputMode::Text,
            RequestPayload::Url { .. } => InputMode::Url,
            RequestPayload::File { .. } => InputMode::File,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            RequestPayload::Text { .. } | RequestPayload::Url { .. } => GENERATE_PATH,
            RequestPayload::File { .. } => GENERATE_FILE_PATH,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        match self {
            RequestPayload::Text { params, .. }
            | RequestPayload::Url { params, .. }
            | RequestPayload::File { params, .. } => params,
        }
    }

    /// Body for the JSON endpoint; `None` for file uploads.
    pub fn json_body(&self) -> Option<JsonRequest<'_>> {
        match self {
            RequestPayload::Text { text, params } => Some(JsonRequest {
                text: Some(text),
                url: None,
                params,
            }),
            RequestPayload::Url { url, params } => Some(JsonRequest {
                text: None,
                url: Some(url),
                params,
            }),
            RequestPayload::File { .. } => None,
        }
    }

    /// Text parts sent next to the file in a multipart upload.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let params = self.params();
        vec![
            ("model", params.model.clone()),
            ("max_words", params.max_words.to_string()),
            ("speaking_wpm", params.speaking_wpm.to_string()),
            ("include_timestamps", params.include_timestamps.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please paste some text.")]
    MissingText,
    #[error("Please enter a URL.")]
    MissingUrl,
    #[error("Please select a .txt or .pdf file.")]
    MissingFile,
}

/// Validates the form for its active mode and shapes exactly one request.
///
/// Only presence is checked; URL syntax and file type are left to the service.
pub fn build_request(form: &FormState) -> Result<RequestPayload, ValidationError> {
    let params = GenerationParams {
        model: form.model.clone(),
        max_words: parse_or(&form.max_words, DEFAULT_MAX_WORDS),
        speaking_wpm: parse_or(&form.speaking_wpm, DEFAULT_SPEAKING_WPM),
        include_timestamps: form.include_timestamps,
    };

    match form.mode {
        InputMode::Text => {
            let text = form.text.trim();
            if text.is_empty() {
                return Err(ValidationError::MissingText);
            }
            Ok(RequestPayload::Text {
                text: text.to_string(),
                params,
            })
        }
        InputMode::Url => {
            let url = form.url.trim();
            if url.is_empty() {
                return Err(ValidationError::MissingUrl);
            }
            Ok(RequestPayload::Url {
                url: url.to_string(),
                params,
            })
        }
        InputMode::File => {
            let file = form.file.clone().ok_or(ValidationError::MissingFile)?;
            Ok(RequestPayload::File { file, params })
        }
    }
}

/// Only a whole, non-negative number is sent; anything else takes the default.
fn parse_or(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_fall_back_on_garbage() {
        assert_eq!(parse_or("", 1200), 1200);
        assert_eq!(parse_or("abc", 150), 150);
        assert_eq!(parse_or(" 900 ", 1200), 900);
        assert_eq!(parse_or("-5", 150), 150);
        assert_eq!(parse_or("1200.5", 1200), 1200);
    }

    #[test]
    fn json_body_carries_only_the_active_source() {
        let form = FormState {
            mode: InputMode::Url,
            url: "https://example.com/a".to_string(),
            text: "ignored".to_string(),
            ..FormState::default()
        };
        let payload = build_request(&form).unwrap();
        let body = serde_json::to_value(payload.json_body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "url": "https://example.com/a",
                "model": DEFAULT_MODEL,
                "max_words": 1200,
                "speaking_wpm": 150,
                "include_timestamps": true,
            })
        );
    }
}
