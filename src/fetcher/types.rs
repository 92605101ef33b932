use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Charset {
    Utf8,
    Windows1252,
    ShiftJis,
    Gb2312,
    Big5,
    Other(String),
}

impl Charset {
    pub fn from_encoding(encoding: &'static encoding_rs::Encoding) -> Self {
        use std::ptr;

        if ptr::eq(encoding, encoding_rs::UTF_8) {
            Self::Utf8
        } else if ptr::eq(encoding, encoding_rs::WINDOWS_1252) {
            Self::Windows1252
        } else if ptr::eq(encoding, encoding_rs::SHIFT_JIS) {
            Self::ShiftJis
        } else if ptr::eq(encoding, encoding_rs::GBK) || ptr::eq(encoding, encoding_rs::GB18030) {
            Self::Gb2312
        } else if ptr::eq(encoding, encoding_rs::BIG5) {
            Self::Big5
        } else {
            Self::Other(encoding.name().to_string())
        }
    }

    /// WHATWG encoding name, e.g. `UTF-8` or `windows-1252`.
    pub fn name(&self) -> &str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Windows1252 => "windows-1252",
            Self::ShiftJis => "Shift_JIS",
            Self::Gb2312 => "GBK",
            Self::Big5 => "Big5",
            Self::Other(name) => name.as_str(),
        }
    }
}

/// A fetched page, decoded to UTF-8. Lives for one scrape request.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url_final: Url,
    pub status: StatusCode,
    pub html: String,
    pub charset: Charset,
    pub fetched_at: DateTime<Utc>,
}

impl RawPage {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}
