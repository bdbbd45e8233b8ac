use serde::{Deserialize, Serialize};

/// How lot reports are rendered.
///
/// `Human` prints the console text of each outcome; `Json` prints one JSON
/// object per outcome, one per line.
///
/// # Examples
///
/// ```
/// use parking_core::OutputFormat;
///
/// assert!(OutputFormat::from_json_flag(true).is_json());
/// assert_eq!(OutputFormat::default(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Human,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}
