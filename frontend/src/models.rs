use std::collections::HashMap;

/// Select value that switches the region selector to free-text entry.
pub const CUSTOM_REGION: &str = "__CUSTOM__";
pub const DEFAULT_REGION: &str = "KR";
/// Category id meaning "no category filter".
pub const ALL_CATEGORIES: &str = "0";
pub const DEFAULT_MAX_RESULTS: u32 = 30;
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Region codes offered in the selector, with their Korean display names.
pub const REGIONS: [(&str, &str); 20] = [
    ("KR", "대한민국"),
    ("US", "미국"),
    ("JP", "일본"),
    ("GB", "영국"),
    ("DE", "독일"),
    ("FR", "프랑스"),
    ("IN", "인도"),
    ("ID", "인도네시아"),
    ("VN", "베트남"),
    ("TW", "대만"),
    ("TH", "태국"),
    ("PH", "필리핀"),
    ("CA", "캐나다"),
    ("AU", "호주"),
    ("BR", "브라질"),
    ("RU", "러시아"),
    ("TR", "튀르키예"),
    ("UA", "우크라이나"),
    ("SA", "사우디아라비아"),
    ("AE", "아랍에미리트"),
];

pub fn region_name(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(region_code, _)| *region_code == code)
        .map(|(_, name)| *name)
}

/// One popular video, flattened for display. Counters are kept as the raw
/// numeric strings the API returns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoRow {
    pub video_id: String,
    pub title: Option<String>,
    pub channel_id: String,
    pub channel_title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChoice {
    pub id: String,
    pub title: String,
}

/// Current state of the option controls, echoed back into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Value of the region `<select>`: a region code or [`CUSTOM_REGION`].
    pub region_choice: String,
    pub custom_region: String,
    /// Region code actually sent to the API.
    pub region_code: String,
    pub max_results: u32,
    pub category_id: String,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            region_choice: DEFAULT_REGION.to_string(),
            custom_region: DEFAULT_REGION.to_string(),
            region_code: DEFAULT_REGION.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            category_id: ALL_CATEGORIES.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn classes(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "bg-blue-100 border border-blue-400 text-blue-700",
            NoticeLevel::Success => "bg-green-100 border border-green-400 text-green-700",
            NoticeLevel::Warning => "bg-yellow-100 border border-yellow-400 text-yellow-700",
            NoticeLevel::Error => "bg-red-100 border border-red-400 text-red-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Channel id -> raw subscriber count.
pub type SubscriberCounts = HashMap<String, String>;
