//! Event and attribute types
//!
//! The three event kinds mirror the campaign log formats. Attribute enums
//! carry an `Unknown` fallback so that queries over partially attributed
//! users stay total.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, Result};

/// Viewer gender reported in the impression log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male viewer
    Male,
    /// Female viewer
    Female,
    /// Not reported
    Unknown,
}

impl Gender {
    /// Every concrete value, in log order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unknown];

    /// Parse a gender token from a log row
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unknown" | "" => Ok(Self::Unknown),
            _ => Err(EventError::unknown_token("gender", s)),
        }
    }

    /// Get the string name of this value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Viewer age bucket reported in the impression log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    /// Under 25 (`<25`)
    Under25,
    /// 25 to 34 (`25-34`)
    From25To34,
    /// 35 to 44 (`35-44`)
    From35To44,
    /// 45 to 54 (`45-54`)
    From45To54,
    /// Over 54 (`>54`)
    Over54,
    /// Not reported
    Unknown,
}

impl AgeRange {
    /// Every concrete value, in log order
    pub const ALL: [Self; 6] = [
        Self::Under25,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::Over54,
        Self::Unknown,
    ];

    /// Parse an age-range token from a log row
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim() {
            "<25" => Ok(Self::Under25),
            "25-34" => Ok(Self::From25To34),
            "35-44" => Ok(Self::From35To44),
            "45-54" => Ok(Self::From45To54),
            ">54" => Ok(Self::Over54),
            "unknown" | "Unknown" | "" => Ok(Self::Unknown),
            other => Err(EventError::unknown_token("age", other)),
        }
    }

    /// Get the log token for this value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under25 => "<25",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::Over54 => ">54",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Viewer income band reported in the impression log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Income {
    /// Low income band
    Low,
    /// Medium income band
    Medium,
    /// High income band
    High,
    /// Not reported
    Unknown,
}

impl Income {
    /// Every concrete value, in log order
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Unknown];

    /// Parse an income token from a log row
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "unknown" | "" => Ok(Self::Unknown),
            _ => Err(EventError::unknown_token("income", s)),
        }
    }

    /// Get the string name of this value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Income {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Page context the ad was shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// News site
    News,
    /// Shopping site
    Shopping,
    /// Social media
    SocialMedia,
    /// Blog
    Blog,
    /// Hobbies site
    Hobbies,
    /// Travel site
    Travel,
    /// Not reported
    Unknown,
}

impl Context {
    /// Every concrete value, in log order
    pub const ALL: [Self; 7] = [
        Self::News,
        Self::Shopping,
        Self::SocialMedia,
        Self::Blog,
        Self::Hobbies,
        Self::Travel,
        Self::Unknown,
    ];

    /// Parse a context token from a log row
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "news" => Ok(Self::News),
            "shopping" => Ok(Self::Shopping),
            "social media" | "social_media" => Ok(Self::SocialMedia),
            "blog" => Ok(Self::Blog),
            "hobbies" => Ok(Self::Hobbies),
            "travel" => Ok(Self::Travel),
            "unknown" | "" => Ok(Self::Unknown),
            _ => Err(EventError::unknown_token("context", s)),
        }
    }

    /// Get the string name of this value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Shopping => "shopping",
            Self::SocialMedia => "social media",
            Self::Blog => "blog",
            Self::Hobbies => "hobbies",
            Self::Travel => "travel",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ad impression parsed from the impression log
///
/// Immutable once appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impression {
    /// When the ad was shown
    pub timestamp: DateTime<Utc>,
    /// Logical user the ad was shown to
    pub user_id: String,
    /// Viewer gender
    pub gender: Gender,
    /// Viewer age bucket
    pub age: AgeRange,
    /// Viewer income band
    pub income: Income,
    /// Page context of the impression
    pub context: Context,
    /// Cost of showing the ad (non-negative)
    pub cost: f64,
}

impl Impression {
    /// Create a new impression
    pub fn new(
        timestamp: DateTime<Utc>,
        user_id: impl Into<String>,
        gender: Gender,
        age: AgeRange,
        income: Income,
        context: Context,
        cost: f64,
    ) -> Self {
        Self {
            timestamp,
            user_id: user_id.into(),
            gender,
            age,
            income,
            context,
            cost,
        }
    }
}

/// An ad click parsed from the click log
///
/// Clicks carry no demographics of their own; they are attributed to the
/// same logical user observed in the impression log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Click {
    /// When the ad was clicked
    pub timestamp: DateTime<Utc>,
    /// Logical user who clicked
    pub user_id: String,
    /// Cost of the click (non-negative)
    pub cost: f64,
}

impl Click {
    /// Create a new click
    pub fn new(timestamp: DateTime<Utc>, user_id: impl Into<String>, cost: f64) -> Self {
        Self {
            timestamp,
            user_id: user_id.into(),
            cost,
        }
    }
}

/// A site visit parsed from the server log
///
/// `exit` is `None` while the session is still open; its duration is then
/// unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// When the user landed on the site
    pub entry: DateTime<Utc>,
    /// When the user left, if the session has ended
    pub exit: Option<DateTime<Utc>>,
    /// Number of pages viewed during the session
    pub pages_viewed: u32,
    /// Whether the session converted
    pub conversion: bool,
    /// Logical user the session belongs to
    pub user_id: String,
}

impl Session {
    /// Create a new session record
    pub fn new(
        entry: DateTime<Utc>,
        exit: Option<DateTime<Utc>>,
        pages_viewed: u32,
        conversion: bool,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            entry,
            exit,
            pages_viewed,
            conversion,
            user_id: user_id.into(),
        }
    }

    /// Time spent on site, or `None` while the session is open
    pub fn duration(&self) -> Option<Duration> {
        self.exit.map(|exit| exit - self.entry)
    }
}
