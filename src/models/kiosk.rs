use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kiosk as exchanged with the backend (`kioskId`, `kioskNm`, ... on the wire).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Kiosk {
    #[serde(rename = "kioskId", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "kioskNm")]
    pub name: String,
    #[serde(rename = "kioskTp")]
    pub kiosk_type: KioskType,
    pub status: KioskStatus,
    #[serde(rename = "position")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,

    // Audit fields, filled in by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_user_id: Option<String>,
}

/// Payload of a create call: a kiosk before the backend assigns its id.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KioskDraft {
    #[serde(rename = "kioskNm")]
    pub name: String,
    #[serde(rename = "kioskTp")]
    pub kiosk_type: KioskType,
    pub status: KioskStatus,
    #[serde(rename = "position")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_at: Option<NaiveDate>,
}

/// Kiosk model. The backend stores a free-form code; codes outside the
/// known set are kept verbatim in `Other`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum KioskType {
    #[default]
    Standard,
    Outdoor,
    WallMount,
    Table,
    DriveThru,
    Other(String),
}

impl KioskType {
    pub const ALL: [KioskType; 5] = [
        KioskType::Standard,
        KioskType::Outdoor,
        KioskType::WallMount,
        KioskType::Table,
        KioskType::DriveThru,
    ];

    /// Known type for `code` (case-insensitive, `-` accepted for `_`).
    pub fn known(code: &str) -> Option<KioskType> {
        let code = code.trim().to_ascii_uppercase().replace('-', "_");
        KioskType::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Known type, or `Other` holding the trimmed code as received.
    pub fn from_code(code: &str) -> KioskType {
        KioskType::known(code).unwrap_or_else(|| KioskType::Other(code.trim().to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, KioskType::Other(_))
    }

    /// Code used on the wire and in the `kioskTp` query parameter
    pub fn code(&self) -> &str {
        match self {
            KioskType::Standard => "STANDARD",
            KioskType::Outdoor => "OUTDOOR",
            KioskType::WallMount => "WALL_MOUNT",
            KioskType::Table => "TABLE",
            KioskType::DriveThru => "DRIVE_THRU",
            KioskType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            KioskType::Standard => "Standard",
            KioskType::Outdoor => "Outdoor",
            KioskType::WallMount => "Wall mount",
            KioskType::Table => "Table",
            KioskType::DriveThru => "Drive-thru",
            KioskType::Other(code) => code,
        }
    }
}

/// Strict parse: only the known types.
impl FromStr for KioskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KioskType::known(s).ok_or_else(|| format!("Unknown kiosk type: {}", s))
    }
}

impl Serialize for KioskType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for KioskType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(KioskType::from_code(&code))
    }
}

impl fmt::Display for KioskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Operational status. Older backend rows use upper-case codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum KioskStatus {
    #[default]
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "INACTIVE")]
    Inactive,
    #[serde(alias = "MAINTENANCE")]
    Maintenance,
    #[serde(alias = "OFFLINE")]
    Offline,
}

impl KioskStatus {
    pub const ALL: [KioskStatus; 4] = [
        KioskStatus::Active,
        KioskStatus::Inactive,
        KioskStatus::Maintenance,
        KioskStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KioskStatus::Active => "active",
            KioskStatus::Inactive => "inactive",
            KioskStatus::Maintenance => "maintenance",
            KioskStatus::Offline => "offline",
        }
    }
}

impl FromStr for KioskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        KioskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| format!("Unknown kiosk status: {}", s))
    }
}

impl fmt::Display for KioskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Kiosk {
    /// Full-record replacement built from a draft; identity and audit
    /// fields are kept.
    pub fn with_draft(&self, draft: KioskDraft) -> Kiosk {
        Kiosk {
            id: self.id.clone(),
            name: draft.name,
            kiosk_type: draft.kiosk_type,
            status: draft.status,
            location: draft.location,
            info: draft.info,
            installed_at: draft.installed_at.or(self.installed_at),
            last_seen_at: self.last_seen_at,
            reg_dt: self.reg_dt.clone(),
            reg_user_id: self.reg_user_id.clone(),
            mod_dt: self.mod_dt.clone(),
            mod_user_id: self.mod_user_id.clone(),
        }
    }
}
