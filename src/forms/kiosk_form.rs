use serde::Deserialize;
use validator::Validate;

use crate::error::FormErrors;
use crate::models::{Kiosk, KioskDraft, KioskStatus, KioskType};

/// Add/edit dialog input.
#[derive(Clone, PartialEq, Debug, Deserialize, Validate)]
pub struct KioskForm {
    #[validate(length(min = 1, message = "Kiosk name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Kiosk type is required"))]
    pub kiosk_type: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub status: String,
}

impl Default for KioskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kiosk_type: KioskType::default().code().to_string(),
            location: String::new(),
            info: String::new(),
            status: KioskStatus::default().as_str().to_string(),
        }
    }
}

impl KioskForm {
    /// Prefill for the edit dialog.
    pub fn from_kiosk(kiosk: &Kiosk) -> Self {
        Self {
            name: kiosk.name.clone(),
            kiosk_type: kiosk.kiosk_type.code().to_string(),
            location: kiosk.location.clone(),
            info: kiosk.info.clone().unwrap_or_default(),
            status: kiosk.status.as_str().to_string(),
        }
    }

    /// Validated create payload. An empty status means active.
    pub fn to_draft(&self) -> Result<KioskDraft, FormErrors> {
        let form = Self {
            name: self.name.trim().to_string(),
            kiosk_type: self.kiosk_type.trim().to_string(),
            location: self.location.trim().to_string(),
            info: self.info.trim().to_string(),
            status: self.status.trim().to_string(),
        };

        let mut errors = FormErrors::new();
        if let Err(e) = form.validate() {
            errors.extend_from(&e);
        }

        // Codes outside the known set pass through so edits keep them.
        let kiosk_type = if form.kiosk_type.is_empty() {
            KioskType::default()
        } else {
            KioskType::from_code(&form.kiosk_type)
        };
        let status = if form.status.is_empty() {
            KioskStatus::default()
        } else {
            form.status.parse().unwrap_or_else(|_| {
                errors.add("status", "Unknown status");
                KioskStatus::default()
            })
        };

        errors.into_result()?;

        Ok(KioskDraft {
            name: form.name,
            kiosk_type,
            status,
            location: form.location,
            info: (!form.info.is_empty()).then_some(form.info),
            installed_at: None,
        })
    }

    /// Full replacement record for `kiosk`.
    pub fn apply_to(&self, kiosk: &Kiosk) -> Result<Kiosk, FormErrors> {
        Ok(kiosk.with_draft(self.to_draft()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::kiosk;

    #[test]
    fn defaults_are_standard_and_active() {
        let form = KioskForm {
            name: "Lobby".to_string(),
            location: "1F".to_string(),
            ..Default::default()
        };
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.kiosk_type, KioskType::Standard);
        assert_eq!(draft.status, KioskStatus::Active);
        assert_eq!(draft.info, None);
    }

    #[test]
    fn required_fields_are_checked_after_trimming() {
        let form = KioskForm {
            name: "   ".to_string(),
            kiosk_type: String::new(),
            location: String::new(),
            ..Default::default()
        };
        let errors = form.to_draft().unwrap_err();
        assert_eq!(errors.get("name"), Some("Kiosk name is required"));
        assert_eq!(errors.get("kiosk_type"), Some("Kiosk type is required"));
        assert_eq!(errors.get("location"), Some("Location is required"));
    }

    #[test]
    fn unknown_status_is_a_field_error() {
        let form = KioskForm {
            name: "Lobby".to_string(),
            kiosk_type: "ROOFTOP".to_string(),
            location: "1F".to_string(),
            status: "exploded".to_string(),
            ..Default::default()
        };
        let errors = form.to_draft().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("status"), Some("Unknown status"));
    }

    #[test]
    fn unrecognised_type_is_kept_on_edit() {
        let mut original = kiosk("KS-4", "Ticket booth");
        original.kiosk_type = KioskType::Other("PAYMENT".to_string());

        let form = KioskForm::from_kiosk(&original);
        assert_eq!(form.kiosk_type, "PAYMENT");

        let record = form.apply_to(&original).unwrap();
        assert_eq!(record.kiosk_type, KioskType::Other("PAYMENT".to_string()));
    }

    #[test]
    fn edit_keeps_identity() {
        let mut original = kiosk("KS-9", "Old");
        original.reg_user_id = Some("admin".to_string());

        let mut form = KioskForm::from_kiosk(&original);
        assert_eq!(form.kiosk_type, "STANDARD");
        form.name = "New".to_string();
        form.status = "OFFLINE".to_string();
        form.info = "moved".to_string();

        let updated = form.apply_to(&original).unwrap();
        assert_eq!(updated.id, "KS-9");
        assert_eq!(updated.name, "New");
        assert_eq!(updated.status, KioskStatus::Offline);
        assert_eq!(updated.info.as_deref(), Some("moved"));
        assert_eq!(updated.reg_user_id.as_deref(), Some("admin"));
    }
}
