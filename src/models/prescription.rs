use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub name: String,
    pub quantity: u32,          // units remaining
    pub date_filled: NaiveDate, // "YYYY-MM-DD"
    pub refills: u32,           // refills remaining
    pub category: String,
    pub active: bool,
    pub instructions: String,
    pub auto_refill: bool,
    pub auto_refill_eligible: bool, // fixed at creation
    pub notify_refill: bool,
}

impl Prescription {
    pub fn status_str(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }

    pub fn auto_refill_str(&self) -> &'static str {
        match (self.auto_refill_eligible, self.auto_refill) {
            (false, _) => "Not Eligible",
            (true, true) => "Enabled",
            (true, false) => "Disabled",
        }
    }

    pub fn notify_refill_str(&self) -> &'static str {
        if self.notify_refill { "Yes" } else { "No" }
    }

    pub fn is_low(&self, threshold: u32) -> bool {
        self.active && self.quantity < threshold
    }

    /// Merge every `Some` field of the patch into this record.
    pub fn apply(&mut self, patch: &PrescriptionPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = patch.quantity {
            self.quantity = v;
        }
        if let Some(v) = patch.date_filled {
            self.date_filled = v;
        }
        if let Some(v) = patch.refills {
            self.refills = v;
        }
        if let Some(v) = &patch.category {
            self.category = v.clone();
        }
        if let Some(v) = patch.active {
            self.active = v;
        }
        if let Some(v) = &patch.instructions {
            self.instructions = v.clone();
        }
        if let Some(v) = patch.auto_refill {
            self.auto_refill = v;
        }
        if let Some(v) = patch.auto_refill_eligible {
            self.auto_refill_eligible = v;
        }
        if let Some(v) = patch.notify_refill {
            self.notify_refill = v;
        }
    }
}

/// Partial update of a [`Prescription`]. The id is not part of a patch, so a
/// record can never be re-keyed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionPatch {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub date_filled: Option<NaiveDate>,
    pub refills: Option<u32>,
    pub category: Option<String>,
    pub active: Option<bool>,
    pub instructions: Option<String>,
    pub auto_refill: Option<bool>,
    pub auto_refill_eligible: Option<bool>,
    pub notify_refill: Option<bool>,
}

impl PrescriptionPatch {
    pub fn auto_refill(on: bool) -> Self {
        Self {
            auto_refill: Some(on),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
