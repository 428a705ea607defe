//! View-State Models
//!
//! Draft and submit-flow state owned by the item forms.

use catalog_api_client::Item;

/// Lifecycle of one form submission.
///
/// `Submitting` is the only state in which the submit control is disabled;
/// terminal states re-enter the cycle on the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    /// True while a request is in flight.
    pub fn is_busy(self) -> bool {
        self == SubmitStatus::Submitting
    }
}

/// Controlled state of the create-item form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax: f64,
}

impl ItemDraft {
    /// A draft is submittable once it has a name.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Wire representation. Every draft field is sent, empty or zero
    /// included; the backend treats them as provided values.
    pub fn to_item(&self) -> Item {
        Item {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            price: self.price,
            tax: Some(self.tax),
        }
    }
}

/// Parse the id field of the fetch form. `None` short-circuits the submit:
/// no request is issued for an empty or non-numeric id.
pub fn parse_item_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}
