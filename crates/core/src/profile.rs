//! Medical profile and its shallow-merge update.

use serde::{Deserialize, Serialize};

use crate::contacts::ContactBook;

/// Free-form demographic and medical details plus the contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub conditions: Vec<String>,
    pub emergency_contacts: ContactBook,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 35,
            blood_type: "O+".to_string(),
            allergies: vec!["Peanuts".to_string(), "Penicillin".to_string()],
            medications: vec!["Lisinopril".to_string(), "Metformin".to_string()],
            conditions: vec!["Hypertension".to_string(), "Type 2 Diabetes".to_string()],
            emergency_contacts: ContactBook::seeded(),
        }
    }
}

/// Partial profile update. Absent fields are left untouched; present lists
/// replace the whole list. Contacts are edited through their own commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub blood_type: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub conditions: Option<Vec<String>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One of the three editable string lists on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileList {
    Allergies,
    Medications,
    Conditions,
}

impl UserProfile {
    /// Shallow merge: every field present in `patch` overwrites ours.
    pub fn merge(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(blood_type) = patch.blood_type {
            self.blood_type = blood_type;
        }
        if let Some(allergies) = patch.allergies {
            self.allergies = allergies;
        }
        if let Some(medications) = patch.medications {
            self.medications = medications;
        }
        if let Some(conditions) = patch.conditions {
            self.conditions = conditions;
        }
    }

    pub fn list(&self, list: ProfileList) -> &[String] {
        match list {
            ProfileList::Allergies => &self.allergies,
            ProfileList::Medications => &self.medications,
            ProfileList::Conditions => &self.conditions,
        }
    }

    fn list_mut(&mut self, list: ProfileList) -> &mut Vec<String> {
        match list {
            ProfileList::Allergies => &mut self.allergies,
            ProfileList::Medications => &mut self.medications,
            ProfileList::Conditions => &mut self.conditions,
        }
    }

    /// Append an item to a list. Blank items are ignored.
    pub fn push_item(&mut self, list: ProfileList, item: &str) -> bool {
        if item.trim().is_empty() {
            return false;
        }
        self.list_mut(list).push(item.to_string());
        true
    }

    /// Remove the item at `index`. Out-of-range indices are ignored.
    pub fn remove_item(&mut self, list: ProfileList, index: usize) -> Option<String> {
        let items = self.list_mut(list);
        (index < items.len()).then(|| items.remove(index))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut profile = UserProfile::default();
        profile.merge(ProfilePatch {
            name: Some("Jordan Roe".to_string()),
            conditions: Some(vec![]),
            ..Default::default()
        });

        assert_eq!(profile.name, "Jordan Roe");
        assert!(profile.conditions.is_empty());
        assert_eq!(profile.age, 35);
        assert_eq!(profile.allergies, vec!["Peanuts", "Penicillin"]);
        assert_eq!(profile.emergency_contacts.len(), 1);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut profile = UserProfile::default();
        let patch = ProfilePatch::default();
        assert!(patch.is_empty());
        profile.merge(patch);
        assert_eq!(profile, UserProfile::default());
    }

    #[test]
    fn push_item_ignores_blank() {
        let mut profile = UserProfile::default();
        assert!(!profile.push_item(ProfileList::Allergies, "  "));
        assert!(profile.push_item(ProfileList::Allergies, "Latex"));
        assert_eq!(profile.list(ProfileList::Allergies).last().unwrap(), "Latex");
    }

    #[test]
    fn remove_item_by_index() {
        let mut profile = UserProfile::default();
        assert_eq!(
            profile.remove_item(ProfileList::Medications, 0).as_deref(),
            Some("Lisinopril")
        );
        assert_eq!(profile.medications, vec!["Metformin"]);
        assert_eq!(profile.remove_item(ProfileList::Medications, 5), None);
    }

    #[test]
    fn patch_deserializes_partial_json() {
        let patch: ProfilePatch = serde_json::from_str(r#"{"age": 36}"#).unwrap();
        assert_eq!(patch.age, Some(36));
        assert!(patch.name.is_none());
    }
}
