//! Per-step form state and extraction of record data from it.
//!
//! Forms are rebuilt from the record whenever a step is shown, and read back
//! into plain record types when the step is submitted. Text is trimmed here;
//! passwords are taken as typed.

use crate::input::InputField;
use aerial_core::documents::{DocumentSlot, UploadedDocument};
use aerial_core::members::MemberRoster;
use aerial_core::{Account, Profile, SubmissionRecord};

/// Move `index` by `delta`, wrapping around `len`.
pub(super) fn adjust_index(len: usize, index: &mut usize, delta: isize) {
    if len == 0 {
        *index = 0;
        return;
    }
    let len_i = len as isize;
    let mut next = *index as isize + delta;
    if next < 0 {
        next = len_i - 1;
    } else if next >= len_i {
        next = 0;
    }
    *index = next as usize;
}

fn trimmed(field: &InputField) -> String {
    field.value().trim().to_string()
}

// ============================================================================
// Account
// ============================================================================

#[derive(Debug, Clone)]
pub struct AccountForm {
    pub fields: [InputField; 4],
    pub focus: usize,
}

impl AccountForm {
    pub const EMAIL: usize = 1;

    pub fn from_record(record: &SubmissionRecord) -> Self {
        let account = &record.account;
        Self {
            fields: [
                InputField::new("Name").with_value(&account.name),
                InputField::new("Email ID").with_value(&account.email),
                InputField::masked("Password").with_value(&account.password),
                InputField::masked("Confirm Password").with_value(&account.confirm_password),
            ],
            focus: 0,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputField {
        &mut self.fields[self.focus]
    }

    pub fn email(&self) -> &str {
        self.fields[Self::EMAIL].value().trim()
    }

    pub fn extract(&self) -> Account {
        Account {
            name: trimmed(&self.fields[0]),
            email: trimmed(&self.fields[1]),
            password: self.fields[2].value().to_string(),
            confirm_password: self.fields[3].value().to_string(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProfileForm {
    /// Name, photo path, phone, role.
    pub fields: [InputField; 4],
    /// File name of the accepted photo.
    pub photo: Option<String>,
    /// Display text for the accepted photo, e.g. `me.png (0.10 MB)`.
    pub photo_detail: Option<String>,
    /// Index into the department list; `None` until one is picked.
    pub department: Option<usize>,
    /// 0..=3 are the text fields, 4 is the department picker.
    pub focus: usize,
}

impl ProfileForm {
    pub const PHOTO: usize = 1;
    pub const DEPARTMENT: usize = 4;
    pub const FOCUS_COUNT: usize = 5;

    pub fn from_record(record: &SubmissionRecord, departments: &[String]) -> Self {
        let profile = &record.profile;
        // The profile name defaults to the account holder.
        let name = if profile.name.is_empty() {
            &record.account.name
        } else {
            &profile.name
        };
        Self {
            fields: [
                InputField::new("Name").with_value(name),
                InputField::new("Path to profile photo"),
                InputField::new("Phone Number").with_value(&profile.phone_number),
                InputField::new("Role").with_value(&profile.role),
            ],
            photo: profile.photo.clone(),
            photo_detail: profile.photo.clone(),
            department: departments.iter().position(|d| *d == profile.department),
            focus: 0,
        }
    }

    pub fn on_photo(&self) -> bool {
        self.focus == Self::PHOTO
    }

    pub fn set_photo(&mut self, photo: &UploadedDocument) {
        self.photo = Some(photo.file_name.clone());
        self.photo_detail = Some(photo.display());
        self.fields[Self::PHOTO].clear();
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
        self.photo_detail = None;
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        self.fields.get_mut(self.focus)
    }

    /// Cycle the department picker; `None` wraps in as "Select department".
    pub fn cycle_department(&mut self, len: usize, delta: isize) {
        if len == 0 {
            self.department = None;
            return;
        }
        // Slot 0 is the empty choice, slots 1..=len are departments.
        let mut slot = self.department.map(|d| d + 1).unwrap_or(0);
        adjust_index(len + 1, &mut slot, delta);
        self.department = slot.checked_sub(1);
    }

    pub fn extract(&self, departments: &[String]) -> Profile {
        Profile {
            name: trimmed(&self.fields[0]),
            photo: self.photo.clone(),
            phone_number: trimmed(&self.fields[2]),
            role: trimmed(&self.fields[3]),
            department: self
                .department
                .and_then(|i| departments.get(i))
                .cloned()
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone)]
pub struct MembersForm {
    pub roster: MemberRoster,
    pub input: InputField,
    /// Highlighted roster entry (for removal).
    pub selected: usize,
}

impl MembersForm {
    pub fn from_record(record: &SubmissionRecord) -> Self {
        Self {
            roster: MemberRoster::from_saved(&record.members),
            input: InputField::new("Invite member"),
            selected: 0,
        }
    }
}

// ============================================================================
// Documents
// ============================================================================

#[derive(Debug, Clone)]
pub struct DocumentEntry {
    pub slot: DocumentSlot,
    pub path: InputField,
    /// File name once the document is accepted.
    pub uploaded: Option<String>,
    /// Display text for an accepted document, e.g. `id.pdf (0.25 MB)`.
    pub detail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DocumentsForm {
    pub entries: Vec<DocumentEntry>,
    /// One focus slot per entry, then the Continue button.
    pub focus: usize,
}

impl DocumentsForm {
    pub fn from_record(record: &SubmissionRecord) -> Self {
        // Only names are stored, so a lone license comes back in the first slot.
        let mut saved = record.documents.iter();
        let entries = DocumentSlot::all()
            .iter()
            .map(|slot| {
                let uploaded = saved.next().cloned();
                DocumentEntry {
                    slot: *slot,
                    path: InputField::new(&format!("Path to {}", slot.label())),
                    detail: uploaded.clone(),
                    uploaded,
                }
            })
            .collect();
        Self { entries, focus: 0 }
    }

    pub fn focus_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn on_continue(&self) -> bool {
        self.focus == self.entries.len()
    }

    pub fn focused_entry_mut(&mut self) -> Option<&mut DocumentEntry> {
        self.entries.get_mut(self.focus)
    }

    /// File names of accepted documents, in slot order.
    pub fn file_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.uploaded.clone())
            .collect()
    }
}

// ============================================================================
// Sign in
// ============================================================================

#[derive(Debug, Clone)]
pub struct SignInForm {
    pub fields: [InputField; 2],
    pub focus: usize,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self {
            fields: [
                InputField::new("Email ID"),
                InputField::masked("Password"),
            ],
            focus: 0,
        }
    }
}

impl SignInForm {
    pub fn email(&self) -> &str {
        self.fields[0].value().trim()
    }
}
