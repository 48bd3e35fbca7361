//! The submission record and the steps that fill it in.

use serde::{Deserialize, Serialize};

/// Maximum number of team members that can be invited.
pub const MAX_MEMBERS: usize = 5;

/// Account credentials collected on the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Contact profile collected on the second step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    /// File name of the uploaded photo, if any.
    pub photo: Option<String>,
    pub phone_number: String,
    pub role: String,
    pub department: String,
}

/// Everything the user has entered so far.
///
/// Serialized with the same camelCase keys the stored entry has always used,
/// so previously saved progress keeps loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    pub account: Account,
    pub profile: Profile,
    pub members: Vec<String>,
    pub documents: Vec<String>,
    pub is_complete: bool,
}

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Account,
    Profile,
    Members,
    Documents,
    Review,
}

impl Step {
    pub const TOTAL: u8 = 5;

    pub fn all() -> &'static [Step] {
        &[
            Step::Account,
            Step::Profile,
            Step::Members,
            Step::Documents,
            Step::Review,
        ]
    }

    /// 1-based position in the wizard.
    pub fn number(&self) -> u8 {
        match self {
            Step::Account => 1,
            Step::Profile => 2,
            Step::Members => 3,
            Step::Documents => 4,
            Step::Review => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::Account),
            2 => Some(Step::Profile),
            3 => Some(Step::Members),
            4 => Some(Step::Documents),
            5 => Some(Step::Review),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    /// Heading shown above the step's form.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Account => "Create Your Account",
            Step::Profile => "Set up your profile",
            Step::Members => "Invite members",
            Step::Documents => "Upload Documents",
            Step::Review => "Review & Complete",
        }
    }

    /// Short description under the heading.
    pub fn description(&self) -> &'static str {
        match self {
            Step::Account => "Use your work email for secure access.",
            Step::Profile => "This info will be visible for contact.",
            Step::Members => "You can invite up to 5 members to your team.",
            Step::Documents => "Upload important documents for verification.",
            Step::Review => "Review your information and complete the setup.",
        }
    }

    /// Label used by the step indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Account => "Create Your Account",
            Step::Profile => "Set up your profile",
            Step::Members => "Invite Members",
            Step::Documents => "Upload Documents",
            Step::Review => "Complete Sign In",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Partial account update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl From<Account> for AccountPatch {
    fn from(account: Account) -> Self {
        Self {
            name: Some(account.name),
            email: Some(account.email),
            password: Some(account.password),
            confirm_password: Some(account.confirm_password),
        }
    }
}

/// Partial profile update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    /// `Some(None)` clears a stored photo.
    pub photo: Option<Option<String>>,
    pub phone_number: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
}

impl From<Profile> for ProfilePatch {
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name),
            photo: Some(profile.photo),
            phone_number: Some(profile.phone_number),
            role: Some(profile.role),
            department: Some(profile.department),
        }
    }
}

/// Data submitted by a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepData {
    Account(AccountPatch),
    Profile(ProfilePatch),
    Members(Vec<String>),
    Documents(Vec<String>),
    Review,
}

impl StepData {
    /// The step that owns this kind of data.
    pub fn step(&self) -> Step {
        match self {
            StepData::Account(_) => Step::Account,
            StepData::Profile(_) => Step::Profile,
            StepData::Members(_) => Step::Members,
            StepData::Documents(_) => Step::Documents,
            StepData::Review => Step::Review,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StepData::Account(_) => "account",
            StepData::Profile(_) => "profile",
            StepData::Members(_) => "members",
            StepData::Documents(_) => "documents",
            StepData::Review => "review",
        }
    }
}

impl SubmissionRecord {
    pub(crate) fn merge_account(&mut self, patch: AccountPatch) {
        let account = &mut self.account;
        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(email) = patch.email {
            account.email = email;
        }
        if let Some(password) = patch.password {
            account.password = password;
        }
        if let Some(confirm) = patch.confirm_password {
            account.confirm_password = confirm;
        }
    }

    pub(crate) fn merge_profile(&mut self, patch: ProfilePatch) {
        let profile = &mut self.profile;
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(photo) = patch.photo {
            profile.photo = photo;
        }
        if let Some(phone) = patch.phone_number {
            profile.phone_number = phone;
        }
        if let Some(role) = patch.role {
            profile.role = role;
        }
        if let Some(department) = patch.department {
            profile.department = department;
        }
    }
}
