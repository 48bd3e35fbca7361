//! Draft list of invited team members, edited on the members step before it
//! is saved into the record.

use crate::errors::SignupError;
use crate::record::MAX_MEMBERS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRoster {
    members: Vec<String>,
}

impl MemberRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from saved members, keeping at most `MAX_MEMBERS` non-empty entries.
    pub fn from_saved(saved: &[String]) -> Self {
        let members = saved
            .iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .take(MAX_MEMBERS)
            .collect();
        Self { members }
    }

    /// Add a member. Blank input is ignored and returns `Ok(false)`.
    pub fn add(&mut self, member: &str) -> Result<bool, SignupError> {
        let member = member.trim();
        if member.is_empty() {
            return Ok(false);
        }
        if self.is_full() {
            return Err(SignupError::MemberLimit { limit: MAX_MEMBERS });
        }
        self.members.push(member.to_string());
        Ok(true)
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.members.len() {
            Some(self.members.remove(index))
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_MEMBERS
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn into_vec(self) -> Vec<String> {
        self.members
    }
}
