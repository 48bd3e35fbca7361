//! Text summaries of a record for the review step and the completion screen.

use crate::record::SubmissionRecord;

pub fn review_lines(record: &SubmissionRecord) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("👤 Account Information".to_string());
    lines.push(format!("  Name: {}", record.account.name));
    lines.push(format!("  Email: {}", record.account.email));
    lines.push(String::new());
    lines.push("🪪 Profile Information".to_string());
    lines.push(format!("  Role: {}", record.profile.role));
    lines.push(format!("  Department: {}", record.profile.department));
    lines.push(format!("  Phone: {}", record.profile.phone_number));
    lines.push(String::new());
    lines.push("👥 Team Members".to_string());
    lines.push(format!("  Invited: {} member(s)", record.members.len()));
    if !record.documents.is_empty() {
        lines.push(String::new());
        lines.push("📄 Documents".to_string());
        for doc in &record.documents {
            lines.push(format!("  {}", doc));
        }
    }
    lines
}

pub fn completion_lines(record: &SubmissionRecord) -> Vec<String> {
    vec![
        "✅ Welcome to Red Aerial Systems!".to_string(),
        "Your account has been successfully created and verified.".to_string(),
        String::new(),
        "Account Summary:".to_string(),
        format!("  Name: {}", record.account.name),
        format!("  Email: {}", record.account.email),
        format!("  Role: {}", record.profile.role),
        format!("  Department: {}", record.profile.department),
        format!("  Team Members: {} invited", record.members.len()),
    ]
}

/// Saved progress for the `status` command. Passwords are never printed.
pub fn status_lines(record: &SubmissionRecord) -> Vec<String> {
    let password = if record.account.password.is_empty() {
        "(not set)"
    } else {
        "********"
    };
    vec![
        format!("Complete: {}", if record.is_complete { "yes" } else { "no" }),
        format!("Account: {} <{}>", record.account.name, record.account.email),
        format!("Password: {}", password),
        format!(
            "Profile: {} | {} | {} | {}",
            record.profile.name,
            record.profile.phone_number,
            record.profile.role,
            record.profile.department
        ),
        format!("Members: {}", record.members.join(", ")),
        format!("Documents: {}", record.documents.join(", ")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_counts_members_and_lists_documents() {
        let mut record = SubmissionRecord::default();
        record.account.name = "Jo".to_string();
        record.members = vec!["a@x.com".to_string(), "b@x.com".to_string()];
        record.documents = vec!["id.pdf".to_string()];

        let lines = review_lines(&record);
        assert!(lines.contains(&"  Name: Jo".to_string()));
        assert!(lines.contains(&"  Invited: 2 member(s)".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  id.pdf"));
    }

    #[test]
    fn completion_summary_mentions_invites() {
        let record = SubmissionRecord::default();
        let lines = completion_lines(&record);
        assert_eq!(lines.last().map(String::as_str), Some("  Team Members: 0 invited"));
    }

    #[test]
    fn status_redacts_password() {
        let mut record = SubmissionRecord::default();
        record.account.password = "Abcdef12".to_string();
        let text = status_lines(&record).join("\n");
        assert!(!text.contains("Abcdef12"));
        assert!(text.contains("Password: ********"));
    }
}
