//! Pre-export validation, stricter than the completion rules.
//!
//! Cheap and synchronous; safe to call on every keystroke. Reports every
//! violated rule in a fixed order, not just the first.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    SummaryRequired,
    ExperienceRequired,
    EducationRequired,
}

impl ValidationIssue {
    pub fn message(self) -> &'static str {
        match self {
            ValidationIssue::NameRequired => "Name is required",
            ValidationIssue::EmailRequired => "Email is required",
            ValidationIssue::EmailInvalid => "Please enter a valid email address",
            ValidationIssue::SummaryRequired => "Professional summary is required",
            ValidationIssue::ExperienceRequired => "At least one work experience entry is required",
            ValidationIssue::EducationRequired => "At least one education entry is required",
        }
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a dot in the domain part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns every violated rule, in check order. Empty means valid.
pub fn validate_resume(data: &ResumeData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let info = &data.personal_info;
    if info.name.trim().is_empty() {
        issues.push(ValidationIssue::NameRequired);
    }
    if info.email.trim().is_empty() {
        issues.push(ValidationIssue::EmailRequired);
    } else if !is_valid_email(&info.email) {
        issues.push(ValidationIssue::EmailInvalid);
    }
    if data.summary.trim().is_empty() {
        issues.push(ValidationIssue::SummaryRequired);
    }
    if data.experience.is_empty() {
        issues.push(ValidationIssue::ExperienceRequired);
    }
    if data.education.is_empty() {
        issues.push(ValidationIssue::EducationRequired);
    }
    issues
}

/// Human-readable messages for every violated rule.
pub fn validate(data: &ResumeData) -> Vec<String> {
    validate_resume(data)
        .into_iter()
        .map(|i| i.message().to_string())
        .collect()
}
