//! User profile validation and display helpers.

use serde::{Deserialize, Serialize};

/// Raw profile fields as collected from a form. Empty strings and a zero age
/// count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
    pub age: u32,
    pub gender: String,
}

/// Display-ready profile summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub contact: String,
    pub location: String,
    pub demographics: String,
}

const MIN_PHONE_LEN: usize = 6;

/// Summarize a complete profile, or `None` if any check fails: every field
/// present, email contains `@`, phone of at least six characters, positive
/// age, gender `M` or `F`.
#[must_use]
pub fn process_user_data(input: &UserProfileInput) -> Option<UserSummary> {
    let required = [
        &input.first_name,
        &input.last_name,
        &input.email,
        &input.phone,
        &input.address,
        &input.city,
        &input.zip_code,
        &input.country,
        &input.gender,
    ];
    if required.iter().any(|field| field.is_empty()) {
        return None;
    }
    if !input.email.contains('@') || input.phone.chars().count() < MIN_PHONE_LEN {
        return None;
    }
    if input.age == 0 || !matches!(input.gender.as_str(), "M" | "F") {
        return None;
    }

    Some(UserSummary {
        name: format!("{} {}", input.first_name, input.last_name),
        contact: format!("{} / {}", input.email, input.phone),
        location: format!(
            "{}, {} {}, {}",
            input.address, input.city, input.zip_code, input.country
        ),
        demographics: format!("{} years old, {}", input.age, input.gender),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// "First Last", just "First" without a last name, "Unknown" without a user
/// or first name.
#[must_use]
pub fn format_user_name(user: Option<&PersonName>) -> String {
    let Some(user) = user else {
        return "Unknown".to_owned();
    };
    let Some(first) = non_empty(user.first_name.as_deref()) else {
        return "Unknown".to_owned();
    };
    match non_empty(user.last_name.as_deref()) {
        Some(last) => format!("{first} {last}"),
        None => first.to_owned(),
    }
}
