//! Ordered, blank-stripped JSON representation of user records.
//!
//! Field order follows declaration order below; `serde_json` is built with
//! `preserve_order`, so [`Map`] keeps insertion order.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use allauth_entity::{EmailAddress, SocialAccount, UserProfile, UserRecord};

/// Whether a value counts as blank: `null`, `""` or `[]`.
///
/// `false`, `0` and `{}` are not blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Removes blank entries, keeping the order of the rest.
pub fn strip_blanks(fields: Map<String, Value>) -> Map<String, Value> {
    fields.into_iter().filter(|(_, v)| !is_blank(v)).collect()
}

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    let map: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Value::Object(strip_blanks(map))
}

/// ISO-8601 with `T` separator and numeric offset. Microseconds are printed
/// only when non-zero.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}

fn datetime(dt: Option<&DateTime<Utc>>) -> Value {
    dt.map_or(Value::Null, |dt| Value::String(format_datetime(dt)))
}

pub fn serialize_user_profile(profile: &UserProfile) -> Value {
    object([
        ("title", profile.title.as_str().into()),
        ("institution", profile.institution.as_str().into()),
        ("country", profile.country.as_str().into()),
        ("study_area", profile.study_area.as_str().into()),
        ("executive_summary", profile.executive_summary.as_str().into()),
    ])
}

pub fn serialize_email_address(email: &EmailAddress) -> Value {
    object([
        ("email", email.email.as_str().into()),
        ("verified", email.verified.into()),
        ("primary", email.primary.into()),
    ])
}

pub fn serialize_social_account(account: &SocialAccount) -> Value {
    object([
        ("uid", account.uid.as_str().into()),
        ("provider", account.provider.as_str().into()),
        ("date_joined", datetime(Some(&account.date_joined))),
        ("last_login", datetime(account.last_login.as_ref())),
        ("extra_data", account.extra_data.clone()),
    ])
}

/// Serializes a user with its profile and linked accounts.
pub fn serialize_user(record: &UserRecord) -> Value {
    let user = &record.user;
    object([
        ("username", user.username.as_str().into()),
        ("password", user.password.as_str().into()),
        ("is_active", user.is_active.into()),
        ("date_joined", datetime(Some(&user.date_joined))),
        ("last_login", datetime(user.last_login.as_ref())),
        ("first_name", user.first_name.as_str().into()),
        ("last_name", user.last_name.as_str().into()),
        // copy of the primary e-mail
        ("email", user.email.as_str().into()),
        (
            "user_profile",
            record
                .profile
                .as_ref()
                .map_or(Value::Null, serialize_user_profile),
        ),
        (
            "email_addresses",
            record
                .email_addresses
                .iter()
                .map(serialize_email_address)
                .collect(),
        ),
        (
            "social_accounts",
            record
                .social_accounts
                .iter()
                .map(serialize_social_account)
                .collect(),
        ),
    ])
}
