#![allow(dead_code)]

use fg_core::{ExternalIdentity, NewProfile, ProfilePatch, ScoreEntry};

use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

/// Creates a NewProfile as a password sign-up would
pub fn create_new_profile(email: &str) -> NewProfile {
    NewProfile {
        email: email.to_string(),
        display_name: "Ada".to_string(),
        provider_uid: "pw-ada".to_string(),
        photo_url: None,
    }
}

/// Creates the patch a GitHub sign-in would merge
pub fn create_github_patch() -> ProfilePatch {
    ProfilePatch {
        provider_uid: "gh-42".to_string(),
        display_name: Some("ada-gh".to_string()),
        photo_url: Some("https://avatars.example.com/ada.png".to_string()),
    }
}

pub fn create_github_identity(email: &str) -> ExternalIdentity {
    ExternalIdentity::new("gh-42")
        .with_email(email)
        .with_display_name("ada-gh")
}

/// Score recorded `minutes` after t0
pub fn create_score_at(score: i64, minutes: i64) -> ScoreEntry {
    ScoreEntry::recorded(score, t0() + Duration::minutes(minutes))
}
