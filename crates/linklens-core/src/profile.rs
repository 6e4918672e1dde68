//! Scraped profile data as returned by the analyze endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identity and scraped fields of the analyzed profile.
///
/// Only the fields the view displays are typed; everything else the backend
/// sends is kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    /// Backend identifier used to associate an uploaded resume with this profile
    #[serde(default, deserialize_with = "lenient_text")]
    pub profile_id: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub public_identifier: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub full_name: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub headline: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub industry: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub country: String,

    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default, deserialize_with = "nullable")]
    pub education: Vec<EducationEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Scraped text field: `null` becomes empty, numbers and booleans become text
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Objects and arrays carry nothing displayable here
        _ => String::new(),
    })
}

/// `null` where a list is expected decodes as empty
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProfileData {
    /// Name to show in the header, falling back to the public identifier
    pub fn display_name(&self) -> &str {
        if !self.full_name.is_empty() {
            &self.full_name
        } else {
            &self.public_identifier
        }
    }

    /// "City, Country" with empty parts dropped
    pub fn location(&self) -> Option<String> {
        let parts: Vec<&str> = [self.city.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// One position in the profile's experience list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
}

/// One entry in the profile's education list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub field_of_study: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_profile() {
        let profile: ProfileData = serde_json::from_str(
            r#"{"full_name": "Bill Gates", "headline": "Co-chair", "followers": 35000000}"#,
        )
        .unwrap();

        assert_eq!(profile.full_name, "Bill Gates");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.extra.get("followers"), Some(&Value::from(35000000)));
    }

    #[test]
    fn test_null_scraped_fields_decode_as_empty() {
        let profile: ProfileData = serde_json::from_str(
            r#"{
                "profile_id": 42,
                "full_name": "Jane Doe",
                "headline": null,
                "summary": null,
                "skills": null,
                "experience": [{"company": "Acme", "description": null, "ends_at": null}],
                "education": null
            }"#,
        )
        .unwrap();

        assert_eq!(profile.profile_id, "42");
        assert_eq!(profile.headline, "");
        assert_eq!(profile.summary, "");
        assert!(profile.skills.is_empty());
        assert!(profile.education.is_empty());
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].company, "Acme");
        assert_eq!(profile.experience[0].description, "");
    }

    #[test]
    fn test_display_name_falls_back_to_identifier() {
        let profile = ProfileData {
            public_identifier: "williamhgates".into(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "williamhgates");
    }

    #[test]
    fn test_location_skips_empty_parts() {
        let profile = ProfileData {
            city: "Seattle".into(),
            ..Default::default()
        };
        assert_eq!(profile.location().as_deref(), Some("Seattle"));
        assert_eq!(ProfileData::default().location(), None);
    }
}
