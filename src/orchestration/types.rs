// Core types for the generation system

use super::error::{GenerationError, ProfileError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of brand identity lines in every bundle
pub const BRAND_IDENTITY_LEN: usize = 4;

/// Number of entries in each insights list
pub const INSIGHT_LIST_LEN: usize = 5;

/// Highest score a platform recommendation may carry
pub const MAX_PLATFORM_SCORE: f64 = 100.0;

/// Descriptive record about a musical act, as submitted by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub name: String,
    pub genre: String,
    pub target_audience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_presence: Option<String>,
}

impl ArtistProfile {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        target_audience: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            target_audience: target_audience.into(),
            social_presence: None,
        }
    }

    pub fn with_social_presence(mut self, social_presence: impl Into<String>) -> Self {
        self.social_presence = Some(social_presence.into());
        self
    }

    /// Social presence, with blank values treated as absent
    pub fn social_presence(&self) -> Option<&str> {
        self.social_presence
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Check that every required field is filled in
    pub fn validate(&self) -> Result<(), ProfileError> {
        let required = [
            ("name", &self.name),
            ("genre", &self.genre),
            ("targetAudience", &self.target_audience),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField(field));
            }
        }

        Ok(())
    }
}

/// Fixed-shape aggregate of generated marketing content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub branding: Branding,
    pub social_media: SocialMedia,
    pub press: Press,
    pub insights: Insights,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub logo_description: String,
    pub brand_identity: Vec<String>,
    pub visual_style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialMedia {
    pub posts: Vec<SocialPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialPost {
    #[serde(rename = "type")]
    pub kind: String,
    pub caption: String,
    pub platform: String,
}

impl SocialPost {
    pub fn new(
        kind: impl Into<String>,
        caption: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            caption: caption.into(),
            platform: platform.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Press {
    pub press_release: String,
    pub artist_bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub top_locations: Vec<String>,
    pub platforms: Vec<PlatformScore>,
    pub playlists: Vec<String>,
    pub influencers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformScore {
    pub name: String,
    /// Any JSON number; fractional scores are kept as given
    pub score: f64,
}

impl PlatformScore {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl ContentBundle {
    /// Verify the bundle is fully populated with the expected cardinalities.
    ///
    /// Remote bundles are only accepted when this passes; a bundle that
    /// deserializes but is missing content counts as a malformed response.
    pub fn check_shape(&self) -> Result<(), GenerationError> {
        non_blank("branding.logoDescription", &self.branding.logo_description)?;
        non_blank("branding.visualStyle", &self.branding.visual_style)?;
        exact_len("branding.brandIdentity", &self.branding.brand_identity, BRAND_IDENTITY_LEN)?;
        all_non_blank("branding.brandIdentity", &self.branding.brand_identity)?;

        if self.social_media.posts.is_empty() {
            return Err(malformed("socialMedia.posts is empty"));
        }
        for post in &self.social_media.posts {
            non_blank("socialMedia.posts[].type", &post.kind)?;
            non_blank("socialMedia.posts[].caption", &post.caption)?;
            non_blank("socialMedia.posts[].platform", &post.platform)?;
        }

        non_blank("press.pressRelease", &self.press.press_release)?;
        non_blank("press.artistBio", &self.press.artist_bio)?;

        let insights = &self.insights;
        exact_len("insights.topLocations", &insights.top_locations, INSIGHT_LIST_LEN)?;
        all_non_blank("insights.topLocations", &insights.top_locations)?;
        exact_len("insights.platforms", &insights.platforms, INSIGHT_LIST_LEN)?;
        for platform in &insights.platforms {
            non_blank("insights.platforms[].name", &platform.name)?;
            if !(0.0..=MAX_PLATFORM_SCORE).contains(&platform.score) {
                return Err(malformed(format!(
                    "insights.platforms score {} outside 0..={}",
                    platform.score, MAX_PLATFORM_SCORE
                )));
            }
        }
        exact_len("insights.playlists", &insights.playlists, INSIGHT_LIST_LEN)?;
        all_non_blank("insights.playlists", &insights.playlists)?;
        exact_len("insights.influencers", &insights.influencers, INSIGHT_LIST_LEN)?;
        all_non_blank("insights.influencers", &insights.influencers)?;

        Ok(())
    }
}

fn malformed(reason: impl Into<String>) -> GenerationError {
    GenerationError::MalformedResponse(reason.into())
}

fn non_blank(field: &str, value: &str) -> Result<(), GenerationError> {
    if value.trim().is_empty() {
        return Err(malformed(format!("{} is empty", field)));
    }
    Ok(())
}

fn all_non_blank(field: &str, values: &[String]) -> Result<(), GenerationError> {
    values.iter().try_for_each(|v| non_blank(field, v))
}

fn exact_len<T>(field: &str, values: &[T], expected: usize) -> Result<(), GenerationError> {
    if values.len() != expected {
        return Err(malformed(format!(
            "{} has {} entries, expected {}",
            field,
            values.len(),
            expected
        )));
    }
    Ok(())
}

/// Where a bundle came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Remote,
    Fallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &str {
        match self {
            ContentSource::Remote => "remote",
            ContentSource::Fallback => "fallback",
        }
    }
}

/// A bundle together with its provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub bundle: ContentBundle,
    pub source: ContentSource,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedContent {
    pub fn new(bundle: ContentBundle, source: ContentSource) -> Self {
        Self {
            bundle,
            source,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestration::fallback::FallbackGenerator;

    fn profile() -> ArtistProfile {
        ArtistProfile::new("Sonic Wave", "Indie Pop", "18-24 alt fans")
    }

    #[test]
    fn test_profile_validation() {
        assert!(profile().validate().is_ok());

        let missing_genre = ArtistProfile::new("Sonic Wave", "  ", "18-24 alt fans");
        assert!(matches!(
            missing_genre.validate(),
            Err(ProfileError::MissingField("genre"))
        ));

        let missing_audience = ArtistProfile::new("Sonic Wave", "Indie Pop", "");
        assert!(matches!(
            missing_audience.validate(),
            Err(ProfileError::MissingField("targetAudience"))
        ));
    }

    #[test]
    fn test_blank_social_presence_is_absent() {
        assert_eq!(profile().social_presence(), None);
        assert_eq!(profile().with_social_presence("   ").social_presence(), None);
        assert_eq!(
            profile().with_social_presence(" 5k IG ").social_presence(),
            Some("5k IG")
        );
    }

    #[test]
    fn test_profile_json_field_names() {
        let json = r#"{
            "name": "Luna Beat",
            "genre": "Electronic Pop",
            "targetAudience": "Gen-Z dance music fans"
        }"#;
        let parsed: ArtistProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.target_audience, "Gen-Z dance music fans");
        assert_eq!(parsed.social_presence, None);
    }

    #[test]
    fn test_bundle_json_field_names() {
        let bundle = FallbackGenerator::generate(&profile());
        let value = serde_json::to_value(&bundle).unwrap();

        assert!(value["branding"]["logoDescription"].is_string());
        assert!(value["socialMedia"]["posts"][0]["type"].is_string());
        assert!(value["press"]["pressRelease"].is_string());
        assert!(value["insights"]["topLocations"].is_array());
        assert_eq!(value["insights"]["platforms"][0]["score"].as_f64(), Some(85.0));
    }

    #[test]
    fn test_shape_check_rejects_wrong_cardinality() {
        let mut bundle = FallbackGenerator::generate(&profile());
        assert!(bundle.check_shape().is_ok());

        bundle.branding.brand_identity.pop();
        assert!(matches!(
            bundle.check_shape(),
            Err(GenerationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_shape_check_rejects_blank_and_out_of_range() {
        let mut bundle = FallbackGenerator::generate(&profile());
        bundle.press.artist_bio = " ".to_string();
        assert!(bundle.check_shape().is_err());

        let mut bundle = FallbackGenerator::generate(&profile());
        bundle.insights.platforms[2].score = 140.0;
        assert!(bundle.check_shape().is_err());

        let mut bundle = FallbackGenerator::generate(&profile());
        bundle.insights.platforms[2].score = -5.0;
        assert!(bundle.check_shape().is_err());

        let mut bundle = FallbackGenerator::generate(&profile());
        bundle.social_media.posts.clear();
        assert!(bundle.check_shape().is_err());
    }

    #[test]
    fn test_fractional_scores_are_accepted() {
        let mut value = serde_json::to_value(FallbackGenerator::generate(&profile())).unwrap();
        value["insights"]["platforms"][0]["score"] = serde_json::json!(87.5);
        value["insights"]["platforms"][1]["score"] = serde_json::json!(80.0);

        let bundle: ContentBundle = serde_json::from_value(value).unwrap();
        assert_eq!(bundle.insights.platforms[0].score, 87.5);
        assert_eq!(bundle.insights.platforms[1].score, 80.0);
        assert!(bundle.check_shape().is_ok());
    }
}
