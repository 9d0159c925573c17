// Fallback generator - deterministic template content when the remote source is unavailable

use super::types::{
    ArtistProfile, Branding, ContentBundle, Insights, PlatformScore, Press, SocialMedia, SocialPost,
};

/// Produces a complete bundle from string templates alone.
///
/// Output depends only on the profile: the same profile always yields the
/// same bundle, and every field is populated.
pub struct FallbackGenerator;

impl FallbackGenerator {
    pub fn generate(profile: &ArtistProfile) -> ContentBundle {
        let name = profile.name.trim();
        let genre = profile.genre.trim();
        let audience = profile.target_audience.trim();
        let presence = profile.social_presence();

        ContentBundle {
            branding: Self::branding(name, genre, audience),
            social_media: Self::social_media(name, genre),
            press: Self::press(name, genre, audience, presence),
            insights: Self::insights(genre),
        }
    }

    fn branding(name: &str, genre: &str, audience: &str) -> Branding {
        Branding {
            logo_description: format!(
                "{} logo capturing the signature sound and attitude of this {} act.",
                name, genre
            ),
            brand_identity: vec![
                format!(
                    "Bold typography that gives {} a strong visual presence in {}",
                    name, genre
                ),
                "Color palette: Deep blues and vibrant accents that mirror the energy of the music"
                    .to_string(),
                format!("Visual motifs drawn from the {} scene that speak to {}", genre, audience),
                "Modern, professional aesthetic that works across streaming, social and print"
                    .to_string(),
            ],
            visual_style: format!(
                "Striking visual identity rooted in {} that resonates with {}.",
                genre, audience
            ),
        }
    }

    fn social_media(name: &str, genre: &str) -> SocialMedia {
        let genre_tag = hashtag(genre);

        SocialMedia {
            posts: vec![
                SocialPost::new(
                    "announcement",
                    format!(
                        "New single dropping this Friday! We poured everything into this one. #{}",
                        genre_tag
                    ),
                    "Instagram",
                ),
                SocialPost::new(
                    "behindTheScenes",
                    format!(
                        "Studio session: laying down the final takes for the upcoming record. #{}",
                        hashtag(name)
                    ),
                    "TikTok",
                ),
                SocialPost::new(
                    "engagement",
                    format!(
                        "Which track should we play live first? Comment below! #{}Fans",
                        genre_tag
                    ),
                    "Instagram",
                ),
            ],
        }
    }

    fn press(name: &str, genre: &str, audience: &str, presence: Option<&str>) -> Press {
        let foundation = match presence {
            Some(presence) => format!("their existing presence of {}", presence),
            None => "their growing reputation".to_string(),
        };

        let press_release = format!(
            "FOR IMMEDIATE RELEASE\n\n\
             {name} Announces New {genre} Project\n\n\
             Bringing fresh energy to the {genre} scene, {name} is excited to announce an upcoming release \
             that promises to captivate {audience} with its distinctive sound and authentic expression.\n\n\
             Building on {foundation}, this release marks a significant evolution in the artist's creative journey.\n\n\
             Stay tuned for more updates as {name} continues to push boundaries in the music industry."
        );

        let momentum = match presence {
            Some(presence) => format!("Already building momentum with {}, the", presence),
            None => "The".to_string(),
        };

        let artist_bio = format!(
            "{name} creates {genre} music that resonates deeply with {audience}.\n\n\
             Blending traditional elements of {genre} with innovative production techniques, \
             {name} has cultivated a unique sound in today's music scene.\n\n\
             {momentum} project's artistic vision aims to create authentic connections with listeners \
             and an immersive experience that showcases the full range of its talent."
        );

        Press {
            press_release,
            artist_bio,
        }
    }

    fn insights(genre: &str) -> Insights {
        Insights {
            top_locations: vec![
                "New York, NY".to_string(),
                "Los Angeles, CA".to_string(),
                "London, UK".to_string(),
                "Berlin, Germany".to_string(),
                "Toronto, Canada".to_string(),
            ],
            platforms: vec![
                PlatformScore::new("Spotify", 85.0),
                PlatformScore::new("Instagram", 80.0),
                PlatformScore::new("TikTok", 75.0),
                PlatformScore::new("YouTube", 70.0),
                PlatformScore::new("SoundCloud", 65.0),
            ],
            playlists: vec![
                "New Music Friday".to_string(),
                "Fresh Finds".to_string(),
                format!("Top {} Picks", genre),
                "Viral Hits".to_string(),
                "Independent Artist Spotlights".to_string(),
            ],
            influencers: vec![
                format!("{}-specific music bloggers", genre),
                "Music reaction YouTube channels".to_string(),
                "Music podcasters featuring artist interviews".to_string(),
                "Local venue promoters".to_string(),
                "Playlist curators focusing on emerging artists".to_string(),
            ],
        }
    }
}

/// Strip all whitespace so the text can be used as a hashtag
fn hashtag(text: &str) -> String {
    text.split_whitespace().collect()
}
