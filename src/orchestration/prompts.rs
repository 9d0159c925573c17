// Marketing prompt library and instruction composition

use super::error::ConfigError;
use super::types::{ArtistProfile, BRAND_IDENTITY_LEN, INSIGHT_LIST_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketing specialist persona used to frame the instruction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MarketingRole {
    CampaignPlanner,
    SocialMediaWriter,
    EmailBlastBuilder,
    PressReleaseWriter,
    BrandingConsultant,
    AssetCreativeBrief,
}

impl MarketingRole {
    pub const ALL: [MarketingRole; 6] = [
        MarketingRole::CampaignPlanner,
        MarketingRole::SocialMediaWriter,
        MarketingRole::EmailBlastBuilder,
        MarketingRole::PressReleaseWriter,
        MarketingRole::BrandingConsultant,
        MarketingRole::AssetCreativeBrief,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MarketingRole::CampaignPlanner => "campaign-planner",
            MarketingRole::SocialMediaWriter => "social-media-writer",
            MarketingRole::EmailBlastBuilder => "email-blast-builder",
            MarketingRole::PressReleaseWriter => "press-release-writer",
            MarketingRole::BrandingConsultant => "branding-consultant",
            MarketingRole::AssetCreativeBrief => "asset-creative-brief",
        }
    }

    /// Prompt settings for this role
    pub fn config(&self) -> PromptConfig {
        match self {
            MarketingRole::CampaignPlanner => PromptConfig {
                system_prompt: "You are an experienced music marketing campaign strategist specializing in emerging artists.
Focus on creating actionable, data-driven campaign strategies that align with current industry trends.
Provide specific, measurable goals and timeline-based recommendations.
Consider the artist's genre and target audience when crafting campaign elements.",
                temperature: 0.7,
                max_tokens: 1000,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new(
                        "Sonic Wave",
                        "Indie Pop",
                        "18-24 year old alternative music fans",
                    )
                    .with_social_presence("5k Instagram followers"),
                    output: "12-Week Campaign Strategy for Sonic Wave:

Phase 1 (Weeks 1-4): Build Anticipation
- Release 3 behind-the-scenes TikTok videos
- Host 2 Instagram Live sessions with fans
- Launch email newsletter for superfans

Phase 2 (Weeks 5-8): Release Push
- Coordinate with 5 indie music bloggers
- Launch Instagram Reels challenge
- Cross-promote on similar artists' platforms

Phase 3 (Weeks 9-12): Community Building
- Host virtual listening party
- Launch fan cover contest
- Engage with fan content daily",
                }],
            },
            MarketingRole::SocialMediaWriter => PromptConfig {
                system_prompt: "You are a Gen-Z savvy social media manager for music artists.
Write engaging, authentic content that resonates with young audiences.
Use current trending formats and casual, relatable language.
Include relevant hashtags and call-to-actions that drive engagement.",
                temperature: 0.8,
                max_tokens: 500,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new("Luna Beat", "Electronic Pop", "Gen-Z dance music fans"),
                    output: "Instagram Post:
\"pov: when the beat drops at 2am and the whole club goes wild
new track 'Midnight Pulse' dropping this Friday and trust... you're not ready
drop a lightning bolt if you're staying up for the release
#ElectronicMusic #NewMusicFriday #LunaBeatArmy\"",
                }],
            },
            MarketingRole::EmailBlastBuilder => PromptConfig {
                system_prompt: "You are a professional email marketing specialist for musicians.
Create compelling email content that drives action while maintaining a personal connection.
Focus on clear value propositions and strong calls-to-action.
Balance promotional content with exclusive insights and behind-the-scenes content.",
                temperature: 0.6,
                max_tokens: 800,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new(
                        "The Midnight Echoes",
                        "Alternative Rock",
                        "Rock music enthusiasts 25-35",
                    ),
                    output: "Subject: Your Exclusive Preview of Our New Album

Hey there,

We've been in the studio cooking up something special for you. Our new album \"Night Waves\" drops next week, but as one of our day-one supporters, you get first access.

- Click here for an exclusive preview of two tracks
- Pre-save to unlock behind-the-scenes footage
- First 100 pre-saves get signed merch

Rock on,
The Midnight Echoes",
                }],
            },
            MarketingRole::PressReleaseWriter => PromptConfig {
                system_prompt: "You are a seasoned music industry PR professional.
Write compelling press releases that highlight artist achievements and news.
Maintain a professional tone while conveying excitement and importance.
Include relevant quotes and industry context.",
                temperature: 0.6,
                max_tokens: 800,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new("Aurora Dreams", "Dream Pop", "Indie music enthusiasts"),
                    output: "FOR IMMEDIATE RELEASE

Rising Dream Pop Sensation Aurora Dreams Announces Debut Album

Los Angeles, CA - Independent artist Aurora Dreams is set to release their highly anticipated debut album \"Ethereal Nights\" on September 1st. The 12-track collection showcases their signature atmospheric sound while pushing genre boundaries.

\"This album represents a journey through dreams and reality,\" says lead vocalist Sarah Chen. \"We wanted to create something that resonates with anyone who's ever felt lost in their own thoughts.\"",
                }],
            },
            MarketingRole::BrandingConsultant => PromptConfig {
                system_prompt: "You are an expert brand strategist specializing in musician and band identity development.
Create cohesive visual and messaging guidelines that align with the artist's musical style and target audience.
Focus on memorable, distinctive elements that will help the artist stand out.
Consider both digital and physical brand applications.",
                temperature: 0.7,
                max_tokens: 1000,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new("Neon Jungle", "Synthwave", "Retro electronic music fans"),
                    output: "Brand Identity Guidelines:

Visual Elements:
- Primary colors: Electric purple (#8A2BE2), Cyber blue (#00FFFF)
- Secondary: Neon pink (#FF1493)
- Typography: Primary - Outrun Future, Secondary - Helvetica Neue
- Key motif: Geometric jungle leaves in neon wireframe style

Brand Voice:
- Tone: Nostalgic yet futuristic
- Keywords: Retro-future, cyberpunk, neon nights
- Content themes: 80s revival, digital wilderness, synthwave culture",
                }],
            },
            MarketingRole::AssetCreativeBrief => PromptConfig {
                system_prompt: "You are an expert creative director specializing in music artist branding.
Create concise, inspiring creative direction that will guide visual asset generation.
Focus on translating musical genre and artist personality into concrete visual elements.
Provide specific guidance on typography, color, and visual motifs that align with the artist's identity.",
                temperature: 0.8,
                max_tokens: 600,
                examples: vec![ExamplePair {
                    input: ArtistProfile::new(
                        "Crystal Surge",
                        "Electronic Pop",
                        "Gen-Z ravers and electronic music enthusiasts",
                    ),
                    output: "Creative Direction Brief:

Visual Style: Sleek, futuristic minimalism with liquid chrome effects and ethereal gradients that capture the electronic essence while maintaining a premium feel.

Typography: Bold, geometric sans-serif for headlines with clean, razor-thin secondary fonts. Custom glitch effects on key letters create dynamic energy.

Colors & Textures: Primary palette of deep space black (#0A0A0F) with electric blue (#00F0FF) and metallic silver (#E0E0E0) accents. Holographic textures and prismatic light refractions add depth.

Key Motifs: Crystalline structures, digital wave forms, and circuit-inspired patterns that morph between organic and digital states.",
                }],
            },
        }
    }
}

impl fmt::Display for MarketingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketingRole {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        MarketingRole::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownRole(s.to_string()))
    }
}

/// An example profile paired with the kind of answer the role produces
#[derive(Debug, Clone)]
pub struct ExamplePair {
    pub input: ArtistProfile,
    pub output: &'static str,
}

/// System prompt and sampling settings for one role
#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub system_prompt: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub examples: Vec<ExamplePair>,
}

const MINIMAL_PRESENCE: &str = "New artist with minimal presence";

/// Describe a profile as a block of labelled lines
fn profile_block(profile: &ArtistProfile) -> String {
    format!(
        "- Name: {}\n- Genre: {}\n- Target Audience: {}\n- Current Social Presence: {}",
        profile.name.trim(),
        profile.genre.trim(),
        profile.target_audience.trim(),
        profile.social_presence().unwrap_or(MINIMAL_PRESENCE),
    )
}

/// JSON skeleton the model must answer with
pub fn response_contract() -> String {
    format!(
        r#"{{
  "branding": {{
    "logoDescription": "A description of appropriate branding elements",
    "brandIdentity": ["{identity} bullet points about visual elements"],
    "visualStyle": "A description of visual style appropriate for the genre"
  }},
  "socialMedia": {{
    "posts": [
      {{"type": "announcement", "caption": "Full caption text", "platform": "Instagram"}},
      {{"type": "behindTheScenes", "caption": "Full caption text", "platform": "TikTok"}},
      {{"type": "engagement", "caption": "Full caption text", "platform": "Instagram"}}
    ]
  }},
  "press": {{
    "pressRelease": "Complete press release text",
    "artistBio": "Complete artist biography"
  }},
  "insights": {{
    "topLocations": ["{n} location names"],
    "platforms": [
      {{"name": "Platform Name", "score": 85}},
      {{"name": "Platform Name", "score": 80}},
      {{"name": "Platform Name", "score": 75}},
      {{"name": "Platform Name", "score": 70}},
      {{"name": "Platform Name", "score": 65}}
    ],
    "playlists": ["{n} playlist names"],
    "influencers": ["{n} influencer categories"]
  }}
}}"#,
        identity = BRAND_IDENTITY_LEN,
        n = INSIGHT_LIST_LEN,
    )
}

/// Build the full instruction for one bundle request
pub fn compose_instruction(role: MarketingRole, profile: &ArtistProfile) -> String {
    let config = role.config();

    let mut prompt = String::from(config.system_prompt);
    prompt.push_str("\n\nCreate marketing content for the artist with the following details:\n");
    prompt.push_str(&profile_block(profile));
    prompt.push_str("\n\n");

    if let Some(example) = config.examples.first() {
        prompt.push_str("Here is an example of your work for another artist:\n");
        prompt.push_str(&profile_block(&example.input));
        prompt.push_str("\n\n");
        prompt.push_str(example.output);
        prompt.push_str("\n\n");
    }

    prompt.push_str("Respond in JSON format with no additional explanations. ");
    prompt.push_str("Include the following sections exactly:\n");
    prompt.push_str(&response_contract());

    prompt
}
