// Markdown rendering of a content bundle as display panels

use crate::orchestration::{ArtistProfile, ContentBundle, GeneratedContent};
use termimad::{MadSkin, crossterm::style::Color};

/// Render the whole bundle: branding, social media, press and insights panels
pub fn render_markdown(profile: &ArtistProfile, generated: &GeneratedContent) -> String {
    let bundle = &generated.bundle;
    let mut out = format!(
        "# {}\n\n*{} for {} - {} content, {}*\n\n",
        profile.name.trim(),
        profile.genre.trim(),
        profile.target_audience.trim(),
        generated.source.as_str(),
        generated.generated_at.format("%Y-%m-%d %H:%M UTC"),
    );

    out.push_str(&branding_panel(bundle));
    out.push_str(&social_panel(bundle));
    out.push_str(&press_panel(bundle));
    out.push_str(&insights_panel(bundle));
    out
}

/// One markdown list item per entry, using the given marker
fn list(items: &[String], marker: impl Fn(usize) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{} {}\n", marker(i), item))
        .collect()
}

fn bullets(items: &[String]) -> String {
    list(items, |_| "-".to_string())
}

fn branding_panel(bundle: &ContentBundle) -> String {
    let branding = &bundle.branding;
    format!(
        "## Branding\n\n### Logo & Visual Identity\n\n{}\n\n\
         ### Brand Identity Guidelines\n\n{}\n**Visual style:** {}\n\n",
        branding.logo_description,
        bullets(&branding.brand_identity),
        branding.visual_style,
    )
}

fn social_panel(bundle: &ContentBundle) -> String {
    let posts: String = bundle
        .social_media
        .posts
        .iter()
        .map(|post| {
            format!(
                "**{}** ({})\n\n> {}\n\n",
                post.platform,
                post.kind,
                post.caption.replace('\n', "\n> ")
            )
        })
        .collect();

    format!("## Social Media Content\n\n{}", posts)
}

fn press_panel(bundle: &ContentBundle) -> String {
    format!(
        "## Press\n\n### Press Release\n\n{}\n\n### Artist Biography\n\n{}\n\n",
        bundle.press.press_release, bundle.press.artist_bio,
    )
}

fn insights_panel(bundle: &ContentBundle) -> String {
    let insights = &bundle.insights;
    let platforms: String = insights
        .platforms
        .iter()
        .map(|platform| format!("|{}|{}|\n", platform.name, platform.score))
        .collect();

    format!(
        "## Insights\n\n### Top Geographic Markets\n\n{}\n\
         ### Platform Recommendations\n\n|Platform|Score|\n|-|-:|\n{}\n\
         ### Target Playlists\n\n{}\n\
         ### Influencer Categories\n\n{}",
        list(&insights.top_locations, |i| format!("{}.", i + 1)),
        platforms,
        bullets(&insights.playlists),
        bullets(&insights.influencers),
    )
}

pub fn create_markdown_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    // Headers
    skin.headers[0].set_fg(Color::Cyan);
    skin.headers[1].set_fg(Color::Blue);
    skin.headers[2].set_fg(Color::Green);

    skin.bold.set_fg(Color::White);
    skin.italic.set_fg(Color::Magenta);
    skin.quote_mark.set_fg(Color::Yellow);

    skin
}
