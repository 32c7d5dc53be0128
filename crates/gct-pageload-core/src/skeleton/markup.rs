//! Placeholder card markup

use gct_pageload_types::dom::SKELETON_CARD_CLASS;

/// Blocks that make up a placeholder card, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonPart {
    Image,
    Title,
    Text,
    ShortText,
    Button,
}

impl SkeletonPart {
    /// Standard card layout: image, title, two text lines, button.
    pub const CARD: [SkeletonPart; 5] =
        [Self::Image, Self::Title, Self::Text, Self::ShortText, Self::Button];

    pub fn class(self) -> &'static str {
        match self {
            Self::Image => "skeleton skeleton-image",
            Self::Title => "skeleton skeleton-title",
            Self::Text => "skeleton skeleton-text",
            Self::ShortText => "skeleton skeleton-text short",
            Self::Button => "skeleton skeleton-button",
        }
    }

    pub fn style(self) -> Option<&'static str> {
        match self {
            Self::Button => Some("margin-top: 1rem;"),
            _ => None,
        }
    }
}

/// HTML for one placeholder card, for callers building skeletons by hand.
pub fn card_skeleton_markup() -> String {
    let mut html = format!("<div class=\"{SKELETON_CARD_CLASS}\">\n");
    for part in SkeletonPart::CARD {
        match part.style() {
            Some(style) => html.push_str(&format!(
                "    <div class=\"{}\" style=\"{}\"></div>\n",
                part.class(),
                style
            )),
            None => html.push_str(&format!("    <div class=\"{}\"></div>\n", part.class())),
        }
    }
    html.push_str("</div>\n");
    html
}
