use std::fmt;
use std::str::FromStr;

use crate::errors::GenerateError;

/// Optional visual style woven into the prompt text. The API never sees the
/// tag itself, only the composed natural-language instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleTag {
    #[default]
    None,
    AnimeIllustration,
    RealisticPhoto,
    Render3d,
    PixelArt,
    Watercolor,
    Cyberpunk,
}

impl StyleTag {
    pub const ALL: [StyleTag; 7] = [
        StyleTag::None,
        StyleTag::AnimeIllustration,
        StyleTag::RealisticPhoto,
        StyleTag::Render3d,
        StyleTag::PixelArt,
        StyleTag::Watercolor,
        StyleTag::Cyberpunk,
    ];

    /// The Japanese style phrase used in composition. `None` has no phrase.
    pub fn phrase(self) -> Option<&'static str> {
        match self {
            StyleTag::None => None,
            StyleTag::AnimeIllustration => Some("アニメ風イラスト"),
            StyleTag::RealisticPhoto => Some("リアルな写真"),
            StyleTag::Render3d => Some("3Dレンダリング"),
            StyleTag::PixelArt => Some("ドット絵"),
            StyleTag::Watercolor => Some("水彩画風"),
            StyleTag::Cyberpunk => Some("サイバーパンク"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleTag::None => "none",
            StyleTag::AnimeIllustration => "anime-illustration",
            StyleTag::RealisticPhoto => "realistic-photo",
            StyleTag::Render3d => "3d-render",
            StyleTag::PixelArt => "pixel-art",
            StyleTag::Watercolor => "watercolor",
            StyleTag::Cyberpunk => "cyberpunk",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StyleTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.name() == wanted)
            .ok_or_else(|| format!("unknown style '{s}' (see `style` for the list)"))
    }
}

/// Build the final prompt sent to the model. With a style selected the
/// description is wrapped in a Japanese instruction; without one the text
/// passes through untouched.
pub fn compose_prompt(prompt: &str, style: StyleTag) -> Result<String, GenerateError> {
    if prompt.trim().is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    Ok(match style.phrase() {
        None => prompt.to_string(),
        Some(phrase) => format!("{phrase}で、{prompt}を描写してください。"),
    })
}
