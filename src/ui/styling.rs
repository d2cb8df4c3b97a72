//! Styling roles for board elements.
//!
//! Every element the pipeline builds gets a semantic [`Role`]. The role always
//! contributes a class name. In [`StyleMode::Inline`] it also contributes the
//! inline declarations the board used before styling moved to a stylesheet.

use crate::dom::Element;
use serde::Deserialize;

// ============================================================================
// Style Mode
// ============================================================================

/// How elements are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    /// Class names only; an external stylesheet does the rest.
    #[default]
    Stylesheet,
    /// Class names plus inline `style` declarations.
    Inline,
}

impl StyleMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::Inline => "inline",
        }
    }

    /// Tag `el` with the role's class and, in inline mode, its declarations.
    pub fn apply(self, el: Element, role: Role) -> Element {
        let el = el.with_class(role.class());
        match self {
            Self::Stylesheet => el,
            Self::Inline => role
                .inline_styles()
                .iter()
                .fold(el, |el, (property, value)| el.with_style(*property, *value)),
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    CategoryHeading,
    CategoryEmpty,
    ArticleList,
    ArticleItem,
    ArticleLink,
    ArticleSource,
    Empty,
    Loading,
    LoadingTitle,
    ProgressTrack,
    ProgressBar,
    ProgressMessage,
    ErrorBlock,
    ErrorTitle,
    ErrorDetail,
    ErrorHint,
}

impl Role {
    pub fn class(self) -> &'static str {
        match self {
            Self::CategoryHeading => "category-title",
            Self::CategoryEmpty => "category-empty",
            Self::ArticleList => "article-list",
            Self::ArticleItem => "article",
            Self::ArticleLink => "article-link",
            Self::ArticleSource => "article-source",
            Self::Empty => "news-empty",
            Self::Loading => "news-loading",
            Self::LoadingTitle => "loading-title",
            Self::ProgressTrack => "progress-track",
            Self::ProgressBar => "progress-bar",
            Self::ProgressMessage => "progress-message",
            Self::ErrorBlock => "news-error",
            Self::ErrorTitle => "error-title",
            Self::ErrorDetail => "error-detail",
            Self::ErrorHint => "error-hint",
        }
    }

    fn inline_styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::CategoryHeading => &[("margin-top", "30px"), ("margin-bottom", "15px")],
            Self::CategoryEmpty | Self::Empty => &[],
            Self::ArticleList => &[("list-style", "none"), ("padding", "0")],
            Self::ArticleItem => &[
                ("margin-bottom", "15px"),
                ("padding-bottom", "15px"),
                ("border-bottom", "1px solid #eee"),
            ],
            Self::ArticleLink => &[
                ("display", "block"),
                ("margin-bottom", "5px"),
                ("color", "#0066cc"),
                ("text-decoration", "none"),
            ],
            Self::ArticleSource => &[("color", "#666")],
            Self::Loading | Self::ErrorBlock => &[("text-align", "center"), ("padding", "40px")],
            Self::LoadingTitle => &[("font-size", "20px"), ("margin-bottom", "20px")],
            Self::ProgressTrack => &[
                ("background", "#e0e0e0"),
                ("height", "30px"),
                ("border-radius", "15px"),
                ("overflow", "hidden"),
                ("max-width", "400px"),
                ("margin", "0 auto"),
            ],
            Self::ProgressBar => &[
                ("background", "linear-gradient(90deg, #6200ea, #9c27b0)"),
                ("height", "100%"),
                ("transition", "width 0.3s"),
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "center"),
                ("color", "white"),
                ("font-weight", "bold"),
            ],
            Self::ProgressMessage => &[
                ("margin-top", "15px"),
                ("color", "#666"),
                ("font-size", "14px"),
            ],
            Self::ErrorTitle => &[("color", "red"), ("font-size", "20px")],
            Self::ErrorDetail | Self::ErrorHint => &[("color", "#666")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_mode_adds_class_only() {
        let el = StyleMode::Stylesheet.apply(Element::new("h2"), Role::CategoryHeading);
        assert!(el.has_class("category-title"));
        assert!(el.styles().is_empty());
    }

    #[test]
    fn test_inline_mode_adds_class_and_styles() {
        let el = StyleMode::Inline.apply(Element::new("h2"), Role::CategoryHeading);
        assert!(el.has_class("category-title"));
        assert_eq!(el.style("margin-top"), Some("30px"));
        assert_eq!(el.style("margin-bottom"), Some("15px"));
    }

    #[test]
    fn test_error_title_is_red_inline() {
        let el = StyleMode::Inline.apply(Element::new("p"), Role::ErrorTitle);
        assert_eq!(el.style("color"), Some("red"));
    }

    #[derive(Deserialize)]
    struct Wrapper {
        style: StyleMode,
    }

    #[test]
    fn test_name_matches_config_spelling() {
        for mode in [StyleMode::Stylesheet, StyleMode::Inline] {
            let parsed: Wrapper = toml::from_str(&format!("style = \"{}\"", mode.name())).unwrap();
            assert_eq!(parsed.style, mode);
        }
        assert!(toml::from_str::<Wrapper>("style = \"fancy\"").is_err());
    }
}
