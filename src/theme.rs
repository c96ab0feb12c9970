//! Theme application for the public site
//!
//! Turns the active theme and the company's settings into what the page
//! actually renders: CSS custom properties, hero texts and the
//! section visibility flags.

use crate::models::{PublicTheme, SliderImage, Theme, ThemeColors, ThemeSettings};

pub const DEFAULT_HERO_TITLE: &str = "Hayalinizdeki Aracı Kiralayın";
pub const DEFAULT_HERO_SUBTITLE: &str =
    "Geniş araç filomuz ve uygun fiyatlarımızla seyahatlerinizi konforlu hale getiriyoruz.";
pub const DEFAULT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=1920";

/// Headline figures on the home page: settings key, fallback value, caption
pub const STATS: [(&str, &str, &str); 4] = [
    ("stat_vehicles", "500+", "Vehicles in the fleet"),
    ("stat_customers", "10.000+", "Happy customers"),
    ("stat_cities", "81", "Cities"),
    ("stat_rating", "4.9", "Customer rating"),
];

/// Ids of the themes the server ships
pub const PREDEFINED_THEMES: [&str; 6] = [
    "classic-blue",
    "elegant-dark",
    "fresh-green",
    "royal-purple",
    "sunset-orange",
    "minimalist-gray",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStyle {
    pub colors: ThemeColors,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub logo_url: Option<String>,
    pub show_stats: bool,
    pub show_features: bool,
    pub show_popular_vehicles: bool,
    pub slides: Vec<SliderImage>,
    /// `(value, caption)` per entry of [`STATS`]
    pub stats: Vec<(String, &'static str)>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ThemeStyle {
    /// Custom settings win over the theme; a missing theme falls back to the default palette
    pub fn resolve(theme: Option<&Theme>, settings: &ThemeSettings) -> Self {
        let colors = theme.map(|t| t.colors.clone()).unwrap_or_default();
        let hero_image = theme
            .and_then(|t| non_empty(&t.hero_image))
            .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_string());

        let slides = if settings.slider_images.is_empty() {
            vec![SliderImage {
                url: hero_image.clone(),
                title: None,
                subtitle: None,
            }]
        } else {
            settings.slider_images.clone()
        };

        let stats = STATS
            .iter()
            .map(|(key, fallback, caption)| {
                let value = settings
                    .extra
                    .get(*key)
                    .and_then(|v| v.as_str())
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .unwrap_or(*fallback);
                (value.to_string(), *caption)
            })
            .collect();

        Self {
            colors,
            hero_title: non_empty(&settings.custom_hero_title)
                .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
            hero_subtitle: non_empty(&settings.custom_hero_subtitle)
                .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string()),
            hero_image,
            logo_url: non_empty(&settings.custom_logo_url),
            show_stats: settings.show_stats,
            show_features: settings.show_features,
            show_popular_vehicles: settings.show_popular_vehicles,
            slides,
            stats,
        }
    }

    pub fn from_public(public: &PublicTheme) -> Self {
        Self::resolve(public.theme.as_ref(), &public.settings)
    }

    pub fn css_vars(&self) -> [(&'static str, &str); 6] {
        [
            ("--theme-primary", &self.colors.primary),
            ("--theme-secondary", &self.colors.secondary),
            ("--theme-accent", &self.colors.accent),
            ("--theme-background", &self.colors.background),
            ("--theme-text", &self.colors.text),
            ("--theme-hero-overlay", &self.colors.hero_overlay),
        ]
    }

    /// Value for a root element's `style` attribute
    pub fn inline_style(&self) -> String {
        self.css_vars()
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `background-image` of the hero section for one slide
    pub fn hero_background(&self, image: &str) -> String {
        format!(
            "linear-gradient({overlay}, {overlay}), url('{image}')",
            overlay = self.colors.hero_overlay,
            image = image,
        )
    }
}

impl Default for ThemeStyle {
    fn default() -> Self {
        Self::resolve(None, &ThemeSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gold() -> Theme {
        serde_json::from_value(json!({
            "id": "luxury-gold", "name": "Luxury Gold", "style": "elegant",
            "hero_image": "https://cdn.example.com/gold.jpg",
            "colors": {"primary": "#D4AF37", "secondary": "#1A1A1A", "accent": "#F5E6A8",
                       "background": "#0D0D0D", "text": "#F5F5F5", "hero_overlay": "rgba(0, 0, 0, 0.7)"}
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_without_theme() {
        let style = ThemeStyle::default();
        assert_eq!(style.hero_title, DEFAULT_HERO_TITLE);
        assert_eq!(style.colors.primary, "#3B82F6");
        assert_eq!(style.slides.len(), 1);
        assert_eq!(style.slides[0].url, DEFAULT_HERO_IMAGE);
        assert!(style.show_stats && style.show_features && style.show_popular_vehicles);
    }

    #[test]
    fn test_settings_override_theme() {
        let mut settings = ThemeSettings::default();
        settings.custom_hero_title = Some("Bodrum'da araç kirala".into());
        settings.custom_hero_subtitle = Some("   ".into());
        settings.show_features = false;

        let style = ThemeStyle::resolve(Some(&gold()), &settings);
        assert_eq!(style.hero_title, "Bodrum'da araç kirala");
        assert_eq!(style.hero_subtitle, DEFAULT_HERO_SUBTITLE);
        assert!(!style.show_features);
        assert_eq!(style.hero_image, "https://cdn.example.com/gold.jpg");
    }

    #[test]
    fn test_stats_read_extra_keys() {
        let settings: ThemeSettings =
            serde_json::from_value(json!({"stat_cities": "12", "stat_rating": ""})).unwrap();
        let style = ThemeStyle::resolve(None, &settings);
        assert_eq!(style.stats[0], ("500+".to_string(), "Vehicles in the fleet"));
        assert_eq!(style.stats[2].0, "12");
        assert_eq!(style.stats[3].0, "4.9");
    }

    #[test]
    fn test_inline_style_lists_all_vars() {
        let style = ThemeStyle::resolve(Some(&gold()), &ThemeSettings::default());
        let inline = style.inline_style();
        assert!(inline.starts_with("--theme-primary: #D4AF37;"));
        assert!(inline.contains("--theme-hero-overlay: rgba(0, 0, 0, 0.7);"));
        assert_eq!(
            style.hero_background("a.jpg"),
            "linear-gradient(rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.7)), url('a.jpg')"
        );
    }
}
