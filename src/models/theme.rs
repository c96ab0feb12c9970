//! Storefront themes and per-company theme settings

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::user::default_true;

pub const DEFAULT_THEME_ID: &str = "classic-blue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub hero_overlay: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3B82F6".to_string(),
            secondary: "#1E40AF".to_string(),
            accent: "#60A5FA".to_string(),
            background: "#FFFFFF".to_string(),
            text: "#1F2937".to_string(),
            hero_overlay: "rgba(0, 0, 0, 0.5)".to_string(),
        }
    }
}

/// A predefined look offered by the theme store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preview_image: Option<String>,
    pub colors: ThemeColors,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderImage {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

/// Settings document of `GET/PUT /api/theme-settings`.
///
/// Keys this client does not model are kept in `extra` so a save never
/// drops fields another client wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_theme_id")]
    pub active_theme_id: String,
    #[serde(default)]
    pub custom_hero_title: Option<String>,
    #[serde(default)]
    pub custom_hero_subtitle: Option<String>,
    #[serde(default)]
    pub custom_logo_url: Option<String>,
    #[serde(default = "default_true")]
    pub show_stats: bool,
    #[serde(default = "default_true")]
    pub show_features: bool,
    #[serde(default = "default_true")]
    pub show_popular_vehicles: bool,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub social_facebook: Option<String>,
    #[serde(default)]
    pub social_instagram: Option<String>,
    #[serde(default)]
    pub social_twitter: Option<String>,
    /// Always sent, so an emptied slider replaces the stored one
    #[serde(default)]
    pub slider_images: Vec<SliderImage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            active_theme_id: default_theme_id(),
            custom_hero_title: None,
            custom_hero_subtitle: None,
            custom_logo_url: None,
            show_stats: true,
            show_features: true,
            show_popular_vehicles: true,
            contact_phone: None,
            contact_email: None,
            social_facebook: None,
            social_instagram: None,
            social_twitter: None,
            slider_images: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl ThemeSettings {
    /// Apply a partial settings object on top of this one.
    ///
    /// Keys in `patch` replace the current values; a `null` clears an
    /// optional field. Anything that fails to decode leaves `self` as it was.
    pub fn merge(&mut self, patch: &Value) -> Result<(), serde_json::Error> {
        let Value::Object(patch) = patch else {
            return Ok(());
        };
        let mut current = match serde_json::to_value(&*self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            current.insert(key.clone(), value.clone());
        }
        *self = serde_json::from_value(Value::Object(current))?;
        Ok(())
    }

    /// Copy with a different active theme, used as the activation payload
    pub fn with_active_theme(&self, theme_id: &str) -> Self {
        Self {
            active_theme_id: theme_id.to_string(),
            ..self.clone()
        }
    }
}

/// Body of `GET /api/public/theme-settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicTheme {
    #[serde(default)]
    pub settings: ThemeSettings,
    #[serde(default)]
    pub theme: Option<Theme>,
}

fn default_theme_id() -> String {
    DEFAULT_THEME_ID.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let settings: ThemeSettings = serde_json::from_value(json!({
            "active_theme_id": "fresh-green",
            "stat_vehicles": "500+",
            "updated_by": "u1"
        }))
        .unwrap();
        assert_eq!(settings.extra.get("stat_vehicles"), Some(&json!("500+")));

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["updated_by"], json!("u1"));
        assert_eq!(back["active_theme_id"], json!("fresh-green"));
    }

    #[test]
    fn test_merge_partial_patch() {
        let mut settings = ThemeSettings::default();
        settings.contact_phone = Some("0850 123 4567".into());

        settings
            .merge(&json!({"show_stats": false, "contact_phone": null, "custom_hero_title": "Hi"}))
            .unwrap();

        assert!(!settings.show_stats);
        assert!(settings.show_features);
        assert_eq!(settings.contact_phone, None);
        assert_eq!(settings.custom_hero_title.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_merge_bad_type_keeps_state() {
        let mut settings = ThemeSettings::default();
        assert!(settings.merge(&json!({"show_stats": "nope"})).is_err());
        assert!(settings.show_stats);
    }

    #[test]
    fn test_public_theme_without_theme() {
        let public: PublicTheme = serde_json::from_str(r#"{"settings": {}}"#).unwrap();
        assert_eq!(public.settings.active_theme_id, DEFAULT_THEME_ID);
        assert!(public.theme.is_none());
    }
}
