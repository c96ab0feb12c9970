//! Theme store: pick a predefined theme and edit the public site settings

use serde_json::Value;

use crate::client::{ClientError, FleetApi, Transport};
use crate::models::{SliderImage, Theme, ThemeSettings};
use crate::notify::{report_failure, Notifier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeStorePage {
    pub themes: Vec<Theme>,
    pub settings: ThemeSettings,
    pub loading: bool,
    pub saving: bool,
}

impl ThemeStorePage {
    /// Themes and settings are fetched together; either failing fails the load
    pub async fn load<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.loading = true;
        let result = async {
            let themes = api.themes().await?;
            let settings = api.theme_settings().await?;
            Ok::<_, ClientError>((themes, settings))
        }
        .await;
        self.loading = false;

        match result {
            Ok((themes, settings)) => {
                self.themes = themes;
                self.settings = settings;
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to load themes");
                false
            }
        }
    }

    pub fn active_theme(&self) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|t| t.id == self.settings.active_theme_id)
    }

    pub fn is_active(&self, theme_id: &str) -> bool {
        self.settings.active_theme_id == theme_id
    }

    /// Local edit of one or more settings fields; nothing is sent until [`save`](Self::save)
    pub fn edit(&mut self, patch: &Value) -> Result<(), serde_json::Error> {
        self.settings.merge(patch)
    }

    pub fn add_slide(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        self.settings.slider_images.push(SliderImage {
            url: url.to_string(),
            title: None,
            subtitle: None,
        });
    }

    pub fn update_slide(&mut self, index: usize, title: Option<String>, subtitle: Option<String>) {
        if let Some(slide) = self.settings.slider_images.get_mut(index) {
            slide.title = title.filter(|t| !t.trim().is_empty());
            slide.subtitle = subtitle.filter(|s| !s.trim().is_empty());
        }
    }

    pub fn remove_slide(&mut self, index: usize) {
        if index < self.settings.slider_images.len() {
            self.settings.slider_images.remove(index);
        }
    }

    pub async fn save<T: Transport>(&mut self, api: &FleetApi<T>, notify: &dyn Notifier) -> bool {
        self.saving = true;
        let result = api.save_theme_settings(&self.settings).await;
        self.saving = false;
        match result {
            Ok(_) => {
                notify.success("Settings saved");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to save settings");
                false
            }
        }
    }

    /// Switch the storefront theme. The local settings change only after the
    /// server accepted the new document.
    pub async fn activate<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        notify: &dyn Notifier,
        theme_id: &str,
    ) -> bool {
        let next = self.settings.with_active_theme(theme_id);
        self.saving = true;
        let result = api.save_theme_settings(&next).await;
        self.saving = false;
        match result {
            Ok(_) => {
                self.settings = next;
                notify.success("Theme activated");
                true
            }
            Err(e) => {
                report_failure(notify, &e, "Failed to activate theme");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::notify::RecordingNotifier;
    use serde_json::json;

    fn theme(id: &str) -> Value {
        json!({
            "id": id, "name": id, "description": "", "style": "modern",
            "colors": {"primary": "#000", "secondary": "#111", "accent": "#222",
                       "background": "#fff", "text": "#333", "hero_overlay": "rgba(0,0,0,0.4)"}
        })
    }

    fn loaded(mock: &MockTransport) {
        mock.respond(
            Method::Get,
            "/api/themes",
            200,
            json!([theme("classic-blue"), theme("luxury-gold")]),
        );
        mock.respond(
            Method::Get,
            "/api/theme-settings",
            200,
            json!({"active_theme_id": "classic-blue", "contact_phone": "0850", "stat_customers": "10K+"}),
        );
    }

    #[tokio::test]
    async fn test_load_needs_both_documents() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/themes", 200, json!([theme("classic-blue")]));
        mock.fail(Method::Get, "/api/theme-settings", 500, "boom");
        let api = FleetApi::new(mock);
        let notify = RecordingNotifier::default();
        let mut page = ThemeStorePage::default();

        assert!(!page.load(&api, &notify).await);
        assert!(page.themes.is_empty());
        assert_eq!(notify.errors(), vec!["boom"]);
    }

    #[tokio::test]
    async fn test_activate_sends_full_settings() {
        let mock = MockTransport::new();
        loaded(&mock);
        mock.respond(Method::Put, "/api/theme-settings", 200, json!({"message": "ok"}));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = ThemeStorePage::default();
        page.load(&api, &notify).await;

        assert!(page.activate(&api, &notify, "luxury-gold").await);
        let body = mock.requests_to(Method::Put, "/api/theme-settings")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["active_theme_id"], json!("luxury-gold"));
        assert_eq!(body["contact_phone"], json!("0850"));
        assert_eq!(body["stat_customers"], json!("10K+"));
        assert!(page.is_active("luxury-gold"));
        assert_eq!(page.active_theme().unwrap().id, "luxury-gold");
    }

    #[tokio::test]
    async fn test_failed_activation_keeps_current_theme() {
        let mock = MockTransport::new();
        loaded(&mock);
        mock.fail(Method::Put, "/api/theme-settings", 403, "Only company admins can change themes");
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = ThemeStorePage::default();
        page.load(&api, &notify).await;
        let before = page.settings.clone();

        assert!(!page.activate(&api, &notify, "luxury-gold").await);
        assert_eq!(page.settings, before);
        assert_eq!(notify.errors(), vec!["Only company admins can change themes"]);
    }

    #[tokio::test]
    async fn test_edit_and_save() {
        let mock = MockTransport::new();
        loaded(&mock);
        mock.respond(Method::Put, "/api/theme-settings", 200, json!({}));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = ThemeStorePage::default();
        page.load(&api, &notify).await;

        page.edit(&json!({"custom_hero_title": "Yaz kampanyası", "show_stats": false}))
            .unwrap();
        page.add_slide("https://cdn.example.com/1.jpg");
        page.add_slide("  ");
        page.update_slide(0, Some("Summer".into()), Some(String::new()));
        assert!(page.save(&api, &notify).await);

        let body = mock.requests_to(Method::Put, "/api/theme-settings")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["custom_hero_title"], json!("Yaz kampanyası"));
        assert_eq!(body["show_stats"], json!(false));
        assert_eq!(
            body["slider_images"],
            json!([{"url": "https://cdn.example.com/1.jpg", "title": "Summer", "subtitle": null}])
        );

        page.remove_slide(0);
        page.remove_slide(4);
        assert!(page.settings.slider_images.is_empty());
    }

    #[tokio::test]
    async fn test_removing_last_slide_saves_empty_list() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/themes", 200, json!([theme("classic-blue")]));
        mock.respond(
            Method::Get,
            "/api/theme-settings",
            200,
            json!({"active_theme_id": "classic-blue",
                   "slider_images": [{"url": "https://cdn.example.com/old.jpg"}]}),
        );
        mock.respond(Method::Put, "/api/theme-settings", 200, json!({}));
        let api = FleetApi::new(mock.clone());
        let notify = RecordingNotifier::default();
        let mut page = ThemeStorePage::default();
        page.load(&api, &notify).await;
        assert_eq!(page.settings.slider_images.len(), 1);

        page.remove_slide(0);
        assert!(page.save(&api, &notify).await);
        let body = mock.requests_to(Method::Put, "/api/theme-settings")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body.get("slider_images"), Some(&json!([])));
    }
}
