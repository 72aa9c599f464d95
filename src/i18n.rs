// I18N - enum-keyed captions for views and widgets
//
// Captions are looked up from enum keys rather than free strings so a missing
// translation is a compile error, not a runtime hole. The active locale comes
// from config (or the settings form) and applies on the next draw.

/// Locales the caption bundles cover
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// BCP 47-ish tags accepted by [`Locale::from_tag`], in display order
    pub fn available() -> [&'static str; 2] {
        ["en", "de"]
    }

    /// Parse a locale tag, falling back to English for unknown tags
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }
}

/// Caption keys for views, buttons and form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Home,
    SystemAdmin,
    SitemapBuildReport,
    Settings,
    Theme,
    Locale,
    StartRoute,
}

impl LabelKey {
    pub fn caption(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                LabelKey::Home => "Home",
                LabelKey::SystemAdmin => "System Admin",
                LabelKey::SitemapBuildReport => "Sitemap Build Report",
                LabelKey::Settings => "Settings",
                LabelKey::Theme => "Theme",
                LabelKey::Locale => "Language",
                LabelKey::StartRoute => "Start Route",
            },
            Locale::De => match self {
                LabelKey::Home => "Start",
                LabelKey::SystemAdmin => "Systemverwaltung",
                LabelKey::SitemapBuildReport => "Sitemap-Erstellungsbericht",
                LabelKey::Settings => "Einstellungen",
                LabelKey::Theme => "Farbschema",
                LabelKey::Locale => "Sprache",
                LabelKey::StartRoute => "Startroute",
            },
        }
    }
}

/// Longer descriptions, shown in the status bar for the focused widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionKey {
    SitemapBuildReport,
    Theme,
    Locale,
    StartRoute,
}

impl DescriptionKey {
    pub fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                DescriptionKey::SitemapBuildReport => {
                    "Shows the outcome of the most recent sitemap build"
                }
                DescriptionKey::Theme => "Color palette used by the console",
                DescriptionKey::Locale => "Language used for captions",
                DescriptionKey::StartRoute => "Route opened at startup; optional",
            },
            Locale::De => match self {
                DescriptionKey::SitemapBuildReport => {
                    "Zeigt das Ergebnis des letzten Sitemap-Aufbaus"
                }
                DescriptionKey::Theme => "Farbpalette der Konsole",
                DescriptionKey::Locale => "Sprache der Beschriftungen",
                DescriptionKey::StartRoute => "Route beim Start; optional",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_lookup_follows_the_locale() {
        assert_eq!(LabelKey::Settings.caption(Locale::En), "Settings");
        assert_eq!(LabelKey::Settings.caption(Locale::De), "Einstellungen");
    }

    #[test]
    fn description_lookup_follows_the_locale() {
        assert_eq!(
            DescriptionKey::Theme.description(Locale::En),
            "Color palette used by the console"
        );
        assert_eq!(
            DescriptionKey::Theme.description(Locale::De),
            "Farbpalette der Konsole"
        );
    }

    #[test]
    fn unknown_locale_tags_fall_back_to_english() {
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag("DE"), Locale::De);
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for tag in Locale::available() {
            assert_eq!(Locale::from_tag(tag).tag(), tag);
        }
    }
}
