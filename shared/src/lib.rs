use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Navigation id used when a config carries no navigation entries
pub const DEFAULT_LANDING_TAB: &str = "home";

/// Root configuration document for one tenant of the hub app.
///
/// Field names on the wire are camelCase (`clientId`, `accessCode`, ...) so the
/// same document can be served from the remote store, from a bundled
/// `{clientId}.json` file, or from the local cache without translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Stable tenant identifier, the join key between resolver, store and cache
    pub client_id: String,
    /// Human-facing code that unlocks this tenant (matched case-insensitively)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    /// Display name of the tenant
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Expiry as an ISO-8601 date-time (RFC 3339) or plain date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    /// Vertical this tenant belongs to; drives renderer selection.
    /// Unrecognized values read as `None` (generic renderer).
    #[serde(
        default,
        deserialize_with = "lenient_industry",
        skip_serializing_if = "Option::is_none"
    )]
    pub industry: Option<Industry>,
    /// Named style variation; unknown names render as "modern"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    pub theme: Theme,
    /// Ordered tab list; order is the displayed tab order
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub features: Features,
    /// Section name -> section content
    #[serde(default)]
    pub content: BTreeMap<String, ContentSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<PushNotificationsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,
}

impl ClientConfig {
    /// Id of the tab the UI opens on: the first navigation entry, or "home"
    pub fn landing_tab(&self) -> &str {
        self.navigation
            .first()
            .map(|item| item.id.as_str())
            .unwrap_or(DEFAULT_LANDING_TAB)
    }

    /// Look up a typed content section by name
    pub fn section(&self, name: &str) -> Option<&SectionContent> {
        match self.content.get(name) {
            Some(ContentSection::Typed(section)) => Some(section),
            _ => None,
        }
    }
}

fn lenient_industry<'de, D>(deserializer: D) -> Result<Option<Industry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|name| name.parse().ok()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    #[serde(default)]
    pub fonts: ThemeFonts,
    #[serde(default)]
    pub logo: ThemeLogo,
}

/// Brand color palette, CSS color strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Self {
            heading: "Inter".to_string(),
            body: "Inter".to_string(),
        }
    }
}

/// Logo asset paths, relative to the app's public directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeLogo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One tab of the app shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub path: String,
}

/// Optional capabilities a tenant can switch on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub offline: bool,
    pub push_notifications: bool,
    pub qr_code: bool,
    pub analytics: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PushNotificationsConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vapid_public_key: Option<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

/// A content section: either one of the known kinds, or an opaque block for
/// verticals whose section shape is not modelled yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentSection {
    Typed(SectionContent),
    Custom(serde_json::Value),
}

/// Known section shapes, discriminated by the `kind` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionContent {
    Home(HomeContent),
    Schedule(ScheduleContent),
    Vendors(VendorsContent),
    Appointments(AppointmentsContent),
    Menu(MenuContent),
    Listings(ListingsContent),
    Services(ServicesContent),
}

impl SectionContent {
    pub fn kind(&self) -> &'static str {
        match self {
            SectionContent::Home(_) => "home",
            SectionContent::Schedule(_) => "schedule",
            SectionContent::Vendors(_) => "vendors",
            SectionContent::Appointments(_) => "appointments",
            SectionContent::Menu(_) => "menu",
            SectionContent::Listings(_) => "listings",
            SectionContent::Services(_) => "services",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    pub highlights: Vec<String>,
    /// Keys this struct does not model, kept so the section round-trips
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleContent {
    pub days: Vec<ScheduleDay>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorsContent {
    pub vendors: Vec<Vendor>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_minutes: Option<u32>,
    pub practitioners: Vec<Practitioner>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub categories: Vec<MenuCategory>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingsContent {
    pub listings: Vec<PropertyListing>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    pub address: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesContent {
    pub services: Vec<ServiceOffering>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Industry vertical of a tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Festival,
    Healthcare,
    Restaurant,
    Property,
    Menu,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Festival,
        Industry::Healthcare,
        Industry::Restaurant,
        Industry::Property,
        Industry::Menu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Festival => "festival",
            Industry::Healthcare => "healthcare",
            Industry::Restaurant => "restaurant",
            Industry::Property => "property",
            Industry::Menu => "menu",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown industry or variation name
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownNameError {}

impl FromStr for Industry {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .into_iter()
            .find(|industry| industry.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNameError {
                kind: "industry",
                value: s.to_string(),
            })
    }
}

/// Named bundle of typography/spacing/shadow constants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variation {
    #[default]
    Modern,
    Classic,
    Minimal,
    Vibrant,
}

impl Variation {
    pub const ALL: [Variation; 4] = [
        Variation::Modern,
        Variation::Classic,
        Variation::Minimal,
        Variation::Vibrant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variation::Modern => "modern",
            Variation::Classic => "classic",
            Variation::Minimal => "minimal",
            Variation::Vibrant => "vibrant",
        }
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variation {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variation::ALL
            .into_iter()
            .find(|variation| variation.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNameError {
                kind: "variation",
                value: s.to_string(),
            })
    }
}

/// Spacing scale in CSS lengths, smallest to largest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingScale {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

/// Style constants consumed by renderers for one variation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationStyles {
    pub variation: Variation,
    pub heading_weight: u16,
    pub body_weight: u16,
    pub letter_spacing: String,
    pub border_radius: String,
    pub button_radius: String,
    pub spacing: SpacingScale,
    pub shadow: String,
    pub hover_shadow: String,
    pub hover_transform: String,
    pub animation_duration: String,
    pub transition_timing: String,
}

/// Presentation template family a renderer paints into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    Festival,
    Healthcare,
    Restaurant,
    Property,
    Menu,
    Generic,
}

/// Which tier produced a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Cache,
    Remote,
    Static,
    Generic,
}

/// Payload persisted in the local cache under the well-known key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedConfig {
    /// Last-used client id
    pub client_id: String,
    pub config: ClientConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveAccessCodeResponse {
    pub input: String,
    pub client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadConfigRequest {
    /// Access code or raw client id; absent means "restore from cache"
    #[serde(default)]
    pub id_or_code: Option<String>,
}

/// Result of running the store chain for one client id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedConfigResponse {
    pub config: ClientConfig,
    pub is_expired: bool,
    pub origin: ConfigOrigin,
}

/// Snapshot of the provider state exposed to the rendering layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStateResponse {
    pub config: Option<ClientConfig>,
    pub is_expired: bool,
    pub loading: bool,
}

/// Everything a renderer needs to paint the app shell for one tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppShell {
    pub client_id: String,
    pub name: String,
    pub renderer: Renderer,
    pub landing_tab: String,
    pub tabs: Vec<NavigationItem>,
    pub theme: Theme,
    pub features: Features,
    pub styles: VariationStyles,
    pub is_expired: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_config_json() -> serde_json::Value {
        json!({
            "clientId": "demo",
            "name": "Demo",
            "theme": {
                "colors": {
                    "primary": "#000000",
                    "secondary": "#111111",
                    "background": "#ffffff",
                    "surface": "#f5f5f5",
                    "text": "#222222",
                    "textSecondary": "#666666"
                }
            },
            "navigation": []
        })
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_value(minimal_config_json()).unwrap();

        assert_eq!(config.client_id, "demo");
        assert_eq!(config.access_code, None);
        assert_eq!(config.features, Features::default());
        assert!(config.content.is_empty());
        assert_eq!(config.theme.fonts.heading, "Inter");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let mut value = minimal_config_json();
        value.as_object_mut().unwrap().remove("theme");

        assert!(serde_json::from_value::<ClientConfig>(value).is_err());
    }

    #[test]
    fn test_landing_tab_falls_back_to_home() {
        let mut config: ClientConfig = serde_json::from_value(minimal_config_json()).unwrap();
        assert_eq!(config.landing_tab(), "home");

        config.navigation.push(NavigationItem {
            id: "schedule".to_string(),
            title: "Schedule".to_string(),
            icon: "calendar".to_string(),
            path: "/schedule".to_string(),
        });
        assert_eq!(config.landing_tab(), "schedule");
    }

    #[test]
    fn test_content_sections_are_discriminated_by_kind() {
        let mut value = minimal_config_json();
        value["content"] = json!({
            "menu": {
                "kind": "menu",
                "categories": [
                    { "name": "Mains", "items": [ { "id": "m1", "name": "Risotto", "price": 14.5 } ] }
                ]
            },
            "gallery": { "images": ["a.jpg", "b.jpg"] }
        });

        let config: ClientConfig = serde_json::from_value(value).unwrap();

        match config.section("menu") {
            Some(SectionContent::Menu(menu)) => {
                assert_eq!(menu.categories[0].items[0].name, "Risotto");
            }
            other => panic!("Expected menu section, got {:?}", other),
        }
        assert!(matches!(config.content.get("gallery"), Some(ContentSection::Custom(_))));
        assert!(config.section("gallery").is_none());
    }

    #[test]
    fn test_unknown_industry_does_not_reject_config() {
        let mut value = minimal_config_json();
        value["industry"] = json!("retail");
        let config: ClientConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.industry, None);

        let mut value = minimal_config_json();
        value["industry"] = json!(42);
        assert_eq!(serde_json::from_value::<ClientConfig>(value).unwrap().industry, None);

        let mut value = minimal_config_json();
        value["industry"] = json!("Healthcare");
        let config: ClientConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.industry, Some(Industry::Healthcare));
    }

    #[test]
    fn test_typed_sections_keep_unmodelled_keys() {
        let mut value = minimal_config_json();
        value["content"] = json!({
            "home": { "kind": "home", "title": "Hi", "ctaText": "Shop now" },
            "menu": {
                "kind": "menu",
                "categories": [
                    { "name": "Mains", "items": [ { "id": "m1", "name": "Risotto", "price": 14.5, "spicy": true } ] }
                ]
            }
        });

        let config: ClientConfig = serde_json::from_value(value.clone()).unwrap();
        match config.section("home") {
            Some(SectionContent::Home(home)) => {
                assert_eq!(home.title.as_deref(), Some("Hi"));
                assert_eq!(home.extra.get("ctaText"), Some(&json!("Shop now")));
                assert!(!home.extra.contains_key("kind"));
            }
            other => panic!("Expected home section, got {:?}", other),
        }

        let round_trip = serde_json::to_value(&config).unwrap();
        assert_eq!(round_trip["content"]["home"]["ctaText"], "Shop now");
        assert_eq!(round_trip["content"]["home"]["kind"], "home");
        assert_eq!(round_trip["content"]["menu"]["categories"][0]["items"][0]["spicy"], true);
    }

    #[test]
    fn test_typed_section_serializes_with_kind_tag() {
        let section = ContentSection::Typed(SectionContent::Vendors(VendorsContent::default()));
        let value = serde_json::to_value(&section).unwrap();

        assert_eq!(value["kind"], "vendors");
    }

    #[test]
    fn test_industry_and_variation_parse_case_insensitively() {
        assert_eq!("Festival".parse::<Industry>().unwrap(), Industry::Festival);
        assert_eq!("VIBRANT".parse::<Variation>().unwrap(), Variation::Vibrant);

        let err = "spaceship".parse::<Industry>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown industry: 'spaceship'");
    }

    #[test]
    fn test_cached_config_wire_names() {
        let config: ClientConfig = serde_json::from_value(minimal_config_json()).unwrap();
        let cached = CachedConfig {
            client_id: "demo".to_string(),
            config,
        };

        let value = serde_json::to_value(&cached).unwrap();
        assert_eq!(value["clientId"], "demo");
        assert_eq!(value["config"]["clientId"], "demo");
        assert!(value["config"].get("accessCode").is_none());
    }
}
