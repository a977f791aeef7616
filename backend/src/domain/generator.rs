//! # Client Provisioning
//!
//! Creates a new tenant in the static config directory:
//!
//! 1. writes `{clientId}.json` with an industry template and the access code embedded
//! 2. appends the document to `index.json` so the resolver scans it
//! 3. records the access code in `access-codes.json`
//!
//! The client id is the slug of the display name.

use chrono::{Duration, Utc};
use serde::Serialize;
use shared::{
    AppointmentsContent, ClientConfig, ContentSection, Features, HomeContent, Industry,
    ListingsContent, MenuContent, NavigationItem, ScheduleContent, SectionContent,
    ServicesContent, Theme, ThemeColors, ThemeFonts, ThemeLogo, Variation, VendorsContent,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::access_code_resolver::{AccessCodeResolver, BUILTIN_ACCESS_CODES};
use crate::storage::StaticConfigDirectory;

/// Days a freshly provisioned config stays valid
pub const DEFAULT_VALIDITY_DAYS: i64 = 365;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Client name must contain at least one letter or digit")]
    InvalidName,
    #[error("Access code '{0}' must be 3-32 letters, digits, '-' or '_'")]
    InvalidAccessCode(String),
    #[error("A config for client '{0}' already exists")]
    ClientExists(String),
    #[error("Access code '{code}' is already assigned to '{client_id}'")]
    AccessCodeTaken { code: String, client_id: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug, Clone)]
pub struct GenerateClientRequest {
    pub name: String,
    pub industry: Industry,
    pub access_code: String,
    pub variation: Variation,
}

#[derive(Debug, Clone)]
pub struct GeneratedClient {
    pub client_id: String,
    pub access_code: String,
    pub config_path: PathBuf,
    pub config: ClientConfig,
}

/// Lower-case, hyphen-separated id from a display name
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Upper-cased access code, or an error when it has the wrong shape
pub fn normalize_access_code(code: &str) -> Result<String, GeneratorError> {
    let normalized = code.trim().to_uppercase();
    let valid_chars = normalized
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !(3..=32).contains(&normalized.len()) || !valid_chars {
        return Err(GeneratorError::InvalidAccessCode(code.to_string()));
    }
    Ok(normalized)
}

/// Build the starter config for a new client
pub fn build_client_config(request: &GenerateClientRequest, client_id: &str, access_code: &str) -> ClientConfig {
    let expiry = Utc::now() + Duration::days(DEFAULT_VALIDITY_DAYS);

    ClientConfig {
        client_id: client_id.to_string(),
        access_code: Some(access_code.to_string()),
        name: request.name.trim().to_string(),
        description: Some(format!("{} app for {}", request.industry, request.name.trim())),
        version: Some("1.0.0".to_string()),
        expiry: Some(expiry.to_rfc3339()),
        industry: Some(request.industry),
        variation: Some(request.variation.to_string()),
        theme: Theme {
            colors: industry_palette(request.industry),
            fonts: ThemeFonts::default(),
            logo: ThemeLogo {
                light: Some(format!("/logos/{}.svg", client_id)),
                dark: None,
                icon: None,
            },
        },
        navigation: industry_navigation(request.industry),
        features: Features {
            offline: true,
            push_notifications: false,
            qr_code: matches!(request.industry, Industry::Festival | Industry::Menu),
            analytics: false,
        },
        content: industry_content(request.industry, request.name.trim()),
        push_notifications: None,
        analytics: None,
    }
}

/// Provision a new client in `directory`
pub async fn generate_client(
    directory: &StaticConfigDirectory,
    request: &GenerateClientRequest,
) -> Result<GeneratedClient, GeneratorError> {
    let client_id = slugify(&request.name);
    if client_id.is_empty() {
        return Err(GeneratorError::InvalidName);
    }
    let access_code = normalize_access_code(&request.access_code)?;

    let config_path = directory
        .document_path(&client_id)
        .ok_or(GeneratorError::InvalidName)?;
    if config_path.exists() {
        return Err(GeneratorError::ClientExists(client_id));
    }

    let mut registry = directory.access_code_registry().await?;
    let builtin = BUILTIN_ACCESS_CODES
        .iter()
        .find(|(code, _)| *code == access_code)
        .map(|(_, id)| id.to_string());
    let owner = match builtin.or_else(|| registry.get(&access_code).cloned()) {
        Some(owner) => Some(owner),
        None => {
            AccessCodeResolver::new(directory.clone())
                .scan_documents(&access_code)
                .await
        }
    };
    if let Some(owner) = owner {
        return Err(GeneratorError::AccessCodeTaken {
            code: access_code,
            client_id: owner,
        });
    }

    let config = build_client_config(request, &client_id, &access_code);
    tokio::fs::create_dir_all(directory.directory()).await?;
    write_json_atomic(&config_path, &config).await?;
    info!("Wrote config for '{}' to {:?}", client_id, config_path);

    let mut known = directory.known_documents().await?;
    let file_name = format!("{}.json", client_id);
    if !known.contains(&file_name) {
        known.push(file_name);
        write_json_atomic(&directory.index_path(), &known).await?;
    }

    registry.insert(access_code.clone(), client_id.clone());
    write_json_atomic(&directory.registry_path(), &registry).await?;
    info!("Registered access code '{}' for '{}'", access_code, client_id);

    Ok(GeneratedClient {
        client_id,
        access_code,
        config_path,
        config,
    })
}

async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), GeneratorError> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, content).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

fn industry_palette(industry: Industry) -> ThemeColors {
    let (primary, secondary, background, surface) = match industry {
        Industry::Festival => ("#6A1B9A", "#FF6F00", "#FFF8E1", "#FFFFFF"),
        Industry::Healthcare => ("#00796B", "#4FC3F7", "#F5FBFA", "#FFFFFF"),
        Industry::Restaurant => ("#B71C1C", "#FFB300", "#FFFDF7", "#FFFFFF"),
        Industry::Property => ("#263238", "#00897B", "#FAFAFA", "#FFFFFF"),
        Industry::Menu => ("#3E2723", "#C0A062", "#FFFBF2", "#FFFFFF"),
    };
    ThemeColors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        background: background.to_string(),
        surface: surface.to_string(),
        text: "#212121".to_string(),
        text_secondary: "#616161".to_string(),
    }
}

fn nav(id: &str, title: &str, icon: &str) -> NavigationItem {
    let path = if id == "home" { "/".to_string() } else { format!("/{}", id) };
    NavigationItem {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        path,
    }
}

fn industry_navigation(industry: Industry) -> Vec<NavigationItem> {
    match industry {
        Industry::Festival => vec![
            nav("home", "Home", "home"),
            nav("schedule", "Lineup", "calendar"),
            nav("vendors", "Vendors", "store"),
            nav("map", "Map", "map"),
        ],
        Industry::Healthcare => vec![
            nav("home", "Home", "home"),
            nav("services", "Treatments", "activity"),
            nav("appointments", "Book", "calendar"),
            nav("contact", "Contact", "phone"),
        ],
        Industry::Restaurant => vec![
            nav("home", "Home", "home"),
            nav("menu", "Menu", "book-open"),
            nav("contact", "Find Us", "map-pin"),
        ],
        Industry::Property => vec![
            nav("home", "Home", "home"),
            nav("listings", "Listings", "building"),
            nav("contact", "Contact", "phone"),
        ],
        Industry::Menu => vec![nav("menu", "Menu", "book-open"), nav("info", "Info", "info")],
    }
}

fn industry_content(industry: Industry, name: &str) -> BTreeMap<String, ContentSection> {
    let mut content = BTreeMap::new();
    let mut add = |key: &str, section: SectionContent| {
        content.insert(key.to_string(), ContentSection::Typed(section));
    };

    if industry != Industry::Menu {
        add(
            "home",
            SectionContent::Home(HomeContent {
                title: Some(format!("Welcome to {}", name)),
                ..HomeContent::default()
            }),
        );
    }
    match industry {
        Industry::Festival => {
            add("schedule", SectionContent::Schedule(ScheduleContent::default()));
            add("vendors", SectionContent::Vendors(VendorsContent::default()));
        }
        Industry::Healthcare => {
            add("services", SectionContent::Services(ServicesContent::default()));
            add(
                "appointments",
                SectionContent::Appointments(AppointmentsContent {
                    slot_minutes: Some(30),
                    ..AppointmentsContent::default()
                }),
            );
        }
        Industry::Restaurant | Industry::Menu => {
            add("menu", SectionContent::Menu(MenuContent::default()));
        }
        Industry::Property => {
            add("listings", SectionContent::Listings(ListingsContent::default()));
        }
    }
    content
}
