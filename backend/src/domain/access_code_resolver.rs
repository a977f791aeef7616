//! # Access Code Resolver
//!
//! Maps what a user typed (an access code or a raw client id) to a canonical
//! client id. Resolution order:
//!
//! 1. the static table (built-in codes plus the provisioned registry), by upper-cased input
//! 2. a sequential scan of the known config documents for a matching embedded
//!    `accessCode`; the id is the matching document's file name minus `.json`
//! 3. pass-through: the input itself is the candidate id
//!
//! Resolution never fails. Whether the id names a real tenant is decided later
//! by the config store.

use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::storage::static_files::client_id_from_file_name;
use crate::storage::StaticConfigDirectory;

/// Access codes compiled into the app
pub const BUILTIN_ACCESS_CODES: &[(&str, &str)] = &[
    ("WILDROOTS2025", "wildroots-festival-2025"),
    ("WILDROOTS", "wildroots-festival-2025"),
    ("RESTORE2025", "restore-physio-clinic"),
    ("HARBOUR", "harbour-kitchen"),
    ("PARKSIDE", "parkside-lettings"),
];

pub struct AccessCodeResolver {
    table: BTreeMap<String, String>,
    documents: StaticConfigDirectory,
}

impl AccessCodeResolver {
    /// Resolver over the built-in table only
    pub fn new(documents: StaticConfigDirectory) -> Self {
        let table = BUILTIN_ACCESS_CODES
            .iter()
            .map(|(code, client_id)| (code.to_string(), client_id.to_string()))
            .collect();
        Self { table, documents }
    }

    /// Resolver over the built-in table extended with the provisioned registry
    ///
    /// An unreadable registry is logged and ignored.
    pub async fn with_registry(documents: StaticConfigDirectory) -> Self {
        let mut resolver = Self::new(documents);
        match resolver.documents.access_code_registry().await {
            Ok(registry) => {
                info!("Loaded {} provisioned access codes", registry.len());
                for (code, client_id) in registry {
                    resolver.insert_code(&code, &client_id);
                }
            }
            Err(e) => warn!("Ignoring access code registry: {:#}", e),
        }
        resolver
    }

    /// Add or replace a static table entry
    pub fn insert_code(&mut self, code: &str, client_id: &str) {
        self.table.insert(code.trim().to_uppercase(), client_id.to_string());
    }

    /// Step 1 only: the static table
    pub fn lookup_static(&self, input: &str) -> Option<&str> {
        self.table
            .get(&input.trim().to_uppercase())
            .map(String::as_str)
    }

    /// Step 2 only: scan the known documents for an embedded access code
    pub async fn scan_documents(&self, input: &str) -> Option<String> {
        let code = input.trim();
        if code.is_empty() {
            return None;
        }

        let names = match self.documents.known_documents().await {
            Ok(names) => names,
            Err(e) => {
                warn!("Could not list known config documents: {:#}", e);
                return None;
            }
        };

        for name in names {
            match self.documents.read_document(&name).await {
                Ok(Some(config)) => {
                    let matches = config
                        .access_code
                        .as_deref()
                        .is_some_and(|embedded| embedded.trim().eq_ignore_ascii_case(code));
                    if matches {
                        return Some(client_id_from_file_name(&name).to_string());
                    }
                }
                Ok(None) => debug!("Known config document '{}' is missing", name),
                Err(e) => warn!("Skipping config document '{}': {:#}", name, e),
            }
        }

        None
    }

    /// Resolve `input` to a candidate client id
    pub async fn resolve(&self, input: &str) -> String {
        if let Some(client_id) = self.lookup_static(input) {
            info!("Access code '{}' resolved from static table to '{}'", input, client_id);
            return client_id.to_string();
        }

        if let Some(client_id) = self.scan_documents(input).await {
            info!("Access code '{}' matched config document '{}'", input, client_id);
            return client_id;
        }

        debug!("'{}' is not a known access code; using it as the client id", input);
        input.to_string()
    }
}
