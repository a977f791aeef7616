//! # Domain Module
//!
//! Configuration resolution for the hub app, independent of any UI framework
//! or storage mechanism.
//!
//! ## Module Organization
//!
//! - **access_code_resolver**: access code / raw id → canonical client id
//! - **config_store**: tiered config lookup, generic fallback, local cache, expiry
//! - **config_provider**: session state (`config`, `is_expired`, `loading`) and its lifecycle
//! - **deadline**: futures bounded by an explicit deadline, plus backstop timers
//! - **variation**: named style bundles consumed by renderers
//! - **app_shell**: renderer selection and the shell view model
//! - **generator**: provisioning of new clients into the static config directory
//!
//! ## Flow
//!
//! ```text
//! AccessCodeResolver → ConfigStore → ConfigProvider → renderers
//!                                                      ↑
//!                                     variation ───────┘
//! ```

pub mod access_code_resolver;
pub mod app_shell;
pub mod config_provider;
pub mod config_store;
pub mod deadline;
pub mod errors;
pub mod generator;
pub mod variation;

pub use access_code_resolver::{AccessCodeResolver, BUILTIN_ACCESS_CODES};
pub use app_shell::{build_app_shell, renderer_for};
pub use config_provider::{ConfigProvider, InitialLoad, ProviderState, ProviderTimeouts};
pub use config_store::{generic_config, is_expired, ConfigStore, LoadedConfig, CONFIG_CACHE_KEY};
pub use deadline::{Deadline, DeadlineExceeded};
pub use errors::ConfigError;
pub use generator::{generate_client, GenerateClientRequest, GeneratedClient, GeneratorError};
pub use variation::{resolve_variation, variation_styles};
