// ABOUTME: Session context owning configuration, API access, and unit preferences
// ABOUTME: Replaces ambient singletons with an explicit start/end lifecycle passed to components
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Session context
//!
//! Components receive `&SessionContext` (or `&mut` to change preferences)
//! instead of reaching for globals.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::api::{JournalApiClient, JournalBackend};
use crate::config::ClientConfig;
use crate::preferences::{FileCache, MemoryCache, PreferenceCache, UnitPreferenceStore, UnitPreferences};

/// Everything one session of the client needs
///
/// # Dependencies
/// - `config`: backend URL, timeouts, and cache location
/// - `client`: typed REST client for the full API surface
/// - `backend`: the [`JournalBackend`] seam handed to forms and views
/// - `units`: the unit preference store, rehydrated at start
pub struct SessionContext {
    session_id: Uuid,
    started_at: Instant,
    config: ClientConfig,
    client: Arc<JournalApiClient>,
    backend: Arc<dyn JournalBackend>,
    units: UnitPreferenceStore,
}

impl SessionContext {
    /// Start a session against the configured backend
    ///
    /// Preferences are read from a file cache in the configured directory,
    /// or kept in memory when no config directory exists on this platform.
    #[must_use]
    pub fn start(config: ClientConfig) -> Self {
        let cache: Arc<dyn PreferenceCache> = match config.preference_dir() {
            Some(dir) => Arc::new(FileCache::new(dir)),
            None => {
                debug!("No config directory available, unit preferences will not persist");
                Arc::new(MemoryCache::new())
            }
        };
        let client = Arc::new(JournalApiClient::new(&config));
        let backend: Arc<dyn JournalBackend> = client.clone();
        Self::assemble(config, client, backend, cache)
    }

    /// Start a session with an explicit backend and preference cache
    #[must_use]
    pub fn with_backend(
        config: ClientConfig,
        backend: Arc<dyn JournalBackend>,
        cache: Arc<dyn PreferenceCache>,
    ) -> Self {
        let client = Arc::new(JournalApiClient::new(&config));
        Self::assemble(config, client, backend, cache)
    }

    fn assemble(
        config: ClientConfig,
        client: Arc<JournalApiClient>,
        backend: Arc<dyn JournalBackend>,
        cache: Arc<dyn PreferenceCache>,
    ) -> Self {
        let units = UnitPreferenceStore::load(cache);
        let session_id = Uuid::new_v4();
        info!(%session_id, api_url = %config.api_url, "Session started");
        Self {
            session_id,
            started_at: Instant::now(),
            config,
            client,
            backend,
            units,
        }
    }

    /// Close the session
    pub fn end(self) {
        info!(
            session_id = %self.session_id,
            elapsed_ms = self.started_at.elapsed().as_millis(),
            "Session ended"
        );
    }

    /// Session identifier used in logs
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Get client configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the typed REST client
    #[must_use]
    pub const fn client(&self) -> &Arc<JournalApiClient> {
        &self.client
    }

    /// Get the backend used by forms and views
    #[must_use]
    pub fn backend(&self) -> &dyn JournalBackend {
        self.backend.as_ref()
    }

    /// Get the unit preference store
    #[must_use]
    pub const fn units(&self) -> &UnitPreferenceStore {
        &self.units
    }

    /// Get the unit preference store for changes
    pub fn units_mut(&mut self) -> &mut UnitPreferenceStore {
        &mut self.units
    }

    /// Snapshot of the current unit selections
    #[must_use]
    pub const fn preferences(&self) -> UnitPreferences {
        self.units.preferences()
    }
}
