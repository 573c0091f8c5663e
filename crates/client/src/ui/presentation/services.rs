//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` to access services without depending on
//! infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::{
    AuthService, ChatService, LocationSource, MockLocationSource, SuggestionEngine, TripService,
};
use crate::config::ApiConfig;
use crate::ports::outbound::{PlatformPort, RawApiPort};

/// All services wrapped for context provision
///
/// One bundle is built in the composition root and provided as Dioxus
/// context; every component reaches its dependencies through the hooks
/// below rather than constructing adapters itself.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub trips: Arc<TripService>,
    pub chat: Arc<ChatService>,
    platform: Arc<dyn PlatformPort>,
    location_source: Arc<dyn LocationSource>,
}

impl Services {
    /// Create all services with the given ports
    pub fn new(
        api: Arc<dyn RawApiPort>,
        platform: Arc<dyn PlatformPort>,
        config: ApiConfig,
    ) -> Self {
        let location_source: Arc<dyn LocationSource> =
            Arc::new(MockLocationSource::new(Arc::clone(&platform)));
        Self {
            auth: Arc::new(AuthService::new(
                Arc::clone(&api),
                Arc::clone(&platform),
                config.clone(),
            )),
            trips: Arc::new(TripService::new(Arc::clone(&api), Arc::clone(&platform))),
            chat: Arc::new(ChatService::new(api, Arc::clone(&platform), config)),
            platform,
            location_source,
        }
    }

    /// Build a fresh engine for one location field. Each field needs its
    /// own generation counter, so engines are per-widget rather than part
    /// of the shared bundle.
    pub fn suggestion_engine(&self) -> SuggestionEngine {
        SuggestionEngine::new(
            Arc::clone(&self.platform),
            Arc::clone(&self.location_source),
        )
    }
}

/// Hook to access the full service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> Arc<AuthService> {
    let services = use_context::<Services>();
    services.auth.clone()
}

/// Hook to access the TripService from context
pub fn use_trip_service() -> Arc<TripService> {
    let services = use_context::<Services>();
    services.trips.clone()
}

/// Hook to access the ChatService from context
pub fn use_chat_service() -> Arc<ChatService> {
    let services = use_context::<Services>();
    services.chat.clone()
}

/// Hook giving the calling component its own suggestion engine. The
/// engine is created once per component instance and survives re-renders.
pub fn use_suggestion_engine() -> SuggestionEngine {
    let services = use_context::<Services>();
    use_hook(move || services.suggestion_engine())
}
