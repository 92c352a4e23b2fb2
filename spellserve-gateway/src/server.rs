//! Process startup: dictionary initialization, binding and serving.

use spellserve_core::DictionaryAdapter;
use tracing::info;

use crate::{
    config::GatewayConfig,
    error::StartupError,
    routes::{create_router, AppState},
};

/// Load the dictionary once and build the shared handler state.
///
/// # Errors
/// Returns [`StartupError::Dictionary`] if the locale data cannot be loaded.
pub fn build_state(config: &GatewayConfig) -> Result<AppState, StartupError> {
    let dictionary = DictionaryAdapter::open(config.locale, &config.dictionary_dir)
        .map_err(StartupError::Dictionary)?;
    Ok(AppState::new(dictionary))
}

/// Initialize the dictionary, bind the listener and serve until shutdown.
///
/// # Errors
/// Returns [`StartupError`] if the dictionary fails to load, the address
/// cannot be bound, or the server loop fails.
pub async fn run(config: GatewayConfig) -> Result<(), StartupError> {
    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|source| StartupError::Bind { addr: config.listen_addr.clone(), source })?;

    info!(addr = %config.listen_addr, locale = %config.locale, "spellserve-gateway listening");

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config_with_dir(dir: PathBuf) -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.dictionary_dir = dir;
        config
    }

    #[test]
    fn build_state_missing_dictionary_is_fatal_startup_error() {
        let config = config_with_dir(PathBuf::from("/nonexistent/spellserve"));
        let result = build_state(&config);
        assert!(matches!(result, Err(StartupError::Dictionary(_))));
    }

    #[test]
    fn build_state_loads_fixture_dictionary() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map(|root| root.join("test-assets"))
            .unwrap_or_default();
        let result = build_state(&config_with_dir(dir));
        assert!(result.is_ok(), "fixture dictionary must load: {:?}", result.err());
    }

    #[tokio::test]
    async fn run_fails_on_unbindable_address() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map(|root| root.join("test-assets"))
            .unwrap_or_default();
        let mut config = config_with_dir(dir);
        config.listen_addr = "not-an-address".to_owned();
        let result = run(config).await;
        assert!(matches!(result, Err(StartupError::Bind { .. })));
    }
}
