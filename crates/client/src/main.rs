//! GoTogether client - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gotogether_client::config::ApiConfig;
use gotogether_client::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gotogether_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting GoTogether client");

    // Platform
    let platform = gotogether_client::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP
    let config = ApiConfig::from_env();
    let api: std::sync::Arc<dyn RawApiPort> = std::sync::Arc::new(
        gotogether_client::infrastructure::http_client::ApiAdapter::new(config.base_url()),
    );

    // Shell kind (native webview vs browser layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            gotogether_client::ShellKind::Browser
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            gotogether_client::ShellKind::Desktop
        }
    };

    let services =
        gotogether_client::presentation::Services::new(api, platform.clone(), config);

    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .with_context(shell)
        .with_context(services)
        .launch(gotogether_client::app);
}
