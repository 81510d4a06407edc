use axum::Router;
use mettwasser_api::{
    configuration::{ApplicationSettings, FetchSettings, Settings},
    router,
    state::AppState,
};

pub fn test_app() -> Router {
    let settings = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_owned(),
            port: 0,
            public_url: "https://api.mettwasser.xyz".to_owned(),
        },
        fetch: FetchSettings {
            timeout_secs: 3,
            max_content_length: 3 * 1024 * 1024,
        },
    };

    let state = AppState::new(settings).expect("Failed to build the app state");
    router(state)
}
