//! Client-side content fetching.
//!
//! The browser reads content from the server's JSON API (which fronts the
//! cached GraphQL source) and exposes each fetch as a [`QueryState`].

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::content::{HeaderMenu, Home, HomeData, QueryState, ThemeData};

pub const THEME_PATH: &str = "/api/theme";
pub const HOME_PATH: &str = "/api/home";

/// Fetch JSON from a URL (client-side only)
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or("No window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("{} returned HTTP {}", url, resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| format!("{:?}", e))
}

/// SSR stub - returns error (should not be called during SSR)
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err("fetch_json is only available in browser".to_string())
}

/// Shared handle to the theme fetch, so the layout and pages read one request.
#[derive(Clone, Copy)]
pub struct HeaderMenuResource(Resource<Result<Option<HeaderMenu>, String>>);

impl HeaderMenuResource {
    pub fn state(&self) -> QueryState<HeaderMenu> {
        let snapshot = self.0.read().clone();
        QueryState::from_resource(snapshot)
    }
}

/// Start the theme fetch - call once above every menu consumer
pub fn use_header_menu_provider() -> HeaderMenuResource {
    let theme = use_resource(|| async {
        fetch_json::<ThemeData>(THEME_PATH)
            .await
            .map(ThemeData::into_header_menu)
    });

    use_context_provider(|| HeaderMenuResource(theme))
}

/// Header menu from the theme endpoint.
pub fn use_header_menu() -> QueryState<HeaderMenu> {
    use_context::<HeaderMenuResource>().state()
}

/// Home page content.
pub fn use_home_content() -> QueryState<Home> {
    let home = use_resource(|| async {
        fetch_json::<HomeData>(HOME_PATH)
            .await
            .map(HomeData::into_home)
    });

    let snapshot = home.read().clone();
    QueryState::from_resource(snapshot)
}
