//! Server-rendered pages.
//!
//! Each handler fetches content through the shared [`ContentSource`], maps the
//! results onto [`QueryState`]s and renders the same Dioxus components the
//! browser client mounts. Links are plain anchors so pages work without the
//! client bundle.
//!
//! [`ContentSource`]: crate::content::ContentSource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::components::{ContentNotice, HtmlDocument, SiteLayout};
use crate::app::pages::{section_for, Home, NotFound, Section};
use crate::app::site::{SiteInfo, SiteProviders};
use crate::content::{ContentError, HeaderMenu, HomeData, QueryState, ThemeData};

/// Full document: contexts, head, and the site layout around `children`.
#[component]
fn ServerPage(
    site: SiteInfo,
    viewport_width: Option<u32>,
    title: String,
    location: String,
    menu: QueryState<HeaderMenu>,
    children: Element,
) -> Element {
    rsx! {
        SiteProviders { site, viewport_width,
            HtmlDocument { title,
                SiteLayout { location, menu,
                    {children}
                }
            }
        }
    }
}

fn document(body: String) -> Html<String> {
    Html(format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", body))
}

fn menu_state(theme: Result<ThemeData, ContentError>) -> QueryState<HeaderMenu> {
    if let Err(e) = &theme {
        tracing::warn!("Theme unavailable: {}", e);
    }
    QueryState::from_result(theme.map(ThemeData::into_header_menu))
}

/// GET / - Home page
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let (theme, home) = tokio::join!(state.content.theme(), state.content.home());
    let menu = menu_state(theme);
    let home = QueryState::from_result(home.map(HomeData::into_home));

    let html = dioxus::ssr::render_element(rsx! {
        ServerPage {
            site: state.site.clone(),
            viewport_width: state.default_viewport_px,
            title: "Home",
            location: "/",
            menu,
            Home { home }
        }
    });
    document(html)
}

/// GET /{*path} - Page reached through the header menu
///
/// Locations no menu entry covers get the not-found page with status 404.
/// Without a menu the page cannot be resolved, so a failed theme fetch
/// answers 502.
pub async fn section_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> impl IntoResponse {
    let location = format!("/{}", path.trim_start_matches('/'));
    let menu = menu_state(state.content.theme().await);

    let (status, title, body) = match &menu {
        QueryState::Ready(header_menu) => match section_for(&location, header_menu) {
            Some(entry) => (
                StatusCode::OK,
                entry.label.clone(),
                rsx! { Section { title: entry.label.clone() } },
            ),
            None => not_found(&location),
        },
        QueryState::Failed(_) => (
            StatusCode::BAD_GATEWAY,
            "Unavailable".to_string(),
            rsx! { ContentNotice { message: "This page could not be loaded. Please try again later." } },
        ),
        QueryState::Pending | QueryState::Empty => not_found(&location),
    };

    if status == StatusCode::NOT_FOUND {
        tracing::debug!("No menu entry covers {}", location);
    }

    let html = dioxus::ssr::render_element(rsx! {
        ServerPage {
            site: state.site.clone(),
            viewport_width: state.default_viewport_px,
            title,
            location,
            menu,
            {body}
        }
    });
    (status, document(html))
}

fn not_found(location: &str) -> (StatusCode, String, Element) {
    let location = location.to_string();
    (
        StatusCode::NOT_FOUND,
        "Not found".to_string(),
        rsx! { NotFound { location } },
    )
}
