//! Home page: hero photo with overlay text.

use dioxus::prelude::*;

use crate::app::components::img::{image_source_set, ImageSource, Img};
use crate::app::components::ContentNotice;
use crate::content::{self, QueryState};

const PORTRAIT_FOCAL_POINT: &str = "fp-x=0.35&fp-y=0.35&fp-z=1";
const LANDSCAPE_FOCAL_POINT: &str = "fp-x=0.5&fp-y=0.5&fp-z=1";
const IMAGE_WIDTH: u32 = 1024;

/// Art-directed sources for the hero photo. Missing assets are skipped.
pub fn hero_sources(home: &content::Home) -> Vec<ImageSource> {
    let portrait = home.photo_portrait.as_ref().map(|asset| ImageSource {
        src_set: image_source_set(asset, PORTRAIT_FOCAL_POINT, 700, IMAGE_WIDTH),
        media: "(orientation: portrait)".to_string(),
    });
    let landscape = home.photo_landscape.as_ref().map(|asset| ImageSource {
        src_set: image_source_set(asset, LANDSCAPE_FOCAL_POINT, 500, IMAGE_WIDTH),
        media: "(orientation: landscape)".to_string(),
    });
    portrait.into_iter().chain(landscape).collect()
}

#[component]
pub fn Home(home: QueryState<content::Home>) -> Element {
    let page = match home {
        QueryState::Ready(page) => page,
        QueryState::Failed(reason) => {
            tracing::warn!("Home content failed to load: {}", reason);
            return rsx! {
                ContentNotice { message: "The home page could not be loaded. Please try again later." }
            };
        }
        QueryState::Pending | QueryState::Empty => return rsx! {},
    };

    let sources = hero_sources(&page);
    // Landscape last: it is the fallback <img>
    let assets: Vec<_> = page
        .photo_portrait
        .iter()
        .chain(page.photo_landscape.iter())
        .cloned()
        .collect();

    rsx! {
        section { class: "home-hero",
            Img { assets, sources }
            if !page.overlay.is_empty() {
                div { class: "home-overlay", "{page.overlay}" }
            }
        }
    }
}
