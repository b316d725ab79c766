//! Responsive CDN image.

use dioxus::prelude::*;

use crate::content::Asset;

/// One `<source>` of a `<picture>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    pub src_set: String,
    pub media: String,
}

/// CDN URL for an asset cropped around a focal point.
pub fn image_source_set(asset: &Asset, focal_point: &str, height: u32, width: u32) -> String {
    let separator = if asset.url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}&fit=crop&h={}&w={}",
        asset.url, separator, focal_point, height, width
    )
}

/// `<picture>` with art-directed sources; the last asset is the fallback `<img>`.
#[component]
pub fn Img(
    assets: Vec<Asset>,
    sources: Vec<ImageSource>,
    #[props(default)] alt: String,
) -> Element {
    let Some(fallback) = assets.last() else {
        return rsx! {};
    };
    let alt = fallback.title.clone().unwrap_or(alt);

    rsx! {
        picture { class: "responsive-image",
            for item in sources.iter() {
                source {
                    "srcset": "{item.src_set}",
                    "media": "{item.media}",
                }
            }
            img {
                src: "{fallback.url}",
                alt: "{alt}",
            }
        }
    }
}
