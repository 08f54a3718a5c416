use dioxus::prelude::*;
use tracing::warn;

use folio::assets::{AssetId, PLACEHOLDER_IMAGE};

use crate::common::context::use_asset;

#[derive(Clone, PartialEq, Props)]
pub struct FallbackImageProps {
    asset: AssetId,
    alt: String,
    #[props(default)]
    class: String,
}

// swaps in the placeholder the first time the real image fails to load
#[component]
pub fn FallbackImage(props: FallbackImageProps) -> Element {
    let src = use_asset(props.asset);
    let mut failed = use_signal(|| false);

    let logged_src = src.clone();
    let shown = if failed() {
        PLACEHOLDER_IMAGE.to_owned()
    } else {
        src.clone()
    };

    rsx! {
        img {
            class: "{props.class}",
            src: "{shown}",
            alt: "{props.alt}",
            "data-original-url": "{src}",
            onerror: move |_| {
                if !failed() {
                    warn!({ src = %logged_src }, "image failed to load, showing placeholder");
                    failed.set(true);
                }
            },
        }
    }
}
