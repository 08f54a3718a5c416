use std::fmt;

// image references
//
// content tables never carry final urls for images that ship with the site; they
// name the file and the resolver decides where it is served from, which depends on
// the asset_root in the site config
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Remote(&'static str),
    Bundled(&'static str),
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Remote(url) => write!(f, "{url}"),
            AssetId::Bundled(name) => write!(f, "bundled:{name}"),
        }
    }
}

pub trait AssetResolver {
    fn resolve(&self, asset: &AssetId) -> String;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BundledAssets {
    root: String,
}

impl BundledAssets {
    pub fn new(root: &str) -> Self {
        BundledAssets {
            root: root.trim_end_matches('/').to_owned(),
        }
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, asset: &AssetId) -> String {
        match asset {
            AssetId::Remote(url) => String::from(*url),
            AssetId::Bundled(name) => format!("{}/{}", self.root, name.trim_start_matches('/')),
        }
    }
}

// shown in place of any image that fails to load
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iODgiIGhlaWdodD0iODgiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyIgc3Ryb2tlPSIjMDAwIiBzdHJva2UtbGluZWpvaW49InJvdW5kIiBvcGFjaXR5PSIuMyIgZmlsbD0ibm9uZSIgc3Ryb2tlLXdpZHRoPSIzLjciPjxyZWN0IHg9IjE2IiB5PSIxNiIgd2lkdGg9IjU2IiBoZWlnaHQ9IjU2IiByeD0iNiIvPjxwYXRoIGQ9Im0xNiA1OCAxNi0xOCAzMiAzMiIvPjxjaXJjbGUgY3g9IjUzIiBjeT0iMzUiIHI9IjciLz48L3N2Zz4KCg==";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_names_are_prefixed_with_root() {
        let assets = BundledAssets::new("/assets/");

        assert_eq!(
            assets.resolve(&AssetId::Bundled("live-event.png")),
            "/assets/live-event.png"
        );
        assert_eq!(
            assets.resolve(&AssetId::Bundled("/profile.png")),
            "/assets/profile.png"
        );
    }

    #[test]
    fn remote_urls_pass_through() {
        let assets = BundledAssets::new("/assets");
        let url = "https://images.example.com/photo.jpg";

        assert_eq!(assets.resolve(&AssetId::Remote(url)), url);
    }

    #[test]
    fn placeholder_is_a_data_uri() {
        assert!(PLACEHOLDER_IMAGE.starts_with("data:image/svg+xml"));
    }
}
