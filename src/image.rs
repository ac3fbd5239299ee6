use url::Url;

pub const DEFAULT_RECIPE_IMAGE: &str = "/default-image.jpg";
pub const DEFAULT_IMAGE_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_CONTEXT_PATH: &str = "/studio-recipe";

/// Turns the image paths stored by the backend into URLs the browser can load.
///
/// Stored paths come in several flavors (absolute URLs, paths with or without
/// the application context path, bare file names); all relative ones are
/// served by the backend under `{origin}{context_path}/images/`.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct ImageResolver {
    origin: String,
    context_path: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_ORIGIN, DEFAULT_CONTEXT_PATH)
    }
}

impl ImageResolver {
    pub fn new(origin: &str, context_path: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            context_path: format!("/{}", context_path.trim_matches('/')),
        }
    }

    pub fn from_url(origin: &Url) -> Self {
        Self::new(
            &origin.origin().ascii_serialization(),
            DEFAULT_CONTEXT_PATH,
        )
    }

    pub fn resolve(&self, image_url: Option<&str>) -> String {
        let Some(image_url) = image_url.filter(|url| !url.is_empty()) else {
            return DEFAULT_RECIPE_IMAGE.to_string();
        };

        if image_url.starts_with("http://") || image_url.starts_with("https://") {
            return image_url.to_string();
        }

        let origin = &self.origin;
        let context_path = &self.context_path;
        if image_url.starts_with(&format!("{context_path}/")) {
            return format!("{origin}{image_url}");
        }
        if image_url.starts_with("/images/") {
            return format!("{origin}{context_path}{image_url}");
        }
        if image_url.starts_with("images/") {
            return format!("{origin}{context_path}/{image_url}");
        }

        format!("{origin}{context_path}/images/{image_url}")
    }
}
