use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IMAGE_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(gif|jpg|jpeg|tiff|png|ico)$")
        .unwrap_or_else(|e| panic!("invalid image extension pattern: {e}"))
});

const NAME_SEPARATORS: [char; 5] = ['/', '\\', '(', ')', '|'];

/// Fallback type for names without a recognised image extension.
pub const DEFAULT_IMAGE_TYPE: &str = "jpg";

/// File name and image type derived from a URL or path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub name: String,
    /// Extension as written in the name, e.g. `png` or `PNG`.
    pub image_type: String,
}

impl ImageDescriptor {
    /// The name is whatever follows the last `/`, `\`, `(`, `)` or `|`. The
    /// extension keeps its case.
    ///
    /// ```
    /// use utilkit_numerics::ImageDescriptor;
    ///
    /// let img = ImageDescriptor::from_url("https://cdn.example.com/a/Logo.PNG");
    /// assert_eq!(img.name, "Logo.PNG");
    /// assert_eq!(img.mime_type(), "image/PNG");
    /// ```
    pub fn from_url(url: &str) -> Self {
        let name = url.rsplit(NAME_SEPARATORS).next().unwrap_or_default().to_string();
        let image_type = IMAGE_EXTENSION
            .captures(&name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());
        Self { name, image_type }
    }

    pub fn mime_type(&self) -> String {
        format!("image/{}", self.image_type)
    }
}
