//! API endpoint configuration.
//!
//! Baked in at build time; the browser has no environment to read.

const DEFAULT_DOGS_URL: &str = "https://api.adiyatan.com/api/lazyDog/dogs";
const RANDOM_IMAGE_URL: &str = "https://random.dog/woof.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Collection endpoint used by the initial load
    pub list_url: String,
    /// Base for create, detail, update and delete
    pub dogs_url: String,
    pub random_image_url: String,
}

impl ApiConfig {
    /// `DOG_API_URL` sets the list endpoint, `DOG_API_DOGS_URL` the write
    /// endpoints. Both are read by the compiler, not at runtime.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DOG_API_URL"), option_env!("DOG_API_DOGS_URL"))
    }

    fn from_values(list_url: Option<&str>, dogs_url: Option<&str>) -> Self {
        let dogs_url = non_empty(dogs_url).unwrap_or(DEFAULT_DOGS_URL);
        let list_url = non_empty(list_url).unwrap_or(dogs_url);
        Self {
            list_url: list_url.to_string(),
            dogs_url: trim_slash(dogs_url).to_string(),
            random_image_url: RANDOM_IMAGE_URL.to_string(),
        }
    }

    pub fn dog_url(&self, id: u32) -> String {
        format!("{}/{}", self.dogs_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn trim_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
