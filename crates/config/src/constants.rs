pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "cranfield";
pub const APP_NAME: &str = "cranfield-search";

pub const GUI_CONFIG_FILE_NAME: &str = "gui.toml";

pub const ENV_CONFIG_DIRECTORY: &str = "CONFIG_DIRECTORY";
pub const ENV_SERVICE_URL: &str = "SEARCH_SERVICE_URL";

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
/// Number of hits requested from the service per query; paging happens locally.
pub const DEFAULT_RESULT_LIMIT: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 10;
