pub const APP_ID: &str = "cranfield-search";
pub const APP_NAME: &str = "Cranfield Search Engine";

pub const ID_PANEL_HEADER: &str = "header_panel";
pub const ID_SEARCH_BAR_INPUT: &str = "search_bar_input";

pub const SEARCH_BAR_HINT: &str = "Search for... 'aerodynamic wing'";
pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const LOADING_DOCUMENT_MESSAGE: &str = "Loading document...";
pub const BACK_TO_RESULTS: &str = "← Back to Results";
