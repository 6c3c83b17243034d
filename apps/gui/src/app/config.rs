use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AppConfig {
    pub width: f32,
    pub height: f32,
}


impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 700.0,
        }
    }
}
