use config::{Config, Environment, File, FileFormat};
use std::fs;

#[derive(serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Settings {
    // What environment - local, dev, stage, prod
    pub environment: String,
    pub log_level: String,
    // Replacement dataset (.json, .yaml or .yml) used instead of the bundled table
    #[serde(default)]
    pub dataset: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
pub trait HasFile {
    fn file(&self) -> &str;
}
pub struct SettingsFile {}
impl HasFile for SettingsFile {
    fn file(&self) -> &str {
        "settings.yaml"
    }
}

fn _get_settings(settings: impl HasFile) -> Settings {
    let mut builder = Config::builder()
        .set_default("environment", "local")
        .expect("Invalid default.")
        .set_default("log_level", "warn")
        .expect("Invalid default.");
    // Either we use a settings.yaml file, or environment variables
    let settings_file = settings.file();
    builder = match fs::metadata(settings_file) {
        Ok(metadata) => match metadata.is_file() {
            true => builder.add_source(File::new(settings_file, FileFormat::Yaml)),
            false => panic!("Given settings file is not a file"),
        },
        Err(error) => match error.kind() {
            std::io::ErrorKind::NotFound => builder.add_source(Environment::default()),
            _ => panic!("Unexpected error when loading metadata."),
        },
    };
    let config = builder.build().expect("Config couldn't be built.");
    match config.try_deserialize::<Settings>() {
        Ok(settings) => settings,
        Err(e) => panic!("Config didn't match serialization. {:?}", e),
    }
}

pub fn get_settings() -> Settings {
    _get_settings(SettingsFile {})
}
