use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ConfigParsingError;

/// Application configuration, merged from YAML files (later files override
/// earlier ones) and `CAMPUS__`-prefixed environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig<Custom> {
    pub app: Custom,
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<std::path::Path>]) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for path in files {
            let supported = path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml");
            if !supported {
                return Err(ConfigParsingError::GeneralParsingError(format!(
                    "Unsupported file or missing file extension: {:?}",
                    path.as_ref().to_str()
                )));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed("CAMPUS_").split("__").lowercase(false));

        let app = figment
            .extract::<Custom>()
            .map_err(|error| ConfigParsingError::GeneralParsingError(error.to_string()))?;
        Ok(Self { app })
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Default)]
    #[serde(default)]
    struct TestConfig {
        database_url: String,
        server_port: Option<u16>,
    }

    #[test]
    fn rejects_unsupported_extension() {
        let result = AppConfig::<TestConfig>::from_files(&["config.toml"]);
        assert!(matches!(
            result,
            Err(ConfigParsingError::GeneralParsingError(_))
        ));
    }
}
