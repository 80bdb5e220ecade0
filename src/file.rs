//! Loading of JSON-encoded settings.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::from_reader;

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, io::Error> {
        let file = File::open(path)?;
        Ok(from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::Config;
    use std::env;
    use std::fs;

    #[test]
    fn read_config() {
        let path = env::temp_dir().join(format!("archery-config-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"contestants":5,"matches":400,"batch_size":100,"workers":3,"seed":9}"#,
        )
        .unwrap();
        let config = Config::read_json_file(&path);
        fs::remove_file(&path).unwrap();
        let config = config.unwrap();
        assert_eq!(5, config.contestants);
        assert_eq!(400, config.matches);
        assert_eq!(3, config.workers);
    }

    #[test]
    fn missing_file() {
        let path = env::temp_dir().join("archery-config-does-not-exist.json");
        let err = Config::read_json_file(path).unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }
}
