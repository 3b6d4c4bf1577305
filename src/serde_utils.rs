use std::path::Path;

use eyre::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn read_deserialize<T>(path: impl AsRef<Path>) -> eyre::Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading from {}", path.display()))?;

    let value = serde_yaml::from_str(&content).with_context(|| {
        format!("Parsing {} content was {content}", path.display())
    })?;

    Ok(value)
}

pub async fn read_deserialize_json<T>(
    path: impl AsRef<Path>,
) -> eyre::Result<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading from {}", path.display()))?;

    let value = serde_json::from_str(&content)
        .with_context(|| format!("Parsing {}", path.display()))?;

    Ok(value)
}

pub async fn write_serialize<T>(
    path: impl AsRef<Path>,
    value: T,
) -> eyre::Result<()>
where
    T: Serialize,
{
    let path = path.as_ref();

    let content = serde_yaml::to_string(&value)
        .with_context(|| format!("Serializing {}", path.display()))?;

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Writing to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    #[tokio::test]
    async fn yaml_round_trip() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.yml");

        let sample = Sample {
            name: "portal".to_string(),
            count: 3,
        };

        write_serialize(&path, &sample).await?;
        let read_back: Sample = read_deserialize(&path).await?;

        assert_eq!(read_back, sample);

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_error_names_the_path() {
        let err = read_deserialize::<Sample>("no/such/file.yml")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no/such/file.yml"));
    }

    #[tokio::test]
    async fn json_reader() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.json");

        tokio::fs::write(&path, r#"{"name": "portal", "count": 7}"#).await?;

        let read_back: Sample = read_deserialize_json(&path).await?;

        assert_eq!(
            read_back,
            Sample {
                name: "portal".to_string(),
                count: 7,
            }
        );

        Ok(())
    }
}
