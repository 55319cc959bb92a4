use crate::error::{ProofDropError, Result};
use crate::types::config::ProofDropConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "proofdrop.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".proofdrop/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/proofdrop/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ProofDropConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local layers; `None` when no layer exists.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ProofDropConfig>> {
    let layers = global_path
        .into_iter()
        .map(Path::to_path_buf)
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    if layers.is_empty() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        tracing::debug!(path = %path.display(), "merging config layer");
        merge_toml(&mut merged, read_toml_value(path)?);
    }

    let cfg: ProofDropConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ProofDropError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;
    use crate::types::config::SourceKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn global_layer_alone_is_enough() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[pricing]\neth_price_usd = 1800.0\n")
            .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global config should be loaded");
        assert_eq!(cfg.eth_price_usd(), 1800.0);
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[pricing]
eth_price_usd = 1800.0

[network]
default = "polygon"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[network]
default = "bsc"

[source]
kind = "metrics"
path = "metrics.json"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".proofdrop")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[source]
kind = "activity"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.eth_price_usd(), 1800.0);
        assert_eq!(cfg.default_network(), Network::Bsc);
        assert_eq!(cfg.source_kind(), Some(SourceKind::Activity));
        assert_eq!(
            cfg.source_path().map(|p| p.to_string_lossy().into_owned()),
            Some("metrics.json".to_string())
        );
    }

    #[test]
    fn invalid_layer_reports_its_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[pricing\n")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[pricing]\neth_price_usd = -5.0\n",
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("validation should fail");
        assert!(matches!(err, ProofDropError::ConfigParse(_)));
    }

    #[test]
    fn unknown_source_kind_is_a_toml_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join("proofdrop.toml"),
            "[source]\nkind = \"covalent\"\n",
        )
        .expect("project config should write");

        let err = load_config_with_global(dir.path(), None)
            .expect_err("unknown source kind should be rejected");
        assert!(matches!(err, ProofDropError::Toml(_)));
    }
}
