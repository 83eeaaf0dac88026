use anyhow::{Context, Result};
use std::path::Path;
use tally_core::config::{TallyConfig, config_path, load_config, save_config_to};

pub fn path() -> Result<()> {
    let path = config_path()?;
    println!("{}", path.display());
    Ok(())
}

pub fn show() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    let content = toml::to_string_pretty(&config).context("Failed to format configuration")?;
    print!("{}", content);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = config_path()?;
    init_at(&path, force)?;
    println!("✓ Wrote default configuration to {}", path.display());
    Ok(())
}

/// Writes the default configuration to `path`, refusing to clobber unless `force`.
fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    save_config_to(&TallyConfig::default(), path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::config::load_config_from;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tally").join("config.toml");

        init_at(&path, false).expect("Should create config");
        assert_eq!(load_config_from(&path).unwrap(), TallyConfig::default());

        assert!(init_at(&path, false).is_err());
        init_at(&path, true).expect("Should overwrite with --force");
    }
}
