use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logger::{debug, info};
use crate::printer;

const CONFIG_DIR: &str = ".modbuild";
const CONFIG_FILE: &str = "cfg.yml";
const TEST_PROFILE: &str = "test";

/// Written to the default location on first run so the operator has something to edit.
pub const EXAMPLE_CONFIG: &str = r#"# modbuild configuration
# profile "test" assumes every module has src, src_test and src_web
profile: prod
root: /opt
fail_on_error: false
commands:
  ootb:
    restart: echo "Restarting"
  custom:
    full: echo "Full"
input:
  build_order: ignored/compile.includes
  module_registry: ignored/moduleRegistry.xml
aliases:
  core: CoreModule
  web: WebModule
suites:
  current:
    restart: true
    build:
      CoreModule: cst
      WebModule: cstw
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub profile: String,
    pub root: PathBuf,
    #[serde(default)]
    pub fail_on_error: bool,
    pub commands: Commands,
    pub input: InputConfig,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    #[serde(default)]
    pub suites: IndexMap<String, Suite>,
    #[serde(default)]
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commands {
    pub ootb: OotbCommands,
    #[serde(default)]
    pub custom: IndexMap<String, String>,
}

/// Commands every installation has, as opposed to the user-defined `custom` ones.
#[derive(Debug, Clone, Deserialize)]
pub struct OotbCommands {
    pub restart: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub build_order: PathBuf,
    pub module_registry: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Suite {
    #[serde(default)]
    pub restart: bool,
    /// Module name to build spec, executed in declared order.
    #[serde(default)]
    pub build: IndexMap<String, String>,
    #[serde(default)]
    pub custom: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    #[serde(default = "default_executable")]
    pub executable: String,
    #[serde(default = "default_clean_target")]
    pub clean_target: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            clean_target: default_clean_target(),
        }
    }
}

fn default_executable() -> String {
    "ant".to_string()
}

fn default_clean_target() -> String {
    "clobber".to_string()
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or(Error::NoHomeDir)?
            .join(CONFIG_DIR)
            .join(CONFIG_FILE))
    }

    /// Loads the explicit config file, or the default one (created from
    /// [`EXAMPLE_CONFIG`] when it does not exist yet).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_path(path)
            }
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    write_example(&path)?;
                }
                Self::from_path(&path)
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("AppConfig::from_path({})", path.display());
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!(
            "config loaded: profile={}, root={}, fail_on_error={}, aliases={}, suites={}, custom={}",
            config.profile,
            config.root.display(),
            config.fail_on_error,
            config.aliases.len(),
            config.suites.len(),
            config.commands.custom.len()
        );
        Ok(config)
    }

    pub fn is_test_profile(&self) -> bool {
        self.profile == TEST_PROFILE
    }
}

fn write_example(path: &Path) -> Result<()> {
    printer::warn(format!("Config does not exist: {}", path.display()));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
        info!("created config directory {}", dir.display());
    }
    fs::write(path, EXAMPLE_CONFIG)?;
    printer::warn(format!("Created example config: {}", path.display()));
    Ok(())
}
