mod order;
mod registry;
mod source_sets;

pub use source_sets::scan_source_dirs;

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::logger::debug;

/// Subdirectory convention inside a module location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceSet {
    Main,
    Test,
    Web,
}

impl SourceSet {
    pub const ALL: [SourceSet; 3] = [SourceSet::Main, SourceSet::Test, SourceSet::Web];

    pub fn dir_name(self) -> &'static str {
        match self {
            SourceSet::Main => "src",
            SourceSet::Test => "src_test",
            SourceSet::Web => "src_web",
        }
    }

    /// The letter used in build specs (`s`, `t`, `w`).
    pub fn alias(self) -> char {
        match self {
            SourceSet::Main => 's',
            SourceSet::Test => 't',
            SourceSet::Web => 'w',
        }
    }

    pub fn from_alias(alias: char) -> Option<Self> {
        Self::ALL.into_iter().find(|set| set.alias() == alias)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Qualified registry name, `group/short`.
    pub name: String,
    pub location: PathBuf,
    pub order: Option<u32>,
    /// Directory names of the source sets found for this module.
    pub source_sets: BTreeSet<String>,
}

impl Module {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            order: None,
            source_sets: BTreeSet::new(),
        }
    }

    pub fn short_name(&self) -> &str {
        short_name(&self.name).unwrap_or(&self.name)
    }

    pub fn build_file(&self, set: SourceSet) -> String {
        format!("{}/{}/build.xml", self.location.display(), set.dir_name())
    }

    pub fn has_source_set(&self, set: SourceSet) -> bool {
        self.source_sets.contains(set.dir_name())
    }
}

pub(crate) fn short_name(qualified: &str) -> Option<&str> {
    qualified.split('/').nth(1)
}

/// Every registry module keyed by short name, in registry order.
#[derive(Debug, Clone, Default)]
pub struct ModuleMap {
    modules: IndexMap<String, Module>,
}

impl ModuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the registry and build order named by `config`, then detects source sets.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let registry_path = &config.input.module_registry;
        let xml = fs::read_to_string(registry_path)
            .map_err(|err| input_error("module registry", registry_path, err))?;
        let mut modules = Self::from_registry_str(&xml, &config.root)?;

        let order_path = &config.input.build_order;
        let order_file =
            File::open(order_path).map_err(|err| input_error("build order", order_path, err))?;
        modules.apply_build_order(BufReader::new(order_file))?;

        modules.detect_source_sets(config.is_test_profile())?;
        debug!("ModuleMap::load: {} module(s) ready", modules.len());
        Ok(modules)
    }

    /// Replaces any module with the same short name.
    pub fn insert(&mut self, module: Module) -> Option<Module> {
        self.modules.insert(module.short_name().to_string(), module)
    }

    pub fn get(&self, short_name: &str) -> Option<&Module> {
        self.modules.get(short_name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Module)> {
        self.modules.iter()
    }

    /// Ordered modules first by position, then the unordered ones in registry order.
    pub fn in_build_order(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.modules.values().collect();
        modules.sort_by_key(|module| (module.order.is_none(), module.order));
        modules
    }
}

impl FromIterator<Module> for ModuleMap {
    fn from_iter<I: IntoIterator<Item = Module>>(iter: I) -> Self {
        let mut map = ModuleMap::new();
        for module in iter {
            map.insert(module);
        }
        map
    }
}

fn input_error(what: &str, path: &Path, err: std::io::Error) -> Error {
    Error::Config(format!(
        "Unable to read {} '{}': {}",
        what,
        path.display(),
        err
    ))
}
