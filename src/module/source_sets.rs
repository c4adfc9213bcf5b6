use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use super::{ModuleMap, SourceSet};
use crate::error::Result;
use crate::logger::{debug, trace};

const SOURCE_DIR_PREFIX: &str = "src";

impl ModuleMap {
    /// Fills every module's source sets. The test profile assumes all of them
    /// without touching the filesystem.
    pub fn detect_source_sets(&mut self, test_profile: bool) -> Result<()> {
        debug!("detect_source_sets: test_profile={}", test_profile);
        for module in self.modules.values_mut() {
            module.source_sets = if test_profile {
                SourceSet::ALL
                    .iter()
                    .map(|set| set.dir_name().to_string())
                    .collect()
            } else {
                scan_source_dirs(&module.location)?
            };
            trace!(
                "source sets of '{}': {:?}",
                module.short_name(),
                module.source_sets
            );
        }
        Ok(())
    }
}

/// Names of the immediate subdirectories of `location` that are source sets,
/// i.e. whose name starts with `src` (`src`, `src_test`, `src_extra`, ...).
/// A location that does not exist has none.
pub fn scan_source_dirs(location: &Path) -> Result<BTreeSet<String>> {
    let entries = match fs::read_dir(location) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("scan_source_dirs: {} does not exist", location.display());
            return Ok(BTreeSet::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut found = BTreeSet::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(SOURCE_DIR_PREFIX) && entry.path().is_dir() {
            found.insert(name);
        }
    }
    Ok(found)
}
