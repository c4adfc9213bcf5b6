use roxmltree::Document;
use std::path::Path;

use super::{short_name, Module, ModuleMap};
use crate::error::{Error, Result};
use crate::logger::{trace, warn};

const MODULE_TAG: &str = "Module";

impl ModuleMap {
    /// Builds the map from every `<Module name="group/short" location="...">`
    /// element of a registry document. Locations are resolved against `root`.
    pub fn from_registry_str(xml: &str, root: &Path) -> Result<Self> {
        let document = Document::parse(xml)?;
        let mut modules = ModuleMap::new();

        for node in document
            .descendants()
            .filter(|node| node.has_tag_name(MODULE_TAG))
        {
            let name = node.attribute("name").ok_or_else(|| {
                Error::Registry(format!(
                    "<{}> element without a name attribute",
                    MODULE_TAG
                ))
            })?;
            let location = node.attribute("location").ok_or_else(|| {
                Error::Registry(format!("Module '{}' has no location attribute", name))
            })?;
            if short_name(name).is_none() {
                return Err(Error::Registry(format!(
                    "Module name '{}' is not of the form group/name",
                    name
                )));
            }

            let module = Module::new(name, root.join(location));
            trace!(
                "registry: '{}' -> {}",
                module.short_name(),
                module.location.display()
            );
            if let Some(previous) = modules.insert(module) {
                warn!(
                    "registry: '{}' replaces earlier module with the same short name",
                    previous.name
                );
            }
        }

        Ok(modules)
    }
}
