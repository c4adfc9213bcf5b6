use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::logger::trace;
use crate::module::{Module, ModuleMap};

pub enum ModuleLookup<'a> {
    /// Found through the configured alias map.
    Aliased {
        canonical: &'a str,
        module: &'a Module,
    },
    /// The alias is itself a module short name.
    Direct(&'a Module),
    /// The alias map points at a module the registry does not know.
    Dangling { canonical: &'a str },
    NotFound,
}

/// Aliases win over short names; a short name is only tried when no alias matches.
pub fn lookup_module<'a>(
    modules: &'a ModuleMap,
    aliases: &'a IndexMap<String, String>,
    alias: &str,
) -> ModuleLookup<'a> {
    trace!("lookup_module: alias='{}'", alias);
    if let Some(canonical) = aliases.get(alias) {
        return match modules.get(canonical) {
            Some(module) => {
                trace!("lookup_module: '{}' aliased to '{}'", alias, canonical);
                ModuleLookup::Aliased { canonical, module }
            }
            None => ModuleLookup::Dangling { canonical },
        };
    }

    match modules.get(alias) {
        Some(module) => {
            trace!("lookup_module: '{}' matched a short name", alias);
            ModuleLookup::Direct(module)
        }
        None => ModuleLookup::NotFound,
    }
}

pub fn resolve_module<'a>(
    modules: &'a ModuleMap,
    aliases: &'a IndexMap<String, String>,
    alias: &str,
) -> Result<&'a Module> {
    match lookup_module(modules, aliases, alias) {
        ModuleLookup::Aliased { module, .. } | ModuleLookup::Direct(module) => Ok(module),
        ModuleLookup::Dangling { canonical } => Err(Error::builder(format!(
            "Module alias {} points to unknown module {}",
            alias, canonical
        ))),
        ModuleLookup::NotFound => Err(Error::builder(format!(
            "Module alias {} not found",
            alias
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> ModuleMap {
        ["a/nameA", "b/nameB", "c/nameC", "d/b"]
            .into_iter()
            .map(|name| Module::new(name, format!("loc/{name}")))
            .collect()
    }

    fn aliases() -> IndexMap<String, String> {
        IndexMap::from([
            ("a".to_string(), "nameA".to_string()),
            ("b".to_string(), "nameB".to_string()),
            ("ghost".to_string(), "Missing".to_string()),
        ])
    }

    #[test]
    fn alias_resolves_to_canonical_module() {
        let (modules, aliases) = (modules(), aliases());
        match lookup_module(&modules, &aliases, "a") {
            ModuleLookup::Aliased { canonical, module } => {
                assert_eq!(canonical, "nameA");
                assert_eq!(module.name, "a/nameA");
            }
            _ => panic!("expected aliased lookup"),
        }
    }

    #[test]
    fn alias_shadows_short_name() {
        let (modules, aliases) = (modules(), aliases());
        let module = resolve_module(&modules, &aliases, "b").expect("resolve");
        assert_eq!(module.name, "b/nameB");
    }

    #[test]
    fn short_name_used_when_no_alias() {
        let (modules, aliases) = (modules(), aliases());
        assert!(matches!(
            lookup_module(&modules, &aliases, "nameC"),
            ModuleLookup::Direct(_)
        ));
        let module = resolve_module(&modules, &aliases, "nameC").expect("resolve");
        assert_eq!(module.short_name(), "nameC");
    }

    #[test]
    fn unknown_alias_is_builder_error() {
        let (modules, aliases) = (modules(), aliases());
        let err = resolve_module(&modules, &aliases, "x").unwrap_err();
        assert!(err.is_builder());
        assert_eq!(err.to_string(), "Module alias x not found");
    }

    #[test]
    fn alias_to_unknown_module_is_builder_error() {
        let (modules, aliases) = (modules(), aliases());
        let err = resolve_module(&modules, &aliases, "ghost").unwrap_err();
        assert!(err.is_builder());
        assert!(err.to_string().contains("unknown module Missing"));
    }
}
