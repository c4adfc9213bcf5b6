// Shared fixture for the integration tests: a product tree, its registry,
// a build order and a config that uses `echo` as the build tool.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const REGISTRY: &str = r#"
<ModuleRegistry>
      <Module location="not/here2" name="b/nameB" description="DummyModule2"></Module>
      <Module location="not/here1" name="a/nameA" description="DummyModule1"></Module>
</ModuleRegistry>
"#;

const BUILD_ORDER: &str = "\na/nameA\n#b/nameB\n***************\n";

pub struct Fixture {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Fixture {
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("srcs")
    }

    pub fn config_arg(&self) -> String {
        self.config.to_str().expect("utf8 config path").to_string()
    }
}

/// `fail_on_error` toggles fail-fast; `suites` is appended verbatim under `suites:`.
pub fn fixture(fail_on_error: bool, suites: &str) -> Fixture {
    let dir = tempdir().expect("create temp dir");
    let root = dir.path().join("srcs");
    for sub in [
        "not/here1/src",
        "not/here1/src_test",
        "not/here1/src_web",
        "not/here1/not_not",
        "not/here2/src",
    ] {
        fs::create_dir_all(root.join(sub)).expect("create module dirs");
    }

    let registry = write(dir.path(), "modules.xml", REGISTRY);
    let order = write(dir.path(), "build_order.txt", BUILD_ORDER);

    let config = format!(
        r#"profile: prod
root: {root}
fail_on_error: {fail_on_error}
commands:
  ootb:
    restart: echo Restarting
  custom:
    full: echo Full
    broken: exit 4
input:
  build_order: {order}
  module_registry: {registry}
aliases:
  a: nameA
  b: nameB
tool:
  executable: echo
suites:
  empty:
    restart: false
{suites}"#,
        root = root.display(),
        order = order.display(),
        registry = registry.display(),
    );
    let config = write(dir.path(), "cfg.yml", &config);

    Fixture { dir, config }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture file");
    path
}
