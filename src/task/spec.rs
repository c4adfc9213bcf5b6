use crate::module::SourceSet;

const CLEAN_FLAG: char = 'c';

/// Letters of a build spec: `s`, `t`, `w` pick source sets, `c` cleans first.
/// Any other letter is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSpec {
    pub main: bool,
    pub test: bool,
    pub web: bool,
    pub clean: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Clean(SourceSet),
    Build(SourceSet),
}

impl BuildSpec {
    pub fn parse(spec: &str) -> Self {
        let mut parsed = Self::default();
        for letter in spec.chars() {
            match SourceSet::from_alias(letter) {
                Some(SourceSet::Main) => parsed.main = true,
                Some(SourceSet::Test) => parsed.test = true,
                Some(SourceSet::Web) => parsed.web = true,
                None if letter == CLEAN_FLAG => parsed.clean = true,
                None => {}
            }
        }
        parsed
    }

    pub fn includes(&self, set: SourceSet) -> bool {
        match set {
            SourceSet::Main => self.main,
            SourceSet::Test => self.test,
            SourceSet::Web => self.web,
        }
    }

    /// Steps in execution order: main, test, then web. Web is never cleaned.
    pub fn steps(&self) -> Vec<BuildStep> {
        let mut steps = Vec::new();
        for set in SourceSet::ALL {
            if !self.includes(set) {
                continue;
            }
            if self.clean && set != SourceSet::Web {
                steps.push(BuildStep::Clean(set));
            }
            steps.push(BuildStep::Build(set));
        }
        steps
    }
}
