use regex::Regex;
use std::io::BufRead;
use std::sync::OnceLock;

use super::ModuleMap;
use crate::error::Result;
use crate::logger::{debug, trace};

/// `group/name`, optionally commented out with a leading `#`.
fn order_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#?\s?(\w+)/(\w+)$").expect("build order pattern"))
}

impl ModuleMap {
    /// Numbers every `group/name` line from 1, commented or not, and stores the
    /// number on the module with that short name. Other lines are skipped and
    /// do not advance the counter.
    pub fn apply_build_order<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let mut position = 0u32;
        let mut assigned = 0usize;

        for (line_number, line) in reader.lines().enumerate() {
            let line = line?;
            let Some(captures) = order_line().captures(&line) else {
                trace!("build order: line {} skipped: {:?}", line_number + 1, line);
                continue;
            };
            position += 1;

            let short = &captures[2];
            if let Some(module) = self.modules.get_mut(short) {
                module.order = Some(position);
                assigned += 1;
                trace!("build order: '{}' -> {}", short, position);
            }
        }

        debug!(
            "build order: {} entries, {} of {} modules ordered",
            position,
            assigned,
            self.len()
        );
        Ok(())
    }
}
