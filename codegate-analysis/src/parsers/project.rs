//! Shared source project — the engine's only mutable shared state.
//!
//! Each validation call adds exactly one named unit, analyzes it, and —
//! when the caller supplied no stable path — forgets it before returning,
//! so repeated validation of anonymous snippets never grows memory. The
//! whole add/analyze/remove cycle runs inside one critical section.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use codegate_core::FileType;
use rustc_hash::FxHashMap;

use super::{parse, ParsedUnit};

/// Long-lived project holding parsed units keyed by path.
#[derive(Debug, Default)]
pub struct SourceProject {
    units: Mutex<FxHashMap<String, ParsedUnit>>,
    counter: AtomicU64,
}

impl SourceProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `analyze` against a freshly parsed unit for `code`.
    ///
    /// A caller-supplied `path` names the unit and keeps it cached for
    /// later calls; without one, a collision-safe synthetic name is taken
    /// from an atomic counter and the unit is forgotten before returning.
    /// `analyze` receives `None` when the provider yields no tree.
    pub fn with_unit<R>(
        &self,
        code: &str,
        file_type: FileType,
        path: Option<&str>,
        analyze: impl FnOnce(Option<&ParsedUnit>) -> R,
    ) -> R {
        let (name, synthetic) = match path {
            Some(p) => (p.to_string(), false),
            None => (
                format!(
                    "snippet-{}.{}",
                    self.counter.fetch_add(1, Ordering::Relaxed),
                    file_type
                ),
                true,
            ),
        };

        let mut units = self.units.lock().unwrap_or_else(|e| e.into_inner());

        let result = match parse(code, file_type, &name) {
            Some(unit) => {
                units.insert(name.clone(), unit);
                analyze(units.get(&name))
            }
            None => analyze(None),
        };

        if synthetic {
            units.remove(&name);
        }

        result
    }

    /// Number of retained units. Synthetic units never count here.
    pub fn retained_units(&self) -> usize {
        self.units.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Drop a previously retained unit.
    pub fn forget(&self, path: &str) {
        self.units
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_units_are_forgotten() {
        let project = SourceProject::new();
        for _ in 0..10 {
            project.with_unit("const x = 1;", FileType::Ts, None, |unit| {
                assert!(unit.is_some());
            });
        }
        assert_eq!(project.retained_units(), 0);
    }

    #[test]
    fn stable_paths_are_retained_until_forgotten() {
        let project = SourceProject::new();
        project.with_unit("const x = 1;", FileType::Ts, Some("src/a.ts"), |unit| {
            assert!(unit.is_some());
        });
        assert_eq!(project.retained_units(), 1);
        project.forget("src/a.ts");
        assert_eq!(project.retained_units(), 0);
    }

    #[test]
    fn synthetic_names_never_collide() {
        let project = SourceProject::new();
        let first = project.with_unit("const a = 1;", FileType::Ts, None, |unit| {
            unit.map(|u| u.path.clone())
        });
        let second = project.with_unit("const b = 2;", FileType::Ts, None, |unit| {
            unit.map(|u| u.path.clone())
        });
        assert_ne!(first, second);
    }

    #[test]
    fn unsupported_type_hands_back_none() {
        let project = SourceProject::new();
        let saw_tree = project.with_unit("key: value", FileType::Yaml, None, |unit| unit.is_some());
        assert!(!saw_tree);
    }
}
