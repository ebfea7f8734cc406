use crate::dependency_analysis::domain::{DependencySection, DirectDependency, ExtractedFacts};
use crate::shared::error::{AnalysisError, InputKind};
use serde::Deserialize;
use serde_json::{Map, Value};

type JsonObject = Map<String, Value>;

const NOT_AN_OBJECT: &str = "Input must be a JSON object.";
const NODE_MODULES_MARKER: &str = "/node_modules/";
const NODE_MODULES_PREFIX: &str = "node_modules/";

/// Lockfile layouts the parser understands
///
/// Detected once from the top-level object; extraction then dispatches on the variant.
#[derive(Debug)]
enum LockfileShape<'a> {
    /// `packages` object keyed by install path (lockfileVersion >= 2)
    PackagesMap(Option<&'a JsonObject>),
    /// Nested `dependencies` tree keyed by package name (lockfileVersion 1)
    LegacyTree(Option<&'a JsonObject>),
}

impl<'a> LockfileShape<'a> {
    fn detect(lockfile: &'a JsonObject) -> Self {
        let packages = lockfile.get("packages").and_then(Value::as_object);
        let lockfile_version = lockfile
            .get("lockfileVersion")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        if packages.is_some() || lockfile_version >= 2.0 {
            LockfileShape::PackagesMap(packages)
        } else {
            LockfileShape::LegacyTree(lockfile.get("dependencies").and_then(Value::as_object))
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LockfileShape::PackagesMap(_) => "packages-map",
            LockfileShape::LegacyTree(_) => "legacy-tree",
        }
    }
}

/// InputParser service turning manifest and lockfile text into extraction facts
///
/// Pure function of its two inputs. The manifest is validated before the
/// lockfile, so a pair with two broken inputs reports the manifest.
pub struct InputParser;

impl InputParser {
    /// Parses a package.json / package-lock.json pair
    ///
    /// # Errors
    /// - `AnalysisError::Parse` when either input is not a JSON object
    /// - `AnalysisError::NoData` when neither input yields dependency information
    pub fn parse(manifest: &str, lockfile: &str) -> Result<ExtractedFacts, AnalysisError> {
        let manifest = Self::read_object(manifest, InputKind::Manifest)?;
        let lockfile = match Self::read_object(lockfile, InputKind::Lockfile) {
            Ok(lockfile) => lockfile,
            Err(e) => {
                release(Value::Object(manifest));
                return Err(e);
            }
        };

        let mut facts = ExtractedFacts {
            direct_dependencies: Self::direct_dependencies(&manifest),
            ..ExtractedFacts::default()
        };

        let shape = LockfileShape::detect(&lockfile);
        match shape {
            LockfileShape::PackagesMap(Some(packages)) => {
                Self::read_packages_map(packages, &mut facts)
            }
            LockfileShape::LegacyTree(Some(dependencies)) => {
                Self::walk_legacy_tree(dependencies, &mut facts)
            }
            LockfileShape::PackagesMap(None) | LockfileShape::LegacyTree(None) => {}
        }

        tracing::debug!(
            strategy = shape.label(),
            direct = facts.direct_dependencies.len(),
            records = facts.records.len(),
            edges = facts.edges.len(),
            "extracted dependency facts"
        );

        release(Value::Object(manifest));
        release(Value::Object(lockfile));

        if facts.is_empty() {
            return Err(AnalysisError::NoData);
        }

        Ok(facts)
    }

    /// Parses `text` into a top-level object
    ///
    /// Nesting depth is bounded only by memory: the recursion limit is lifted
    /// and the stack grows on demand while deserializing.
    fn read_object(text: &str, input: InputKind) -> Result<JsonObject, AnalysisError> {
        let parse_error = |e: serde_json::Error| AnalysisError::Parse {
            input,
            details: e.to_string(),
        };

        let mut json = serde_json::Deserializer::from_str(text);
        json.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))
            .map_err(parse_error)?;
        if let Err(e) = json.end() {
            release(value);
            return Err(parse_error(e));
        }

        match value {
            Value::Object(object) => Ok(object),
            other => {
                release(other);
                Err(AnalysisError::Parse {
                    input,
                    details: NOT_AN_OBJECT.to_string(),
                })
            }
        }
    }

    /// Collects one record per entry of the four dependency sections
    fn direct_dependencies(manifest: &JsonObject) -> Vec<DirectDependency> {
        DependencySection::ALL
            .iter()
            .filter_map(|&section| {
                manifest
                    .get(section.manifest_key())
                    .and_then(Value::as_object)
                    .map(|table| (section, table))
            })
            .flat_map(|(section, table)| {
                table.iter().map(move |(name, range)| {
                    DirectDependency::new(name.as_str(), range.as_str().unwrap_or(""), section)
                })
            })
            .collect()
    }

    fn read_packages_map(packages: &JsonObject, facts: &mut ExtractedFacts) {
        for (install_path, value) in packages {
            // The root project entry
            if install_path.is_empty() {
                continue;
            }
            let Some(entry) = value.as_object() else {
                continue;
            };

            let name = match entry.get("name").and_then(Value::as_str) {
                Some(explicit) if !explicit.is_empty() => explicit.to_string(),
                _ => package_name_from_path(install_path),
            };
            if name.is_empty() {
                continue;
            }

            facts.record(&name, entry.get("version").and_then(Value::as_str));

            if let Some(dependencies) = entry.get("dependencies").and_then(Value::as_object) {
                for dependency in dependencies.keys() {
                    facts.edge(&name, dependency);
                }
            }
        }
    }

    /// Walks a v1 `dependencies` tree with an explicit stack
    ///
    /// Lockfile nesting is input-controlled, so the walk must not recurse.
    fn walk_legacy_tree(dependencies: &JsonObject, facts: &mut ExtractedFacts) {
        let mut stack: Vec<(&str, &JsonObject)> = dependencies
            .iter()
            .rev()
            .filter_map(|(name, value)| value.as_object().map(|entry| (name.as_str(), entry)))
            .collect();

        while let Some((name, entry)) = stack.pop() {
            if name.is_empty() {
                continue;
            }

            facts.record(name, entry.get("version").and_then(Value::as_str));

            if let Some(requires) = entry.get("requires").and_then(Value::as_object) {
                for dependency in requires.keys() {
                    facts.edge(name, dependency);
                }
            }

            if let Some(nested) = entry.get("dependencies").and_then(Value::as_object) {
                for (dependency, value) in nested.iter().rev() {
                    facts.edge(name, dependency);
                    if let Some(child) = value.as_object() {
                        stack.push((dependency.as_str(), child));
                    }
                }
            }
        }
    }
}

/// Drops a JSON tree one level at a time
///
/// `Value`'s own drop recurses once per nesting level.
fn release(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(items) => pending.extend(items),
            Value::Object(entries) => pending.extend(entries.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

/// Derives a package name from a lockfile install path
///
/// `node_modules/a/node_modules/@scope/b` yields `@scope/b`. Paths outside
/// `node_modules` (workspace links) yield their first segment.
pub fn package_name_from_path(install_path: &str) -> String {
    let normalized = install_path.replace('\\', "/");

    let tail = match normalized.rfind(NODE_MODULES_MARKER) {
        Some(index) => &normalized[index + NODE_MODULES_MARKER.len()..],
        None => normalized
            .strip_prefix(NODE_MODULES_PREFIX)
            .unwrap_or(&normalized),
    };

    let mut segments = tail.split('/').filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some(scope), Some(name)) if scope.starts_with('@') => format!("{}/{}", scope, name),
        (Some(first), _) => first.to_string(),
        (None, _) => String::new(),
    }
}
