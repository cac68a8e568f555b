//! Scenario files.
//!
//! A scenario replays a sequence of patches of one element carrying the
//! directive, the way a host framework would: the first step is the `bind`
//! hook, every later step an `update` whose previous value is the value of
//! the step before.
//!
//! ```toml
//! directive = "bem"
//! rendered = "navbar"
//!
//! [[steps]]
//! value = { isHidden = true }
//! expect = "navbar navbar--hidden"
//!
//! [[steps]]
//! rendered = "navbar navbar-top"
//! class = ["navbar", "navbar-top"]
//! value = { isHidden = true }
//! expect = "navbar navbar-top navbar--hidden"
//! ```

use std::fs;
use std::path::Path;

use modiste_atelier::{
    ClassList, ClassSet, DirectiveBinding, DirectiveModifiers, ModifierDirective, Status,
    VNodeClasses,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CliError;

/// A sequence of patches applied to one element
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Registered directive name, without `v-` (default: `mods`)
    #[serde(default = "default_directive")]
    pub directive: String,

    /// Explicit BEM base class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,

    /// Directive modifiers (`is`, `bem`)
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Class attribute of the element before the first step
    #[serde(default)]
    pub rendered: String,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One patch of the element
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Directive value; a missing value is undefined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Component state the modifier names are looked up in
    #[serde(default)]
    pub state: Map<String, Value>,

    /// Class attribute re-rendered by the host before this patch.
    /// Replaces the element's classes; omitted when the rendering is unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,

    /// `:class` declaration of this render
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Value>,

    /// Expected class attribute after the patch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect: Option<String>,

    /// Expected status code after the patch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expect_status: Option<i8>,
}

/// Outcome of one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// 1-based step index
    pub step: usize,
    pub status: i8,
    pub classes: String,
    /// Mismatches against `expect` / `expectStatus`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<String>,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Outcome of a whole scenario
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub steps: Vec<StepReport>,
    /// Class attribute after the last step
    pub classes: String,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(StepReport::passed)
    }
}

fn default_directive() -> String {
    "mods".to_string()
}

impl Scenario {
    /// Load a scenario from a `.toml` or `.json` file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content).map_err(|source| CliError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            Some("json") => serde_json::from_str(&content).map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            }),
            _ => Err(CliError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Replay every step against a fresh element
    pub fn run(&self, directive: &ModifierDirective) -> ScenarioReport {
        let modifiers = DirectiveModifiers::from_names(self.modifiers.iter().map(String::as_str));
        let mut el = ClassSet::parse(&self.rendered);
        let mut rendered = self.rendered.as_str();
        let mut previous: Option<&Step> = None;
        let mut reports = Vec::with_capacity(self.steps.len());

        for (index, step) in self.steps.iter().enumerate() {
            if let Some(attr) = step.rendered.as_deref() {
                el = ClassSet::parse(attr);
                rendered = attr;
            }

            let vnode = VNodeClasses {
                prev_class: Some(rendered),
                binding: step.class.as_ref(),
                old_binding: previous.and_then(|step| step.class.as_ref()),
            };
            let binding = DirectiveBinding {
                name: &self.directive,
                arg: self.arg.as_deref(),
                modifiers,
                value: step.value.as_ref(),
                old_value: previous.and_then(|step| step.value.as_ref()),
            };

            let status = match previous {
                None => directive.bind(&mut el, binding, &vnode, &step.state),
                Some(_) => directive.update(&mut el, &binding, &vnode, &step.state),
            };

            reports.push(StepReport {
                step: index + 1,
                status: status.code(),
                classes: el.to_attr(),
                mismatches: check_expectations(step, status, &el),
            });
            previous = Some(step);
        }

        ScenarioReport {
            name: self.name.clone(),
            steps: reports,
            classes: el.to_attr(),
        }
    }
}

fn check_expectations(step: &Step, status: Status, el: &ClassSet) -> Vec<String> {
    let mut mismatches = Vec::new();

    if let Some(expected) = step.expect.as_deref() {
        let expected = ClassSet::parse(expected);
        let same = expected.len() == el.len() && expected.iter().all(|class| el.contains(class));
        if !same {
            mismatches.push(format!(
                "expected classes \"{}\", got \"{}\"",
                expected.to_attr(),
                el.to_attr()
            ));
        }
    }

    if let Some(expected) = step.expect_status {
        if expected != status.code() {
            mismatches.push(format!(
                "expected status {}, got {}",
                expected,
                status.code()
            ));
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_scenario() {
        let scenario = Scenario::from_toml(
            r#"
directive = "is"
modifiers = ["bem"]
rendered = "static-class"

[[steps]]
value = "is-hidden"
state = { isHidden = true }
expect = "static-class is-hidden"
"#,
        )
        .unwrap();

        assert_eq!(scenario.directive, "is");
        assert_eq!(scenario.modifiers, vec!["bem".to_string()]);
        assert_eq!(scenario.steps.len(), 1);
        assert_eq!(scenario.steps[0].value, Some(Value::from("is-hidden")));
        assert_eq!(scenario.steps[0].state.get("isHidden"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_defaults() {
        let scenario = Scenario::from_toml("").unwrap();
        assert_eq!(scenario.directive, "mods");
        assert!(scenario.arg.is_none());
        assert!(scenario.steps.is_empty());
    }

    #[test]
    fn test_run_reports_each_step() {
        let scenario = Scenario::from_toml(
            r#"
[[steps]]
value = "hidden"
state = { hidden = true }
expect = "hidden"

[[steps]]
value = "hidden"
state = { hidden = false }
expect = "hidden"
"#,
        )
        .unwrap();

        let report = scenario.run(&ModifierDirective::default());
        assert_eq!(report.steps.len(), 2);
        assert!(report.steps[0].passed());
        assert!(!report.steps[1].passed());
        assert_eq!(report.classes, "");
        assert!(!report.passed());
    }

    #[test]
    fn test_missing_value_is_undefined() {
        let scenario = Scenario::from_toml(
            r#"
rendered = "kept"

[[steps]]
expectStatus = -1
expect = "kept"
"#,
        )
        .unwrap();

        let report = scenario.run(&ModifierDirective::default());
        assert_eq!(report.steps[0].status, -1);
        assert!(report.passed());
    }
}
