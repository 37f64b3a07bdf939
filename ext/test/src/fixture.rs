//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the okkhor engine.

use okkhor::prelude::*;
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    pub grammar: GrammarConfig,
    pub cases: Vec<TestCase>,
}

/// Test case: an input string and the expected transliteration
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expect: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Build the engine from this fixture's grammar
    ///
    /// # Errors
    ///
    /// Everything [`Grammar::from_config`] can return.
    pub fn build(&self) -> Result<Engine, GrammarError> {
        Ok(Engine::new(Grammar::from_config(self.grammar.clone())?))
    }

    /// Run all test cases and return results
    ///
    /// # Panics
    ///
    /// If the fixture's grammar does not compile.
    pub fn run(&self) -> Vec<CaseResult> {
        let engine = self
            .build()
            .unwrap_or_else(|e| panic!("Fixture '{}' grammar invalid: {e}", self.name));
        self.cases
            .iter()
            .map(|case| {
                let actual = engine.parse(&case.input);
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect,
                    expected: case.expect.clone(),
                    actual,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: smoke
description: Minimal fixture exercising the runner itself
grammar:
  vowel: "aeiou"
  consonant: "bcdfghjklmnpqrstvwxyz"
  number: "0123456789"
  casesensitive: ""
  patterns:
    - find: "k"
      replace: "K"
cases:
  - name: single
    input: "k"
    expect: "K"
  - name: passthrough
    input: "k!"
    expect: "K!"
"#;

    #[test]
    fn parses_and_runs() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.name, "smoke");
        assert_eq!(fixture.cases.len(), 2);
        fixture.run_and_assert();
    }

    #[test]
    fn reports_failures_without_panicking_in_run() {
        let mut fixture = Fixture::from_yaml(FIXTURE).unwrap();
        fixture.cases[0].expect = "WRONG".to_string();

        let results = fixture.run();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "K");
        assert!(results[1].passed);
    }

    #[test]
    fn multi_document_yaml() {
        let yaml = format!("{FIXTURE}---\n{}", FIXTURE.trim_start());
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
    }
}
