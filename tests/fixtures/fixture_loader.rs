/// Fixture loader
///
/// Loads the data-driven URL cases from `urls.json`. Each entry is either a
/// comment string or a case; expected component values are only checked when
/// present, and an empty string stands for an absent component.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum TestCase {
    /// A URL test case
    UrlTest {
        input: String,
        /// Expected canonical form, when it differs from `input`
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        user: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        sub_domain: Option<String>,
        #[serde(default)]
        path_traversal: Option<bool>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load all fixture cases bundled with the test suite
pub fn load_fixtures() -> Vec<TestCase> {
    serde_json::from_str(include_str!("urls.json")).expect("urls.json must be valid fixture data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixtures() {
        let tests = load_fixtures();
        let cases = tests
            .iter()
            .filter(|test| matches!(test, TestCase::UrlTest { .. }))
            .count();
        assert!(cases > 30);
    }

    #[test]
    fn test_fixture_result_summary() {
        let result = FixtureResult {
            passed: 3,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
    }
}
