use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase, load_fixtures};
/// Fixture runner
///
/// Runs the data-driven cases against `Url::from_string`
use url_value::{StringValued, Url};

fn check(
    failures: &mut Vec<FixtureFailure>,
    test_num: usize,
    input: &str,
    field: &str,
    expected: Option<&str>,
    actual: &str,
) {
    if let Some(expected) = expected {
        if expected != actual {
            failures.push(FixtureFailure {
                test_num,
                input: input.to_string(),
                field: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

/// Run fixture cases and return results
pub fn run_fixture_tests(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest {
            input,
            href,
            failure,
            scheme,
            user,
            password,
            host,
            port,
            path,
            query,
            fragment,
            sub_domain,
            path_traversal,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let url = match (Url::from_string(&input), failure == Some(true)) {
            (Ok(url), false) => url,
            (Err(_), true) => {
                result.passed += 1;
                continue;
            }
            (outcome, expected_failure) => {
                result.failed += 1;
                result.failures.push(FixtureFailure {
                    test_num,
                    input,
                    field: "parsing".to_string(),
                    expected: (if expected_failure { "failure" } else { "success" }).to_string(),
                    actual: match outcome {
                        Ok(url) => url.to_string(),
                        Err(err) => format!("{err:?}"),
                    },
                });
                continue;
            }
        };

        let mut failures = Vec::new();
        let expected_href = href.as_deref().unwrap_or(&input);
        check(&mut failures, test_num, &input, "href", Some(expected_href), url.as_str());
        check(&mut failures, test_num, &input, "scheme", scheme.as_deref(), url.scheme().as_str());
        check(&mut failures, test_num, &input, "user", user.as_deref(), url.user().unwrap_or(""));
        check(
            &mut failures,
            test_num,
            &input,
            "password",
            password.as_deref(),
            url.password().unwrap_or(""),
        );
        check(&mut failures, test_num, &input, "host", host.as_deref(), url.host());
        check(
            &mut failures,
            test_num,
            &input,
            "port",
            port.map(|port| port.to_string()).as_deref(),
            &url.port().map(|port| port.to_string()).unwrap_or_default(),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "path",
            path.as_deref(),
            url.path().map_or("", StringValued::as_str),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "query",
            query.as_deref(),
            url.query_string().map_or("", StringValued::as_str),
        );
        check(
            &mut failures,
            test_num,
            &input,
            "fragment",
            fragment.as_deref(),
            url.fragment_identifier().map_or("", StringValued::as_str),
        );
        check(&mut failures, test_num, &input, "sub_domain", sub_domain.as_deref(), &url.sub_domain());
        check(
            &mut failures,
            test_num,
            &input,
            "path_traversal",
            path_traversal.map(|flag| flag.to_string()).as_deref(),
            &url.contains_path_traversal().to_string(),
        );

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_fixture_tests() {
        let result = run_fixture_tests(load_fixtures());

        for failure in &result.failures {
            eprintln!(
                "Test #{} ({}): {} expected {:?}, got {:?}",
                failure.test_num, failure.input, failure.field, failure.expected, failure.actual
            );
        }

        assert!(result.passed > 0, "No tests passed!");
        assert!(result.failures.is_empty(), "{}", result.summary());
    }
}
