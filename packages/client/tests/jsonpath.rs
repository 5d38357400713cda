//! Path expression engine tests
//!
//! Compilation, evaluation, and the inspector-facing outcome contract.

use serde_json::{Value, json};
use vitrine_client::jsonpath::{self, PathQuery, PathSelector, QueryOutcome};

fn sample() -> Value {
    json!({
        "name": "web-1",
        "backend_name": "aws-prod",
        "raw": {
            "state": {"name": "running", "code": 16},
            "tags": [
                {"key": "env", "value": "prod"},
                {"key": "team", "value": "infra"},
                {"key": "tier", "value": "web"}
            ],
            "ports": [22, 80, 443, 8080]
        }
    })
}

#[cfg(test)]
mod parser_basic_tests {
    use super::*;

    #[test]
    fn test_bare_root() {
        let query = PathQuery::compile("$").expect("valid expression");
        assert_eq!(query.selectors().len(), 1);
        assert!(matches!(query.selectors()[0], PathSelector::Root));
    }

    #[test]
    fn test_dot_property() {
        let query = PathQuery::compile("$.name").expect("valid expression");
        assert_eq!(query.selectors().len(), 2);
        assert!(
            matches!(query.selectors()[1], PathSelector::Child { ref name } if name == "name")
        );
    }

    #[test]
    fn test_bracket_property() {
        let query = PathQuery::compile("$['backend name']").expect("valid expression");
        assert!(matches!(
            query.selectors()[1],
            PathSelector::Child { ref name } if name == "backend name"
        ));
    }

    #[test]
    fn test_double_quoted_property() {
        let query = PathQuery::compile("$[\"name\"]").expect("valid expression");
        assert!(
            matches!(query.selectors()[1], PathSelector::Child { ref name } if name == "name")
        );
    }

    #[test]
    fn test_array_index() {
        let query = PathQuery::compile("$.ports[0]").expect("valid expression");
        assert!(matches!(
            query.selectors()[2],
            PathSelector::Index { index: 0 }
        ));
    }

    #[test]
    fn test_negative_array_index() {
        let query = PathQuery::compile("$.ports[-1]").expect("valid expression");
        assert!(matches!(
            query.selectors()[2],
            PathSelector::Index { index: -1 }
        ));
    }

    #[test]
    fn test_wildcard_forms() {
        let dotted = PathQuery::compile("$.raw.*").expect("valid expression");
        assert!(matches!(dotted.selectors()[2], PathSelector::Wildcard));

        let bracketed = PathQuery::compile("$.raw[*]").expect("valid expression");
        assert!(matches!(bracketed.selectors()[2], PathSelector::Wildcard));
    }

    #[test]
    fn test_recursive_descent() {
        let query = PathQuery::compile("$..name").expect("valid expression");
        assert_eq!(query.selectors().len(), 3);
        assert!(matches!(
            query.selectors()[1],
            PathSelector::RecursiveDescent
        ));
        assert!(
            matches!(query.selectors()[2], PathSelector::Child { ref name } if name == "name")
        );
    }

    #[test]
    fn test_slice_variants() {
        let full = PathQuery::compile("$.ports[1:3]").expect("valid expression");
        assert!(matches!(
            full.selectors()[2],
            PathSelector::Slice {
                start: Some(1),
                end: Some(3),
                step: None
            }
        ));

        let open_start = PathQuery::compile("$.ports[:2]").expect("valid expression");
        assert!(matches!(
            open_start.selectors()[2],
            PathSelector::Slice {
                start: None,
                end: Some(2),
                step: None
            }
        ));

        let stepped = PathQuery::compile("$.ports[::2]").expect("valid expression");
        assert!(matches!(
            stepped.selectors()[2],
            PathSelector::Slice {
                start: None,
                end: None,
                step: Some(2)
            }
        ));

        let reversed = PathQuery::compile("$.ports[::-1]").expect("valid expression");
        assert!(matches!(
            reversed.selectors()[2],
            PathSelector::Slice {
                start: None,
                end: None,
                step: Some(-1)
            }
        ));
    }

    #[test]
    fn test_chained_segments() {
        let query = PathQuery::compile("$.raw.tags[0].key").expect("valid expression");
        assert_eq!(query.selectors().len(), 5);
        assert_eq!(query.expression(), "$.raw.tags[0].key");
    }

    #[test]
    fn test_whitespace_inside_brackets() {
        let query = PathQuery::compile("$.ports[ 1 : 3 ]").expect("valid expression");
        assert!(matches!(
            query.selectors()[2],
            PathSelector::Slice {
                start: Some(1),
                end: Some(3),
                step: None
            }
        ));
    }
}

#[cfg(test)]
mod parser_error_tests {
    use super::*;

    #[test]
    fn test_empty_expression_rejected() {
        let error = PathQuery::compile("").expect_err("empty input must be rejected");
        assert!(error.message().contains("empty"));
        assert_eq!(error.position(), Some(0));
    }

    #[test]
    fn test_missing_root_rejected() {
        let error = PathQuery::compile(".name").expect_err("missing root must be rejected");
        assert!(error.message().contains('$'));
    }

    #[test]
    fn test_current_node_outside_filter_rejected() {
        let error = PathQuery::compile("@.name").expect_err("@ is filter-only");
        assert!(error.message().contains('@'));
    }

    #[test]
    fn test_bare_name_after_root_rejected() {
        assert!(PathQuery::compile("$name").is_err());
    }

    #[test]
    fn test_trailing_dot_rejected() {
        assert!(PathQuery::compile("$.").is_err());
        assert!(PathQuery::compile("$.raw.").is_err());
    }

    #[test]
    fn test_trailing_descent_rejected() {
        let error = PathQuery::compile("$..").expect_err("descent needs a follow-up selector");
        assert!(error.message().contains(".."));
    }

    #[test]
    fn test_unterminated_bracket_rejected() {
        assert!(PathQuery::compile("$.ports[0").is_err());
        assert!(PathQuery::compile("$.ports[").is_err());
    }

    #[test]
    fn test_unterminated_string_rejected() {
        let error = PathQuery::compile("$['name").expect_err("unterminated string literal");
        assert!(error.message().contains("unterminated"));
    }

    #[test]
    fn test_empty_filter_rejected() {
        assert!(PathQuery::compile("$.tags[?]").is_err());
        assert!(PathQuery::compile("$.tags[?()]").is_err());
    }

    #[test]
    fn test_unexpected_character_rejected() {
        let error = PathQuery::compile("$.a;b").expect_err("stray punctuation");
        assert!(error.message().contains(';'));
    }

    #[test]
    fn test_lone_minus_rejected() {
        assert!(PathQuery::compile("$.ports[-]").is_err());
    }
}

#[cfg(test)]
mod evaluator_tests {
    use super::*;

    #[test]
    fn test_root_returns_whole_document() {
        let doc = sample();
        let matches = jsonpath::evaluate(&doc, "$");
        assert_eq!(matches, vec![doc]);
    }

    #[test]
    fn test_child_hit() {
        let doc = sample();
        let matches = jsonpath::evaluate(&doc, "$.raw.state.name");
        assert_eq!(matches, vec![json!("running")]);
    }

    #[test]
    fn test_child_miss_is_empty_not_error() {
        let doc = sample();
        assert!(jsonpath::evaluate(&doc, "$.raw.nonexistent").is_empty());
        assert!(jsonpath::evaluate(&doc, "$.name.deeper").is_empty());
    }

    #[test]
    fn test_null_member_is_a_match() {
        let doc = json!({"a": null});
        let matches = jsonpath::evaluate(&doc, "$.a");
        assert_eq!(matches, vec![Value::Null]);
        assert!(jsonpath::evaluate(&doc, "$.b").is_empty());
    }

    #[test]
    fn test_index_from_both_ends() {
        let doc = sample();
        assert_eq!(jsonpath::evaluate(&doc, "$.raw.ports[0]"), vec![json!(22)]);
        assert_eq!(
            jsonpath::evaluate(&doc, "$.raw.ports[-1]"),
            vec![json!(8080)]
        );
        assert!(jsonpath::evaluate(&doc, "$.raw.ports[9]").is_empty());
        assert!(jsonpath::evaluate(&doc, "$.raw.ports[-9]").is_empty());
    }

    #[test]
    fn test_wildcard_over_object_is_key_ordered() {
        let doc = json!({"b": 2, "a": 1, "c": 3});
        let matches = jsonpath::evaluate(&doc, "$.*");
        assert_eq!(matches, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_wildcard_over_array_keeps_order() {
        let doc = sample();
        let matches = jsonpath::evaluate(&doc, "$.raw.ports[*]");
        assert_eq!(matches, vec![json!(22), json!(80), json!(443), json!(8080)]);
    }

    #[test]
    fn test_wildcard_over_scalar_is_empty() {
        let doc = sample();
        assert!(jsonpath::evaluate(&doc, "$.name.*").is_empty());
    }

    #[test]
    fn test_wildcard_then_child_projects_each_element() {
        let doc = json!({"a": [{"b": 1}, {"b": 2}]});
        let matches = jsonpath::evaluate(&doc, "$.a[*].b");
        assert_eq!(matches, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_slices() {
        let doc = json!({"v": [0, 1, 2, 3, 4, 5]});
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[1:4]"),
            vec![json!(1), json!(2), json!(3)]
        );
        assert_eq!(jsonpath::evaluate(&doc, "$.v[:2]"), vec![json!(0), json!(1)]);
        assert_eq!(jsonpath::evaluate(&doc, "$.v[4:]"), vec![json!(4), json!(5)]);
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[::2]"),
            vec![json!(0), json!(2), json!(4)]
        );
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[-2:]"),
            vec![json!(4), json!(5)]
        );
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[::-1]"),
            vec![json!(5), json!(4), json!(3), json!(2), json!(1), json!(0)]
        );
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[4:1:-1]"),
            vec![json!(4), json!(3), json!(2)]
        );
        assert!(jsonpath::evaluate(&doc, "$.v[2:2]").is_empty());
        assert!(jsonpath::evaluate(&doc, "$.v[::0]").is_empty());
    }

    #[test]
    fn test_slice_bounds_clamp() {
        let doc = json!({"v": [0, 1, 2]});
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[0:100]"),
            vec![json!(0), json!(1), json!(2)]
        );
        assert_eq!(
            jsonpath::evaluate(&doc, "$.v[-100:2]"),
            vec![json!(0), json!(1)]
        );
    }

    #[test]
    fn test_recursive_descent_collects_every_match() {
        let doc = sample();
        let matches = jsonpath::evaluate(&doc, "$..name");
        assert_eq!(matches, vec![json!("web-1"), json!("running")]);
    }

    #[test]
    fn test_recursive_descent_into_arrays() {
        let doc = sample();
        let matches = jsonpath::evaluate(&doc, "$..key");
        assert_eq!(matches, vec![json!("env"), json!("team"), json!("tier")]);
    }

    #[test]
    fn test_descent_then_wildcard() {
        let doc = json!({"a": {"b": 1}});
        let matches = jsonpath::evaluate(&doc, "$..*");
        assert_eq!(matches, vec![json!({"b": 1}), json!(1)]);
    }

    #[test]
    fn test_compiled_query_is_reusable() {
        let query = PathQuery::compile("$.raw.state.code").expect("valid expression");
        let doc = sample();
        assert_eq!(query.evaluate(&doc), vec![json!(16)]);
        assert_eq!(query.evaluate(&doc), vec![json!(16)]);
        assert_eq!(query.evaluate(&json!({})), Vec::<Value>::new());
    }

    #[test]
    fn test_evaluate_refs_borrows_from_input() {
        let query = PathQuery::compile("$.raw.ports[0]").expect("valid expression");
        let doc = sample();
        let refs = query.evaluate_refs(&doc);
        assert_eq!(refs.len(), 1);
        assert_eq!(*refs[0], json!(22));
    }
}

#[cfg(test)]
mod filter_predicate_tests {
    use super::*;

    fn tags() -> Value {
        json!({
            "tags": [
                {"key": "env", "value": "prod", "priority": 3},
                {"key": "team", "value": "infra", "priority": 1},
                {"key": "tier", "priority": 2.5}
            ]
        })
    }

    #[test]
    fn test_existence_predicate() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?(@.value)].key");
        assert_eq!(matches, vec![json!("env"), json!("team")]);
    }

    #[test]
    fn test_equality_predicate() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?(@.key == 'env')].value");
        assert_eq!(matches, vec![json!("prod")]);
    }

    #[test]
    fn test_unwrapped_predicate_form() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?@.key == 'env'].value");
        assert_eq!(matches, vec![json!("prod")]);
    }

    #[test]
    fn test_inequality_counts_missing_operand() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?(@.value != 'prod')].key");
        assert_eq!(matches, vec![json!("team"), json!("tier")]);
    }

    #[test]
    fn test_numeric_comparison_crosses_int_and_float() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?(@.priority > 1.5)].key");
        assert_eq!(matches, vec![json!("env"), json!("tier")]);
        let exact = jsonpath::evaluate(&doc, "$.tags[?(@.priority == 2.5)].key");
        assert_eq!(exact, vec![json!("tier")]);
    }

    #[test]
    fn test_string_ordering_is_lexicographic() {
        let doc = tags();
        let matches = jsonpath::evaluate(&doc, "$.tags[?(@.key < 'team')].key");
        assert_eq!(matches, vec![json!("env")]);
    }

    #[test]
    fn test_logical_and_or() {
        let doc = tags();
        let both = jsonpath::evaluate(
            &doc,
            "$.tags[?(@.priority >= 1 && @.priority <= 2.5)].priority",
        );
        assert_eq!(both, vec![json!(1), json!(2.5)]);

        let either = jsonpath::evaluate(
            &doc,
            "$.tags[?(@.key == 'env' || @.key == 'tier')].priority",
        );
        assert_eq!(either, vec![json!(3), json!(2.5)]);
    }

    #[test]
    fn test_parenthesized_precedence() {
        let doc = tags();
        let grouped = jsonpath::evaluate(
            &doc,
            "$.tags[?((@.key == 'env' || @.key == 'team') && @.priority < 2)].key",
        );
        assert_eq!(grouped, vec![json!("team")]);
    }

    #[test]
    fn test_filter_against_current_scalar() {
        let doc = json!({"ports": [22, 80, 443]});
        let matches = jsonpath::evaluate(&doc, "$.ports[?(@ > 79)]");
        assert_eq!(matches, vec![json!(80), json!(443)]);
    }

    #[test]
    fn test_filter_over_object_members() {
        let doc = json!({
            "backends": {
                "a": {"healthy": true},
                "b": {"healthy": false}
            }
        });
        let matches = jsonpath::evaluate(&doc, "$.backends[?(@.healthy == true)]");
        assert_eq!(matches, vec![json!({"healthy": true})]);
    }

    #[test]
    fn test_filter_on_scalar_node_is_empty() {
        let doc = json!({"name": "web-1"});
        assert!(jsonpath::evaluate(&doc, "$.name[?(@ == 'web-1')]").is_empty());
    }

    #[test]
    fn test_boolean_and_null_literals() {
        let doc = json!({
            "rows": [
                {"active": true, "note": null},
                {"active": false}
            ]
        });
        assert_eq!(
            jsonpath::evaluate(&doc, "$.rows[?(@.active == false)]"),
            vec![json!({"active": false})]
        );
        assert_eq!(
            jsonpath::evaluate(&doc, "$.rows[?(@.note == null)]"),
            vec![json!({"active": true, "note": null})]
        );
    }
}

#[cfg(test)]
mod outcome_tests {
    use super::*;

    #[test]
    fn test_empty_path_is_identity() {
        let doc = sample();
        let outcome = jsonpath::query(&doc, "");
        assert_eq!(outcome, QueryOutcome::Matches(vec![doc.clone()]));
        assert_eq!(jsonpath::evaluate(&doc, ""), vec![doc]);
    }

    #[test]
    fn test_invalid_expression_flattens_to_empty() {
        let doc = sample();
        assert!(jsonpath::evaluate(&doc, "$[").is_empty());
        assert!(jsonpath::evaluate(&doc, "not a path").is_empty());
        assert!(jsonpath::evaluate(&doc, "$..").is_empty());
    }

    #[test]
    fn test_invalid_stays_distinguishable_from_no_matches() {
        let doc = sample();

        let invalid = jsonpath::query(&doc, "$[");
        assert!(invalid.is_invalid());
        assert!(invalid.values().is_empty());
        assert!(invalid.error().is_some());

        let no_matches = jsonpath::query(&doc, "$.raw.nonexistent");
        assert!(!no_matches.is_invalid());
        assert!(no_matches.values().is_empty());
        assert!(no_matches.error().is_none());
    }

    #[test]
    fn test_error_message_carries_position() {
        let doc = sample();
        let outcome = jsonpath::query(&doc, "$.a;b");
        let error = outcome.error().expect("expression must be rejected");
        assert!(error.message().contains("offset"));
        assert!(error.position().is_some());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let doc = sample();
        for path in ["$..*", "$.raw.*", "$.raw.tags[?(@.value)].key", ""] {
            let first = jsonpath::query(&doc, path);
            let second = jsonpath::query(&doc, path);
            assert_eq!(first, second, "query `{path}` must be repeatable");
        }
    }

    #[test]
    fn test_outcome_into_values() {
        let doc = sample();
        assert_eq!(
            jsonpath::query(&doc, "$.name").into_values(),
            vec![json!("web-1")]
        );
        assert!(jsonpath::query(&doc, "$[").into_values().is_empty());
    }
}
