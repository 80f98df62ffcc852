use pretty_assertions::assert_eq;
use sqlpretty_lib::{FormatConfig, FormatError, format};

fn format_default(query: &str) -> String {
    format(query, &FormatConfig::default()).unwrap()
}

fn config_from(json: &str) -> FormatConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn scenario_select_from() {
    assert_eq!(format_default("SELECT a FROM b"), "SELECT\n  a\nFROM\n  b");
}

#[test]
fn scenario_where_with_boolean_operator() {
    assert_eq!(
        format_default("SELECT a,b FROM t WHERE x=1 AND y=2"),
        "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x = 1\n  AND y = 2"
    );
}

#[test]
fn scenario_inline_function_call() {
    assert_eq!(
        format_default("SELECT count(*) FROM t"),
        "SELECT\n  count(*)\nFROM\n  t"
    );
}

#[test]
fn scenario_between_stays_inline() {
    assert_eq!(
        format_default("SELECT a FROM t WHERE x BETWEEN 1 AND 2"),
        "SELECT\n  a\nFROM\n  t\nWHERE\n  x BETWEEN 1 AND 2"
    );
}

#[test]
fn scenario_lines_between_queries() {
    let config = config_from(r#"{"linesBetweenQueries": 2}"#);
    assert_eq!(
        format("SELECT * FROM a; SELECT * FROM b", &config).unwrap(),
        "SELECT\n  *\nFROM\n  a;\n\nSELECT\n  *\nFROM\n  b"
    );
}

#[test]
fn scenario_named_parameter_substitution() {
    let config = config_from(r#"{"params": {"name": "'alice'"}}"#);
    assert_eq!(format("SELECT :name", &config).unwrap(), "SELECT\n  'alice'");
}

#[test]
fn limit_comma_stays_inline() {
    assert_eq!(
        format_default("SELECT a FROM t LIMIT 10, 20"),
        "SELECT\n  a\nFROM\n  t\nLIMIT\n  10, 20"
    );
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(format_default(""), "");
}

#[test]
fn comment_only_input_is_preserved() {
    assert_eq!(format_default("-- note\n"), "-- note");
    assert_eq!(format_default("/* note */"), "/* note */");
}

#[test]
fn unsupported_dialect_fails() {
    let config = config_from(r#"{"language": "sqlite"}"#);
    assert_eq!(
        format("SELECT 1", &config),
        Err(FormatError::UnsupportedDialect("sqlite".to_string()))
    );
}

#[test]
fn negative_newline_fails() {
    let config = config_from(r#"{"newline": -2}"#);
    assert_eq!(
        format("SELECT 1", &config),
        Err(FormatError::InvalidNewline(-2))
    );
}

#[test]
fn missing_parameter_fails() {
    let config = config_from(r#"{"params": ["'a'"]}"#);
    let err = format("SELECT ?, ?", &config).unwrap_err();
    assert!(matches!(err, FormatError::Param(_)), "{err:?}");
}

#[test]
fn every_dialect_formats_the_cross_dialect_query() {
    for language in [
        "bigquery",
        "db2",
        "hive",
        "mariadb",
        "mysql",
        "n1ql",
        "plsql",
        "postgresql",
        "redshift",
        "spark",
        "sql",
        "tsql",
    ] {
        let config = config_from(&format!(r#"{{"language": "{language}"}}"#));
        let result = format("SELECT a, b FROM t WHERE x = 1", &config)
            .unwrap_or_else(|err| panic!("{language}: {err}"));
        assert_eq!(
            result, "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x = 1",
            "{language}"
        );
    }
}

#[test]
fn newline_item_count_sees_past_parenthesized_items() {
    let config = config_from(r#"{"newline": 2}"#);
    assert_eq!(
        format("SELECT a, count(b), c FROM t", &config).unwrap(),
        "SELECT\n  a,\n  count(b),\n  c\nFROM t"
    );
    assert_eq!(
        format("SELECT a, count(b) FROM t", &config).unwrap(),
        "SELECT a, count(b)\nFROM t"
    );
}

#[test]
fn outer_clause_keeps_its_newline_decision_around_a_subquery() {
    let config = config_from(r#"{"newline": 2}"#);
    assert_eq!(
        format("SELECT a, (SELECT x FROM t2), b FROM t1", &config).unwrap(),
        "SELECT\n  a,\n  (\n    SELECT x\n    FROM t2\n  ),\n  b\nFROM t1"
    );
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn content_is_preserved_modulo_whitespace() {
    // uppercase off, so emission is verbatim and only whitespace may move
    let config = config_from(r#"{"uppercase": false}"#);
    let queries = [
        "SELECT a, b AS c FROM t WHERE x = 1 AND y BETWEEN 2 AND 3",
        "select count(*), 'it''s' from \"quoted table\" group by a having b > 1",
        "INSERT INTO t (a, b) VALUES (1, 'two'); UPDATE t SET a = 2 WHERE b = 'two'",
        "SELECT * FROM (SELECT a FROM t UNION ALL SELECT b FROM u) x ORDER BY 1",
        "SELECT CASE WHEN a THEN 1 ELSE 2 END, t.b /* note */ FROM t -- done",
    ];

    for query in queries {
        let formatted = format(query, &config).unwrap();
        assert_eq!(
            strip_whitespace(&formatted),
            strip_whitespace(query),
            "content changed for {query:?}"
        );
    }
}

#[test]
fn formatting_is_idempotent_across_configs() {
    let query = "SELECT a, b FROM t WHERE x = 1 AND y = 2 LIMIT 10; SELECT count(*) FROM u";
    let configs = [
        r#"{}"#,
        r#"{"uppercase": false}"#,
        r#"{"newline": "never"}"#,
        r#"{"newline": 3}"#,
        r#"{"denseOperators": true}"#,
        r#"{"semicolonNewline": true}"#,
        r#"{"breakBeforeBooleanOperator": false}"#,
        r#"{"indent": "    "}"#,
        r#"{"linesBetweenQueries": 3}"#,
    ];

    for json in configs {
        let config = config_from(json);
        let once = format(query, &config).unwrap();
        let twice = format(&once, &config).unwrap();
        assert_eq!(once, twice, "not idempotent under {json}");
    }
}

#[test]
fn output_is_trimmed() {
    let formatted = format_default("  SELECT a FROM t  \n\n");
    assert!(!formatted.starts_with(char::is_whitespace));
    assert!(!formatted.ends_with(char::is_whitespace));
}

#[test]
fn leading_whitespace_is_a_multiple_of_the_indent() {
    let formatted = format_default(
        "SELECT a, CASE WHEN b THEN 1 END FROM (SELECT a, b FROM u WHERE c = 1) t WHERE x = 1",
    );

    for line in formatted.lines() {
        let leading = line.len() - line.trim_start().len();
        assert_eq!(leading % 2, 0, "line {line:?} has odd indent");
    }
}

#[test]
fn inline_groups_respect_the_line_width() {
    let config = config_from(r#"{"lineWidth": 30}"#);
    let formatted = format(
        "SELECT short(a), a_function_with_a_really_long_call(a, b, c, d) FROM t",
        &config,
    )
    .unwrap();

    for line in formatted.lines() {
        if let Some(open) = line.find('(') {
            if line[open..].contains(')') {
                let group = &line[open..=line[open..].rfind(')').unwrap() + open];
                assert!(group.len() <= 30, "inline group too wide: {line:?}");
            }
        }
    }
}

#[test]
fn ten_space_keyword_position_indents_by_ten() {
    let config = config_from(r#"{"keywordPosition": "tenSpaceLeft"}"#);
    assert_eq!(
        format("SELECT a FROM t", &config).unwrap(),
        "SELECT\n          a\nFROM\n          t"
    );
}
