//! Integration tests for tabular to xlsx conversion

use pretty_assertions::assert_eq;
use tabular2xlsx::{
    convert_to_xlsx, parse_tabular_str, ParseOptions, TableIndex,
};

// ============================================================================
// Single-index tables
// ============================================================================

mod single_index {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATEGORIES_TABULAR: &str = r"\begin{tabular}{lll}
\caption{Testresultaten per categorie}
\newcommand{\good}{goed}
\rowcolor{white} Categorie & Testomschrijving & Variabelenaam \\
IPv6 & IPv6-adressen voor nameservers & tests_web_ipv6_ns_address_verdict \\
 & IPv6-bereikbaarheid van nameservers & tests_web_ipv6_ns_reach_verdict \\
DNSSEC & DNSSEC aanwezig & \good \\
\end{tabular}
";

    #[test]
    fn test_index_and_columns() {
        let table = parse_tabular_str(CATEGORIES_TABULAR, &ParseOptions::default()).unwrap();

        assert_eq!(
            table.index,
            TableIndex::Single {
                name: "Categorie".to_string()
            }
        );
        assert_eq!(
            table.columns,
            vec!["Testomschrijving", "Variabelenaam"]
        );
    }

    #[test]
    fn test_rows_in_file_order() {
        let table = parse_tabular_str(CATEGORIES_TABULAR, &ParseOptions::default()).unwrap();

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].labels, vec!["IPv6"]);
        assert_eq!(
            table.rows[0].values,
            vec![
                "IPv6-adressen voor nameservers",
                "tests_web_ipv6_ns_address_verdict"
            ]
        );
        // Continuation row has an empty index label
        assert_eq!(table.rows[1].labels, vec![""]);
    }

    #[test]
    fn test_alias_applied_to_cells() {
        let table = parse_tabular_str(CATEGORIES_TABULAR, &ParseOptions::default()).unwrap();

        assert_eq!(table.rows[2].labels, vec!["DNSSEC"]);
        assert_eq!(table.rows[2].values[1], "goed");
    }

    #[test]
    fn test_spec_scenario() {
        let table = parse_tabular_str("A & B & C\n1 & 2 & 3\n", &ParseOptions::default()).unwrap();

        assert_eq!(table.index, TableIndex::Single { name: "A".into() });
        assert_eq!(table.columns, vec!["B", "C"]);
        assert_eq!(table.rows[0].labels, vec!["1"]);
        assert_eq!(table.rows[0].values, vec!["2", "3"]);
    }
}

// ============================================================================
// Multi-index tables
// ============================================================================

mod multi_index {
    use super::*;
    use pretty_assertions::assert_eq;

    const DECISIONS_TABULAR: &str = r"\begin{tabular}{llrr}
\caption{Door het OM genomen beslissingen}
 &  & 2008--2013 & 2014--2019 \textsuperscript{1)} \\
Totaal door OM genomen beslissingen &  & 512 & 551 \\
 & - waaronder strafoplegging OM\textsuperscript{2)} & 93 & 88 \\
Schuldig verklaard door rechter &  & 124 & 82 \\
\end{tabular}
";

    fn options() -> ParseOptions {
        ParseOptions {
            multi_index: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_level_names_and_columns() {
        let table = parse_tabular_str(DECISIONS_TABULAR, &options()).unwrap();

        // Empty header cells get synthetic internal level names; the
        // displayed labels are blank
        assert_eq!(
            table.index,
            TableIndex::Multi {
                names: ["l1".to_string(), "l2".to_string()]
            }
        );
        assert_eq!(table.index.display_names(), vec!["", ""]);
        assert_eq!(table.columns, vec!["2008-2013", "2014-2019 ¹⁾"]);
    }

    #[test]
    fn test_two_level_labels() {
        let table = parse_tabular_str(DECISIONS_TABULAR, &options()).unwrap();

        assert_eq!(
            table.rows[0].labels,
            vec!["Totaal door OM genomen beslissingen", ""]
        );
        assert_eq!(
            table.rows[1].labels,
            vec!["", "- waaronder strafoplegging OM²⁾"]
        );
        assert_eq!(table.rows[2].labels, vec!["Schuldig verklaard door rechter", ""]);
    }

    #[test]
    fn test_values() {
        let table = parse_tabular_str(DECISIONS_TABULAR, &options()).unwrap();

        assert_eq!(table.rows[0].values, vec!["512", "551"]);
        assert_eq!(table.rows[1].values, vec!["93", "88"]);
        assert_eq!(table.rows[2].values, vec!["124", "82"]);
    }

    #[test]
    fn test_spec_scenario() {
        let table = parse_tabular_str(" & L2 & X\na & b & 1\n", &options()).unwrap();

        assert_eq!(
            table.index,
            TableIndex::Multi {
                names: ["l1".to_string(), "L2".to_string()]
            }
        );
        assert_eq!(table.columns, vec!["X"]);
    }
}

// ============================================================================
// Search-and-replace rules
// ============================================================================

mod search_replace {
    use super::*;
    use pretty_assertions::assert_eq;
    use indexmap::IndexMap;

    #[test]
    fn test_default_rules() {
        let input = "A & B & C\nr & Value $\\cdot$ unit & $\\ast$ note\n";
        let table = parse_tabular_str(input, &ParseOptions::default()).unwrap();

        assert_eq!(table.rows[0].values, vec!["Value . unit", "* note"]);
    }

    #[test]
    fn test_rules_apply_to_index_labels() {
        let input = "A & B\n$\\ast$ total & 1\n";
        let table = parse_tabular_str(input, &ParseOptions::default()).unwrap();

        assert_eq!(table.rows[0].labels, vec!["* total"]);
    }

    #[test]
    fn test_rule_order_is_insertion_order() {
        // The second rule sees the output of the first
        let mut rules = IndexMap::new();
        rules.insert("raw".to_string(), "cooked".to_string());
        rules.insert("cooked".to_string(), "served".to_string());
        let options = ParseOptions::with_rules(rules);

        let table = parse_tabular_str("A & B\n1 & raw\n", &options).unwrap();
        assert_eq!(table.rows[0].values, vec!["served"]);
    }

    #[test]
    fn test_invalid_rule_is_configuration_error() {
        let mut rules = IndexMap::new();
        rules.insert("(unclosed".to_string(), "x".to_string());
        let options = ParseOptions::with_rules(rules);

        let err = parse_tabular_str("A & B\n1 & 2\n", &options).unwrap_err();
        assert!(err.to_string().contains("invalid search pattern"));
    }
}

// ============================================================================
// Determinism and end-to-end conversion
// ============================================================================

mod end_to_end {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_is_deterministic() {
        let input = "\\newcommand{\\g}{goed}\nA & B & C\n1 & \\g & x\\textsuperscript{2}\n";
        let first = parse_tabular_str(input, &ParseOptions::default()).unwrap();
        let second = parse_tabular_str(input, &ParseOptions::default()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_file_to_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tabular.tex");
        let output = dir.path().join("tabular.xlsx");
        std::fs::write(
            &input,
            "Categorie & Test \\\\\nIPv6 & \\textbf{goed} \\\\\n",
        )
        .unwrap();

        convert_to_xlsx(&input, &output, &ParseOptions::default()).unwrap();

        let metadata = std::fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_missing_input_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.xlsx");

        let err = convert_to_xlsx(
            dir.path().join("missing.tex"),
            &output,
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
