//! Property-based tests for link extraction and report stability
//!
//! These tests use `proptest` to check extraction invariants over generated
//! link text and targets, and that checking an unchanged tree twice yields the
//! same report.

use doclinks::checker::{CheckOptions, LinkChecker};
use doclinks::document::{extract_links, LinkResolver, EXCLUDED_PREFIXES};
use doclinks::DocFormat;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

// Generator for display text without brackets
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,16}".prop_map(|s| s.to_string())
}

// Generator for internal targets: path-like, never starting with an excluded prefix
fn internal_target_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_][a-z0-9_./-]{0,20}".prop_map(|s| s.to_string())
}

// Generator for excluded targets
fn excluded_target_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(EXCLUDED_PREFIXES.to_vec()), "[a-z0-9./]{0,12}")
        .prop_map(|(prefix, rest)| format!("{}{}", prefix, rest))
}

proptest! {
    #[test]
    fn prop_markdown_internal_link_is_extracted(
        text in text_strategy(),
        target in internal_target_strategy(),
    ) {
        let content = format!("Intro [{}]({}) outro", text, target);
        let links = extract_links(&content, DocFormat::Markdown);

        prop_assert_eq!(links.len(), 1);
        prop_assert_eq!(&links[0].target, &target);
        prop_assert_eq!(&links[0].text, &text);
    }

    #[test]
    fn prop_markdown_excluded_link_is_dropped(
        text in text_strategy(),
        target in excluded_target_strategy(),
    ) {
        let content = format!("Intro [{}]({}) outro", text, target);
        prop_assert!(extract_links(&content, DocFormat::Markdown).is_empty());
    }

    #[test]
    fn prop_asciidoc_internal_link_is_extracted(
        text in text_strategy(),
        target in internal_target_strategy(),
    ) {
        let content = format!("See link:{}[{}] here", target, text);
        let links = extract_links(&content, DocFormat::AsciiDoc);

        prop_assert_eq!(links.len(), 1);
        prop_assert_eq!(&links[0].target, &target);
        prop_assert_eq!(&links[0].text, &text);
    }

    #[test]
    fn prop_extracted_targets_never_excluded(content in "[\\[\\]()a-z:/#. ]{0,60}") {
        for format in [DocFormat::Markdown, DocFormat::AsciiDoc] {
            for link in extract_links(&content, format) {
                prop_assert!(
                    !EXCLUDED_PREFIXES.iter().any(|p| link.target.starts_with(p)),
                    "excluded target extracted: {}",
                    link.target
                );
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // Checking the same tree twice gives the same report
    #[test]
    fn prop_report_is_idempotent(
        targets in prop::collection::vec(internal_target_strategy(), 1..8),
        existing in prop::collection::vec(any::<bool>(), 8),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let docs = temp_dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();

        let content: String = targets
            .iter()
            .enumerate()
            .map(|(i, target)| format!("[link {}]({})\n", i, target))
            .collect();
        fs::write(docs.join("index.md"), content).unwrap();

        for (i, exists) in existing.iter().enumerate() {
            if *exists {
                fs::write(docs.join(format!("page{}.md", i)), "").unwrap();
            }
        }

        let checker = LinkChecker::with_resolver(
            CheckOptions::default(),
            LinkResolver::new(temp_dir.path()),
        );
        let first = checker.run().unwrap();
        let second = checker.run().unwrap();

        prop_assert_eq!(first.links_checked, targets.len());
        prop_assert_eq!(first, second);
    }
}
