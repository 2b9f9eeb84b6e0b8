//! Property-based tests for discovery, line layout and verdict aggregation.
//!
//! # Key invariants
//! - `variant_name` returns exactly the name with the prefix removed, and
//!   nothing for names lacking the prefix
//! - Rendered lines never truncate the variant and pad it to the width
//! - A variant passes iff every pair check is `DiffStatus::Empty`

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::PathBuf;

use accel_report::{
    DiffStatus, PairCheck, VariantReport, Verdict, format_line, variant_name,
    variant_os_name,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{0,24}"
}

fn status_strategy() -> impl Strategy<Value = DiffStatus> {
    prop_oneof![
        3 => Just(DiffStatus::Empty),
        1 => (1u64..4096).prop_map(DiffStatus::NonEmpty),
        1 => Just(DiffStatus::NotRegular),
        1 => prop_oneof![
            Just(ErrorKind::NotFound),
            Just(ErrorKind::PermissionDenied),
        ]
        .prop_map(DiffStatus::Missing),
    ]
}

fn report_from(statuses: Vec<DiffStatus>) -> VariantReport {
    let checks = statuses
        .into_iter()
        .enumerate()
        .map(|(i, status)| PairCheck {
            model: "teapot".to_string(),
            thread: i as u32 + 1,
            path: PathBuf::from(format!("teapot.n{}.diff", i + 1)),
            status,
        })
        .collect();
    VariantReport { variant: "kdtree".into(), checks }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prefixed_names_round_trip(rest in ident_strategy()) {
        let name = format!("Accel-{rest}");
        prop_assert_eq!(variant_name(&name, "Accel-"), Some(rest.as_str()));
        prop_assert_eq!(
            variant_os_name(OsStr::new(&name), "Accel-"),
            Some(OsStr::new(rest.as_str()))
        );
    }

    #[test]
    fn unprefixed_names_rejected(name in "[a-z][A-Za-z0-9_]{0,20}") {
        prop_assert_eq!(variant_name(&name, "Accel-"), None);
        prop_assert_eq!(variant_os_name(OsStr::new(&name), "Accel-"), None);
    }

    #[test]
    fn line_is_padded_never_truncated(variant in ident_strategy(), width in 0usize..32) {
        let line = format_line(&variant, Verdict::Failed, width);
        let label = line
            .strip_prefix("# ")
            .and_then(|l| l.strip_suffix(" : Failed"))
            .expect("line layout");
        prop_assert_eq!(label.len(), variant.len().max(width));
        prop_assert!(label.ends_with(variant.as_str()));
        prop_assert!(label[..label.len() - variant.len()].chars().all(|c| c == ' '));
    }

    #[test]
    fn passes_iff_every_diff_empty(statuses in prop::collection::vec(status_strategy(), 1..8)) {
        let expected = statuses.iter().all(|s| *s == DiffStatus::Empty);
        let report = report_from(statuses);
        prop_assert_eq!(report.passed(), expected);
        prop_assert_eq!(
            Verdict::from(&report),
            if expected { Verdict::Success } else { Verdict::Failed }
        );
        prop_assert_eq!(report.failures().count() == 0, expected);
    }
}
