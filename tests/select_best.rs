use commit_layout::{
    evaluate, select_best, CommitmentStyle, Evaluator, LayoutError, LayoutReport, LayoutSource,
    Metric, MetricValue,
};

#[test]
fn octal_minimises_commitment_bytes_for_a_million_leaves() {
    let selection = select_best(
        &Evaluator,
        1_000_000,
        CommitmentStyle::Aztec,
        &[2, 4, 8],
        Metric::TotalCommitmentBytes,
    )
    .expect("selection");
    assert_eq!(selection.chosen_fanout(), 8);
    assert_eq!(selection.metric_value(), MetricValue::Finite(36_571_520));
    let values: Vec<(u64, MetricValue)> = selection
        .candidates
        .iter()
        .map(|candidate| (candidate.fanout, candidate.metric_value))
        .collect();
    assert_eq!(
        values,
        vec![
            (2, MetricValue::Finite(64_000_224)),
            (4, MetricValue::Finite(42_666_784)),
            (8, MetricValue::Finite(36_571_520)),
        ]
    );
    assert!(selection.skipped.is_empty());
}

#[test]
fn ties_go_to_the_first_fanout() {
    // A single leaf is its own root for every fanout.
    for metric in Metric::ALL {
        let selection = select_best(&Evaluator, 1, CommitmentStyle::Zama, &[2, 4], metric)
            .expect("selection");
        assert_eq!(selection.chosen_fanout(), 2, "metric {metric}");

        let reversed = select_best(&Evaluator, 1, CommitmentStyle::Zama, &[4, 2], metric)
            .expect("selection");
        assert_eq!(reversed.chosen_fanout(), 4, "metric {metric}");
    }
}

#[test]
fn tie_after_a_worse_candidate() {
    // 8 leaves: heights are 3, 1, 2, 1; the repeated fanout 8 ties with the first.
    let selection = select_best(
        &Evaluator,
        8,
        CommitmentStyle::Aztec,
        &[2, 8, 4, 8],
        Metric::TreeHeight,
    )
    .expect("selection");
    assert_eq!(selection.chosen_fanout(), 8);
    assert!(std::ptr::eq(selection.best(), &selection.candidates[1]));
    let marked: Vec<bool> = selection
        .candidates
        .iter()
        .map(|candidate| selection.is_best(candidate))
        .collect();
    assert_eq!(marked, vec![false, true, false, true]);
}

#[test]
fn disallowed_fanouts_are_skipped() {
    let selection = select_best(
        &Evaluator,
        4096,
        CommitmentStyle::Soundness,
        &[2, 16, 4, 3],
        Metric::PerProofBytes,
    )
    .expect("selection");
    assert_eq!(selection.candidates.len(), 2);
    assert_eq!(selection.chosen_fanout(), 4);
    let skipped: Vec<u64> = selection.skipped.iter().map(|skip| skip.fanout).collect();
    assert_eq!(skipped, vec![16, 3]);
    assert!(selection
        .skipped
        .iter()
        .all(|skip| matches!(skip.error, LayoutError::InvalidInput(_))));
}

#[test]
fn all_failures_is_no_viable_candidate() {
    let err = select_best(
        &Evaluator,
        4096,
        CommitmentStyle::Aztec,
        &[3, 16, 32],
        Metric::TotalNodes,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::NoViableCandidate);
}

#[test]
fn empty_fanout_list_is_invalid() {
    let err = select_best(&Evaluator, 16, CommitmentStyle::Aztec, &[], Metric::TotalNodes)
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidInput(_)));
}

#[test]
fn zero_leaves_fail_every_candidate() {
    let err = select_best(
        &Evaluator,
        0,
        CommitmentStyle::Aztec,
        &[2, 4, 8],
        Metric::TotalNodes,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::NoViableCandidate);
}

#[test]
fn boundary_failures_are_recovered() {
    let flaky = |style: CommitmentStyle, leaves: u64, fanout: u64| {
        if fanout == 8 {
            return Err(LayoutError::EvaluationFailure {
                leaves,
                fanout,
                reason: "backend exited with 2".into(),
            });
        }
        evaluate(style, leaves, fanout)
    };
    let selection = select_best(
        &flaky,
        1 << 20,
        CommitmentStyle::Aztec,
        &[2, 4, 8],
        Metric::TotalCommitmentBytes,
    )
    .expect("selection");
    assert_eq!(selection.chosen_fanout(), 4);
    assert_eq!(selection.skipped.len(), 1);
    assert!(matches!(
        selection.skipped[0].error,
        LayoutError::EvaluationFailure { fanout: 8, .. }
    ));
}

/// Source whose records lack the proof size for binary trees.
struct PartialRecords;

impl LayoutSource for PartialRecords {
    fn evaluate(
        &self,
        style: CommitmentStyle,
        leaves: u64,
        fanout: u64,
    ) -> Result<LayoutReport, LayoutError> {
        evaluate(style, leaves, fanout)
    }

    fn metric(&self, report: &LayoutReport, metric: Metric) -> MetricValue {
        if report.fanout == 2 && metric == Metric::PerProofBytes {
            MetricValue::Unavailable
        } else {
            metric.value_of(report)
        }
    }
}

#[test]
fn unavailable_metric_is_never_chosen() {
    let selection = select_best(
        &PartialRecords,
        1 << 12,
        CommitmentStyle::Aztec,
        &[2, 4],
        Metric::PerProofBytes,
    )
    .expect("selection");
    assert_eq!(selection.chosen_fanout(), 4);
    assert_eq!(selection.candidates[0].metric_value, MetricValue::Unavailable);

    let only_unavailable = select_best(
        &PartialRecords,
        1 << 12,
        CommitmentStyle::Aztec,
        &[2],
        Metric::PerProofBytes,
    )
    .expect("selection");
    assert_eq!(only_unavailable.chosen_fanout(), 2);
    assert_eq!(only_unavailable.metric_value(), MetricValue::Unavailable);
}

#[test]
fn trait_objects_are_accepted() {
    let source: &dyn LayoutSource = &Evaluator;
    let selection = select_best(
        source,
        100,
        CommitmentStyle::Zama,
        &[4, 2],
        Metric::ProofBranchLength,
    )
    .expect("selection");
    assert_eq!(selection.chosen_fanout(), 4);
}
