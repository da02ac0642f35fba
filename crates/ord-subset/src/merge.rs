use std::fmt;

use ord_dataset::Dataset;

/// Why one source contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub source_name: String,
    pub message: String,
}

impl SourceFailure {
    pub fn new(source_name: impl Into<String>, error: &dyn fmt::Display) -> Self {
        Self {
            source_name: source_name.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error processing {}: {}", self.source_name, self.message)
    }
}

/// Result of fetching and decoding one source.
#[derive(Debug)]
pub enum SourceOutcome {
    Loaded { source_name: String, dataset: Dataset },
    Failed(SourceFailure),
}

/// Per-source line of a merge report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Number of reactions appended to the combined dataset.
    Added(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source_name: String,
    pub status: SourceStatus,
}

/// The combined dataset and what each source contributed, in source order.
#[derive(Debug, Clone)]
pub struct MergeReport {
    pub dataset: Dataset,
    pub sources: Vec<SourceReport>,
}

impl MergeReport {
    pub fn succeeded(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Added(_)))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SourceReport> {
        self.sources
            .iter()
            .filter(|s| matches!(s.status, SourceStatus::Failed(_)))
    }
}

/// Build the combined dataset from per-source outcomes.
///
/// Loaded sources contribute the first `limit` reactions each, appended in
/// outcome order. Failed sources contribute nothing.
pub fn merge(combined_name: &str, outcomes: Vec<SourceOutcome>, limit: usize) -> MergeReport {
    let mut dataset = Dataset::named(combined_name);
    let mut sources = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome {
            SourceOutcome::Loaded {
                source_name,
                dataset: source,
            } => {
                let added = dataset.extend_from_prefix(&source, limit);
                tracing::info!(
                    source = %source_name,
                    reactions = added,
                    available = source.reactions.len(),
                    "added {added} reactions from {source_name}"
                );
                sources.push(SourceReport {
                    source_name,
                    status: SourceStatus::Added(added),
                });
            }
            SourceOutcome::Failed(failure) => sources.push(SourceReport {
                source_name: failure.source_name,
                status: SourceStatus::Failed(failure.message),
            }),
        }
    }

    MergeReport { dataset, sources }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ord_dataset::ReactionRecord;

    fn loaded(name: &str, reactions: usize) -> SourceOutcome {
        SourceOutcome::Loaded {
            source_name: name.to_string(),
            dataset: Dataset {
                reactions: (0..reactions)
                    .map(|i| ReactionRecord::new(format!("{name}-{i}").into_bytes()))
                    .collect(),
                ..Dataset::named(name)
            },
        }
    }

    fn failed(name: &str) -> SourceOutcome {
        SourceOutcome::Failed(SourceFailure::new(name, &"connection reset"))
    }

    #[test]
    fn concatenates_prefixes_in_order() {
        let report = merge("combined", vec![loaded("a", 12), loaded("b", 3)], 10);

        assert_eq!(report.dataset.name, "combined");
        assert_eq!(report.dataset.reactions.len(), 13);
        assert_eq!(report.dataset.reactions[0].as_bytes().as_ref(), b"a-0");
        assert_eq!(report.dataset.reactions[9].as_bytes().as_ref(), b"a-9");
        assert_eq!(report.dataset.reactions[10].as_bytes().as_ref(), b"b-0");
        assert_eq!(report.sources[0].status, SourceStatus::Added(10));
        assert_eq!(report.sources[1].status, SourceStatus::Added(3));
    }

    #[test]
    fn failures_contribute_nothing() {
        let report = merge("combined", vec![failed("a"), loaded("b", 15)], 10);

        assert_eq!(report.dataset.reactions.len(), 10);
        assert_eq!(report.succeeded(), 1);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].source_name, "a");
    }

    #[test]
    fn all_failed_yields_named_empty_dataset() {
        let report = merge("combined", vec![failed("a"), failed("b")], 10);

        assert_eq!(report.dataset, Dataset::named("combined"));
        assert_eq!(report.succeeded(), 0);
    }

    #[test]
    fn no_dedup_across_sources() {
        let report = merge("combined", vec![loaded("x", 2), loaded("x", 2)], 10);
        assert_eq!(report.dataset.reactions.len(), 4);
        assert_eq!(report.dataset.reactions[0], report.dataset.reactions[2]);
    }

    #[test]
    fn failure_display_names_source() {
        let failure = SourceFailure::new("AstraZeneca_ELN", &"HTTP 404");
        assert_eq!(failure.to_string(), "error processing AstraZeneca_ELN: HTTP 404");
    }
}
