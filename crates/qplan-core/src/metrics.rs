use crate::error::{Error, Result};

/// Typed statistics over one `RelOp` element of the plan document.
///
/// All getters are pure functions of the element's attributes. Required
/// attributes that are missing or unparsable degrade to zero instead of
/// panicking; absent runtime counters are reported as `None`, never as an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct OperatorMetrics<'a, 'input> {
    element: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> OperatorMetrics<'a, 'input> {
    pub fn from_node(element: roxmltree::Node<'a, 'input>) -> Result<Self> {
        if !element.is_element() || element.tag_name().name() != "RelOp" {
            return Err(Error::WrongElementKind {
                expected: "RelOp",
                found: element.tag_name().name().to_string(),
            });
        }
        Ok(Self { element })
    }

    /// Estimated number of rows returned by the operator.
    pub fn estimated_rows(&self) -> f64 {
        attr_f64(self.element, "EstimateRows").unwrap_or(0.0)
    }

    /// Estimated row size, in bytes.
    pub fn estimated_row_size(&self) -> u64 {
        self.element
            .attribute("AvgRowSize")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Estimated total size of the data.
    pub fn estimated_data_size(&self) -> u64 {
        (self.estimated_row_size() as f64 * self.estimated_rows()).round() as u64
    }

    /// Actual number of rows, summed across all per-thread counter entries.
    /// `None` when the operator carries no runtime information.
    pub fn actual_rows(&self) -> Option<f64> {
        let counters = self.thread_counters();
        if counters.is_empty() {
            return None;
        }
        Some(sum_attr(&counters, "ActualRows"))
    }

    /// Actual number of rows read, summed across all per-thread counter
    /// entries.
    ///
    /// Presence is decided by the first entry alone: when that entry lacks
    /// the counter the metric is `None` even if later entries carry it.
    pub fn actual_rows_read(&self) -> Option<f64> {
        let counters = self.thread_counters();
        match counters.first() {
            Some(first) if first.has_attribute("ActualRowsRead") => {
                Some(sum_attr(&counters, "ActualRowsRead"))
            }
            _ => None,
        }
    }

    /// `RunTimeCountersPerThread` entries, or an empty vec when the operator
    /// has no `RunTimeInformation` child.
    fn thread_counters(&self) -> Vec<roxmltree::Node<'a, 'input>> {
        self.element
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == "RunTimeInformation")
            .map(|info| {
                info.children()
                    .filter(|n| {
                        n.is_element() && n.tag_name().name() == "RunTimeCountersPerThread"
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn attr_f64(node: roxmltree::Node<'_, '_>, name: &str) -> Option<f64> {
    node.attribute(name).and_then(|v| v.parse().ok())
}

fn sum_attr(counters: &[roxmltree::Node<'_, '_>], name: &str) -> f64 {
    counters
        .iter()
        .map(|c| attr_f64(*c, name).unwrap_or(0.0))
        .sum()
}
