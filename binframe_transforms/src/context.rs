// Copyright 2026 the Binframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation context passed explicitly to expressions.

/// How rows are grouped while an expression is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Plain row-wise evaluation.
    #[default]
    None,
    /// Evaluation inside a grouped projection.
    By {
        /// Number of grouping key columns.
        keys: usize,
    },
}

/// Context that the caller hands to every expression it evaluates.
///
/// Transforms that cannot run per group query this instead of inspecting data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalContext {
    grouping: Grouping,
}

impl EvalContext {
    /// Context for plain row-wise evaluation.
    pub fn ungrouped() -> Self {
        Self::default()
    }

    /// Context for evaluation inside a projection grouped by `keys` columns.
    pub fn grouped(keys: usize) -> Self {
        Self {
            grouping: Grouping::By { keys },
        }
    }

    /// Returns the active grouping.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn grouped_context_records_key_count() {
        assert_eq!(EvalContext::ungrouped().grouping(), Grouping::None);
        assert_eq!(EvalContext::default(), EvalContext::ungrouped());
        assert_eq!(
            EvalContext::grouped(2).grouping(),
            Grouping::By { keys: 2 }
        );
    }
}
