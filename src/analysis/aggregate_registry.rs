use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::analysis::{AggregateOp, AnalysisError};

// Names accepted besides the display names.
const ALIASES: &[(&str, AggregateOp)] = &[("count_distinct", AggregateOp::CountDistinct)];

static GLOBAL: Lazy<AggregateRegistry> = Lazy::new(AggregateRegistry::builtin);

/// Case-insensitive index from function name to builtin operator.
///
/// Built once per process and only read afterwards, so it can be shared by
/// any number of concurrent analyses.
#[derive(Debug)]
pub struct AggregateRegistry {
    by_name: IndexMap<String, AggregateOp>,
}

impl AggregateRegistry {
    fn builtin() -> Self {
        let mut by_name = IndexMap::with_capacity(AggregateOp::ALL.len() + ALIASES.len());
        for op in AggregateOp::ALL {
            by_name.insert(op.name().to_ascii_lowercase(), op);
        }
        for (alias, op) in ALIASES {
            by_name.insert((*alias).to_string(), *op);
        }
        trace!(operators = AggregateOp::ALL.len(), aliases = ALIASES.len(), "builtin aggregate registry initialized");
        Self { by_name }
    }

    pub fn global() -> &'static AggregateRegistry {
        &GLOBAL
    }

    pub fn get(&self, name: &str) -> Option<AggregateOp> {
        self.by_name.get(&name.to_ascii_lowercase()).copied()
    }

    /// Like [`get`](Self::get), reporting an unknown name as an analysis error.
    pub fn resolve(&self, name: &str) -> Result<AggregateOp, AnalysisError> {
        self.get(name).ok_or_else(|| AnalysisError::FunctionNotFound(name.to_string()))
    }

    /// Display names of every operator, in registration order. Aliases are skipped.
    pub fn list(&self) -> Vec<&'static str> {
        self.canonical().map(AggregateOp::name).collect()
    }

    pub fn len(&self) -> usize {
        self.canonical().count()
    }

    fn canonical(&self) -> impl Iterator<Item = AggregateOp> + '_ {
        self.by_name
            .iter()
            .filter(|(key, op)| key.eq_ignore_ascii_case(op.name()))
            .map(|(_, op)| *op)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_resolves_by_its_display_name() {
        let r = AggregateRegistry::global();
        for op in AggregateOp::ALL {
            assert_eq!(r.get(op.name()), Some(op), "{op}");
        }
        assert_eq!(r.len(), 20);
        assert!(!r.is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let r = AggregateRegistry::global();
        assert_eq!(r.get("ndv"), Some(AggregateOp::Ndv));
        assert_eq!(r.get("Row_Number"), Some(AggregateOp::RowNumber));
        assert_eq!(r.get("hll_union_AGG"), Some(AggregateOp::HllUnionAgg));
    }

    #[test]
    fn count_distinct_resolves_under_both_spellings() {
        let r = AggregateRegistry::global();
        assert_eq!(r.get("COUNT_DISTINCT"), Some(AggregateOp::CountDistinct));
        assert_eq!(r.get("count_disitnct"), Some(AggregateOp::CountDistinct));
    }

    #[test]
    fn unknown_name_is_function_not_found() {
        let r = AggregateRegistry::global();
        assert_eq!(r.get("median"), None);
        assert_eq!(r.resolve("median"), Err(AnalysisError::FunctionNotFound("median".into())));
        assert_eq!(r.resolve("Lead"), Ok(AggregateOp::Lead));
    }

    #[test]
    fn list_keeps_declaration_order_without_aliases() {
        let names = AggregateRegistry::global().list();
        assert_eq!(names.len(), AggregateOp::ALL.len());
        assert_eq!(names.first(), Some(&"COUNT"));
        assert_eq!(names.last(), Some(&"FIRST_VALUE_REWRITE"));
        assert!(!names.contains(&"count_distinct"));
    }

    #[test]
    fn list_matches_operator_declaration_order() {
        let expected: Vec<_> = AggregateOp::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(AggregateRegistry::global().list(), expected);
    }

    #[test]
    fn global_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| AggregateRegistry::global() as *const _ as usize))
            .collect();
        let ptrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
    }
}
