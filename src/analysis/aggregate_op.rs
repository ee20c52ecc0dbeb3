use std::fmt;

use crate::catalog::ScalarType;
use crate::wire::TAggregationOp;

/// Builtin aggregate and analytic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateOp {
    Count,
    Min,
    Max,
    DistinctPc,
    DistinctPcsa,
    Sum,
    Avg,
    GroupConcat,
    /// External name for distinct estimation; currently backed by hyperloglog.
    Ndv,
    HllUnionAgg,
    CountDistinct,
    SumDistinct,
    Lag,
    FirstValue,
    LastValue,
    Rank,
    DenseRank,
    RowNumber,
    Lead,
    /// Planner-only marker produced by the analytic rewrite; never executed.
    FirstValueRewrite,
}

/// Static metadata of one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOpInfo {
    /// Display name, used to build the function's external name.
    pub name: &'static str,
    /// Backend opcode. `None` only for operators the executor never sees.
    pub opcode: Option<TAggregationOp>,
    /// Accumulator type when it does not depend on the input type,
    /// `None` when it has to be determined during analysis.
    pub intermediate_type: Option<ScalarType>,
}

const fn entry(
    name: &'static str,
    opcode: Option<TAggregationOp>,
    intermediate_type: Option<ScalarType>,
) -> AggregateOpInfo {
    AggregateOpInfo { name, opcode, intermediate_type }
}

const BIGINT: Option<ScalarType> = Some(ScalarType::BigInt);
const VARCHAR_16: Option<ScalarType> = Some(ScalarType::Varchar { len: 16 });
const VARCHAR_64: Option<ScalarType> = Some(ScalarType::Varchar { len: 64 });

impl AggregateOp {
    pub const ALL: [AggregateOp; 20] = [
        AggregateOp::Count,
        AggregateOp::Min,
        AggregateOp::Max,
        AggregateOp::DistinctPc,
        AggregateOp::DistinctPcsa,
        AggregateOp::Sum,
        AggregateOp::Avg,
        AggregateOp::GroupConcat,
        AggregateOp::Ndv,
        AggregateOp::HllUnionAgg,
        AggregateOp::CountDistinct,
        AggregateOp::SumDistinct,
        AggregateOp::Lag,
        AggregateOp::FirstValue,
        AggregateOp::LastValue,
        AggregateOp::Rank,
        AggregateOp::DenseRank,
        AggregateOp::RowNumber,
        AggregateOp::Lead,
        AggregateOp::FirstValueRewrite,
    ];

    pub const fn info(self) -> AggregateOpInfo {
        use TAggregationOp as T;
        match self {
            AggregateOp::Count => entry("COUNT", Some(T::Count), BIGINT),
            AggregateOp::Min => entry("MIN", Some(T::Min), None),
            AggregateOp::Max => entry("MAX", Some(T::Max), None),
            AggregateOp::DistinctPc => entry("DISTINCT_PC", Some(T::DistinctPc), VARCHAR_64),
            AggregateOp::DistinctPcsa => entry("DISTINCT_PCSA", Some(T::DistinctPcsa), VARCHAR_64),
            AggregateOp::Sum => entry("SUM", Some(T::Sum), None),
            // Decomposed into SUM/COUNT before execution.
            AggregateOp::Avg => entry("AVG", Some(T::Invalid), None),
            AggregateOp::GroupConcat => entry("GROUP_CONCAT", Some(T::GroupConcat), VARCHAR_16),
            AggregateOp::Ndv => entry("NDV", Some(T::Hll), VARCHAR_64),
            AggregateOp::HllUnionAgg => entry("HLL_UNION_AGG", Some(T::HllC), VARCHAR_64),
            // Deployed executors match on this spelling.
            AggregateOp::CountDistinct => entry("COUNT_DISITNCT", Some(T::CountDistinct), BIGINT),
            AggregateOp::SumDistinct => entry("SUM_DISTINCT", Some(T::SumDistinct), None),
            AggregateOp::Lag => entry("LAG", Some(T::Lag), None),
            AggregateOp::FirstValue => entry("FIRST_VALUE", Some(T::FirstValue), None),
            AggregateOp::LastValue => entry("LAST_VALUE", Some(T::LastValue), None),
            AggregateOp::Rank => entry("RANK", Some(T::Rank), None),
            AggregateOp::DenseRank => entry("DENSE_RANK", Some(T::DenseRank), None),
            AggregateOp::RowNumber => entry("ROW_NUMBER", Some(T::RowNumber), None),
            AggregateOp::Lead => entry("LEAD", Some(T::Lead), None),
            AggregateOp::FirstValueRewrite => entry("FIRST_VALUE_REWRITE", None, None),
        }
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn opcode(self) -> Option<TAggregationOp> {
        self.info().opcode
    }

    pub fn intermediate_type(self) -> Option<ScalarType> {
        self.info().intermediate_type
    }

    /// True when the executor has a dedicated opcode for this operator.
    pub fn has_backend_op(self) -> bool {
        self.opcode().is_some_and(TAggregationOp::is_executable)
    }

    /// Function id sent to the backend.
    ///
    /// `FIRST_VALUE_REWRITE` is pinned to 0; everything else uses its opcode
    /// ordinal. Panics if an operator without an opcode reaches the backend.
    pub fn wire_id(self) -> i64 {
        match (self, self.opcode()) {
            (AggregateOp::FirstValueRewrite, _) => 0,
            (_, Some(op)) => i64::from(op.ordinal()),
            (op, None) => unreachable!("{op} has no backend opcode"),
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixed_intermediate_types() {
        assert_eq!(AggregateOp::Count.intermediate_type(), Some(ScalarType::BigInt));
        assert_eq!(AggregateOp::CountDistinct.intermediate_type(), Some(ScalarType::BigInt));
        assert_eq!(AggregateOp::Ndv.intermediate_type(), Some(ScalarType::varchar(64)));
        assert_eq!(AggregateOp::HllUnionAgg.intermediate_type(), Some(ScalarType::varchar(64)));
        assert_eq!(AggregateOp::DistinctPc.intermediate_type(), Some(ScalarType::varchar(64)));
        assert_eq!(AggregateOp::DistinctPcsa.intermediate_type(), Some(ScalarType::varchar(64)));
        assert_eq!(AggregateOp::GroupConcat.intermediate_type(), Some(ScalarType::varchar(16)));

        for op in [AggregateOp::Sum, AggregateOp::Min, AggregateOp::Max, AggregateOp::Avg, AggregateOp::Lag] {
            assert_eq!(op.intermediate_type(), None, "{op}");
        }
    }

    #[test]
    fn opcodes_map_to_backend_names() {
        assert_eq!(AggregateOp::Ndv.opcode(), Some(TAggregationOp::Hll));
        assert_eq!(AggregateOp::HllUnionAgg.opcode(), Some(TAggregationOp::HllC));
        assert_eq!(AggregateOp::Avg.opcode(), Some(TAggregationOp::Invalid));
        assert_eq!(AggregateOp::FirstValueRewrite.opcode(), None);
    }

    #[test]
    fn only_avg_and_rewrite_lack_a_backend_op() {
        let missing: Vec<_> = AggregateOp::ALL.iter().copied().filter(|o| !o.has_backend_op()).collect();
        assert_eq!(missing, vec![AggregateOp::Avg, AggregateOp::FirstValueRewrite]);
    }

    #[test]
    fn rewrite_marker_has_id_zero() {
        assert_eq!(AggregateOp::FirstValueRewrite.wire_id(), 0);
    }

    #[test]
    fn wire_ids_match_ordinals_and_never_collide() {
        let mut seen = HashSet::new();
        for op in AggregateOp::ALL.iter().copied().filter(|o| *o != AggregateOp::FirstValueRewrite) {
            let opcode = op.opcode().unwrap();
            assert_eq!(op.wire_id(), i64::from(opcode.ordinal()), "{op}");
            assert!(seen.insert(op.wire_id()), "{op} collides on id {}", op.wire_id());
        }
        assert_eq!(AggregateOp::Count.wire_id(), 1);
        assert_eq!(AggregateOp::Lag.wire_id(), 17);
    }

    #[test]
    fn display_is_the_external_name() {
        assert_eq!(AggregateOp::HllUnionAgg.to_string(), "HLL_UNION_AGG");
        assert_eq!(AggregateOp::FirstValueRewrite.to_string(), "FIRST_VALUE_REWRITE");
        assert_eq!(AggregateOp::CountDistinct.to_string(), "COUNT_DISITNCT");
    }

    #[test]
    fn all_lists_every_variant_once() {
        let set: HashSet<_> = AggregateOp::ALL.iter().collect();
        assert_eq!(set.len(), AggregateOp::ALL.len());
    }
}
