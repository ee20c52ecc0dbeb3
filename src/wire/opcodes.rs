use serde::{Deserialize, Serialize};

/// Aggregation opcodes understood by the execution backend.
///
/// The discriminants are the protocol ordinals. New opcodes go at the end;
/// renumbering an existing one breaks every deployed executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum TAggregationOp {
    Invalid = 0,
    Count = 1,
    Max = 2,
    DistinctPc = 3,
    DistinctPcsa = 4,
    Min = 5,
    Sum = 6,
    GroupConcat = 7,
    Hll = 8,
    CountDistinct = 9,
    SumDistinct = 10,
    Lead = 11,
    FirstValue = 12,
    LastValue = 13,
    Rank = 14,
    DenseRank = 15,
    RowNumber = 16,
    Lag = 17,
    HllC = 18,
}

impl TAggregationOp {
    pub const ALL: [TAggregationOp; 19] = [
        TAggregationOp::Invalid,
        TAggregationOp::Count,
        TAggregationOp::Max,
        TAggregationOp::DistinctPc,
        TAggregationOp::DistinctPcsa,
        TAggregationOp::Min,
        TAggregationOp::Sum,
        TAggregationOp::GroupConcat,
        TAggregationOp::Hll,
        TAggregationOp::CountDistinct,
        TAggregationOp::SumDistinct,
        TAggregationOp::Lead,
        TAggregationOp::FirstValue,
        TAggregationOp::LastValue,
        TAggregationOp::Rank,
        TAggregationOp::DenseRank,
        TAggregationOp::RowNumber,
        TAggregationOp::Lag,
        TAggregationOp::HllC,
    ];

    /// Position of this opcode in the backend enumeration.
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// `INVALID` is the backend's sentinel, not an executable opcode.
    pub fn is_executable(self) -> bool {
        self != TAggregationOp::Invalid
    }
}
