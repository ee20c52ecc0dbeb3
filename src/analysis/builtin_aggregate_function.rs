use tracing::{debug, warn};

use crate::analysis::{AggregateOp, AnalysisError};
use crate::catalog::{Function, FunctionBinaryType, FunctionName, ScalarType};
use crate::wire::{TAggregateFunction, TFunction};

/// A resolved use of a builtin aggregate or analytic operator.
///
/// Owned by the plan node of the call it describes. The only mutation,
/// [`set_intermediate_type`](Self::set_intermediate_type), takes `&mut self`,
/// so it can only happen before the descriptor is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinAggregateFunction {
    function: Function,
    op: AggregateOp,
    intermediate_type: ScalarType,
    is_analytic_fn: bool,
}

impl BuiltinAggregateFunction {
    /// Both `op` and `intermediate_type` are required, and every type must pass
    /// [`ScalarType::validate`]. The operator's fixed intermediate type is not
    /// applied here; see [`builtin`](Self::builtin).
    pub fn new(
        op: Option<AggregateOp>,
        arg_types: Vec<ScalarType>,
        ret_type: ScalarType,
        intermediate_type: Option<ScalarType>,
        is_analytic_fn: bool,
    ) -> Result<Self, AnalysisError> {
        let op = op.ok_or(AnalysisError::MissingOperator)?;
        let intermediate_type = intermediate_type
            .ok_or_else(|| AnalysisError::MissingIntermediateType { function: op.name().to_string() })?;
        Self::assemble(op, arg_types, ret_type, intermediate_type, is_analytic_fn)
    }

    /// Uses the operator's fixed intermediate type, or `ret_type` when the
    /// accumulator has the same shape as the result.
    pub fn builtin(
        op: AggregateOp,
        arg_types: Vec<ScalarType>,
        ret_type: ScalarType,
        is_analytic_fn: bool,
    ) -> Result<Self, AnalysisError> {
        let intermediate_type = op.intermediate_type().unwrap_or_else(|| ret_type.clone());
        Self::assemble(op, arg_types, ret_type, intermediate_type, is_analytic_fn)
    }

    fn assemble(
        op: AggregateOp,
        arg_types: Vec<ScalarType>,
        ret_type: ScalarType,
        intermediate_type: ScalarType,
        is_analytic_fn: bool,
    ) -> Result<Self, AnalysisError> {
        for ty in arg_types.iter().chain([&ret_type, &intermediate_type]) {
            ty.validate()?;
        }

        let mut function = Function::new(FunctionName::builtin(op.name()), arg_types, ret_type, false);
        function.set_binary_type(FunctionBinaryType::Builtin);

        let this = Self { function, op, intermediate_type, is_analytic_fn };
        debug!(
            op = %op,
            ret = %this.function.ret_type(),
            intermediate = %this.intermediate_type,
            analytic = is_analytic_fn,
            requires_intermediate_tuple = this.requires_intermediate_tuple(),
            "built aggregate descriptor"
        );
        Ok(this)
    }

    pub fn op(&self) -> AggregateOp {
        self.op
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn name(&self) -> &FunctionName {
        self.function.name()
    }

    pub fn arg_types(&self) -> &[ScalarType] {
        self.function.arg_types()
    }

    pub fn ret_type(&self) -> &ScalarType {
        self.function.ret_type()
    }

    pub fn intermediate_type(&self) -> &ScalarType {
        &self.intermediate_type
    }

    pub fn is_analytic_fn(&self) -> bool {
        self.is_analytic_fn
    }

    /// Analytic evaluation keeps accumulator state in a separate tuple when
    /// that state is shaped differently from the emitted value.
    ///
    /// Derived from the current intermediate type on every call.
    pub fn requires_intermediate_tuple(&self) -> bool {
        self.is_analytic_fn && self.intermediate_type != *self.function.ret_type()
    }

    /// Rebind the accumulator type once surrounding analysis has pinned it down.
    /// An invalid type is rejected and the descriptor is left unchanged.
    pub fn set_intermediate_type(&mut self, intermediate_type: ScalarType) -> Result<(), AnalysisError> {
        intermediate_type.validate()?;
        let before = self.requires_intermediate_tuple();
        self.intermediate_type = intermediate_type;
        let after = self.requires_intermediate_tuple();
        if before != after {
            warn!(
                op = %self.op,
                intermediate = %self.intermediate_type,
                requires_intermediate_tuple = after,
                "intermediate type rebind changed tuple requirement"
            );
        }
        Ok(())
    }

    /// Consuming form of [`set_intermediate_type`](Self::set_intermediate_type).
    pub fn with_intermediate_type(mut self, intermediate_type: ScalarType) -> Result<Self, AnalysisError> {
        self.set_intermediate_type(intermediate_type)?;
        Ok(self)
    }

    pub fn to_wire(&self) -> TFunction {
        let mut wire = self.function.to_wire();
        wire.id = Some(self.op.wire_id());
        wire.aggregate_fn = Some(TAggregateFunction { intermediate_type: self.intermediate_type.to_wire() });
        debug!(op = %self.op, id = self.op.wire_id(), "projected aggregate descriptor");
        wire
    }
}
