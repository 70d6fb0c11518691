use crate::contour::generate_contour_toolpath;
use crate::geometry::{find_chains, Drawing, Region};
use crate::motion::Program;
use crate::pocket::generate_pocket_toolpath;
use crate::raster::generate_parallel_toolpath;
use crate::trace::generate_trace_toolpath;
use crate::types::{Operation, OperationKind};
use anyhow::Result;
use std::collections::BTreeMap;
use tracing::debug;
use ulid::Ulid;

/// Run every operation against the drawing and emit one combined motion
/// program.
///
/// All operations are validated up front; an invalid one fails the whole
/// job before any motion is emitted. Chains are machined in operation order,
/// then the operation's layer-list order, then chain discovery order. Each
/// executed chain contributes a region keyed `"{operation}_{ordinal}_{id}"`,
/// where the ordinal is the number of regions already collected.
pub fn cnc(
    drawing: &Drawing,
    operations: &[Operation],
    program: &mut Program,
) -> Result<BTreeMap<String, Region>> {
    for op in operations {
        op.validate()?;
    }

    let layers = find_chains(drawing);
    let mut regions = BTreeMap::new();

    for op in operations {
        let op_id = op
            .id
            .clone()
            .unwrap_or_else(|| Ulid::new().to_string());
        // The operation's own layer list dictates machining order; a layer
        // named twice is machined twice. Defaulting to all layers keeps
        // drawing discovery order.
        let selected: Vec<&str> = match &op.layers {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => layers.iter().map(|(name, _)| name.as_str()).collect(),
        };
        debug!(op = op.kind.name(), id = %op_id, layers = ?selected, "running operation");

        for name in selected {
            let Some((_, chains)) = layers.iter().find(|(layer, _)| layer.as_str() == name) else {
                continue;
            };
            for chain in chains {
                // Executors are free to mutate their traversal; the drawing's
                // chains stay pristine.
                let chain = chain.clone();
                let region = match &op.kind {
                    OperationKind::Contour { outside, tabs } => {
                        generate_contour_toolpath(&chain, op, *outside, tabs.as_ref(), program)?
                    }
                    OperationKind::Pocket { stock_to_leave } => {
                        generate_pocket_toolpath(&chain, op, *stock_to_leave, program)?
                    }
                    OperationKind::Parallel { stock_to_leave } => {
                        generate_parallel_toolpath(&chain, op, *stock_to_leave, program)?
                    }
                    OperationKind::Trace => generate_trace_toolpath(&chain, op, program)?,
                };
                let key = format!("{}_{}_{}", op.kind.name(), regions.len(), op_id);
                regions.insert(key, region);
            }
        }
    }

    Ok(regions)
}
