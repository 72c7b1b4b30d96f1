use netgen_core::{FlowArc, GenerationParams, Network};

/// Parameters from a fixture array.
#[must_use]
pub fn params(parms: [i64; 13]) -> GenerationParams {
    GenerationParams::from_array(parms)
}

/// Whether every arc of a general-path network connects two distinct
/// in-range nodes with a cost and capacity the parameters allow.
///
/// Uncapacitated arcs carry the total supply; capacitated skeleton arcs carry
/// at most a source's supply.
#[must_use]
pub fn arcs_respect_parameters(network: &Network, params: &GenerationParams) -> bool {
    let nodes = network.node_count();
    let capacities = params.min_capacity..=params.max_capacity.max(params.supply);
    network.arcs().iter().all(|arc: &FlowArc| {
        (1..=nodes).contains(&arc.from)
            && (1..=nodes).contains(&arc.to)
            && arc.from != arc.to
            && (params.min_cost..=params.max_cost).contains(&arc.cost)
            && (arc.capacity == params.supply || capacities.contains(&arc.capacity))
    })
}
