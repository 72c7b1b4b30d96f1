//! End-to-end generation through the public API.

mod common;

use netgen_core::{
    DimacsFormat, GenerationParams, GeneratorBuilder, Instance, NetgenError, ProblemClass,
    generate,
};
use netgen_test_support::{
    fixtures::{ASSIGNMENT, MAX_FLOW, MIN_COST_FLOW, REFERENCE_SEED, TRANSSHIPMENT},
    tracing::capture,
};
use rstest::rstest;

#[rstest]
#[case::min_cost_flow(MIN_COST_FLOW, DimacsFormat::MinCostFlow)]
#[case::max_flow(MAX_FLOW, DimacsFormat::MaxFlow)]
#[case::transshipment(TRANSSHIPMENT, DimacsFormat::MinCostFlow)]
fn general_fixtures_are_balanced(#[case] parms: [i64; 13], #[case] format: DimacsFormat) {
    let params = common::params(parms);
    assert_eq!(ProblemClass::classify(&params), ProblemClass::General);
    assert_eq!(DimacsFormat::for_params(&params), format);

    let network = generate(REFERENCE_SEED, &params).expect("fixture is valid");
    assert_eq!(network.balance(), 0);
    assert_eq!(network.node_count() as i64, params.nodes);
    assert!(network.arc_count() as i64 <= params.density);
    assert!(common::arcs_respect_parameters(&network, &params));

    let sources = usize::try_from(params.sources).expect("positive");
    let supplied: i64 = network.supplies()[..sources].iter().sum();
    assert_eq!(supplied, params.supply);
}

#[test]
fn assignment_fixture_pairs_halves() {
    let params = common::params(ASSIGNMENT);
    let network = generate(REFERENCE_SEED, &params).expect("fixture is valid");
    let (arcs, supplies) = network.into_parts();

    assert_eq!(supplies.iter().filter(|&&supply| supply == 1).count(), 10);
    assert_eq!(supplies.iter().filter(|&&supply| supply == -1).count(), 10);
    assert!(arcs.iter().all(|arc| arc.from <= 10 && arc.to > 10));
    assert!(arcs.len() >= 10 && arcs.len() <= 80);
}

#[test]
fn max_flow_arcs_have_unit_cost_and_capacities() {
    let params = common::params(MAX_FLOW);
    let network = generate(5, &params).expect("fixture is valid");
    // Every arc is capacitated at 100 percent.
    assert!(network.arcs().iter().all(|arc| arc.cost == 1));
    assert!(
        network
            .arcs()
            .iter()
            .all(|arc| (10..=500).contains(&arc.capacity))
    );
}

#[rstest]
#[case::seed_one(1)]
#[case::reference(REFERENCE_SEED)]
#[case::largest(2_147_483_646)]
fn instances_round_trip_through_dimacs_text(#[case] seed: i64) {
    let params = common::params(TRANSSHIPMENT);
    let network = generate(seed, &params).expect("fixture is valid");
    let instance = Instance::new(seed, 4, params, network.clone());
    let text = instance.to_string();

    let problem_line = text
        .lines()
        .find(|line| line.starts_with("p "))
        .expect("problem line is present");
    assert_eq!(problem_line, format!("p min 60 {}", network.arc_count()));
    let arc_lines = text.lines().filter(|line| line.starts_with("a ")).count();
    assert_eq!(arc_lines, network.arc_count());
    let node_lines = text.lines().filter(|line| line.starts_with("n ")).count();
    let non_zero = network.supplies().iter().filter(|&&supply| supply != 0).count();
    assert_eq!(node_lines, non_zero);
}

#[test]
fn custom_ceilings_change_what_is_accepted() {
    let params = GenerationParams::from_array([100, 10, 10, 160_000, 1, 9, 100, 0, 0, 0, 0, 1, 1]);
    assert!(matches!(
        generate(1, &params),
        Err(NetgenError::TooBig { arcs: 160_000, .. })
    ));

    let network = GeneratorBuilder::new()
        .with_max_arcs(200_000)
        .build()
        .generate(1, &params)
        .expect("ceiling was raised");
    assert_eq!(network.node_count(), 100);
    assert_eq!(network.balance(), 0);

    let small = GeneratorBuilder::new().with_max_nodes(5).build();
    assert!(matches!(
        small.generate(REFERENCE_SEED, &common::params(MIN_COST_FLOW)),
        Err(NetgenError::TooBig { nodes: 10, .. })
    ));
}

#[test]
fn generation_is_traced_end_to_end() {
    let params = common::params(ASSIGNMENT);
    let (result, layer) = capture(|| generate(REFERENCE_SEED, &params));
    let network = result.expect("fixture is valid");

    let span = layer
        .span_named("core.generate")
        .expect("core.generate span must exist");
    assert_eq!(span.field("class"), Some("Assignment"));
    assert_eq!(span.field("nodes"), Some("20"));
    assert_eq!(
        span.field("arcs"),
        Some(network.arc_count().to_string().as_str())
    );
    assert!(layer.span_named("core.assignment_path").is_some());
}
