//! NETGEN core library.
//!
//! Generates reproducible pseudo-random flow networks (assignment,
//! transportation, transshipment, maximum-flow and minimum-cost flow
//! problems) from a seed and thirteen parameters, and renders them as
//! DIMACS text.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dimacs;
mod error;
mod generator;
mod index_set;
mod network;
mod params;
mod problem;
mod random;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GeneratorBuilder,
    dimacs::Instance,
    error::{IndexSetError, IndexSetErrorCode, NetgenError, NetgenErrorCode, ParamRule, Result},
    generator::{Generator, generate},
    index_set::{FLAG_LIMIT, IndexSet},
    network::{FlowArc, Network},
    params::{GenerationParams, MAX_ARCS, MAX_NODES, PROBLEM_PARMS},
    problem::{DimacsFormat, ProblemClass},
    random::{MODULUS, MULTIPLIER, RandomStream},
};
