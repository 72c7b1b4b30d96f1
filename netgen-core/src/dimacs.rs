//! DIMACS rendering of generated networks.
//!
//! The comment header repeats the seed and all thirteen parameters so an
//! output file is enough to regenerate its network. The body dialect is
//! chosen by [`DimacsFormat::for_params`].

use std::fmt;

use crate::{network::Network, params::GenerationParams, problem::DimacsFormat};

/// A generated network together with the inputs that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    seed: i64,
    problem: i64,
    params: GenerationParams,
    network: Network,
}

impl Instance {
    /// Bundles a network with its seed, problem number and parameters.
    #[must_use]
    pub fn new(seed: i64, problem: i64, params: GenerationParams, network: Network) -> Self {
        Self {
            seed,
            problem,
            params,
            network,
        }
    }

    /// Seed the network was generated from.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Problem number; also the historical output file name.
    #[must_use]
    pub fn problem(&self) -> i64 {
        self.problem
    }

    /// Generation parameters.
    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// The generated network.
    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Dialect the instance is written in.
    #[must_use]
    pub fn format(&self) -> DimacsFormat {
        DimacsFormat::for_params(&self.params)
    }

    /// Render the DIMACS text to a writer.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::{GenerationParams, Instance, generate};
    ///
    /// let params = GenerationParams::from_array([10, 2, 2, 15, 1, 10, 50, 0, 0, 50, 50, 1, 20]);
    /// let network = generate(17, &params).expect("parameters are valid");
    /// let instance = Instance::new(17, 3, params, network);
    ///
    /// let mut text = String::new();
    /// instance.write_dimacs(&mut text).expect("writing to a String cannot fail");
    /// assert!(text.starts_with("c NETGEN flow network generator (C version)\n"));
    /// assert!(text.lines().any(|line| line.starts_with("p min 10 ")));
    /// ```
    pub fn write_dimacs<W: fmt::Write>(&self, mut writer: W) -> fmt::Result {
        self.write_header(&mut writer)?;
        let format = self.format();
        writeln!(writer, "c")?;
        writeln!(writer, "c  *** {} ***", format.title())?;
        writeln!(writer, "c")?;
        writeln!(
            writer,
            "p {} {} {}",
            format.designator(),
            self.network.node_count(),
            self.network.arc_count()
        )?;

        let nodes = self.network.supplies().iter().enumerate();
        for (index, &supply) in nodes {
            let node = index + 1;
            match format {
                DimacsFormat::Assignment if supply > 0 => writeln!(writer, "n {node}")?,
                DimacsFormat::MaxFlow if supply > 0 => writeln!(writer, "n {node} s")?,
                DimacsFormat::MaxFlow if supply < 0 => writeln!(writer, "n {node} t")?,
                DimacsFormat::MinCostFlow if supply != 0 => writeln!(writer, "n {node} {supply}")?,
                _ => {}
            }
        }

        for arc in self.network.arcs() {
            match format {
                DimacsFormat::Assignment => {
                    writeln!(writer, "a {} {} {}", arc.from, arc.to, arc.cost)?;
                }
                DimacsFormat::MaxFlow => {
                    writeln!(writer, "a {} {} {}", arc.from, arc.to, arc.capacity)?;
                }
                DimacsFormat::MinCostFlow => writeln!(
                    writer,
                    "a {} {} 0 {} {}",
                    arc.from, arc.to, arc.capacity, arc.cost
                )?,
            }
        }
        Ok(())
    }

    fn write_header<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        let p = &self.params;
        writeln!(writer, "c NETGEN flow network generator (C version)")?;
        writeln!(writer, "c  Problem {:>2} input parameters", self.problem)?;
        writeln!(writer, "c  ---------------------------")?;
        writeln!(writer, "c   Random seed:          {:>10}", self.seed)?;
        writeln!(writer, "c   Number of nodes:      {:>10}", p.nodes)?;
        writeln!(writer, "c   Source nodes:         {:>10}", p.sources)?;
        writeln!(writer, "c   Sink nodes:           {:>10}", p.sinks)?;
        writeln!(writer, "c   Number of arcs:       {:>10}", p.density)?;
        writeln!(writer, "c   Minimum arc cost:     {:>10}", p.min_cost)?;
        writeln!(writer, "c   Maximum arc cost:     {:>10}", p.max_cost)?;
        writeln!(writer, "c   Total supply:         {:>10}", p.supply)?;
        writeln!(writer, "c   Transshipment -")?;
        writeln!(writer, "c     Sources:            {:>10}", p.transshipment_sources)?;
        writeln!(writer, "c     Sinks:              {:>10}", p.transshipment_sinks)?;
        writeln!(writer, "c   Skeleton arcs -")?;
        writeln!(writer, "c     With max cost:      {:>10}%", p.hi_cost_percent)?;
        writeln!(writer, "c     Capacitated:        {:>10}%", p.capacitated_percent)?;
        writeln!(writer, "c   Minimum arc capacity: {:>10}", p.min_capacity)?;
        writeln!(writer, "c   Maximum arc capacity: {:>10}", p.max_capacity)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dimacs(f)
    }
}
