//! Dependency graph construction, coupling metrics, and subgraph queries.

pub mod builder;
pub mod coupling;
pub mod subgraph;

pub use builder::GraphBuilder;
pub use coupling::{average_coupling, coupling_metrics, dependency_stats};
pub use subgraph::{get_subgraph, SubgraphResult};
