//! The pure core of the app: result model, graph projection, exports, and
//! the share/template helpers. Nothing in here (except `client`) touches
//! the DOM or the network, so it all unit-tests on the native target.

pub mod client;
pub mod generate;
pub mod graph;
pub mod results;
pub mod share;
pub mod view;

pub use client::{QueryError, QueryOutcome};
pub use graph::{GraphModel, derive_graph};
pub use results::{BoundValue, ResultSet, Row, TermKind, parse_results};
pub use view::{PAGE_SIZE, TableView, derive_view, to_csv};
