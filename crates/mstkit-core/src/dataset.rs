//! JSON graph datasets and the validating loader that turns them into
//! [`Graph`] values.
//!
//! A dataset file holds any number of named graphs:
//!
//! ```json
//! { "graphs": [ { "name": "G1", "vertices": 3,
//!                 "edges": [ { "u": 0, "v": 1, "w": 1.0 } ] } ] }
//! ```
//!
//! [`Graph::add_edge`] trusts its input, so range and weight checks happen
//! here, before any graph is built.
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, VertexId};
use crate::graph::Graph;

/// Errors raised while parsing or validating a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The document is not valid JSON or does not match the dataset shape.
    #[error("malformed dataset at line {line}, column {column}: {detail}")]
    Malformed {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Underlying parser message.
        detail: String,
    },

    /// An edge references a vertex id outside `[0, vertices)`.
    #[error("graph {graph:?}: edge #{index} ({u}, {v}) references a vertex outside 0..{vertices}")]
    EndpointOutOfRange {
        /// Name of the offending graph.
        graph: String,
        /// Position of the edge in the graph's edge list.
        index: usize,
        /// First endpoint.
        u: VertexId,
        /// Second endpoint.
        v: VertexId,
        /// Declared vertex count.
        vertices: usize,
    },

    /// An edge weight is NaN or infinite.
    #[error("graph {graph:?}: edge #{index} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Name of the offending graph.
        graph: String,
        /// Position of the edge in the graph's edge list.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// A requested start vertex does not exist.
    #[error("graph {graph:?}: start vertex {start} is outside 0..{vertices}")]
    StartOutOfRange {
        /// Name of the graph.
        graph: String,
        /// Requested start vertex.
        start: VertexId,
        /// Declared vertex count.
        vertices: usize,
    },
}

/// One edge as written in a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
    /// Weight.
    pub w: f64,
}

impl From<Edge> for EdgeSpec {
    fn from(e: Edge) -> Self {
        Self {
            u: e.u,
            v: e.v,
            w: e.w,
        }
    }
}

/// One named graph as written in a dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Display name used in reports.
    pub name: String,
    /// Declared vertex count.
    pub vertices: usize,
    /// Edge list, in file order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Validates the edge list and builds a [`Graph`] in file order.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::EndpointOutOfRange`] or
    /// [`DatasetError::NonFiniteWeight`] for the first offending edge.
    pub fn build(&self) -> Result<Graph, DatasetError> {
        let mut graph = Graph::new(self.vertices);
        for (index, e) in self.edges.iter().enumerate() {
            if e.u >= self.vertices || e.v >= self.vertices {
                return Err(DatasetError::EndpointOutOfRange {
                    graph: self.name.clone(),
                    index,
                    u: e.u,
                    v: e.v,
                    vertices: self.vertices,
                });
            }
            if !e.w.is_finite() {
                return Err(DatasetError::NonFiniteWeight {
                    graph: self.name.clone(),
                    index,
                    weight: e.w,
                });
            }
            graph.add_edge(Edge::new(e.u, e.v, e.w));
        }
        Ok(graph)
    }

    /// Checks that `start` is a valid Prim start vertex for this graph.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::StartOutOfRange`] when `start >= vertices`
    /// on a non-empty graph.
    pub fn check_start(&self, start: VertexId) -> Result<(), DatasetError> {
        if self.vertices > 0 && start >= self.vertices {
            return Err(DatasetError::StartOutOfRange {
                graph: self.name.clone(),
                start,
                vertices: self.vertices,
            });
        }
        Ok(())
    }

    /// Captures an in-memory graph under `name`.
    pub fn from_graph(name: impl Into<String>, graph: &Graph) -> Self {
        Self {
            name: name.into(),
            vertices: graph.vertices(),
            edges: graph.edges().iter().copied().map(EdgeSpec::from).collect(),
        }
    }
}

/// A dataset document: an ordered list of named graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDataset {
    /// Graphs in file order. A document without the key has none.
    #[serde(default)]
    pub graphs: Vec<GraphSpec>,
}

impl GraphDataset {
    /// Returns the first graph named `name`.
    pub fn find(&self, name: &str) -> Option<&GraphSpec> {
        self.graphs.iter().find(|g| g.name == name)
    }

    /// Number of graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Returns `true` if the dataset has no graphs.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Parses a dataset document.
///
/// Only the shape is checked here; call [`GraphSpec::build`] to validate
/// and materialize each graph.
///
/// # Errors
///
/// Returns [`DatasetError::Malformed`] with the parser's line and column.
pub fn parse_dataset(content: &str) -> Result<GraphDataset, DatasetError> {
    serde_json::from_str(content).map_err(|e| DatasetError::Malformed {
        line: e.line(),
        column: e.column(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;

    const TWO_GRAPHS: &str = r#"{
        "graphs": [
            { "name": "triangle", "vertices": 3,
              "edges": [ {"u":0,"v":1,"w":1.0}, {"u":1,"v":2,"w":2.0}, {"u":0,"v":2,"w":3.0} ] },
            { "name": "lonely", "vertices": 1, "edges": [] }
        ]
    }"#;

    #[test]
    fn parses_graphs_in_order() {
        let ds = parse_dataset(TWO_GRAPHS).expect("parse");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.graphs[0].name, "triangle");
        assert_eq!(ds.graphs[0].edges.len(), 3);
        assert_eq!(ds.graphs[1].vertices, 1);
    }

    #[test]
    fn build_produces_matching_graph() {
        let ds = parse_dataset(TWO_GRAPHS).expect("parse");
        let g = ds.graphs[0].build().expect("build");
        assert_eq!(g.vertices(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges()[2], Edge::new(0, 2, 3.0));
    }

    #[test]
    fn missing_graphs_key_is_empty_dataset() {
        let ds = parse_dataset("{}").expect("parse");
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_edges_key_is_edgeless_graph() {
        let ds = parse_dataset(r#"{"graphs":[{"name":"g","vertices":2}]}"#).expect("parse");
        let g = ds.graphs[0].build().expect("build");
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn integer_weights_are_accepted() {
        let ds = parse_dataset(r#"{"graphs":[{"name":"g","vertices":2,"edges":[{"u":0,"v":1,"w":4}]}]}"#)
            .expect("parse");
        assert_eq!(ds.graphs[0].edges[0].w, 4.0);
    }

    #[test]
    fn malformed_json_reports_position() {
        let err = parse_dataset("{\n  \"graphs\": [ oops ]\n}").expect_err("should fail");
        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn negative_vertex_id_is_malformed() {
        let err = parse_dataset(r#"{"graphs":[{"name":"g","vertices":2,"edges":[{"u":-1,"v":1,"w":1}]}]}"#)
            .expect_err("should fail");
        assert!(matches!(err, DatasetError::Malformed { .. }));
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let spec = GraphSpec {
            name: "bad".to_owned(),
            vertices: 2,
            edges: vec![
                EdgeSpec { u: 0, v: 1, w: 1.0 },
                EdgeSpec { u: 1, v: 2, w: 1.0 },
            ],
        };
        match spec.build().expect_err("should fail") {
            DatasetError::EndpointOutOfRange { index, v, .. } => {
                assert_eq!(index, 1);
                assert_eq!(v, 2);
            }
            other => panic!("expected EndpointOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let spec = GraphSpec {
            name: "nan".to_owned(),
            vertices: 2,
            edges: vec![EdgeSpec {
                u: 0,
                v: 1,
                w: f64::NAN,
            }],
        };
        assert!(matches!(
            spec.build(),
            Err(DatasetError::NonFiniteWeight { index: 0, .. })
        ));
    }

    #[test]
    fn check_start_bounds() {
        let spec = GraphSpec {
            name: "g".to_owned(),
            vertices: 3,
            edges: Vec::new(),
        };
        assert!(spec.check_start(2).is_ok());
        assert!(matches!(
            spec.check_start(3),
            Err(DatasetError::StartOutOfRange { start: 3, .. })
        ));

        let empty = GraphSpec {
            name: "empty".to_owned(),
            vertices: 0,
            edges: Vec::new(),
        };
        assert!(empty.check_start(0).is_ok());
    }

    #[test]
    fn find_by_name() {
        let ds = parse_dataset(TWO_GRAPHS).expect("parse");
        assert_eq!(ds.find("lonely").map(|g| g.vertices), Some(1));
        assert!(ds.find("missing").is_none());
    }

    #[test]
    fn from_graph_round_trips_edges() {
        let mut g = Graph::new(3);
        g.add_edge(Edge::new(0, 1, 1.5));
        g.add_edge(Edge::new(2, 1, 0.5));
        let spec = GraphSpec::from_graph("copy", &g);
        let rebuilt = spec.build().expect("build");
        assert_eq!(rebuilt.edges(), g.edges());
        assert_eq!(rebuilt.vertices(), 3);
    }

    #[test]
    fn error_messages_name_the_graph() {
        let err = DatasetError::StartOutOfRange {
            graph: "G7".to_owned(),
            start: 9,
            vertices: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("G7"), "message: {msg}");
        assert!(msg.contains('9'), "message: {msg}");
    }
}
