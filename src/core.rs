pub mod edge;
pub mod error;
pub mod id;
pub mod pair;
pub mod vertex;

pub use edge::Edge;
pub use error::UnknownVertexError;
pub use id::VertexId;
pub use pair::Pair;
pub use vertex::{Label, Vertex};
