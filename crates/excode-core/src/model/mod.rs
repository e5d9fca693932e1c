pub mod metadata;
pub mod node;

pub use metadata::Metadata;
pub(crate) use node::Children;
pub use node::ErrorNode;
