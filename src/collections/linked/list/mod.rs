mod error;
mod iter;
mod linked_list;
mod node;
mod position;
mod tests;

pub use error::*;
pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
pub use position::*;
