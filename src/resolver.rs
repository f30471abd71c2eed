mod fut;
pub use fut::{Fut, Lost};

mod pending;
pub use pending::Pending;

mod resolver_map;
pub use resolver_map::ResolverMap;
