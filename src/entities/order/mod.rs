//! Order entity module

pub mod assembler;
pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use assembler::OrderModelAssembler;
pub use descriptor::OrderDescriptor;
pub use model::{Order, OrderAction, OrderStatus, TransitionError};
pub use service::{NewOrder, OrderService};
