//! # Binary IR Skeleton
//!
//! Typed tree of nodes describing the structure of a disassembled binary.
//!
//! ## Module Structure
//!
//! ```text
//! ir/
//! ├── mod.rs        # This file - module definition and re-exports
//! ├── kind.rs       # NodeKind and its supertype chain
//! ├── validator.rs  # ParentConstraint (exact / ancestor / predicate)
//! ├── node.rs       # NodeId, Node, NodePayload
//! ├── module.rs     # Module payload
//! ├── region.rs     # Region payload (set of EAs)
//! ├── data.rs       # DataObject payload (address + size + bytes)
//! ├── graph.rs      # IrGraph arena, attachment, removal, lookups
//! └── shared.rs     # SharedIr, RwLock-protected graph handle
//! ```
//!
//! ## Attachment
//!
//! Nodes are created unattached and register the constraints they place on
//! their parent exactly once, at creation. [`IrGraph::attach`] is the only
//! way to create an edge:
//!
//! | Kind | Parent constraint |
//! |------|-------------------|
//! | `Ir` | none (root) |
//! | `Module` | exactly `Ir` |
//! | `Region` | exactly `Module` |
//! | `Data` | `Module` or derived |
//!
//! ```rust
//! use binskel::ir::IrGraph;
//! use binskel::{Ea, Error};
//!
//! let mut graph = IrGraph::new();
//! let ir = graph.add_ir();
//! let module = graph.add_module("a.out");
//! let region = graph.add_region();
//!
//! assert!(matches!(graph.attach(region, ir), Err(Error::ValidationError { .. })));
//!
//! graph.attach(module, ir)?;
//! graph.attach(region, module)?;
//! graph.add_ea(region, Ea::new(0x401000))?;
//! assert_eq!(graph.children(module)?, &[region]);
//! # Ok::<(), binskel::Error>(())
//! ```

mod data;
mod graph;
mod kind;
mod module;
mod node;
mod region;
pub mod shared;
mod validator;

pub use data::DataObject;
pub use graph::{GraphOptions, IrGraph};
pub use kind::NodeKind;
pub use module::Module;
pub use node::{Node, NodeId, NodePayload};
pub use region::Region;
pub use shared::SharedIr;
pub use validator::ParentConstraint;
