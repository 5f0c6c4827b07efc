// ABOUTME: Library side of the sitepanel CLI
// ABOUTME: Wires config, local store, gateway and session into one context

pub mod context;
pub mod logging;
pub mod render;

pub use context::AppContext;
