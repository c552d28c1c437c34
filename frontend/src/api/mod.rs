mod attendance;
mod auth;
pub mod client;
mod employees;
mod leaves;
mod payrolls;
pub mod session;
pub mod types;

pub use client::*;
pub use session::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
