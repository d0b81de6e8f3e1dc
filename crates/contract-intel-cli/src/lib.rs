pub mod server;
pub mod settings;
pub mod telemetry;

pub use server::{build_router, serve, ContractInput, WELCOME_MESSAGE};
pub use settings::Settings;
