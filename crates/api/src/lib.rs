pub mod app;
pub mod error;
pub mod gql;
pub mod state;

pub use state::AppState;
