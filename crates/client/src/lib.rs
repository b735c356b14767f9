//! Client library for the team tracker API.
//!
//! [`ApiClient`] wraps the REST endpoints and unwraps the `{data}` / `{error}`
//! envelopes. [`IdentitySession`] holds which team member is using the client,
//! persisted through a [`SessionStorage`] adapter supplied by the caller.

pub mod api_client;
pub mod error;
pub mod session;

pub use api_client::ApiClient;
pub use error::{ClientError, Result};
pub use session::{
    FileSessionStorage, IdentitySession, MemorySessionStorage, SessionStorage,
    CURRENT_USER_ID_KEY,
};
