pub mod identity_service;
pub mod local_store;
pub mod remote_store;

pub use identity_service::IdentityService;
pub use local_store::LocalStore;
pub use remote_store::RemoteStore;
