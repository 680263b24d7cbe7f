pub mod isolation;
pub mod pocketbase;
pub mod request_id;

pub use isolation::CrossOriginIsolation;
pub use pocketbase::PocketBaseHook;
pub use request_id::{RequestId, RequestIdMiddleware};
