//! # Services Layer
//!
//! Network access for the view-models. The transport is the only place
//! that knows about reqwest; [`StorefrontApi`] maps the backend's REST
//! contract onto typed calls.

pub mod api;
pub mod http;
pub mod mock;

pub use api::StorefrontApi;
pub use http::{ApiResponse, FilePart, FormPayload, ReqwestTransport, Transport};
pub use mock::{MockReply, MockTransport, RecordedCall};
