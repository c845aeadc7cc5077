// src/integrations/backend/mod.rs

pub mod dispatcher;
pub mod request;
pub mod transport;

pub use dispatcher::RequestDispatcher;
pub use request::{HttpRequest, HttpResponse, Method, RequestConfig};
pub use transport::{ReqwestTransport, Transport};
