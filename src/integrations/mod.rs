// src/integrations/mod.rs
//
// External Integrations Module
//
// Everything that talks to the backend over the network lives here.

pub mod backend;

pub use backend::{
    HttpRequest, HttpResponse, Method, ReqwestTransport, RequestConfig, RequestDispatcher,
    Transport,
};
