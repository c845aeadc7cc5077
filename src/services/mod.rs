// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod connectivity_service;

pub use connectivity_service::{
    ConnectivityReport,
    ConnectivityService,
    Probe,
    ProbeOutcome,
    ProbeResult,
};
