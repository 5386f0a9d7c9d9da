// kong-api: Async Rust client for the Kong Gateway admin API

pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod manager;
pub mod models;
pub mod requests;
pub mod resources;
pub mod transport;

pub use client::KongClient;
pub use config::ClientConfig;
pub use error::Error;
pub use models::{
    Certificate, Consumer, DatabaseStatus, NodeStatus, Plugin, Reference, Route, ServerStatus,
    Service, Sni, TaggedEntity, Target, Upstream, UpstreamHealth,
};
pub use requests::{
    NewCertificate, NewConsumer, NewPlugin, NewRoute, NewService, NewSni, NewTarget, NewUpstream,
    StreamEndpoint,
};

pub use reqwest::Method;
