// Per-resource managers
//
// Thin views over `Manager` that know their admin URLs and update schema.
// Obtained from `KongClient` accessors; each borrows the client's transport.

pub mod certificate;
pub mod consumer;
pub mod node_info;
pub mod plugin;
pub mod route;
pub mod service;
pub mod sni;
pub mod tag;
pub mod target;
pub mod upstream;

pub use certificate::CertificateManager;
pub use consumer::ConsumerManager;
pub use node_info::NodeInfoManager;
pub use plugin::PluginManager;
pub use route::RouteManager;
pub use service::ServiceManager;
pub use sni::SniManager;
pub use tag::TagManager;
pub use target::TargetManager;
pub use upstream::UpstreamManager;
