use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Root endpoint payload: service name, docs location, version.
#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub docs: &'static str,
    pub version: &'static str,
}
