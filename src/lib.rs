//! keto - Kubernetes cluster lifecycle manager
//!
//! The core is the cloud provider registry: backends register a factory under
//! a unique name at start-up, and commands instantiate one by the name the
//! user supplied without depending on any vendor SDK.

pub mod cli;
pub mod cloudprovider;
pub mod config;
pub mod controller;
pub mod logging;
pub mod providers;
