use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use gpp_core::PlantDataset;
use gpp_server::DashboardState;

pub fn handle(dataset: PlantDataset, addr: SocketAddr, default_country: &str) -> Result<()> {
    let state = Arc::new(DashboardState::new(Arc::new(dataset), default_country));
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    println!("Serving dashboard at http://{addr}");
    runtime.block_on(gpp_server::serve(state, addr))
}
