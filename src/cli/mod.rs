// src/cli/mod.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the API server to
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub port: Option<u16>,
}
