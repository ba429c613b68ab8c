use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "profile-card")]
#[command(about = "A server-rendered profile card form processor")]
pub struct CliConfig {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
