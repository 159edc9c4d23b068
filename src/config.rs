use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "conngate", about = "Token-gated connection-info endpoint")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:80")]
    pub addr: String,

    /// Log output format. "console" selects human-readable output,
    /// anything else selects structured JSON.
    #[arg(long, env = "LOG_FORMAT", default_value = "json")]
    pub log_format: String,

    /// Enable verbose logging. Shows debug-level detail for every request.
    /// When off, only warnings and lifecycle messages are logged.
    #[arg(short, long, env = "CONNGATE_VERBOSE", default_value = "false")]
    pub verbose: bool,
}

impl Config {
    pub fn console_logging(&self) -> bool {
        self.log_format == "console"
    }
}
