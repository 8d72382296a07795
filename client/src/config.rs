use clap::Parser;
use pokerview_protocol::ClientMessage;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "pokerview")]
#[command(about = "Poker table client - renders the live table and sends your actions")]
pub struct ClientConfig {
    /// Websocket endpoint of the game server
    #[arg(long, env = "POKERVIEW_SERVER", default_value = "ws://127.0.0.1:8080/ws/")]
    pub server: Url,
    /// Name shown to the other players
    #[arg(short, long, env = "POKERVIEW_NAME", default_value = "player")]
    pub name: String,
    /// Table to join once connected
    #[arg(short, long, env = "POKERVIEW_TABLE", conflicts_with = "create")]
    pub table: Option<String>,
    /// Password for the table being joined or created
    #[arg(long)]
    pub password: Option<String>,
    /// Ask the server for its open tables after connecting
    #[arg(long)]
    pub list: bool,
    /// Create a new table and join it; you become its admin
    #[arg(long)]
    pub create: bool,
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=9))]
    pub max_players: u8,
    #[arg(long, default_value_t = 5)]
    pub small_blind: u32,
    #[arg(long, default_value_t = 10)]
    pub big_blind: u32,
    #[arg(long, default_value_t = 1000)]
    pub buy_in: u32,
    /// Bots seated when the table is created
    #[arg(long, default_value_t = 0)]
    pub bots: u8,
    /// Log filter, e.g. `info` or `pokerview=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::parse_from(["pokerview"])
    }
}

impl ClientConfig {
    /// The `create` request for `--create`, if it was given.
    pub fn create_request(&self) -> Option<ClientMessage> {
        self.create.then(|| ClientMessage::Create {
            max_players: self.max_players,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            buy_in: self.buy_in,
            num_bots: self.bots,
            password: self.password.clone(),
        })
    }
}
