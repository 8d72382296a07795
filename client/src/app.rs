// client/src/app.rs
use futures::channel::mpsc::UnboundedSender;
use iced::{Element, Subscription, Task};
use pokerview_protocol::{ActionKind, ClientMessage, GameSnapshot, ServerMessage, TableListing};

use crate::config::ClientConfig;
use crate::messages::Msg;
use crate::ui::actions::controls_live;
use crate::ui::admin::admin_request;
use crate::ui::state::AppState;
use crate::ui::table::full_table_view;
use crate::ui::ws::subscription;
use crate::view::{bet_bounds, BetBounds, BetSelection};

#[derive(Debug, Clone)]
pub struct App {
    pub config: ClientConfig,
    pub app_state: AppState,

    pub snapshot: Option<GameSnapshot>,
    // the only state that outlives a snapshot
    pub bet: BetSelection,

    pub tx_out: Option<UnboundedSender<ClientMessage>>,

    // Set once the server confirms a table we asked it to create
    pub admin_of: Option<String>,
    pub admin_input: String,
}

impl App {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            app_state: AppState::default(),
            snapshot: None,
            bet: BetSelection::default(),
            tx_out: None,
            admin_of: None,
            admin_input: String::new(),
        }
    }

    fn bounds(&self) -> BetBounds {
        self.snapshot
            .as_ref()
            .map(bet_bounds)
            .unwrap_or(BetBounds { min: 0, max: 0 })
    }

    fn apply_snapshot(&mut self, snapshot: GameSnapshot) {
        tracing::debug!(
            hand = snapshot.hand_num,
            street = ?snapshot.street,
            to_act = ?snapshot.index_to_act,
            "new snapshot"
        );
        self.snapshot = Some(snapshot);
        let bounds = self.bounds();
        self.bet.rebound(bounds);
    }

    pub fn update(&mut self, msg: Msg) -> Task<Msg> {
        match msg {
            Msg::WsConnected(tx) => {
                self.tx_out = Some(tx);
                self.app_state.connected();
            }
            Msg::WsEvent(ServerMessage::GameState(snapshot)) => self.apply_snapshot(snapshot),
            Msg::WsEvent(ServerMessage::Error { error, reason }) => {
                tracing::warn!(%error, ?reason, "server reported an error");
                let text = match reason {
                    Some(r) => format!("{error}: {r}"),
                    None => error,
                };
                self.app_state.note(text);
            }
            Msg::WsEvent(ServerMessage::CreatedTable { table_name }) => {
                tracing::info!(%table_name, "table created, joining");
                self.app_state.inform(format!("Created table {table_name}"));
                self.send(ClientMessage::Join {
                    table_name: table_name.clone(),
                    password: self.config.password.clone(),
                });
                self.admin_of = Some(table_name);
            }
            Msg::WsEvent(ServerMessage::TablesList { tables }) => {
                let names: Vec<&str> = tables.iter().map(TableListing::name).collect();
                tracing::info!(?names, "open tables");
                let text = if names.is_empty() {
                    "No open tables".to_string()
                } else {
                    format!("Tables: {}", names.join(", "))
                };
                self.app_state.inform(text);
            }
            Msg::WsEvent(ServerMessage::TableInfo(info)) => {
                self.app_state.inform(format!(
                    "{}: blinds {}/{}, buy-in {}, {} players, {} bots",
                    info.table_name, info.small_blind, info.big_blind, info.buy_in, info.num_humans, info.num_bots
                ));
            }
            Msg::WsEvent(ServerMessage::AdminSuccess { updated, text }) => {
                tracing::info!(?updated, "admin change accepted");
                self.app_state.inform(text);
            }
            Msg::WsEvent(ServerMessage::Other) => {}
            Msg::WsError(e) => self.app_state.note(e),
            Msg::WsClosed(e) => {
                self.tx_out = None;
                self.app_state.failed(e);
            }

            Msg::Fold => self.act(ClientMessage::action(ActionKind::Fold)),
            Msg::Check => self.act(ClientMessage::action(ActionKind::Check)),
            Msg::Call => self.act(ClientMessage::action(ActionKind::Call)),
            Msg::Bet => {
                let bounds = self.bounds();
                self.bet.rebound(bounds);
                self.act(ClientMessage::bet(self.bet.amount()));
            }
            Msg::BetSliderChanged(value) => {
                let bounds = self.bounds();
                self.bet.set_and_clamp(i64::from(value), bounds);
            }
            Msg::BetInputChanged(text) => {
                let bounds = self.bounds();
                self.bet.input_text(text, bounds);
            }
            Msg::PresetChosen(amount) => {
                let bounds = self.bounds();
                self.bet.set_and_clamp(amount, bounds);
            }

            Msg::SitOut => self.send(ClientMessage::SitOut),
            Msg::ImBack => self.send(ClientMessage::ImBack),
            Msg::Leave => self.send(ClientMessage::Leave),

            Msg::AdminInputChanged(text) => self.admin_input = text,
            Msg::Admin(kind) => match admin_request(kind, &self.admin_input) {
                Ok(request) => self.send(ClientMessage::admin(request)),
                Err(e) => self.app_state.note(e.to_string()),
            },
        }
        Task::none()
    }

    /// Turn actions are only sent while connected and on our turn.
    fn act(&mut self, cmd: ClientMessage) {
        if controls_live(self.snapshot.as_ref(), self.app_state.is_connected()) {
            self.send(cmd);
        } else {
            tracing::debug!(?cmd, "ignoring action out of turn");
        }
    }

    fn send(&mut self, cmd: ClientMessage) {
        tracing::debug!(?cmd, "queueing");
        match &self.tx_out {
            Some(tx) => {
                if let Err(e) = tx.unbounded_send(cmd) {
                    tracing::error!(error = %e, "failed to queue message");
                    self.app_state.note(format!("send error: {e}"));
                }
            }
            None => {
                tracing::warn!(?cmd, "not connected, dropping message");
                self.app_state.note("not connected".to_string());
            }
        }
    }

    /// The canvas lays itself out from its own bounds, so the socket is the
    /// only event source we subscribe to.
    pub fn subscription(&self) -> Subscription<Msg> {
        subscription(self.config.clone())
    }

    pub fn view(&self) -> Element<'_, Msg> {
        full_table_view(self)
    }
}
