use futures::channel::mpsc::UnboundedSender;
use pokerview_protocol::{AdminKind, ClientMessage, ServerMessage};

#[derive(Debug, Clone)]
pub enum Msg {
    WsConnected(UnboundedSender<ClientMessage>),
    WsEvent(ServerMessage),
    WsError(String),
    WsClosed(String),

    // Betting panel
    Fold,
    Check,
    Call,
    Bet,
    BetSliderChanged(u32),
    BetInputChanged(String),
    PresetChosen(i64),

    SitOut,
    ImBack,
    Leave,

    // Table admin
    AdminInputChanged(String),
    Admin(AdminKind),
}
