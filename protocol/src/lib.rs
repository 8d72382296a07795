use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to decode server message: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode client message: {0}")]
    Encode(#[source] serde_json::Error),
}

/// ---- Streets ----
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    /// Anything the server sends that we do not know about.
    Unrecognized,
}

impl Street {
    pub fn as_str(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
            Street::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for Street {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" | "pre-flop" => Street::Preflop,
            "flop" => Street::Flop,
            "turn" => Street::Turn,
            "river" => Street::River,
            "showdown" => Street::Showdown,
            _ => Street::Unrecognized,
        }
    }
}

impl From<String> for Street {
    fn from(s: String) -> Self {
        Street::from(s.as_str())
    }
}

impl From<Street> for String {
    fn from(street: Street) -> Self {
        street.as_str().to_string()
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ---- Cards ----
///
/// The server sends cards as two characters, rank then suit (`"Ah"`, `"Td"`).
/// We keep the characters as-is; drawing decides how to show them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub rank: char,
    pub suit: char,
}

impl Card {
    pub fn new(rank: char, suit: char) -> Self {
        Card { rank, suit }
    }

    /// Splits a run like `"AhKs"` into cards. A dangling odd character is dropped.
    pub fn parse_run(s: &str) -> Vec<Card> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        chars
            .chunks_exact(2)
            .map(|pair| Card::new(pair[0], pair[1]))
            .collect()
    }

    pub fn is_red(&self) -> bool {
        matches!(self.suit.to_ascii_lowercase(), 'h' | 'd')
    }
}

impl Card {
    /// Rank as printed on a card face; `T` becomes `10`.
    pub fn rank_label(&self) -> String {
        match self.rank.to_ascii_uppercase() {
            'T' => "10".to_string(),
            other => other.to_string(),
        }
    }

    pub fn suit_symbol(&self) -> &'static str {
        match self.suit.to_ascii_lowercase() {
            'c' => "♣",
            'd' => "♦",
            'h' => "♥",
            's' => "♠",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit_symbol())
    }
}

/// ---- Snapshot ----
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSeat {
    pub index: usize,
    pub player_name: String,
    pub money: u32,
    #[serde(default)]
    pub last_action: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_sitting_out: bool,
    #[serde(default)]
    pub is_all_in: bool,
    // wagered on that street only, not cumulative across streets
    #[serde(default)]
    pub preflop_cont: u32,
    #[serde(default)]
    pub flop_cont: u32,
    #[serde(default)]
    pub turn_cont: u32,
    #[serde(default)]
    pub river_cont: u32,
}

impl PlayerSeat {
    pub fn has_folded(&self) -> bool {
        self.last_action
            .as_deref()
            .map(|a| a.eq_ignore_ascii_case("fold"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSnapshot {
    #[serde(default)]
    pub name: Option<String>,
    pub max_players: usize,
    #[serde(default)]
    pub small_blind: u32,
    #[serde(default)]
    pub big_blind: u32,
    #[serde(default)]
    pub buy_in: Option<u32>,
    #[serde(default, rename = "button_idx")]
    pub button_index: Option<usize>,
    #[serde(default)]
    pub hand_num: u32,
    #[serde(default)]
    pub game_suspended: bool,
    #[serde(default)]
    pub players: Vec<Option<PlayerSeat>>,
    #[serde(default)]
    pub street: Option<Street>,
    #[serde(default)]
    pub current_bet: Option<u32>,
    #[serde(default)]
    pub flop: Option<String>,
    #[serde(default)]
    pub turn: Option<String>,
    #[serde(default)]
    pub river: Option<String>,
    #[serde(default)]
    pub pots: Option<Vec<u32>>,
    #[serde(default)]
    pub index_to_act: Option<usize>,
    #[serde(default)]
    pub your_index: Option<usize>,
    #[serde(default)]
    pub hole_cards: Option<String>,
}

impl GameSnapshot {
    /// Occupied seats, in absolute seat order.
    pub fn seats(&self) -> impl Iterator<Item = &PlayerSeat> {
        self.players.iter().flatten()
    }

    /// Looks a seat up by its absolute index, not by its position in `players`.
    pub fn seat(&self, index: usize) -> Option<&PlayerSeat> {
        self.seats().find(|p| p.index == index)
    }

    pub fn viewer(&self) -> Option<&PlayerSeat> {
        self.your_index.and_then(|i| self.seat(i))
    }

    pub fn pot_total(&self) -> u64 {
        self.pots
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|p| u64::from(*p))
            .sum()
    }

    /// Board cards in deal order, skipping streets not reached yet.
    pub fn board(&self) -> Vec<Card> {
        [&self.flop, &self.turn, &self.river]
            .into_iter()
            .flatten()
            .flat_map(|run| Card::parse_run(run))
            .collect()
    }

    pub fn is_viewer_to_act(&self) -> bool {
        matches!((self.index_to_act, self.your_index), (Some(a), Some(y)) if a == y)
    }
}

/// ---- Tables ----
/// What the server reports about a table outside of a hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableInfo {
    pub table_name: String,
    #[serde(default)]
    pub small_blind: u32,
    #[serde(default)]
    pub big_blind: u32,
    #[serde(default)]
    pub buy_in: u32,
    #[serde(default)]
    pub max_players: usize,
    #[serde(default)]
    pub num_humans: usize,
    #[serde(default)]
    pub num_bots: usize,
}

/// One entry of a `tables_list` reply: either a bare name or a full summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TableListing {
    Name(String),
    Info(TableInfo),
}

impl TableListing {
    pub fn name(&self) -> &str {
        match self {
            TableListing::Name(name) => name,
            TableListing::Info(info) => &info.table_name,
        }
    }
}

/// ---- Server -> client ----
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState(GameSnapshot),
    CreatedTable {
        table_name: String,
    },
    TablesList {
        #[serde(default)]
        tables: Vec<TableListing>,
    },
    TableInfo(TableInfo),
    AdminSuccess {
        #[serde(default)]
        updated: Option<String>,
        #[serde(default)]
        text: String,
    },
    Error {
        error: String,
        #[serde(default)]
        reason: Option<String>,
    },
    /// Chat, hand prompts and the rest are not handled by this client.
    #[serde(other)]
    Other,
}

impl ServerMessage {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }
}

/// ---- Client -> server ----
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Check,
    Fold,
    Call,
    Bet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdminKind {
    SmallBlind,
    BigBlind,
    StartingStack,
    SetPassword,
    ShowPassword,
    AddBot,
    RemoveBot,
    Restart,
}

/// A table-admin request. Only the creator of a private table may send these,
/// and the server applies them between hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRequest {
    SmallBlind(u32),
    BigBlind(u32),
    StartingStack(u32),
    SetPassword(String),
    ShowPassword,
    AddBot,
    RemoveBot,
    Restart,
}

impl AdminRequest {
    pub fn kind(&self) -> AdminKind {
        match self {
            AdminRequest::SmallBlind(_) => AdminKind::SmallBlind,
            AdminRequest::BigBlind(_) => AdminKind::BigBlind,
            AdminRequest::StartingStack(_) => AdminKind::StartingStack,
            AdminRequest::SetPassword(_) => AdminKind::SetPassword,
            AdminRequest::ShowPassword => AdminKind::ShowPassword,
            AdminRequest::AddBot => AdminKind::AddBot,
            AdminRequest::RemoveBot => AdminKind::RemoveBot,
            AdminRequest::Restart => AdminKind::Restart,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum ClientMessage {
    PlayerAction {
        action: ActionKind,
        // the server expects the amount as a string
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<String>,
    },
    #[serde(rename = "sitout")]
    SitOut,
    #[serde(rename = "imback")]
    ImBack,
    Leave,
    #[serde(rename = "name")]
    SetName { player_name: String },
    List,
    Join {
        table_name: String,
        password: Option<String>,
    },
    /// The server picks the table name and answers with `created_table`.
    Create {
        max_players: u8,
        small_blind: u32,
        big_blind: u32,
        buy_in: u32,
        num_bots: u8,
        password: Option<String>,
    },
    /// The value rides in a field named after the command, always as a string:
    /// `{"admin_command": "big_blind", "big_blind": "24"}`.
    AdminCommand {
        admin_command: AdminKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        small_blind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        big_blind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        starting_stack: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        set_password: Option<String>,
    },
}

impl ClientMessage {
    pub fn action(action: ActionKind) -> Self {
        ClientMessage::PlayerAction { action, amount: None }
    }

    pub fn bet(amount: i64) -> Self {
        ClientMessage::PlayerAction {
            action: ActionKind::Bet,
            amount: Some(amount.to_string()),
        }
    }

    pub fn admin(request: AdminRequest) -> Self {
        let admin_command = request.kind();
        let (mut small_blind, mut big_blind, mut starting_stack, mut set_password) =
            (None, None, None, None);
        match request {
            AdminRequest::SmallBlind(v) => small_blind = Some(v.to_string()),
            AdminRequest::BigBlind(v) => big_blind = Some(v.to_string()),
            AdminRequest::StartingStack(v) => starting_stack = Some(v.to_string()),
            AdminRequest::SetPassword(p) => set_password = Some(p),
            AdminRequest::ShowPassword
            | AdminRequest::AddBot
            | AdminRequest::RemoveBot
            | AdminRequest::Restart => {}
        }
        ClientMessage::AdminCommand {
            admin_command,
            small_blind,
            big_blind,
            starting_stack,
            set_password,
        }
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game_state_json() -> serde_json::Value {
        json!({
            "msg_type": "game_state",
            "name": "friday",
            "max_players": 9,
            "small_blind": 5,
            "big_blind": 10,
            "buy_in": 1000,
            "password": null,
            "button_idx": 0,
            "hand_num": 3,
            "game_suspended": false,
            "players": [
                {"index": 0, "player_name": "ann", "money": 980, "is_active": true,
                 "preflop_cont": 20, "flop_cont": 0, "last_action": "call"},
                null,
                {"index": 2, "player_name": "bo", "money": 0, "is_active": true,
                 "is_all_in": true, "preflop_cont": 1000},
                {"index": 3, "player_name": "cy", "money": 500, "is_active": false,
                 "is_sitting_out": true}
            ],
            "street": "flop",
            "current_bet": 0,
            "flop": "AhKsTd",
            "pots": [150, 40],
            "index_to_act": 0,
            "your_index": 0,
            "hole_cards": "QcQd"
        })
    }

    #[test]
    fn decodes_game_state() {
        let msg = ServerMessage::decode(&game_state_json().to_string()).unwrap();
        let ServerMessage::GameState(s) = msg else {
            panic!("expected a game state");
        };
        assert_eq!(s.max_players, 9);
        assert_eq!(s.button_index, Some(0));
        assert_eq!(s.street, Some(Street::Flop));
        assert_eq!(s.players.len(), 4);
        assert!(s.players[1].is_none());
        assert_eq!(s.seats().count(), 3);
        assert!(s.seat(2).unwrap().is_all_in);
        assert!(s.seat(3).unwrap().is_sitting_out);
        assert_eq!(s.seat(3).unwrap().preflop_cont, 0);
        assert_eq!(s.pot_total(), 190);
        assert!(s.turn.is_none());
        assert_eq!(s.board().len(), 3);
        assert!(s.is_viewer_to_act());
    }

    #[test]
    fn missing_hand_fields_default() {
        let text = json!({
            "msg_type": "game_state",
            "max_players": 9,
            "small_blind": 5,
            "big_blind": 10,
            "button_idx": 0,
            "hand_num": 0,
            "players": [null, null]
        })
        .to_string();
        let ServerMessage::GameState(s) = ServerMessage::decode(&text).unwrap() else {
            panic!("expected a game state");
        };
        assert_eq!(s.street, None);
        assert_eq!(s.pots, None);
        assert_eq!(s.pot_total(), 0);
        assert_eq!(s.your_index, None);
        assert!(s.viewer().is_none());
    }

    #[test]
    fn unknown_street_is_unrecognized() {
        let mut v = game_state_json();
        v["street"] = json!("fifth");
        let ServerMessage::GameState(s) = ServerMessage::decode(&v.to_string()).unwrap() else {
            panic!("expected a game state");
        };
        assert_eq!(s.street, Some(Street::Unrecognized));
        assert_eq!(Street::from("ShowDown"), Street::Showdown);
    }

    #[test]
    fn other_message_types_are_ignored() {
        let msg = ServerMessage::decode(r#"{"msg_type":"chat","text":"hi"}"#).unwrap();
        assert_eq!(msg, ServerMessage::Other);
        let err = ServerMessage::decode(r#"{"msg_type":"error","error":"unable_to_create"}"#).unwrap();
        assert_eq!(
            err,
            ServerMessage::Error { error: "unable_to_create".into(), reason: None }
        );
        assert!(ServerMessage::decode("not json").is_err());
    }

    #[test]
    fn encodes_actions_the_way_the_server_reads_them() {
        let fold: serde_json::Value =
            serde_json::from_str(&ClientMessage::action(ActionKind::Fold).encode().unwrap()).unwrap();
        assert_eq!(fold, json!({"msg_type": "player_action", "action": "fold"}));

        let bet: serde_json::Value =
            serde_json::from_str(&ClientMessage::bet(150).encode().unwrap()).unwrap();
        assert_eq!(bet, json!({"msg_type": "player_action", "action": "bet", "amount": "150"}));

        let sitout: serde_json::Value =
            serde_json::from_str(&ClientMessage::SitOut.encode().unwrap()).unwrap();
        assert_eq!(sitout, json!({"msg_type": "sitout"}));

        let join: serde_json::Value = serde_json::from_str(
            &ClientMessage::Join { table_name: "friday".into(), password: None }
                .encode()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(join, json!({"msg_type": "join", "table_name": "friday", "password": null}));
    }

    #[test]
    fn parses_card_runs() {
        assert_eq!(
            Card::parse_run("AhKs"),
            vec![Card::new('A', 'h'), Card::new('K', 's')]
        );
        assert_eq!(Card::parse_run("AhK").len(), 1);
        assert!(Card::new('Q', 'd').is_red());
        assert_eq!(Card::new('T', 's').to_string(), "10♠");
        assert_eq!(Card::new('q', 'x').rank_label(), "Q");
        assert_eq!(Card::new('q', 'x').suit_symbol(), "?");
    }

    #[test]
    fn decodes_table_replies() {
        let created = ServerMessage::decode(r#"{"msg_type":"created_table","table_name":"t-42"}"#).unwrap();
        assert_eq!(created, ServerMessage::CreatedTable { table_name: "t-42".into() });

        let list = json!({
            "msg_type": "tables_list",
            "tables": ["friday", {"table_name": "saturday", "small_blind": 1, "big_blind": 2}]
        });
        let ServerMessage::TablesList { tables } = ServerMessage::decode(&list.to_string()).unwrap() else {
            panic!("expected a table list");
        };
        let names: Vec<&str> = tables.iter().map(TableListing::name).collect();
        assert_eq!(names, vec!["friday", "saturday"]);

        let ok = ServerMessage::decode(
            r#"{"msg_type":"admin_success","updated":"big_blind","text":"The big blind has been changed to 24"}"#,
        )
        .unwrap();
        assert_eq!(
            ok,
            ServerMessage::AdminSuccess {
                updated: Some("big_blind".into()),
                text: "The big blind has been changed to 24".into(),
            }
        );

        let info = ServerMessage::decode(
            r#"{"msg_type":"table_info","table_name":"friday","small_blind":5,"big_blind":10,"buy_in":1000,"max_players":6,"num_humans":2,"num_bots":1}"#,
        )
        .unwrap();
        let ServerMessage::TableInfo(info) = info else {
            panic!("expected table info");
        };
        assert_eq!(info.num_bots, 1);
    }

    #[test]
    fn encodes_table_admin_messages() {
        let create: serde_json::Value = serde_json::from_str(
            &ClientMessage::Create {
                max_players: 6,
                small_blind: 5,
                big_blind: 10,
                buy_in: 1000,
                num_bots: 2,
                password: Some("hunter2".into()),
            }
            .encode()
            .unwrap(),
        )
        .unwrap();
        assert_eq!(
            create,
            json!({"msg_type": "create", "max_players": 6, "small_blind": 5, "big_blind": 10,
                   "buy_in": 1000, "num_bots": 2, "password": "hunter2"})
        );

        let list: serde_json::Value = serde_json::from_str(&ClientMessage::List.encode().unwrap()).unwrap();
        assert_eq!(list, json!({"msg_type": "list"}));

        let blind: serde_json::Value =
            serde_json::from_str(&ClientMessage::admin(AdminRequest::BigBlind(24)).encode().unwrap()).unwrap();
        assert_eq!(blind, json!({"msg_type": "admin_command", "admin_command": "big_blind", "big_blind": "24"}));

        let stack: serde_json::Value =
            serde_json::from_str(&ClientMessage::admin(AdminRequest::StartingStack(500)).encode().unwrap()).unwrap();
        assert_eq!(
            stack,
            json!({"msg_type": "admin_command", "admin_command": "starting_stack", "starting_stack": "500"})
        );

        let pass: serde_json::Value = serde_json::from_str(
            &ClientMessage::admin(AdminRequest::SetPassword("s3cret".into())).encode().unwrap(),
        )
        .unwrap();
        assert_eq!(
            pass,
            json!({"msg_type": "admin_command", "admin_command": "set_password", "set_password": "s3cret"})
        );

        let bot: serde_json::Value =
            serde_json::from_str(&ClientMessage::admin(AdminRequest::AddBot).encode().unwrap()).unwrap();
        assert_eq!(bot, json!({"msg_type": "admin_command", "admin_command": "add_bot"}));
    }
}
