#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub connection: ConnectionState,
    pub last_error: Option<String>,
    /// Latest non-error reply from the server (table created, admin change, ...).
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            connection: ConnectionState::Connecting,
            last_error: None,
            notice: None,
        }
    }
}

impl AppState {
    pub fn connected(&mut self) {
        self.connection = ConnectionState::Connected;
        self.last_error = None;
    }

    /// A single frame went wrong; the socket is still up.
    pub fn note(&mut self, error: String) {
        self.last_error = Some(error);
    }

    /// A server reply worth showing; it supersedes an older error.
    pub fn inform(&mut self, notice: String) {
        self.notice = Some(notice);
        self.last_error = None;
    }

    pub fn failed(&mut self, error: String) {
        self.connection = ConnectionState::Disconnected;
        self.last_error = Some(error);
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.connection, ConnectionState::Connected)
    }

    pub fn status_line(&self) -> String {
        match (&self.connection, &self.last_error) {
            (ConnectionState::Connected, Some(e)) => format!("Connected (last error: {e})"),
            (ConnectionState::Connected, None) => match &self.notice {
                Some(n) => format!("Connected | {n}"),
                None => "Connected".to_string(),
            },
            (ConnectionState::Connecting, _) => "Connecting…".to_string(),
            (ConnectionState::Disconnected, Some(e)) => format!("Disconnected: {e}"),
            (ConnectionState::Disconnected, None) => "Disconnected".to_string(),
        }
    }
}
