// ECP key endpoints
//
// Button presses (`keypress`), press-and-hold (`keydown` / `keyup`), and
// literal text entry, which the protocol only offers one character at a time.

use tracing::debug;
use url::form_urlencoded;

use crate::client::EcpClient;
use crate::error::Error;
use crate::keys;

/// Prefix the device expects before a literal character.
const LITERAL_PREFIX: &str = "Lit_";

/// The three key actions ECP exposes, named after their URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Press,
    Down,
    Up,
}

impl KeyAction {
    fn segment(self) -> &'static str {
        match self {
            Self::Press => "keypress",
            Self::Down => "keydown",
            Self::Up => "keyup",
        }
    }
}

impl EcpClient {
    /// Press and release a key.
    ///
    /// `POST /keypress/{token}`. Unknown names fail before any request is made.
    pub async fn key_press(&self, name: &str) -> Result<(), Error> {
        self.send_key(KeyAction::Press, name).await
    }

    /// Press and hold a key until [`key_up`](Self::key_up).
    ///
    /// `POST /keydown/{token}`
    pub async fn key_down(&self, name: &str) -> Result<(), Error> {
        self.send_key(KeyAction::Down, name).await
    }

    /// Release a key held with [`key_down`](Self::key_down).
    ///
    /// `POST /keyup/{token}`
    pub async fn key_up(&self, name: &str) -> Result<(), Error> {
        self.send_key(KeyAction::Up, name).await
    }

    /// Type `text` on the device, one `POST /keypress/Lit_{char}` per character.
    ///
    /// Characters are sent strictly in order. The first failure is returned
    /// immediately; characters already delivered stay typed on the device.
    pub async fn send_literal(&self, text: &str) -> Result<(), Error> {
        debug!(chars = text.chars().count(), "sending literal text");
        for c in text.chars() {
            let url = self.endpoint(&literal_path(c))?;
            self.post(url).await?;
        }
        Ok(())
    }

    async fn send_key(&self, action: KeyAction, name: &str) -> Result<(), Error> {
        let token = keys::lookup(name).ok_or_else(|| Error::UnknownCommand {
            name: name.to_owned(),
        })?;
        debug!(name, token, action = action.segment(), "sending key");
        let url = self.endpoint(&format!("{}/{token}", action.segment()))?;
        self.post(url).await
    }
}

/// Path for one literal character: the character's UTF-8 bytes,
/// query-escaped (space becomes `+`, everything outside `[A-Za-z0-9*-._]`
/// becomes `%XX`).
fn literal_path(c: char) -> String {
    let mut buf = [0u8; 4];
    let encoded = c.encode_utf8(&mut buf);
    let escaped: String = form_urlencoded::byte_serialize(encoded.as_bytes()).collect();
    format!("{}/{LITERAL_PREFIX}{escaped}", KeyAction::Press.segment())
}
