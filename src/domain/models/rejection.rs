/// User-facing text explaining why an upload batch was refused. `Markup`
/// carries trusted HTML (an embedded link) and must not be escaped by the
/// renderer; `Plain` must be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionMessage {
    Plain(String),
    Markup(String),
}

impl RejectionMessage {
    pub fn text(&self) -> &str {
        match self {
            RejectionMessage::Plain(text) | RejectionMessage::Markup(text) => text,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, RejectionMessage::Markup(_))
    }
}
