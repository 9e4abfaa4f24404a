use tracing::{debug, warn};
use uuid::Uuid;

use campus_types::Error;
use campus_types::api::{ChatLine, ConversationView};

use campus_db::models::ConversationRow;

use crate::App;

impl App {
    /// Open (creating lazily) the conversation between two users and replay
    /// its history. Both users must exist; a user cannot converse with
    /// themselves.
    pub fn open_conversation(&self, user_a: &str, user_b: &str) -> Result<ConversationView, Error> {
        self.check_pair(user_a, user_b)?;
        let convo = self.db.resolve_conversation(user_a, user_b)?;
        self.conversation_view(convo)
    }

    /// Append one message to the pair's conversation and return the updated
    /// view. The sequence number is assigned by the conversation store.
    pub fn send_message(
        &self,
        sender: &str,
        receiver: &str,
        body: &str,
    ) -> Result<ConversationView, Error> {
        if body.trim().is_empty() {
            return Err(Error::Validation("message body is required".into()));
        }
        self.check_pair(sender, receiver)?;

        let convo = self.db.resolve_conversation(sender, receiver)?;
        let seq = self.db.append_message(&convo.id, sender, body)?;
        debug!("message {} appended to conversation {}", seq, convo.id);

        self.conversation_view(convo)
    }

    fn check_pair(&self, a: &str, b: &str) -> Result<(), Error> {
        if a == b {
            return Err(Error::Validation(
                "a conversation needs two distinct users".into(),
            ));
        }
        for name in [a, b] {
            if !self.db.user_exists(name)? {
                return Err(Error::not_found("user", name));
            }
        }
        Ok(())
    }

    fn conversation_view(&self, convo: ConversationRow) -> Result<ConversationView, Error> {
        let messages = self
            .db
            .get_history(&convo.id)?
            .into_iter()
            .map(|m| ChatLine {
                seq: m.seq,
                sender: m.sender,
                body: m.body,
            })
            .collect();

        let conversation_id: Uuid = convo.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt conversation id '{}': {}", convo.id, e);
            Uuid::default()
        });

        Ok(ConversationView {
            conversation_id,
            participants: (convo.user1, convo.user2),
            messages,
        })
    }
}
