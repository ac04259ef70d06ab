use hickory_proto::op::{Message, ResponseCode};

/// Builds replies that carry the id and question of the originating query.
pub trait ResponseFactory: Send + Sync {
    fn reply(&self, query: &Message, code: ResponseCode) -> Message;

    fn servfail(&self, query: &Message) -> Message {
        self.reply(query, ResponseCode::ServFail)
    }

    fn nxdomain(&self, query: &Message) -> Message {
        self.reply(query, ResponseCode::NXDomain)
    }

    fn refused(&self, query: &Message) -> Message {
        self.reply(query, ResponseCode::Refused)
    }
}
