//! The domain object catalog.
//!
//! One const schema table per Bot API object kind, collected into the
//! process-wide [`SchemaRegistry`]. Hydration of any response or update goes
//! through these tables — the caster has no per-type code.
//!
//! `ReplyMarkup` is the union shape for everything a `reply_markup` field can
//! carry (inline keyboards, reply keyboards, keyboard removal, force reply).
//! All fields are optional under hydration, so one schema covers the whole
//! family.

use std::sync::LazyLock;

use solder_core::{Scalar, Schema, SchemaRegistry, TypeRef};

const STR: TypeRef = TypeRef::Scalar(Scalar::String);
const INT: TypeRef = TypeRef::Scalar(Scalar::Integer);
const FLOAT: TypeRef = TypeRef::Scalar(Scalar::Float);
const BOOL: TypeRef = TypeRef::Scalar(Scalar::Boolean);

const USER: Schema = &[
    ("id", INT),
    ("is_bot", BOOL),
    ("first_name", STR),
    ("last_name", STR),
    ("username", STR),
    ("language_code", STR),
];

const CHAT: Schema = &[
    ("id", INT),
    ("type", STR),
    ("title", STR),
    ("username", STR),
    ("first_name", STR),
    ("last_name", STR),
    ("description", STR),
    ("invite_link", STR),
    ("pinned_message", TypeRef::Object("Message")),
];

const MESSAGE: Schema = &[
    ("message_id", INT),
    ("from", TypeRef::Object("User")),
    ("date", INT),
    ("chat", TypeRef::Object("Chat")),
    ("forward_from", TypeRef::Object("User")),
    ("forward_from_chat", TypeRef::Object("Chat")),
    ("forward_from_message_id", INT),
    ("forward_date", INT),
    ("reply_to_message", TypeRef::Object("Message")),
    ("edit_date", INT),
    ("media_group_id", STR),
    ("author_signature", STR),
    ("text", STR),
    ("entities", TypeRef::Array(&TypeRef::Object("MessageEntity"))),
    ("caption_entities", TypeRef::Array(&TypeRef::Object("MessageEntity"))),
    ("audio", TypeRef::Object("Audio")),
    ("document", TypeRef::Object("Document")),
    ("animation", TypeRef::Object("Animation")),
    ("photo", TypeRef::Array(&TypeRef::Object("PhotoSize"))),
    ("sticker", TypeRef::Object("Sticker")),
    ("video", TypeRef::Object("Video")),
    ("voice", TypeRef::Object("Voice")),
    ("caption", STR),
    ("contact", TypeRef::Object("Contact")),
    ("location", TypeRef::Object("Location")),
    ("venue", TypeRef::Object("Venue")),
    ("new_chat_members", TypeRef::Array(&TypeRef::Object("User"))),
    ("left_chat_member", TypeRef::Object("User")),
    ("new_chat_title", STR),
    ("new_chat_photo", TypeRef::Array(&TypeRef::Object("PhotoSize"))),
    ("delete_chat_photo", BOOL),
    ("group_chat_created", BOOL),
    ("pinned_message", TypeRef::Object("Message")),
    ("reply_markup", TypeRef::Object("ReplyMarkup")),
];

const MESSAGE_ENTITY: Schema = &[
    ("type", STR),
    ("offset", INT),
    ("length", INT),
    ("url", STR),
    ("user", TypeRef::Object("User")),
    ("language", STR),
];

const PHOTO_SIZE: Schema = &[
    ("file_id", STR),
    ("width", INT),
    ("height", INT),
    ("file_size", INT),
];

const AUDIO: Schema = &[
    ("file_id", STR),
    ("duration", INT),
    ("performer", STR),
    ("title", STR),
    ("mime_type", STR),
    ("file_size", INT),
    ("thumb", TypeRef::Object("PhotoSize")),
];

const DOCUMENT: Schema = &[
    ("file_id", STR),
    ("thumb", TypeRef::Object("PhotoSize")),
    ("file_name", STR),
    ("mime_type", STR),
    ("file_size", INT),
];

const VIDEO: Schema = &[
    ("file_id", STR),
    ("width", INT),
    ("height", INT),
    ("duration", INT),
    ("thumb", TypeRef::Object("PhotoSize")),
    ("mime_type", STR),
    ("file_size", INT),
];

const ANIMATION: Schema = &[
    ("file_id", STR),
    ("width", INT),
    ("height", INT),
    ("duration", INT),
    ("thumb", TypeRef::Object("PhotoSize")),
    ("file_name", STR),
    ("mime_type", STR),
    ("file_size", INT),
];

const VOICE: Schema = &[
    ("file_id", STR),
    ("duration", INT),
    ("mime_type", STR),
    ("file_size", INT),
];

const STICKER: Schema = &[
    ("file_id", STR),
    ("width", INT),
    ("height", INT),
    ("is_animated", BOOL),
    ("thumb", TypeRef::Object("PhotoSize")),
    ("emoji", STR),
    ("set_name", STR),
    ("file_size", INT),
];

const CONTACT: Schema = &[
    ("phone_number", STR),
    ("first_name", STR),
    ("last_name", STR),
    ("user_id", INT),
    ("vcard", STR),
];

const LOCATION: Schema = &[("longitude", FLOAT), ("latitude", FLOAT)];

const VENUE: Schema = &[
    ("location", TypeRef::Object("Location")),
    ("title", STR),
    ("address", STR),
    ("foursquare_id", STR),
    ("foursquare_type", STR),
];

const CALLBACK_QUERY: Schema = &[
    ("id", STR),
    ("from", TypeRef::Object("User")),
    ("message", TypeRef::Object("Message")),
    ("inline_message_id", STR),
    ("chat_instance", STR),
    ("data", STR),
];

const UPDATE: Schema = &[
    ("update_id", INT),
    ("message", TypeRef::Object("Message")),
    ("edited_message", TypeRef::Object("Message")),
    ("channel_post", TypeRef::Object("Message")),
    ("edited_channel_post", TypeRef::Object("Message")),
    ("callback_query", TypeRef::Object("CallbackQuery")),
];

const WEBHOOK_INFO: Schema = &[
    ("url", STR),
    ("has_custom_certificate", BOOL),
    ("pending_update_count", INT),
    ("last_error_date", INT),
    ("last_error_message", STR),
    ("max_connections", INT),
    ("allowed_updates", TypeRef::Array(&STR)),
];

const REPLY_MARKUP: Schema = &[
    (
        "inline_keyboard",
        TypeRef::Array(&TypeRef::Array(&TypeRef::Object("InlineKeyboardButton"))),
    ),
    (
        "keyboard",
        TypeRef::Array(&TypeRef::Array(&TypeRef::Object("KeyboardButton"))),
    ),
    ("resize_keyboard", BOOL),
    ("one_time_keyboard", BOOL),
    ("selective", BOOL),
    ("remove_keyboard", BOOL),
    ("force_reply", BOOL),
];

const INLINE_KEYBOARD_BUTTON: Schema = &[
    ("text", STR),
    ("url", STR),
    ("callback_data", STR),
    ("switch_inline_query", STR),
    ("switch_inline_query_current_chat", STR),
    ("pay", BOOL),
];

const KEYBOARD_BUTTON: Schema = &[
    ("text", STR),
    ("request_contact", BOOL),
    ("request_location", BOOL),
];

static KINDS: &[(&str, Schema)] = &[
    ("Animation", ANIMATION),
    ("Audio", AUDIO),
    ("CallbackQuery", CALLBACK_QUERY),
    ("Chat", CHAT),
    ("Contact", CONTACT),
    ("Document", DOCUMENT),
    ("InlineKeyboardButton", INLINE_KEYBOARD_BUTTON),
    ("KeyboardButton", KEYBOARD_BUTTON),
    ("Location", LOCATION),
    ("Message", MESSAGE),
    ("MessageEntity", MESSAGE_ENTITY),
    ("PhotoSize", PHOTO_SIZE),
    ("ReplyMarkup", REPLY_MARKUP),
    ("Sticker", STICKER),
    ("Update", UPDATE),
    ("User", USER),
    ("Venue", VENUE),
    ("Video", VIDEO),
    ("Voice", VOICE),
    ("WebhookInfo", WEBHOOK_INFO),
];

static SCHEMAS: LazyLock<SchemaRegistry> = LazyLock::new(|| SchemaRegistry::from_entries(KINDS));

/// The process-wide schema table for Bot API objects.
pub fn schemas() -> &'static SchemaRegistry {
    &SCHEMAS
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use solder_core::caster;

    #[test]
    fn test_all_kinds_registered() {
        assert_eq!(schemas().len(), KINDS.len());
        for (kind, _) in KINDS {
            assert!(schemas().contains(kind));
        }
    }

    #[test]
    fn test_update_hydration() {
        let update = caster::hydrate(
            schemas(),
            "Update",
            json!({
                "update_id": 5,
                "message": {
                    "message_id": 7,
                    "date": 1_600_000_000,
                    "chat": {"id": 42, "type": "private", "first_name": "Ada"},
                    "from": {"id": 42, "is_bot": false, "first_name": "Ada"},
                    "text": "/start",
                    "entities": [{"type": "bot_command", "offset": 0, "length": 6}],
                },
            }),
        )
        .unwrap();

        assert_eq!(update.get_i64("update_id"), Some(5));
        let message = update.get_object("message").unwrap();
        assert_eq!(message.get_str("text"), Some("/start"));
        assert_eq!(message.get_object("chat").unwrap().get_i64("id"), Some(42));
        let entity = message.get_array("entities").unwrap()[0].as_object().unwrap();
        assert_eq!(entity.get_str("type"), Some("bot_command"));
    }

    #[test]
    fn test_reply_markup_union_covers_keyboards() {
        let markup = caster::hydrate(
            schemas(),
            "ReplyMarkup",
            json!({"inline_keyboard": [[{"text": "Go", "callback_data": "go"}]]}),
        )
        .unwrap();
        let rows = markup.get_array("inline_keyboard").unwrap();
        let button = rows[0].as_array().unwrap()[0].as_object().unwrap();
        assert_eq!(button.get_str("text"), Some("Go"));

        let removal = caster::hydrate(schemas(), "ReplyMarkup", json!({"remove_keyboard": true}))
            .unwrap();
        assert_eq!(removal.get_bool("remove_keyboard"), Some(true));
    }
}
