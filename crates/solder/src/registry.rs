//! The operation catalog.
//!
//! One [`MethodSpec`] per Bot API operation, declared as const data and
//! indexed by name once at process start. Dynamic invocation is a table
//! lookup — there is no reflection and no per-method code.
//!
//! `chat_id` is declared as a string throughout: the API accepts numeric
//! chat IDs and `@channelusername` strings interchangeably, and the caster
//! coerces numbers into strings.

use std::collections::HashMap;
use std::sync::LazyLock;

use solder_core::{Scalar, Schema, TypeRef};

use crate::method::MethodSpec;

const STR: TypeRef = TypeRef::Scalar(Scalar::String);
const INT: TypeRef = TypeRef::Scalar(Scalar::Integer);
const BOOL: TypeRef = TypeRef::Scalar(Scalar::Boolean);
const MARKUP: TypeRef = TypeRef::Object("ReplyMarkup");
const MESSAGE: TypeRef = TypeRef::Object("Message");

// ============================================================================
// Parameter schemas
// ============================================================================

const CHAT_TARGET: Schema = &[("chat_id", STR)];

const SEND_MESSAGE: Schema = &[
    ("chat_id", STR),
    ("text", STR),
    ("parse_mode", STR),
    ("disable_web_page_preview", BOOL),
    ("disable_notification", BOOL),
    ("reply_to_message_id", INT),
    ("reply_markup", MARKUP),
];

const FORWARD_MESSAGE: Schema = &[
    ("chat_id", STR),
    ("from_chat_id", STR),
    ("disable_notification", BOOL),
    ("message_id", INT),
];

const SEND_PHOTO: Schema = &[
    ("chat_id", STR),
    ("photo", STR),
    ("caption", STR),
    ("parse_mode", STR),
    ("disable_notification", BOOL),
    ("reply_to_message_id", INT),
    ("reply_markup", MARKUP),
];

const SEND_AUDIO: Schema = &[
    ("chat_id", STR),
    ("audio", STR),
    ("caption", STR),
    ("parse_mode", STR),
    ("duration", INT),
    ("performer", STR),
    ("title", STR),
    ("thumb", STR),
    ("disable_notification", BOOL),
    ("reply_to_message_id", INT),
    ("reply_markup", MARKUP),
];

const SEND_DOCUMENT: Schema = &[
    ("chat_id", STR),
    ("document", STR),
    ("thumb", STR),
    ("caption", STR),
    ("parse_mode", STR),
    ("disable_notification", BOOL),
    ("reply_to_message_id", INT),
    ("reply_markup", MARKUP),
];

const SEND_VIDEO: Schema = &[
    ("chat_id", STR),
    ("video", STR),
    ("duration", INT),
    ("width", INT),
    ("height", INT),
    ("thumb", STR),
    ("caption", STR),
    ("parse_mode", STR),
    ("supports_streaming", BOOL),
    ("disable_notification", BOOL),
    ("reply_to_message_id", INT),
    ("reply_markup", MARKUP),
];

const GET_UPDATES: Schema = &[
    ("offset", INT),
    ("limit", INT),
    ("timeout", INT),
    ("allowed_updates", TypeRef::Array(&STR)),
];

const SET_WEBHOOK: Schema = &[
    ("url", STR),
    ("max_connections", INT),
    ("allowed_updates", TypeRef::Array(&STR)),
];

// ============================================================================
// Catalog
// ============================================================================

static METHODS: &[MethodSpec] = &[
    MethodSpec {
        name: "deleteWebhook",
        params: None,
        returns: BOOL,
    },
    MethodSpec {
        name: "exportChatInviteLink",
        params: Some(CHAT_TARGET),
        returns: STR,
    },
    MethodSpec {
        name: "forwardMessage",
        params: Some(FORWARD_MESSAGE),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "getMe",
        params: None,
        returns: TypeRef::Object("User"),
    },
    MethodSpec {
        name: "getUpdates",
        params: Some(GET_UPDATES),
        returns: TypeRef::Array(&TypeRef::Object("Update")),
    },
    MethodSpec {
        name: "getWebhookInfo",
        params: None,
        returns: TypeRef::Object("WebhookInfo"),
    },
    MethodSpec {
        name: "leaveChat",
        params: Some(CHAT_TARGET),
        returns: BOOL,
    },
    MethodSpec {
        name: "sendAudio",
        params: Some(SEND_AUDIO),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "sendDocument",
        params: Some(SEND_DOCUMENT),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "sendMessage",
        params: Some(SEND_MESSAGE),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "sendPhoto",
        params: Some(SEND_PHOTO),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "sendVideo",
        params: Some(SEND_VIDEO),
        returns: MESSAGE,
    },
    MethodSpec {
        name: "setWebhook",
        params: Some(SET_WEBHOOK),
        returns: BOOL,
    },
];

static INDEX: LazyLock<HashMap<&'static str, &'static MethodSpec>> =
    LazyLock::new(|| METHODS.iter().map(|spec| (spec.name, spec)).collect());

/// Looks up an operation by its remote name.
pub fn method(name: &str) -> Option<&'static MethodSpec> {
    INDEX.get(name).copied()
}

/// Iterates over the whole catalog.
pub fn methods() -> impl Iterator<Item = &'static MethodSpec> {
    METHODS.iter()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::schemas;
    use solder_core::SchemaRegistry;

    #[test]
    fn test_lookup() {
        assert_eq!(method("sendMessage").unwrap().name, "sendMessage");
        assert!(method("getYou").is_none());
        assert_eq!(methods().count(), 13);
    }

    /// Every object kind referenced anywhere in the catalog must resolve,
    /// otherwise a call would fail at cast time instead of lookup time.
    #[test]
    fn test_catalog_references_resolve() {
        fn check(
            registry: &SchemaRegistry,
            ty: &TypeRef,
            visited: &mut std::collections::HashSet<&'static str>,
        ) {
            match *ty {
                TypeRef::Scalar(_) => {}
                TypeRef::Object(kind) => {
                    assert!(registry.contains(kind), "unregistered kind '{kind}'");
                    if !visited.insert(kind) {
                        return;
                    }
                    let (_, schema) = registry.resolve(kind).unwrap();
                    for (_, nested) in schema {
                        check(registry, nested, visited);
                    }
                }
                TypeRef::Array(inner) => check(registry, inner, visited),
            }
        }

        let mut visited = std::collections::HashSet::new();
        for spec in methods() {
            check(schemas(), &spec.returns, &mut visited);
            for (_, ty) in spec.params.unwrap_or(&[]) {
                check(schemas(), ty, &mut visited);
            }
        }
    }
}
