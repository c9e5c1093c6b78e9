//! Keyword resolution.
//!
//! Identifiers are checked against reserved keywords first, then against
//! built-in type names. Both lookups bucket by length so most identifiers
//! are rejected without a string comparison.


use fcx_ir::{TokenKind, TypeKeyword};

/// Resolve an identifier to a keyword or type keyword token.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    reserved(text).or_else(|| type_keyword(text).map(TokenKind::Type))
}

fn reserved(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=8).contains(&len) {
        return None;
    }

    match len {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            "as" => Some(TokenKind::As),
            _ => None,
        },
        3 => match text {
            "let" => Some(TokenKind::Let),
            "ret" => Some(TokenKind::Ret),
            "mod" => Some(TokenKind::Mod),
            "use" => Some(TokenKind::Use),
            "pub" => Some(TokenKind::Pub),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "loop" => Some(TokenKind::Loop),
            "halt" => Some(TokenKind::Halt),
            "self" => Some(TokenKind::SelfKw),
            _ => None,
        },
        5 => match text {
            "const" => Some(TokenKind::Const),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "super" => Some(TokenKind::Super),
            "crate" => Some(TokenKind::Crate),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Built-in type names: `i8`..`i1024`, `u8`..`u1024`, `f32`, `f64`,
/// `ptr`, `rawptr`.
pub(crate) fn type_keyword(text: &str) -> Option<TypeKeyword> {
    let bytes = text.as_bytes();
    if !(2..=6).contains(&bytes.len()) {
        return None;
    }
    match bytes[0] {
        b'i' | b'u' | b'f' => {
            let signed = bytes[0] == b'i';
            let ty = match (bytes[0], &text[1..]) {
                (b'f', "32") => TypeKeyword::F32,
                (b'f', "64") => TypeKeyword::F64,
                (b'f', _) => return None,
                (_, "8") => pick(signed, TypeKeyword::I8, TypeKeyword::U8),
                (_, "16") => pick(signed, TypeKeyword::I16, TypeKeyword::U16),
                (_, "32") => pick(signed, TypeKeyword::I32, TypeKeyword::U32),
                (_, "64") => pick(signed, TypeKeyword::I64, TypeKeyword::U64),
                (_, "128") => pick(signed, TypeKeyword::I128, TypeKeyword::U128),
                (_, "256") => pick(signed, TypeKeyword::I256, TypeKeyword::U256),
                (_, "512") => pick(signed, TypeKeyword::I512, TypeKeyword::U512),
                (_, "1024") => pick(signed, TypeKeyword::I1024, TypeKeyword::U1024),
                _ => return None,
            };
            Some(ty)
        }
        b'p' if text == "ptr" => Some(TypeKeyword::Ptr),
        b'r' if text == "rawptr" => Some(TypeKeyword::RawPtr),
        _ => None,
    }
}

#[inline]
fn pick(signed: bool, int: TypeKeyword, uint: TypeKeyword) -> TypeKeyword {
    if signed {
        int
    } else {
        uint
    }
}
