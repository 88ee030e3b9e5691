//! Message templates for outbound verification codes

use cl_shared::types::language::Language;

/// Body for SMS, WhatsApp, and chat-app messages
pub fn verification_body(language: Language, code: &str, ttl_minutes: i64) -> String {
    match language {
        Language::Korean => format!(
            "[CitaLink] 인증번호는 {} 입니다. {}분 이내에 입력해 주세요.",
            code, ttl_minutes
        ),
        Language::Spanish => format!(
            "[CitaLink] Su código de verificación es {}. Vence en {} minutos.",
            code, ttl_minutes
        ),
    }
}

/// Body for verification emails
pub fn verification_email_body(language: Language, code: &str, ttl_minutes: i64) -> String {
    match language {
        Language::Korean => format!(
            "안녕하세요,\n\nCitaLink 인증번호는 {} 입니다.\n이 번호는 {}분 후에 만료됩니다.\n\n본인이 요청하지 않았다면 이 메일을 무시해 주세요.",
            code, ttl_minutes
        ),
        Language::Spanish => format!(
            "Hola,\n\nSu código de verificación de CitaLink es {}.\nEste código vence en {} minutos.\n\nSi usted no solicitó este código, ignore este mensaje.",
            code, ttl_minutes
        ),
    }
}
