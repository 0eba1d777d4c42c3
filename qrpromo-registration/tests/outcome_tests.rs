use qrpromo_registration::{
    PromoTitle, RegistrationError, RegistrationOutcome, LIMIT_REACHED_DETAIL,
};
use serde_json::json;

fn customer_body(used: bool, used_at: Option<&str>) -> String {
    json!({
        "id": "6f1c2b9e-4d3a-4e8b-9a51-2f0c7d8e9a10",
        "nome": "Maria Silva",
        "cpf": "11144477735",
        "celular": "11987654321",
        "data_nascimento": "1990-01-01",
        "qrcode_hash": "ab12cd34",
        "utilizado": used,
        "data_criacao": "2025-03-01T14:05:09",
        "data_utilizacao": used_at,
    })
    .to_string()
}

// ── RegistrationOutcome ──────────────────────────────────────────

#[test]
fn created_is_registered() {
    let outcome = RegistrationOutcome::from_response(201, &customer_body(false, None)).unwrap();
    assert!(matches!(outcome, RegistrationOutcome::Registered(_)));
    assert_eq!(outcome.status_message(), "Cadastro realizado com sucesso!");
    assert_eq!(outcome.qrcode_path().as_deref(), Some("/qrcode/ab12cd34"));
}

#[test]
fn already_reported_still_valid() {
    let outcome = RegistrationOutcome::from_response(208, &customer_body(false, None)).unwrap();
    assert!(matches!(outcome, RegistrationOutcome::AlreadyRegistered(_)));
    assert_eq!(
        outcome.status_message(),
        "Você já está cadastrado! Este QR Code ainda é válido."
    );
}

#[test]
fn already_reported_used_shows_time() {
    let body = customer_body(true, Some("2025-03-02T18:30:00"));
    let outcome = RegistrationOutcome::from_response(208, &body).unwrap();
    assert_eq!(
        outcome.status_message(),
        "Você já está cadastrado! Este QR Code já foi utilizado em 02/03/2025, 18:30:00."
    );
}

#[test]
fn limit_reached_is_an_outcome() {
    let body = json!({ "detail": LIMIT_REACHED_DETAIL }).to_string();
    let outcome = RegistrationOutcome::from_response(400, &body).unwrap();
    assert_eq!(outcome, RegistrationOutcome::LimitReached);
    assert!(outcome.customer().is_none());
    assert!(outcome.qrcode_path().is_none());
    assert!(outcome.status_message().contains("limite máximo"));
}

#[test]
fn other_400_is_rejected_with_detail() {
    let body = json!({ "detail": "A promoção foi encerrada." }).to_string();
    let err = RegistrationOutcome::from_response(400, &body).unwrap_err();
    match err {
        RegistrationError::Rejected { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "A promoção foi encerrada.");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn validation_error_list_is_joined() {
    let body = json!({ "detail": [{ "loc": ["body", "cpf"], "msg": "CPF inválido." }] }).to_string();
    let err = RegistrationOutcome::from_response(422, &body).unwrap_err();
    assert_eq!(err.user_message(), "CPF inválido.");
}

#[test]
fn missing_detail_uses_default_message() {
    let err = RegistrationOutcome::from_response(500, "Internal Server Error").unwrap_err();
    assert_eq!(err.user_message(), "Ocorreu um erro ao cadastrar.");
    assert!(err.to_string().contains("500"));
}

#[test]
fn undecodable_success_body_is_decode_error() {
    let err = RegistrationOutcome::from_response(201, "{}").unwrap_err();
    assert!(matches!(err, RegistrationError::Decode(_)));
}

// ── PromoTitle ───────────────────────────────────────────────────

#[test]
fn promo_title_splits_price() {
    let title = PromoTitle::parse("Promoção Pizza por R$ 0,25");
    assert_eq!(title.headline, "Promoção Pizza");
    assert_eq!(title.price.as_deref(), Some("R$ 0,25"));
    assert_eq!(title.to_string(), "Promoção Pizza por R$ 0,25");
}

#[test]
fn promo_title_without_price() {
    let title = PromoTitle::parse("Promoção de Inverno");
    assert_eq!(title.headline, "Promoção de Inverno");
    assert_eq!(title.price, None);
    assert_eq!(title.to_string(), "Promoção de Inverno");
}

#[test]
fn promo_title_splits_on_first_separator_only() {
    let title = PromoTitle::parse("Pizza por R$ 10 por pessoa");
    assert_eq!(title.headline, "Pizza");
    assert_eq!(title.price.as_deref(), Some("R$ 10 por pessoa"));
}

#[test]
fn promo_title_empty_price_is_none() {
    let title = PromoTitle::parse("Pizza por ");
    assert_eq!(title.headline, "Pizza");
    assert_eq!(title.price, None);
}
