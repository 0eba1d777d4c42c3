use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use qrpromo_cpf::Cpf;
use qrpromo_types::{
    decode_json, ApiErrorBody, CampaignConfig, CampaignConfigUpdate, CampaignId, Customer,
    CustomerId, Error, NewCustomer, PromotionInfo, QrUsage,
};
use serde_json::json;
use std::str::FromStr;

const CUSTOMER_ID: &str = "6f1c2b9e-4d3a-4e8b-9a51-2f0c7d8e9a10";

fn customer_json(used: bool, used_at: Option<&str>) -> String {
    json!({
        "id": CUSTOMER_ID,
        "nome": "Maria Silva",
        "cpf": "11144477735",
        "celular": "11987654321",
        "data_nascimento": "1990-01-01",
        "qrcode_hash": "ab12cd34",
        "utilizado": used,
        "data_criacao": "2025-03-01T14:05:09.123456",
        "data_utilizacao": used_at,
    })
    .to_string()
}

// ── Ids ──────────────────────────────────────────────────────────

#[test]
fn customer_id_display_and_parse() {
    let id = CustomerId::parse(CUSTOMER_ID).unwrap();
    assert_eq!(id.to_string(), CUSTOMER_ID);
    assert_eq!(CustomerId::from_str(CUSTOMER_ID).unwrap(), id);
    assert_eq!(CustomerId::from_uuid(id.as_uuid()), id);
}

#[test]
fn id_parse_invalid() {
    assert!(matches!(CustomerId::parse("nope"), Err(Error::InvalidUuid(_))));
    assert!(CampaignId::from_str("garbage").is_err());
}

#[test]
fn id_serde_is_transparent() {
    let id = CampaignId::parse(CUSTOMER_ID).unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{CUSTOMER_ID}\""));
}

// ── NewCustomer ──────────────────────────────────────────────────

#[test]
fn new_customer_wire_format() {
    let payload = NewCustomer {
        name: "Maria Silva".into(),
        cpf: Cpf::parse("111.444.777-35").unwrap(),
        phone: "11987654321".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        json!({
            "nome": "Maria Silva",
            "cpf": "11144477735",
            "celular": "11987654321",
            "data_nascimento": "1990-01-01",
        })
    );
}

// ── Customer ─────────────────────────────────────────────────────

#[test]
fn customer_decodes_backend_record() {
    let customer: Customer = decode_json(&customer_json(false, None)).unwrap();
    assert_eq!(customer.name, "Maria Silva");
    assert_eq!(customer.birth_date, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    assert_eq!(customer.created_at.to_string(), "2025-03-01 14:05:09.123456");
    assert_eq!(customer.usage(), QrUsage::StillValid);
    assert_eq!(customer.qrcode_path(), "/qrcode/ab12cd34");
}

#[test]
fn customer_used_at_accepts_offset() {
    let customer: Customer =
        decode_json(&customer_json(true, Some("2025-03-02T18:30:00-04:00"))).unwrap();
    match customer.usage() {
        QrUsage::Used { at: Some(at) } => assert_eq!(at.to_string(), "2025-03-02 18:30:00"),
        other => panic!("unexpected usage {other:?}"),
    }
}

#[test]
fn customer_used_without_timestamp() {
    let customer: Customer = decode_json(&customer_json(true, None)).unwrap();
    assert_eq!(customer.usage(), QrUsage::Used { at: None });
}

#[test]
fn customer_roundtrip_keeps_wire_names() {
    let customer: Customer =
        decode_json(&customer_json(true, Some("2025-03-02T18:30:00"))).unwrap();
    let value = serde_json::to_value(&customer).unwrap();
    assert_eq!(value["utilizado"], json!(true));
    assert_eq!(value["data_utilizacao"], json!("2025-03-02T18:30:00"));
    let back: Customer = serde_json::from_value(value).unwrap();
    assert_eq!(back, customer);
}

#[test]
fn customer_bad_timestamp_is_serialization_error() {
    let body = customer_json(false, None).replace("2025-03-01T14:05:09.123456", "yesterday");
    assert!(matches!(decode_json::<Customer>(&body), Err(Error::Serialization(_))));
}

// ── Campaign ─────────────────────────────────────────────────────

#[test]
fn campaign_config_decodes_offset_deadline() {
    let body = json!({
        "id": CUSTOMER_ID,
        "titulo_promocao": "Promoção Pizza por R$ 0,25",
        "limite_clientes": 500,
        "data_limite_promocao": "2025-04-01T20:00:00-04:00",
        "data_ultima_atualizacao": "2025-03-01T10:00:00-04:00",
    })
    .to_string();
    let config: CampaignConfig = decode_json(&body).unwrap();
    assert_eq!(config.customer_limit, 500);
    assert_eq!(
        config.deadline,
        Some(Utc.with_ymd_and_hms(2025, 4, 2, 0, 0, 0).unwrap())
    );
}

#[test]
fn campaign_config_without_deadline() {
    let body = json!({
        "id": CUSTOMER_ID,
        "titulo_promocao": "Promo",
        "limite_clientes": 1,
        "data_limite_promocao": null,
    })
    .to_string();
    let config: CampaignConfig = decode_json(&body).unwrap();
    assert_eq!(config.deadline, None);
}

#[test]
fn campaign_update_sends_null_deadline() {
    let update = CampaignConfigUpdate {
        promo_title: "Promo".into(),
        customer_limit: 10,
        deadline: None,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"titulo_promocao": "Promo", "limite_clientes": 10, "data_limite_promocao": null})
    );
}

#[test]
fn promotion_info_ignores_extra_fields() {
    let info: PromotionInfo =
        decode_json(r#"{"titulo_promocao": "Promo", "total_clientes": 3}"#).unwrap();
    assert_eq!(info.promo_title, "Promo");
}

// ── ApiErrorBody ─────────────────────────────────────────────────

#[test]
fn error_body_string_detail() {
    let body = ApiErrorBody::parse(r#"{"detail": "QR Code inválido."}"#);
    assert_eq!(body.message().as_deref(), Some("QR Code inválido."));
    assert!(body.is("QR Code inválido."));
}

#[test]
fn error_body_validation_list() {
    let body = ApiErrorBody::parse(
        r#"{"detail": [{"loc": ["body", "cpf"], "msg": "CPF inválido.", "type": "value_error"},
                       {"loc": ["body", "nome"], "msg": "field required"}]}"#,
    );
    assert_eq!(body.message().as_deref(), Some("CPF inválido.; field required"));
    assert!(!body.is("CPF inválido."));
}

#[test]
fn error_body_garbage_is_empty() {
    let body = ApiErrorBody::parse("<html>502</html>");
    assert_eq!(body, ApiErrorBody::default());
    assert_eq!(body.message(), None);
}
