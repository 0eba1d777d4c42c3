use pretty_assertions::assert_eq;
use qrpromo_admin::{
    decode_customers, decode_total, AdminError, CustomerRow, PageInfo, PageRequest,
    DEFAULT_PAGE_SIZE,
};
use serde_json::json;

fn customers_body() -> String {
    json!([
        {
            "id": "6f1c2b9e-4d3a-4e8b-9a51-2f0c7d8e9a10",
            "nome": "Maria Silva",
            "cpf": "11144477735",
            "celular": "11987654321",
            "data_nascimento": "1990-01-01",
            "qrcode_hash": "ab12cd34",
            "utilizado": true,
            "data_criacao": "2025-03-01T14:05:09.5",
            "data_utilizacao": "2025-03-02T18:30:00",
        },
        {
            "id": "7a2d3c0f-5e4b-4f9c-8b62-3a1d8e9f0b21",
            "nome": "João Souza",
            "cpf": "1234567890",
            "celular": "987654321",
            "data_nascimento": "1985-12-31",
            "qrcode_hash": "ef56ab78",
            "utilizado": false,
            "data_criacao": "2025-03-01T15:00:00",
            "data_utilizacao": null,
        }
    ])
    .to_string()
}

// ── PageRequest ──────────────────────────────────────────────────

#[test]
fn first_page_query() {
    let req = PageRequest::new(DEFAULT_PAGE_SIZE).unwrap();
    assert_eq!(req.page(), 1);
    assert_eq!(req.skip(), 0);
    assert_eq!(req.query_path(), "/admin/clientes/?skip=0&limit=10");
}

#[test]
fn later_page_skips_previous_records() {
    let req = PageRequest::new(10).unwrap().at_page(3);
    assert_eq!(req.skip(), 20);
    assert_eq!(req.query_path(), "/admin/clientes/?skip=20&limit=10");
}

#[test]
fn search_is_trimmed_encoded_and_resets_page() {
    let req = PageRequest::new(10).unwrap().at_page(4).with_search("  João & Maria ");
    assert_eq!(req.page(), 1);
    assert_eq!(req.search(), "João & Maria");
    assert_eq!(
        req.query_path(),
        "/admin/clientes/?skip=0&limit=10&search=Jo%C3%A3o%20%26%20Maria"
    );
}

#[test]
fn zero_page_size_is_rejected() {
    assert!(matches!(PageRequest::new(0), Err(AdminError::InvalidPageSize)));
}

#[test]
fn page_zero_is_page_one() {
    assert_eq!(PageRequest::new(10).unwrap().at_page(0).page(), 1);
}

#[test]
fn navigation_stays_in_bounds() {
    let first = PageRequest::new(10).unwrap();
    assert_eq!(first.previous(), None);

    let second = first.next(25).unwrap();
    assert_eq!(second.page(), 2);
    let third = second.next(25).unwrap();
    assert_eq!(third.page(), 3);
    assert_eq!(third.next(25), None);
    assert_eq!(third.previous().unwrap().page(), 2);
}

#[test]
fn navigation_keeps_search() {
    let req = PageRequest::new(10).unwrap().with_search("ana");
    assert_eq!(req.next(50).unwrap().search(), "ana");
}

// ── PageInfo ─────────────────────────────────────────────────────

#[test]
fn page_info_bounds() {
    let info = PageInfo::new(1, 10, 25);
    assert_eq!(info.total_pages, 3);
    assert!(!info.has_previous());
    assert!(info.has_next());
    assert_eq!(info.label(), "Página 1");

    let last = PageInfo::new(3, 10, 25);
    assert!(last.has_previous());
    assert!(!last.has_next());
}

#[test]
fn page_info_empty_list() {
    let info = PageInfo::new(1, 10, 0);
    assert_eq!(info.total_pages, 0);
    assert!(!info.has_next());
    assert!(!info.has_previous());
}

#[test]
fn page_info_exact_multiple() {
    assert_eq!(PageInfo::new(1, 10, 30).total_pages, 3);
    assert_eq!(PageInfo::new(1, 10, 31).total_pages, 4);
}

#[test]
fn page_beyond_last_has_no_next() {
    assert!(!PageInfo::new(9, 10, 25).has_next());
}

// ── Decoding & rows ──────────────────────────────────────────────

#[test]
fn decode_page_and_total() {
    let customers = decode_customers(&customers_body()).unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(decode_total("42").unwrap(), 42);
    assert!(matches!(decode_total("\"many\""), Err(AdminError::Decode(_))));
    assert!(decode_customers("{}").is_err());
}

#[test]
fn rows_are_formatted_and_padded() {
    let customers = decode_customers(&customers_body()).unwrap();
    let rows: Vec<CustomerRow> = customers.iter().map(CustomerRow::from).collect();

    assert_eq!(rows[0].cpf, "111.444.777-35");
    assert_eq!(rows[0].phone, "(11) 98765-4321");
    assert_eq!(rows[0].used, "Sim");

    assert_eq!(rows[1].name, "João Souza");
    assert_eq!(rows[1].cpf, "012.345.678-90");
    assert_eq!(rows[1].phone, "(00) 98765-4321");
    assert_eq!(rows[1].used, "Não");
}

#[test]
fn detail_lines() {
    let customers = decode_customers(&customers_body()).unwrap();

    let used = CustomerRow::details(&customers[0]);
    assert_eq!(
        used,
        vec![
            ("Nome", "Maria Silva".to_string()),
            ("CPF", "111.444.777-35".to_string()),
            ("Celular", "(11) 98765-4321".to_string()),
            ("Nascimento", "01/01/1990".to_string()),
            ("Cadastrado Em", "01/03/2025, 14:05:09".to_string()),
            ("Utilizado", "Sim".to_string()),
            ("Utilizado Em", "02/03/2025, 18:30:00".to_string()),
        ]
    );

    let unused = CustomerRow::details(&customers[1]);
    assert_eq!(unused.last().unwrap(), &("Utilizado Em", "-".to_string()));
}
