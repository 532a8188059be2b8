use cartola_core::{CategoryRule, ExtractionConfig, Installment};
use cartola_finance::report::{RowStyle, layout_summary, write_summary_pdf};
use cartola_finance::{StatementExtractor, extract_statement, write_transactions};
use cartola_ingest::extract_pdf_text;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name)
}

fn statement_text() -> String {
    std::fs::read_to_string(fixture("statement.txt")).expect("fixture statement")
}

/// Fixture regression: boilerplate dropped, every purchase kept in order.
#[test]
fn test_fixture_transactions() {
    let report = extract_statement(&statement_text(), &ExtractionConfig::default()).unwrap();
    let txns = &report.transactions;
    assert_eq!(txns.len(), 11);

    let descs: Vec<_> = txns.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs[0], "UBER TRIP HELP.UBER.COM $ 4.500");
    assert_eq!(descs[10], "LATAM AIRLINES CUOTA 1/6");
    assert!(!descs.iter().any(|d| d.contains("AL 05/03/2024")));
    assert!(!txns.iter().any(|t| t.place.contains("TOTAL OPERACIONES")));

    let sodimac = &txns[3];
    assert_eq!(sodimac.place, "SIN LUGAR");
    assert_eq!(sodimac.amount, Some(37_500.0));
    assert_eq!(sodimac.installment, Some(Installment { index: 3, total: 12 }));
    assert_eq!(sodimac.category, "DECORACION");

    let reversal = txns.iter().find(|t| t.description == "REVERSA COMPRA").unwrap();
    assert_eq!(reversal.amount, None);
    assert_eq!(reversal.category, "CONSUMO");

    let categories: Vec<_> = txns.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(
        categories,
        vec![
            "MOVILIDAD",
            "DELIVERY",
            "SUPERMERCADO",
            "DECORACION",
            "MEDICO",
            "SUBSCRIPCION",
            "SERVICIOS",
            "SALIDA/BAR",
            "CONSUMO",
            "CONSUMO",
            "VUELOS",
        ]
    );

    // installment counts only ever appear together, and only on installment rows
    for t in txns {
        assert_eq!(t.installment_index().is_some(), t.installment_total().is_some());
        if !t.is_installment {
            assert!(t.installment.is_none());
        }
    }
}

#[test]
fn test_fixture_summary() {
    let report = extract_statement(&statement_text(), &ExtractionConfig::default()).unwrap();
    let summary = &report.summary;
    assert_eq!(summary.len(), 10);

    for w in summary.windows(2) {
        assert!(w[0].total >= w[1].total, "summary not sorted by total");
    }

    assert_eq!(summary[0].category, "VUELOS");
    assert_eq!(summary[0].formatted_total, "$87.650");
    assert_eq!(summary[0].share, 0.29);

    let consumo = summary.iter().find(|r| r.category == "CONSUMO").unwrap();
    assert_eq!(consumo.total, 40_000.0);

    let grand: f64 = summary.iter().map(|r| r.total).sum();
    assert_eq!(grand, 304_210.0);
    assert_eq!(grand, report.grand_total());
}

#[test]
fn test_custom_rules_change_only_categories() {
    let cfg = ExtractionConfig::default().with_categories(vec![
        CategoryRule::new("CUOTA", "PLAN"),
        CategoryRule::new("UBER", "APPS"),
    ]);
    let custom = extract_statement(&statement_text(), &cfg).unwrap();
    let stock = extract_statement(&statement_text(), &ExtractionConfig::default()).unwrap();

    assert_eq!(custom.transactions.len(), stock.transactions.len());
    assert_eq!(custom.transactions[0].category, "APPS");
    assert_eq!(custom.transactions[3].category, "PLAN");
    assert_eq!(custom.transactions[10].category, "PLAN");
    assert_eq!(custom.transactions[2].category, "CONSUMO");
}

#[test]
fn test_extractor_is_reusable() {
    let extractor = StatementExtractor::new(&ExtractionConfig::default()).unwrap();
    let first = extractor.extract(&statement_text());
    let second = extractor.extract(&statement_text());
    assert_eq!(first, second);
}

#[test]
fn test_outputs_from_fixture() {
    let report = extract_statement(&statement_text(), &ExtractionConfig::default()).unwrap();

    let mut buf = Vec::new();
    write_transactions(&mut buf, &report.transactions).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(csv.lines().count(), 12);
    assert!(csv.contains("SIN LUGAR,SODIMAC CUOTA 03/12,37500,1,3,12,DECORACION"));

    let layout = layout_summary(&report.summary);
    assert_eq!(layout.pages.len(), 1);
    assert_eq!(layout.pages[0].rows[0].style, RowStyle::Header);

    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("summary.pdf");
    write_summary_pdf(&pdf, &layout, None).unwrap();
    assert!(std::fs::read(&pdf).unwrap().starts_with(b"%PDF"));

    let text = extract_pdf_text(&pdf).unwrap();
    assert!(text.contains("$87.650"));
    assert!(text.contains("SALIDA/BAR"));
}

/// Statement PDF → text → rows: purchases found, boilerplate dropped.
#[test]
fn test_statement_pdf_end_to_end() {
    let text = extract_pdf_text(fixture("statement.pdf")).unwrap();
    let report = StatementExtractor::new(&ExtractionConfig::default())
        .unwrap()
        .extract(&text);

    let txns = &report.transactions;
    assert_eq!(txns.len(), 3, "rows: {:?}", txns);
    assert_eq!(txns[0].place, "SANTIAGO");
    assert_eq!(txns[0].amount, Some(4_500.0));
    assert_eq!(txns[0].category, "MOVILIDAD");
    assert_eq!(txns[1].place, "SIN LUGAR");
    assert_eq!(txns[1].installment, Some(Installment { index: 3, total: 12 }));
    assert_eq!(txns[1].amount, Some(37_500.0));
    assert_eq!(txns[2].category, "SUBSCRIPCION");

    let categories: Vec<_> = report.summary.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["DECORACION", "SUBSCRIPCION", "MOVILIDAD"]);
}

/// A statement with nothing but boilerplate is a valid, empty result.
#[test]
fn test_boilerplate_only_statement() {
    let text = "PAGAR HASTA 20/04/2024 $ 304.210\nTOTAL OPERACIONES 05/04/2024 $ 304.210\n";
    let report = extract_statement(text, &ExtractionConfig::default()).unwrap();
    assert!(report.transactions.is_empty());
    assert!(report.summary.is_empty());
    assert_eq!(layout_summary(&report.summary).pages[0].rows.len(), 1);
}
