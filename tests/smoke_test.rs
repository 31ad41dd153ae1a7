use savings_core::{init, ledger::Session};

#[test]
fn session_smoke() {
    init();

    let mut session = Session::new();
    session.set_income("2500");
    session.add_expense("rent", "900").unwrap();
    session.add_expense("", "15.5").unwrap();

    let labels = session.chart().labels;
    assert_eq!(labels, vec!["Rent", "Sin categoría"]);
    assert_eq!(session.summary().savings, 1584.5);
}
