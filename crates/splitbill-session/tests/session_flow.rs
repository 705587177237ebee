use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use splitbill_core::{ChargesPatch, ItemPatch, ParticipantId};
use splitbill_session::{BillSession, ErrorCode, SessionConfig};

fn session_with(service_charge: Decimal, tax: Decimal) -> BillSession {
    BillSession::new(SessionConfig {
        default_service_charge: service_charge,
        default_tax: tax,
        ..SessionConfig::default()
    })
}

#[test]
fn dinner_for_three() {
    let mut session = session_with(dec!(10), dec!(7));

    let a = session.add_participant("A").into_result().unwrap().unwrap();
    let b = session.add_participant("B").into_result().unwrap().unwrap();
    let c = session.add_participant("C").into_result().unwrap().unwrap();

    let item = session
        .add_item("Pizza", dec!(100), &[a.id, b.id])
        .into_result()
        .unwrap()
        .unwrap();

    let summary = session.summary();
    assert_eq!(summary.len(), 3);
    for person in &summary[..2] {
        assert_eq!(person.subtotal, dec!(50));
        assert_eq!(person.service_charge, dec!(5));
        assert_eq!(person.tax, dec!(3.5));
        assert_eq!(person.total, dec!(58.5));
    }
    assert_eq!(summary[2].person_id, c.id);
    assert_eq!(summary[2].total, Decimal::ZERO);
    assert_eq!(session.totals().total, dec!(117));

    // Bring C in on the pizza, then drop B from the bill entirely.
    session.update_item(item.id, ItemPatch::default().shared_by(vec![a.id, b.id, c.id]));
    session.remove_participant(b.id);

    let summary = session.summary();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].subtotal, dec!(50));
    assert_eq!(summary[1].subtotal, dec!(50));
    assert_eq!(session.items()[0].shared_by, vec![a.id, c.id]);
}

#[test]
fn rejected_commands_report_codes_and_leave_bill_alone() {
    let mut session = BillSession::default();
    let a = session.add_participant("Alice").into_result().unwrap().unwrap();
    let before = session.snapshot();

    let cases = [
        (session.add_participant("   ").code(), ErrorCode::EmptyName),
        (session.add_participant(&"x".repeat(51)).code(), ErrorCode::NameTooLong),
        (session.add_participant("ALICE").code(), ErrorCode::DuplicateName),
        (session.add_item(" ", dec!(10), &[a.id]).code(), ErrorCode::EmptyItemName),
        (session.add_item("Tea", dec!(-1), &[a.id]).code(), ErrorCode::InvalidPrice),
        (session.add_item("Tea", dec!(10.005), &[a.id]).code(), ErrorCode::InvalidPrice),
        (session.add_item("Tea", dec!(10), &[]).code(), ErrorCode::NoParticipantsSelected),
        (
            session.add_item("Tea", dec!(10), &[ParticipantId::generate()]).code(),
            ErrorCode::UnknownParticipant,
        ),
        (
            session.update_charges(ChargesPatch::default().service_charge(dec!(100.01))).code(),
            ErrorCode::ServiceChargeOutOfRange,
        ),
        (
            session.update_charges(ChargesPatch::default().tax(dec!(-0.5))).code(),
            ErrorCode::TaxOutOfRange,
        ),
    ];

    for (actual, expected) in cases {
        assert_eq!(actual, Some(expected));
    }

    let rejected = session.add_item("Tea", dec!(0), &[a.id]);
    assert_eq!(rejected.field(), Some("price"));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn both_charges_invalid_reports_service_charge_first() {
    let mut session = BillSession::default();
    let result = session.update_charges(
        ChargesPatch::default()
            .service_charge(dec!(101))
            .tax(dec!(101)),
    );
    assert_eq!(result.code(), Some(ErrorCode::ServiceChargeOutOfRange));
    assert_eq!(result.error(), Some("Service charge must be between 0 and 100, got 101"));
}

#[test]
fn unassigned_items_show_up_in_totals() {
    let mut session = BillSession::default();
    let a = session.add_participant("A").into_result().unwrap().unwrap();
    session.add_item("Beer tower", dec!(450), &[a.id]);
    session.remove_participant(a.id);

    assert!(session.summary().is_empty());
    assert_eq!(session.totals().unassigned, dec!(450));
    assert_eq!(session.format_currency(session.totals().unassigned), "฿450.00");
}
