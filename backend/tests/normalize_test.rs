mod common;

use attendance_backend::{
    attendance::normalize::{leave_kind, normalize, other_kind, DateBounds},
    models::{
        request::{RawLeaveRecord, RawOtherRecord, RequestStatus},
        status::{EventSource, StatusKind},
    },
};
use time::macros::date;

#[test]
fn leave_types_map_by_keyword_family() {
    assert_eq!(leave_kind("sick_leave"), StatusKind::Sick);
    assert_eq!(leave_kind("Sakit"), StatusKind::Sick);
    assert_eq!(leave_kind("Cuti Tahunan"), StatusKind::AnnualLeave);
    assert_eq!(leave_kind("annual"), StatusKind::AnnualLeave);
    assert_eq!(leave_kind("MATERNITY"), StatusKind::AnnualLeave);
    assert_eq!(leave_kind("izin"), StatusKind::Permission);
    assert_eq!(leave_kind("dinas luar kota"), StatusKind::BusinessTrip);
    assert_eq!(leave_kind("Business Trip"), StatusKind::BusinessTrip);
    assert_eq!(leave_kind("wfh-via-leave"), StatusKind::Wfh);
    assert_eq!(leave_kind("WFA"), StatusKind::Wfa);
}

#[test]
fn leave_keyword_families_are_checked_in_table_order() {
    // Matches both the sick and annual families; sick is listed first.
    assert_eq!(leave_kind("cuti sakit"), StatusKind::Sick);
    // Matches both annual and business trip; annual is listed first.
    assert_eq!(leave_kind("cuti dinas"), StatusKind::AnnualLeave);
}

#[test]
fn unknown_types_fall_back_to_safe_defaults() {
    assert_eq!(leave_kind("unpaid"), StatusKind::Permission);
    assert_eq!(leave_kind(""), StatusKind::Permission);
    assert_eq!(other_kind("team offsite"), StatusKind::Office);
    assert_eq!(other_kind(""), StatusKind::Office);
}

#[test]
fn other_request_types_map_by_keyword_family() {
    assert_eq!(other_kind("WFH"), StatusKind::Wfh);
    assert_eq!(other_kind("wfa"), StatusKind::Wfa);
    assert_eq!(other_kind("overtime"), StatusKind::Overtime);
    assert_eq!(other_kind("Lembur"), StatusKind::Overtime);
    assert_eq!(other_kind("business_trip"), StatusKind::BusinessTrip);
    assert_eq!(other_kind("dinas"), StatusKind::BusinessTrip);
}

#[test]
fn leave_ranges_expand_to_one_event_per_day() {
    let mila = common::employee("Mila");
    let leaves = vec![common::leave(
        &mila,
        date!(2026 - 01 - 13),
        date!(2026 - 01 - 16),
        "cuti",
        RequestStatus::Approved,
    )];

    let events = normalize(&leaves, &[], None);

    assert_eq!(events.len(), 4);
    for day in [13, 14, 15, 16] {
        let date = time::Date::from_calendar_date(2026, time::Month::January, day).unwrap();
        let on_day = events.for_day(mila.id, date);
        assert_eq!(on_day.len(), 1);
        assert_eq!(on_day[0].kind, StatusKind::AnnualLeave);
        assert_eq!(on_day[0].source, EventSource::Leave);
    }
    assert!(events.for_day(mila.id, date!(2026 - 01 - 17)).is_empty());
}

#[test]
fn pending_records_never_reveal_their_type() {
    let rafi = common::employee("Rafi");
    let leaves = vec![common::leave(
        &rafi,
        date!(2026 - 01 - 13),
        date!(2026 - 01 - 14),
        "sick_leave",
        RequestStatus::Pending,
    )];
    let others = vec![common::other(&rafi, date!(2026 - 01 - 15), "wfh", RequestStatus::Pending)];

    let events = normalize(&leaves, &others, None);

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.kind == StatusKind::Pending));
}

#[test]
fn inactive_records_are_ignored() {
    let dewi = common::employee("Dewi");
    let leaves = vec![common::leave(
        &dewi,
        date!(2026 - 01 - 13),
        date!(2026 - 01 - 14),
        "cuti",
        RequestStatus::Inactive,
    )];
    let others = vec![common::other(&dewi, date!(2026 - 01 - 15), "wfh", RequestStatus::Inactive)];

    assert!(normalize(&leaves, &others, None).is_empty());
}

#[test]
fn inverted_range_collapses_to_start_date() {
    let budi = common::employee("Budi");
    let leaves = vec![common::leave(
        &budi,
        date!(2026 - 01 - 15),
        date!(2026 - 01 - 12),
        "izin",
        RequestStatus::Approved,
    )];

    let events = normalize(&leaves, &[], None);

    assert_eq!(events.len(), 1);
    assert_eq!(events.for_day(budi.id, date!(2026 - 01 - 15))[0].kind, StatusKind::Permission);
}

#[test]
fn missing_dates_are_recovered_or_skipped() {
    let budi = common::employee("Budi");
    let leaves = vec![
        RawLeaveRecord {
            profile_id: budi.id,
            start_date: None,
            end_date: Some(date!(2026 - 01 - 14)),
            leave_type: "cuti".into(),
            status: RequestStatus::Approved,
        },
        RawLeaveRecord {
            profile_id: budi.id,
            start_date: Some(date!(2026 - 01 - 16)),
            end_date: None,
            leave_type: "sakit".into(),
            status: RequestStatus::Approved,
        },
        RawLeaveRecord {
            profile_id: budi.id,
            start_date: None,
            end_date: None,
            leave_type: "cuti".into(),
            status: RequestStatus::Approved,
        },
    ];
    let others = vec![RawOtherRecord {
        profile_id: budi.id,
        request_date: None,
        request_type: "wfh".into(),
        status: RequestStatus::Approved,
    }];

    let events = normalize(&leaves, &others, None);

    assert_eq!(events.len(), 2);
    assert_eq!(events.for_day(budi.id, date!(2026 - 01 - 14))[0].kind, StatusKind::AnnualLeave);
    assert_eq!(events.for_day(budi.id, date!(2026 - 01 - 16))[0].kind, StatusKind::Sick);
}

#[test]
fn sick_and_annual_leave_drop_same_day_other_requests() {
    let sari = common::employee("Sari");
    let leaves = vec![
        common::leave(&sari, date!(2026 - 01 - 12), date!(2026 - 01 - 13), "sick", RequestStatus::Approved),
        common::leave(&sari, date!(2026 - 01 - 15), date!(2026 - 01 - 15), "annual", RequestStatus::Approved),
    ];
    let others = vec![
        common::other(&sari, date!(2026 - 01 - 13), "wfh", RequestStatus::Approved),
        common::other(&sari, date!(2026 - 01 - 14), "wfh", RequestStatus::Approved),
        common::other(&sari, date!(2026 - 01 - 15), "overtime", RequestStatus::Approved),
    ];

    let events = normalize(&leaves, &others, None);

    let on_13 = events.for_day(sari.id, date!(2026 - 01 - 13));
    assert_eq!(on_13.len(), 1);
    assert_eq!(on_13[0].kind, StatusKind::Sick);

    let on_14 = events.for_day(sari.id, date!(2026 - 01 - 14));
    assert_eq!(on_14.len(), 1);
    assert_eq!(on_14[0].kind, StatusKind::Wfh);
    assert_eq!(on_14[0].source, EventSource::Other);

    assert_eq!(events.for_day(sari.id, date!(2026 - 01 - 15)).len(), 1);
}

#[test]
fn weaker_leave_kinds_keep_other_requests_for_the_resolver() {
    let tono = common::employee("Tono");
    let leaves = vec![
        common::leave(&tono, date!(2026 - 01 - 13), date!(2026 - 01 - 13), "izin", RequestStatus::Approved),
        common::leave(&tono, date!(2026 - 01 - 14), date!(2026 - 01 - 14), "sakit", RequestStatus::Pending),
    ];
    let others = vec![
        common::other(&tono, date!(2026 - 01 - 13), "wfh", RequestStatus::Approved),
        common::other(&tono, date!(2026 - 01 - 14), "wfa", RequestStatus::Approved),
    ];

    let events = normalize(&leaves, &others, None);

    assert_eq!(events.for_day(tono.id, date!(2026 - 01 - 13)).len(), 2);
    assert_eq!(events.for_day(tono.id, date!(2026 - 01 - 14)).len(), 2);
}

#[test]
fn other_requests_on_another_employees_leave_day_are_kept() {
    let a = common::employee("Ayu");
    let b = common::employee("Bayu");
    let leaves = vec![common::leave(&a, date!(2026 - 01 - 13), date!(2026 - 01 - 13), "sick", RequestStatus::Approved)];
    let others = vec![common::other(&b, date!(2026 - 01 - 13), "wfh", RequestStatus::Approved)];

    let events = normalize(&leaves, &others, None);

    assert_eq!(events.for_day(b.id, date!(2026 - 01 - 13))[0].kind, StatusKind::Wfh);
}

#[test]
fn bounds_trim_work_without_changing_events_inside() {
    let mila = common::employee("Mila");
    let leaves = vec![common::leave(
        &mila,
        date!(2026 - 01 - 01),
        date!(2026 - 01 - 31),
        "maternity",
        RequestStatus::Approved,
    )];
    let others = vec![
        common::other(&mila, date!(2026 - 02 - 03), "wfh", RequestStatus::Approved),
        common::other(&mila, date!(2026 - 01 - 20), "overtime", RequestStatus::Approved),
    ];
    let bounds = DateBounds {
        first: date!(2026 - 01 - 12),
        last: date!(2026 - 01 - 18),
    };

    let bounded = normalize(&leaves, &others, Some(bounds));
    let unbounded = normalize(&leaves, &others, None);

    assert_eq!(bounded.len(), 7);
    assert_eq!(unbounded.len(), 31 + 1);
    let mut day = Some(bounds.first);
    while let Some(date) = day.filter(|d| *d <= bounds.last) {
        assert_eq!(bounded.for_day(mila.id, date), unbounded.for_day(mila.id, date));
        day = date.next_day();
    }
}

#[test]
fn raw_records_deserialize_leniently() {
    let id = uuid::Uuid::new_v4();
    let record: RawLeaveRecord = serde_json::from_value(serde_json::json!({
        "profile_id": id,
        "start_date": "not-a-date",
        "end_date": "2026-01-14T08:00:00Z",
        "leave_type": "cuti",
        "status": "APPROVED",
    }))
    .unwrap();

    assert_eq!(record.start_date, None);
    assert_eq!(record.end_date, Some(date!(2026 - 01 - 14)));
    assert_eq!(record.status, RequestStatus::Approved);
    assert_eq!(record.covered_days(), Some((date!(2026 - 01 - 14), date!(2026 - 01 - 14))));

    let other: RawOtherRecord = serde_json::from_value(serde_json::json!({
        "profile_id": id,
        "request_date": 20260114,
        "status": "rejected",
    }))
    .unwrap();

    assert_eq!(other.request_date, None);
    assert_eq!(other.request_type, "");
    assert_eq!(other.status, RequestStatus::Inactive);

    let null_leave: RawLeaveRecord = serde_json::from_value(serde_json::json!({
        "profile_id": id,
        "start_date": "2026-01-13",
        "end_date": "2026-01-13",
        "leave_type": null,
        "status": "approved",
    }))
    .unwrap();
    let null_other: RawOtherRecord = serde_json::from_value(serde_json::json!({
        "profile_id": id,
        "request_date": "2026-01-14",
        "request_type": null,
        "status": "approved",
    }))
    .unwrap();

    assert_eq!(null_leave.leave_type, "");
    assert_eq!(null_other.request_type, "");

    let events = normalize(&[null_leave], &[null_other], None);
    assert_eq!(events.for_day(id, date!(2026 - 01 - 13))[0].kind, StatusKind::Permission);
    assert_eq!(events.for_day(id, date!(2026 - 01 - 14))[0].kind, StatusKind::Office);
}
