//! # Summary Calculator
//!
//! Derives what each participant owes from a snapshot of the bill.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  participants ─┐                                                        │
//! │  items ────────┼──► calculate_summary ──► Vec<PersonSummary>            │
//! │  charges ──────┘                              │                         │
//! │                                               ▼                         │
//! │                                  calculate_totals ──► BillTotals        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: no state survives between calls, and the same
//! inputs always give the same output, byte for byte, whatever order the
//! items are in. Amounts are never rounded for display here.
//!
//! ## Exact Accumulation
//! A `Decimal` share such as `100 / 3` is already cut to 28 significant
//! digits, and adding such shares one item at a time lets the item order
//! change the last digit. So each person's satang are first summed as
//! integers, grouped by how many people share the item:
//!
//! ```text
//!   A: { 3 sharers: 12100 satang, 1 sharer: 2000 satang }
//!   subtotal = 20.00 / 1 + 121.00 / 3
//! ```
//!
//! and divided once per group, in ascending share count.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::money::CURRENCY_DECIMALS;
use crate::types::{BillTotals, Charges, Item, Participant, ParticipantId, PersonSummary};

/// Satang owed by one person, keyed by the share count of the items.
type ShareBuckets = BTreeMap<usize, i128>;

/// Computes one [`PersonSummary`] per participant, in participant order.
///
/// ## Algorithm
/// 1. Start every participant at zero.
/// 2. For each item, add its satang to each sharer's bucket for the item's
///    share count. Items nobody shares are skipped; ids without a
///    participant are ignored but still count towards the share count.
/// 3. Subtotal = sum over buckets, ascending, of `satang / share_count`.
/// 4. Apply service charge and tax to each subtotal and sum the total.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use splitbill_core::store::BillStore;
/// use splitbill_core::summary::calculate_summary;
///
/// let mut store = BillStore::new();
/// let a = store.add_participant("A").unwrap();
/// let b = store.add_participant("B").unwrap();
/// store.add_item("Pizza", Decimal::from(100u64), &[a.id, b.id]).unwrap();
///
/// let summary = calculate_summary(store.participants(), store.items(), &store.charges());
/// assert_eq!(summary[0].total, Decimal::from(50u64));
/// assert_eq!(summary[1].total, Decimal::from(50u64));
/// ```
pub fn calculate_summary(
    participants: &[Participant],
    items: &[Item],
    charges: &Charges,
) -> Vec<PersonSummary> {
    let mut summaries: Vec<PersonSummary> = participants.iter().map(PersonSummary::empty).collect();

    let index: HashMap<ParticipantId, usize> = summaries
        .iter()
        .enumerate()
        .map(|(i, s)| (s.person_id, i))
        .collect();

    let mut buckets: Vec<ShareBuckets> = vec![ShareBuckets::new(); summaries.len()];

    for item in items {
        let share_count = item.share_count();
        if share_count == 0 {
            continue;
        }

        for person_id in &item.shared_by {
            if let Some(&i) = index.get(person_id) {
                *buckets[i].entry(share_count).or_insert(0) += i128::from(item.price.satang());
            }
        }
    }

    for (summary, bucket) in summaries.iter_mut().zip(&buckets) {
        summary.subtotal = bucket
            .iter()
            .map(|(&share_count, &satang)| satang_to_decimal(satang) / Decimal::from(share_count))
            .sum();
        summary.service_charge = charges.service_charge.apply_to(summary.subtotal);
        summary.tax = charges.tax.apply_to(summary.subtotal);
        summary.total = summary.subtotal + summary.service_charge + summary.tax;
    }

    summaries
}

/// Converts summed satang to baht. Saturates at `Decimal::MAX`.
fn satang_to_decimal(satang: i128) -> Decimal {
    Decimal::try_from_i128_with_scale(satang, CURRENCY_DECIMALS).unwrap_or(Decimal::MAX)
}

/// Sums each column of the per-person summaries.
///
/// `unassigned` is the price of items no one shares; those items are not
/// in any subtotal, so they are reported beside the totals rather than in them.
pub fn calculate_totals(summaries: &[PersonSummary], items: &[Item]) -> BillTotals {
    let mut totals = summaries.iter().fold(BillTotals::default(), |mut acc, s| {
        acc.subtotal += s.subtotal;
        acc.service_charge += s.service_charge;
        acc.tax += s.tax;
        acc.total += s.total;
        acc
    });

    totals.unassigned = items
        .iter()
        .filter(|item| item.is_unassigned())
        .map(|item| item.price.to_decimal())
        .sum::<Decimal>();

    totals
}

// =============================================================================
// Unit Tests
// =============================================================================
