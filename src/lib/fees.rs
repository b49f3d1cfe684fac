use im::{HashMap, Vector};

use crate::types::{FeeAmount, FeeReport, LateFee, PatronFees, PatronId, ReturnRecord};
use crate::utils::{OrDefault, PushImmut};

/// Running aggregation state: fee totals keyed by patron, plus the order in
/// which each patron was first seen so the report comes out deterministic.
#[derive(Default, Clone)]
struct Accumulator {
    totals: HashMap<PatronId, FeeAmount>,
    first_seen: Vector<PatronId>,
}

fn accumulate_fee(acc: Accumulator, fee: LateFee) -> Accumulator {
    let first_seen = if acc.totals.contains_key(&fee.patron_id) {
        acc.first_seen
    } else {
        acc.first_seen.push(fee.patron_id.clone())
    };
    let running = acc.totals.get_or_default(&fee.patron_id);
    Accumulator {
        totals: acc.totals.update(fee.patron_id, running + fee.amount),
        first_seen,
    }
}

// public interface
pub fn create_report(records: Box<dyn Iterator<Item = ReturnRecord>>) -> FeeReport {
    let acc = records
        .map(ReturnRecord::late_fee)
        .fold(Accumulator::default(), accumulate_fee);

    FeeReport(
        acc.first_seen
            .into_iter()
            .map(|id| PatronFees {
                total: acc.totals.get_or_default(&id),
                id,
            })
            .collect(),
    )
}
