use std::ops::Add;

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Default, Hash, Eq, PartialEq, Clone, Debug)]
pub struct PatronId(String);

impl PatronId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Debug)]
pub struct FeeAmount(Decimal);

impl FeeAmount {
    /// Flat per-day rate of 0.25 currency units.
    fn daily_rate() -> Decimal {
        Decimal::new(25, 2)
    }

    /// Fee owed for a return that came back `days_late` whole days after its
    /// due date. Early and on-time returns owe nothing. The amount is rounded
    /// to 2 decimal places here, at row granularity, before any aggregation.
    pub fn for_days_late(days_late: i64) -> Self {
        Self((Decimal::from(days_late.max(0)) * Self::daily_rate()).round_dp(2))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Add for FeeAmount {
    type Output = FeeAmount;

    fn add(self, rhs: Self) -> Self::Output {
        FeeAmount(self.value() + rhs.value())
    }
}

/// One parsed row of the return log.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReturnRecord {
    pub patron_id: PatronId,
    pub date_due: NaiveDate,
    pub date_returned: NaiveDate,
}

impl ReturnRecord {
    /// Whole days between the due date and the return date, negative when
    /// the book came back early.
    pub fn days_late(&self) -> i64 {
        (self.date_returned - self.date_due).num_days()
    }

    pub fn late_fee(self) -> LateFee {
        let amount = FeeAmount::for_days_late(self.days_late());
        LateFee {
            patron_id: self.patron_id,
            amount,
        }
    }
}

/// The fee contributed by a single return, held only long enough to be
/// folded into the per-patron aggregate.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LateFee {
    pub patron_id: PatronId,
    pub amount: FeeAmount,
}

pub struct PatronFees {
    pub id: PatronId,
    pub total: FeeAmount,
}

/// Per-patron fee totals in the order each patron first appeared in the
/// return log.
#[derive(Default)]
pub struct FeeReport(pub Vec<PatronFees>);
