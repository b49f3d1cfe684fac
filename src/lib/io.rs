use std::{fs::File, path::Path};

use ::serde::{Deserialize, Serialize, Serializer};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{FeesError, Result};
use crate::types::{FeeReport, PatronFees, PatronId, ReturnRecord};

const RETURN_DATE_FORMAT: &str = "%m/%d/%Y";
const REQUIRED_COLUMNS: [&str; 3] = ["patron_id", "date_due", "date_returned"];

/// Raw return-log row as it appears in the CSV. Columns beyond the three
/// named here are ignored by the reader.
#[derive(Debug, Deserialize)]
pub struct ReturnRowEntity {
    pub patron_id: String,
    pub date_due: String,
    pub date_returned: String,
}

impl ReturnRowEntity {
    fn into_domain(self) -> Result<ReturnRecord> {
        Ok(ReturnRecord {
            patron_id: PatronId::new(self.patron_id),
            date_due: parse_return_date(&self.date_due)?,
            date_returned: parse_return_date(&self.date_returned)?,
        })
    }
}

fn parse_return_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, RETURN_DATE_FORMAT).map_err(|_| FeesError::InvalidDate {
        value: value.to_string(),
        expected: RETURN_DATE_FORMAT,
    })
}

fn fixed_width<S: Serializer>(x: &Decimal, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{:.2}", x))
}

#[derive(Debug, Serialize)]
pub struct PatronFeesEntity {
    patron_id: String,
    #[serde(serialize_with = "fixed_width")]
    late_fees: Decimal,
}

impl PatronFeesEntity {
    pub fn from_fees(fees: PatronFees) -> Self {
        Self {
            patron_id: fees.id.value().to_string(),
            late_fees: fees.total.value(),
        }
    }
}

pub fn read_returns(csv_path: &Path) -> Result<Vec<ReturnRecord>> {
    let file = File::open(csv_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    // required columns must exist before any row is parsed
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FeesError::MissingColumn(column));
        }
    }

    let mut rows: Vec<ReturnRecord> = Vec::new();
    for row in reader.deserialize::<ReturnRowEntity>() {
        // fail if a row cannot be parsed, no point in a partial report
        rows.push(row?.into_domain()?);
    }

    Ok(rows)
}

pub fn write_fees_csv(csv_path: &Path, report: FeeReport) -> Result<()> {
    let mut wtr = csv::Writer::from_path(csv_path)?;

    for patron in report.0 {
        wtr.serialize(PatronFeesEntity::from_fees(patron))?
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::types::{FeeAmount, PatronFees, PatronId};

    use super::{parse_return_date, PatronFeesEntity, ReturnRowEntity};

    #[test]
    fn row_entity_parses_us_dates() {
        let entity = ReturnRowEntity {
            patron_id: "17-873-8783".to_string(),
            date_due: "01/01/2020".to_string(),
            date_returned: "01/05/2020".to_string(),
        };

        let record = entity.into_domain().unwrap();

        assert_eq!(record.days_late(), 4);
    }

    #[test]
    fn row_entity_rejects_iso_dates() {
        let entity = ReturnRowEntity {
            patron_id: "17-873-8783".to_string(),
            date_due: "2020-01-01".to_string(),
            date_returned: "01/05/2020".to_string(),
        };

        assert!(entity.into_domain().is_err());
    }

    #[test]
    fn parse_return_date_reports_offending_value() {
        let err = parse_return_date("13/45/2020").unwrap_err();
        assert!(err.to_string().contains("13/45/2020"));
    }

    #[test]
    fn fees_render_with_two_decimal_places() {
        let rows = vec![
            PatronFees {
                id: PatronId::new("a"),
                total: FeeAmount::for_days_late(14),
            },
            PatronFees {
                id: PatronId::new("b"),
                total: FeeAmount::for_days_late(0),
            },
        ];

        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in rows {
            wtr.serialize(PatronFeesEntity::from_fees(row)).unwrap();
        }
        wtr.flush().unwrap();
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(data, "patron_id,late_fees\na,3.50\nb,0.00\n");
    }

    #[test]
    fn entity_carries_exact_decimal_total() {
        let entity = PatronFeesEntity::from_fees(PatronFees {
            id: PatronId::new("a"),
            total: FeeAmount::for_days_late(10),
        });

        assert_eq!(entity.late_fees, Decimal::new(250, 2));
    }
}
