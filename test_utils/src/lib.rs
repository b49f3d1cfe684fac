use serde::Serialize;

#[derive(Serialize)]
struct FeeRow {
    patron_id: &'static str,
    late_fees: &'static str,
}

impl FeeRow {
    fn new(patron_id: &'static str, late_fees: &'static str) -> Self {
        Self {
            patron_id,
            late_fees,
        }
    }
}

// Only used during testing so no need to return result
pub fn create_csv(rows: Vec<[&'static str; 2]>) -> String {
    let fee_rows: Vec<FeeRow> = rows.into_iter().map(|r| FeeRow::new(r[0], r[1])).collect();

    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in fee_rows {
        wtr.serialize(row).unwrap();
    }
    wtr.flush().unwrap();
    let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
    data
}
