//! Toll rate sheets in CSV
//!
//! Columns (header required): `name,km,light,commercial,heavy`.
//! An empty rate cell means the plaza defines no fare for that class.

use expressway_domain::model::{TollPlaza, TollRates};
use expressway_types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct TollRateRow {
    name: String,
    km: f64,
    light: Option<u32>,
    commercial: Option<u32>,
    heavy: Option<u32>,
}

impl From<TollRateRow> for TollPlaza {
    fn from(row: TollRateRow) -> Self {
        TollPlaza {
            name: row.name,
            km: row.km,
            rates: TollRates {
                light: row.light,
                commercial: row.commercial,
                heavy: row.heavy,
            },
        }
    }
}

impl From<&TollPlaza> for TollRateRow {
    fn from(plaza: &TollPlaza) -> Self {
        TollRateRow {
            name: plaza.name.clone(),
            km: plaza.km,
            light: plaza.rates.light,
            commercial: plaza.rates.commercial,
            heavy: plaza.rates.heavy,
        }
    }
}

/// Load toll plazas from a CSV rate sheet
pub fn load_toll_plazas_from_csv(path: &Path) -> Result<Vec<TollPlaza>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    read_toll_plazas_csv(File::open(path)?)
}

/// Parse toll plazas from any CSV reader
pub fn read_toll_plazas_csv<R: Read>(reader: R) -> Result<Vec<TollPlaza>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut plazas = Vec::new();
    for row in rdr.deserialize::<TollRateRow>() {
        plazas.push(row?.into());
    }
    Ok(plazas)
}

/// Write toll plazas as a CSV rate sheet
pub fn write_toll_plazas_csv<W: Write>(plazas: &[TollPlaza], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for plaza in plazas {
        wtr.serialize(TollRateRow::from(plaza))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expressway_types::VehicleClass;

    const SHEET: &str = "name,km,light,commercial,heavy
Khalilpur, 56, 90, 145, 3215
Barkapara,300,500,,3215
";

    #[test]
    fn test_read_rate_sheet() {
        let plazas = read_toll_plazas_csv(SHEET.as_bytes()).unwrap();
        assert_eq!(plazas.len(), 2);
        assert_eq!(plazas[0].name, "Khalilpur");
        assert_eq!(plazas[0].km, 56.0);
        assert_eq!(plazas[0].fare(VehicleClass::Heavy), 3215);
    }

    #[test]
    fn test_empty_cell_is_missing_rate() {
        let plazas = read_toll_plazas_csv(SHEET.as_bytes()).unwrap();
        assert_eq!(plazas[1].rates.commercial, None);
        assert_eq!(plazas[1].fare(VehicleClass::Commercial), 0);
    }

    #[test]
    fn test_bad_number_is_error() {
        let sheet = "name,km,light,commercial,heavy\nBroken,abc,1,2,3\n";
        let err = read_toll_plazas_csv(sheet.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_written_sheet_reads_back() {
        let plazas = read_toll_plazas_csv(SHEET.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_toll_plazas_csv(&plazas, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("name,km,light,commercial,heavy"));
        assert!(text.contains("Barkapara,300.0,500,,3215"));
        assert_eq!(read_toll_plazas_csv(text.as_bytes()).unwrap(), plazas);
    }
}
