// src/domain/dataset.rs

use super::listing::{ListingRecord, RawListing};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const REQUIRED_COLUMNS: [&str; 4] = ["price", "total_sqft", "bath", "location"];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing column '{0}'")]
    MissingColumn(&'static str),
}

/// Cleaned listings plus how many rows were thrown away.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<ListingRecord>,
    dropped: usize,
}

impl Dataset {
    pub fn from_listings(listings: Vec<ListingRecord>) -> Self {
        Self {
            listings,
            dropped: 0,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::Missing(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;

        info!(
            kept = dataset.listings.len(),
            dropped = dataset.dropped,
            "Loaded dataset from {}",
            path.display()
        );

        Ok(dataset)
    }

    /// Parse a CSV export with a header row. Rows that fail to parse or
    /// clean are counted in `dropped`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }
        if !headers.iter().any(|h| h == "size" || h == "bhk") {
            return Err(DatasetError::MissingColumn("size"));
        }

        let mut dataset = Dataset::default();

        for (line, result) in rdr.deserialize::<RawListing>().enumerate() {
            let cleaned = result
                .map_err(|e| e.to_string())
                .and_then(|raw| ListingRecord::from_raw(&raw).map_err(str::to_string));

            match cleaned {
                Ok(rec) => dataset.listings.push(rec),
                Err(reason) => {
                    debug!(row = line + 1, %reason, "dropping listing");
                    dataset.dropped += 1;
                }
            }
        }

        Ok(dataset)
    }

    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Whether the dashboard has data to show. A missing dataset only
/// disables the dashboard; prediction keeps working.
#[derive(Debug, Clone)]
pub enum DatasetStatus {
    Loaded(Dataset),
    Unavailable(String),
}

impl DatasetStatus {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            DatasetStatus::Loaded(ds) => Some(ds),
            DatasetStatus::Unavailable(_) => None,
        }
    }
}

impl From<Result<Dataset, DatasetError>> for DatasetStatus {
    fn from(result: Result<Dataset, DatasetError>) -> Self {
        match result {
            Ok(ds) => DatasetStatus::Loaded(ds),
            Err(e) => DatasetStatus::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
area_type,availability,location,size,society,total_sqft,bath,balcony,price
Super built-up  Area,19-Dec,Electronic City Phase II,2 BHK,Coomee ,1056,2,1,39.07
Plot  Area,Ready To Move,Chikka Tirupathi,4 Bedroom,Theanmp,2600,5,3,120
Built-up  Area,Ready To Move,Uttarahalli,3 BHK,,1440,2,3,62
Super built-up  Area,Ready To Move,Yelahanka,3 BHK,,2100 - 2850,4,0,186
Super built-up  Area,Ready To Move,Hebbal,4 BHK,,34.46Sq. Meter,3,,95
Plot  Area,Ready To Move,Whitefield,,,1200,2,,51
Built-up  Area,Ready To Move,,2 BHK,,1000,2,1,40
Super built-up  Area,Ready To Move,Kothanur,2 BHK,,abc,2,1,40
Super built-up  Area,Ready To Move,Kothanur,2 BHK,,1200,,1,40
";

    #[test]
    fn cleans_and_counts_dropped_rows() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(ds.listings().len(), 5);
        assert_eq!(ds.dropped(), 4);

        let yelahanka = ds
            .listings()
            .iter()
            .find(|l| l.location == "Yelahanka")
            .unwrap();
        assert_eq!(yelahanka.area, 2475.0);
        assert_eq!(yelahanka.bhk, 3);

        let hebbal = ds.listings().iter().find(|l| l.location == "Hebbal").unwrap();
        assert_eq!(hebbal.area, 34.46);
    }

    #[test]
    fn accepts_bhk_column_instead_of_size() {
        let csv = "location,bhk,total_sqft,bath,price\nHebbal,3,1500,2,90\n";
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(ds.listings()[0].bhk, 3);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "location,size,total_sqft,price\nHebbal,3 BHK,1500,90\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::MissingColumn("bath")));
    }

    #[test]
    fn missing_file_is_reported_as_unavailable() {
        let status: DatasetStatus =
            Dataset::load(Path::new("artifacts/no_such_file.csv")).into();

        match status {
            DatasetStatus::Unavailable(msg) => assert!(msg.contains("not found")),
            DatasetStatus::Loaded(_) => panic!("expected unavailable"),
        }
    }

    #[test]
    fn shipped_dataset_loads() {
        let ds = Dataset::load(Path::new("artifacts/bengaluru_house_data.csv"))
            .expect("shipped dataset should load");

        // no size, no location, unparseable total_sqft
        assert_eq!(ds.dropped(), 3);
        assert_eq!(ds.listings().len(), 121);
        assert!(ds.listings().iter().all(|l| l.area > 0.0 && l.bhk > 0));
    }
}
