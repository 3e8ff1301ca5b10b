use crate::domain::ListingRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

pub fn export_listings_xlsx(listings: &[ListingRecord]) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, "bangalore_listings_clean.xlsx")
}

/// One row per cleaned listing, header in row 0.
pub fn listings_workbook(listings: &[ListingRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = ["Location", "Total Sqft", "BHK", "Bath", "Price (Lakhs)"];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.location)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {}", e)))?;

        worksheet
            .write_number(r, 1, listing.area)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write area: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.bhk as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bhk: {}", e)))?;

        worksheet
            .write_number(r, 3, listing.bath)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bath: {}", e)))?;

        worksheet
            .write_number(r, 4, listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
